pub mod analysis;
pub mod import;
pub mod server;
