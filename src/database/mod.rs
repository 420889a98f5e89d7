pub mod connection;
pub mod fixtures;
pub mod rankings;
pub mod results;
pub mod setup;
pub mod store;
pub mod teams;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use store::{import_snapshot, list_sports, load_snapshot, ImportSummary};
