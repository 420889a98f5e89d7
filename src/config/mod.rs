pub mod settings;

pub use settings::{AppConfig, SeedingSettings, StoreSettings};
