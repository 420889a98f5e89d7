pub mod models;
mod rejection;
mod snapshot;

pub use models::*;
pub use rejection::{Rejection, RejectionReason};
pub use snapshot::{SeasonData, SeasonSnapshot};
