// Library for tests to access modules

pub mod config;
pub mod decoder;
pub mod error;
pub mod models;
pub mod status_repo;
pub mod store;

pub use error::{ReadError, StatusError};
pub use models::StatusSnapshot;
pub use status_repo::{RawStatus, STATUS_JSON_KEY, StatusRepo};
