pub mod changelog;
pub mod ci;
pub mod config;
pub mod conventional;
pub mod error;
pub mod git_ops;
pub mod manifest;
pub mod ui;
pub mod version;

pub use error::{BumpVersionError, Result};
