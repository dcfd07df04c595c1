pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod env;
pub mod error;
pub mod git;
pub mod github;
pub mod logging;
pub mod notify;
pub mod ui;

pub use error::{RcPublishError, Result};
