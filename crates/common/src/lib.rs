//! Common utilities and types shared across WARC search client components.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
