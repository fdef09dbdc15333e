//! AWS Lambda entry point for the document vault.
//!
//! The function reports that it is up and running. Document processing is done by
//! the OCR container, which this function does not call.

pub mod config;
pub mod handler;
pub mod local;
pub mod logging;
pub mod response;

pub use handler::handler;
pub use response::{Response, READY_MESSAGE, STATUS_OK};
