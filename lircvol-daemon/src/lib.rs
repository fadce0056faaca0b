//! lircvol daemon library
//!
//! Re-exports the daemon's modules for integration testing.

pub mod config;
pub mod framer;
pub mod parser;
pub mod session;

pub use session::{Session, SessionError};
