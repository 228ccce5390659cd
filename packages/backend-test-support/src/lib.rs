//! Backend test support utilities
//!
//! Unified logging initialization plus helpers for asserting the backend's
//! plain-text error contract.

pub mod logging;
pub mod plain_text;
