//! Opcache Core Library
//!
//! Fetches a PHP opcache status dump over HTTP, decodes it into typed
//! records, and renders a per-script text summary.

pub mod error;
pub mod fetch;
pub mod report;
pub mod status;

// Re-export commonly used types
pub use error::{OpcacheError, OpcacheResult};
pub use fetch::Fetcher;
pub use report::{decode_and_report, write_report};
pub use status::{MemoryUsage, OpcodeStats, ScriptEntry, StatusDocument};
