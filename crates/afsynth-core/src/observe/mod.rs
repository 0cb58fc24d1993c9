//! # Observability
//!
//! The library only emits `tracing` events; binaries decide where they go.
//!
//! | Level | Events                                                   |
//! |-------|----------------------------------------------------------|
//! | debug | derived prototype, order estimates, even-order bumps     |
//! | info  | one summary per successful synthesis                     |
//! | warn  | root solver out of iterations                            |
//!
//! Errors are returned to the caller and never logged by the library.

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
