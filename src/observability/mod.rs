//! Logging setup and log-safety helpers.
//!
//! The adapter logs through `tracing`. The binary installs a
//! `tracing-subscriber` fmt layer filtered by `RUST_LOG` (default `info`);
//! library code never installs a subscriber itself.

mod logging;

pub use logging::{init_tracing, redact_url, request_span, REDACTED};
