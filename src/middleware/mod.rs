//! Middleware layer.
//!
//! Middleware wraps request dispatch for cross-cutting concerns. The server
//! runs every request through [`trace`]: a per-request span with method and
//! path, closed by one `debug` event carrying status and latency.

pub mod trace;
