//! Microcopy client library
//!
//! The pieces behind the `microcopy` binary: a small HTTP client for the
//! microcopy generation backend (`client`), the request/response types it
//! speaks (`structs`), clipboard helpers with a legacy command fallback
//! (`clipboard`), and base-URL resolution (`config`).
//!
//! The binary in `src/main.rs` is thin on purpose; everything worth testing
//! lives here.

pub mod clipboard;
pub mod client;
pub mod config;
pub mod error;
pub mod structs;

pub use client::MicrocopyClient;
pub use error::{ApiError, ClipboardError};
pub use structs::{GenerationRequest, GenerationResponse, Tone};
