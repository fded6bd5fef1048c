//! # Paperdex Architecture
//!
//! Paperdex is a **UI-agnostic paper-archive library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the loaded record set (callers own state lifecycle) │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, filter.rs, sort.rs)          │
//! │  - Pure functions over the loaded set                       │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source.rs)                                   │
//! │  - Abstract PaperSource trait                               │
//! │  - FileSource / HttpSource (production), StaticSource (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Derivation Pipeline
//!
//! The record set is loaded once and replaced wholesale on reload. Every
//! listing is re-derived from the full set: filter (case-insensitive
//! substring over searchable text) then sort (selected key, invalid dates
//! last, load-order tie-break). The derived sequence is handed to the
//! presentation layer and discarded; nothing besides the loaded set is
//! retained between calls.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never calls
//! `std::process::exit`. The same core could serve a web UI or any other
//! client.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per operation (list, view, stats, config)
//! - [`filter`]: Free-text search over the loaded set
//! - [`sort`]: Deterministic ordering with stable tie-breaks
//! - [`source`]: Document fetching and decoding
//! - [`resolve`]: PDF locator resolution
//! - [`model`]: Core data types (`Paper`, `PaperSet`, `SortKey`)
//! - [`stats`]: Archive-wide aggregate counts
//! - [`config`]: Configuration management
//! - [`debounce`]: Cancellable timer for coalescing search bursts
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod model;
pub mod resolve;
pub mod sort;
pub mod source;
pub mod stats;
