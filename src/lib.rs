//! # Stint Architecture
//!
//! Stint is a single-user command-line tracker for internship applications.
//! The crate is a library with a thin REPL binary on top, layered so that
//! nothing inside the core ever touches the terminal:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - clap entry flags, the read-eval-print loop               │
//! │  - Renders tables, dashboard, colored messages              │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs)                                         │
//! │  - Tagged-argument grammar (company/..., pay/...)           │
//! │  - Produces validated Command values, 0-based indexes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per command, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store + Storage (list.rs, storage.rs)                      │
//! │  - InternshipList: the owned in-memory collection           │
//! │  - Storage: line-oriented text file, fault-tolerant load    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the parser inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout or exits the process.
//! Every user error is a recoverable [`error::StintError`]; the REPL reports
//! it and reads the next line.
//!
//! ## Module Overview
//!
//! - [`parser`]: command keyword dispatch and tagged-field splitting
//! - [`commands`]: business logic for each command
//! - [`list`]: the in-memory internship collection
//! - [`storage`]: durable text-format persistence
//! - [`date`]: calendar date value and parser
//! - [`model`]: core data types (`Internship`, `Status`)
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod list;
pub mod model;
pub mod parser;
pub mod storage;
