//! # lexdoc
//!
//! In-memory document indexing with metadata search and lexical similarity.
//!
//! The core library ([`lexdoc_core`]) holds the data model and algorithms.
//! This crate adds the application layer around it:
//!
//! ```text
//! ┌────────────┐   ┌──────────────────┐   ┌──────────────────────┐
//! │ CLI/loader │──▶│ DocumentService  │──▶│ lexdoc-core          │
//! │ (lexdoc)   │   │ add/search/sim   │   │ Store + Query + Sim  │
//! └────────────┘   └──────────────────┘   └──────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! lexdoc similarity a.txt b.txt
//! lexdoc search src/*.java --where TYPE=java --where AUTHOR=TRUE
//! lexdoc term happy notes/*.txt
//! lexdoc inspect Main.java --json
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`service`] | `DocumentService` facade over the core store |
//! | [`loader`] | Load raw text files as documents |
//! | [`commands`] | CLI command implementations |

pub mod commands;
pub mod config;
pub mod loader;
pub mod logging;
pub mod service;

pub use lexdoc_core;
