#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers for Duotone integration suites.
//! Layout: mocks.rs (in-memory store, fixed color scheme, recording surface).

pub mod mocks;

pub use mocks::{FixedScheme, MemoryStore, RecordingSurface};
