//! Test fixtures for unsafeslice development.
//!
//! Provides buffers with a known alignment ([`AlignedBytes`]), an
//! oversized element type ([`Big`]), and deterministic byte data
//! ([`random_bytes`]) shared by the unit tests, integration tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{boxed_big, random_bytes, AlignedBytes, Big, SHOUT, WORDS};
