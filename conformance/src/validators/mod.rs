//! Conformance validators.

pub mod document;
