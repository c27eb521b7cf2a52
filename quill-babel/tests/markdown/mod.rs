//! Markdown format tests
//!
//! Tests for Document ↔ Markdown conversion.

mod export;
mod import;
mod roundtrip;
mod totality;
