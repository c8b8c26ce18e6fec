//! Integration tests for the casekompass cart subsystem.
//!
//! The tests live in `tests/` and exercise the full flow across crates:
//! store mutations, persistence, view-models, and checkout assembly.

#![cfg_attr(not(test), forbid(unsafe_code))]
