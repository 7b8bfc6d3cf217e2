//! Integration tests for the planar crates.
//!
//! These tests drive `planar-core` addressing and traversal through the
//! public transforms of `planar-ops`. Set `RUST_LOG=debug` to see the
//! transforms' log output.
