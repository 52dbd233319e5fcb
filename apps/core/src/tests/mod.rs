//! Test Module
//!
//! Integration test suite for the Sona backend.
//!
//! ## Test Categories
//! - `search_tests`: provider adapters against mock HTTP servers
//! - `api_tests`: full HTTP round trips over an ephemeral-port server
