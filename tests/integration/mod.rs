//! Integration tests for taskgrade verifiers
//!
//! Each test builds a throwaway workspace, writes fixtures and candidate
//! outputs into it and runs a verifier through the library API.

pub mod data_tasks;
pub mod prose_tasks;
