//! E2E tests for the pv binary

mod cli_basic;
