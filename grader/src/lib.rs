//! Command-line front end of the autograder.
//!
//! The binaries are thin: argument parsing lives in the `bin` targets, the work in
//! [`commands`], and every read of the CI environment goes through [`env_results`]
//! or [`util::config::AppConfig`].

pub mod cli;
pub mod commands;
pub mod env_results;
pub mod logging;
pub mod step_output;
