//!
//! Traits Module
//!
//! Core traits used throughout the marker system for extensibility.
//!
//! - [`comparator`]: Defines the trait for judging a submission's output.

pub mod comparator;
