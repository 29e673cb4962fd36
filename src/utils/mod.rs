//! Utility modules for common functionality
//!
//! This module provides logging and progress reporting used by the CLI and
//! the `CvKit` facade.

pub mod logger;
pub(crate) mod progress;
pub(crate) mod path_utils;
#[cfg(test)]
pub(crate) mod log_capture;
