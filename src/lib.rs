//! TA Toolkit
//!
//! Helpers for marking Python coursework: unzip submissions, count class
//! definitions per student, reconcile folder names with the roster, and
//! convert JSON exports to CSV.

pub mod archive;
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod matcher;
pub mod scanner;

pub use ta_toolkit_common as common;
