//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They supply
//! in-memory entity models for unit tests and the default values used by the
//! factory builders.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let record = fixture::attendance_record::entity();
//! assert_eq!(record.message, "");
//! ```

pub mod attendance_record;
