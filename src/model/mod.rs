//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and carry
//! Discord IDs as `u64` and chain addresses as typed `Address` values. Everything here except
//! `AttendanceRecord` is transient and rebuilt for every workflow run.

pub mod attendance;
pub mod cohort;
pub mod eligibility;
pub mod notification;
