//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let record = factory::create_attendance_record(&db).await?;
//!
//! let stale = factory::attendance_record::AttendanceRecordFactory::new(&db)
//!     .channel_id("42")
//!     .created_at(Utc::now() - Duration::hours(30))
//!     .build()
//!     .await?;
//! ```

pub mod attendance_record;
pub mod helpers;

pub use attendance_record::create_attendance_record;
