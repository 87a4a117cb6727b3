pub use super::attendance_record::Entity as AttendanceRecord;
