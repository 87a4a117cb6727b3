pub mod prelude;

pub mod attendance_record;
