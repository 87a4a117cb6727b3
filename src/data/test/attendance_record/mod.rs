use crate::{
    data::attendance_record::AttendanceRecordRepository, error::AppError,
    model::attendance::CreateAttendanceRecordParam,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::attendance_record::AttendanceRecordFactory};

mod create;
mod get_most_recent;
