use crate::{
    error::{chain::ChainError, AppError},
    model::{
        attendance::{Participant, VoiceSession},
        cohort::Cohort,
        notification::AttendanceNotification,
    },
    service::attendance::{
        eligibility::EligibilityResolver, AttendanceOutcome, AttendanceService,
    },
};
use alloy::primitives::Address;
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory::attendance_record::AttendanceRecordFactory};

use self::fakes::*;

mod eligibility;
