mod attendance_record;
