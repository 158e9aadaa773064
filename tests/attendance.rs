#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use hrdesk::db::{attendance::Attendance, db::Db};
    use hrdesk::libs::attendance::{parse_timestamp, AttendanceState, Location};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AttendanceTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for AttendanceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("employee.db")).unwrap();
            AttendanceTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_clock_in_then_out(ctx: &mut AttendanceTestContext) {
        let attendance = Attendance::new(&ctx.db);

        attendance.clock_in(1, &Location::HeadOffice, ts("2024-01-10 09:00:00")).unwrap();
        assert_eq!(attendance.clock_out(1, ts("2024-01-10 18:00:00")).unwrap(), 1);

        let logs = attendance.for_day(1, day()).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].date, day());
        assert_eq!(logs[0].clock_in, Some(ts("2024-01-10 09:00:00")));
        assert_eq!(logs[0].clock_out, Some(ts("2024-01-10 18:00:00")));
        assert_eq!(logs[0].location, Location::HeadOffice);
        assert_eq!(logs[0].duration_hours(), 9.0);
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_timestamps_stored_in_plain_format(ctx: &mut AttendanceTestContext) {
        let attendance = Attendance::new(&ctx.db);
        attendance.clock_in(1, &Location::Remote, ts("2024-01-10 09:00:00")).unwrap();

        let (date, clock_in, location): (String, String, String) = ctx
            .db
            .conn
            .query_row("SELECT date, clock_in, location FROM attendance_logs", [], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .unwrap();
        assert_eq!(date, "2024-01-10");
        assert_eq!(clock_in, "2024-01-10 09:00:00");
        assert_eq!(location, "remote");
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_clock_out_without_clock_in_affects_nothing(ctx: &mut AttendanceTestContext) {
        let attendance = Attendance::new(&ctx.db);
        // Clock-in on another day and by another employee must not match
        attendance.clock_in(1, &Location::HeadOffice, ts("2024-01-09 09:00:00")).unwrap();
        attendance.clock_in(2, &Location::HeadOffice, ts("2024-01-10 09:00:00")).unwrap();

        assert_eq!(attendance.clock_out(1, ts("2024-01-10 18:00:00")).unwrap(), 0);
        assert!(attendance.for_day(1, day()).unwrap().is_empty());
        assert_eq!(attendance.for_day(2, day()).unwrap()[0].clock_out, None);
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_repeated_clock_in_creates_rows_closed_together(ctx: &mut AttendanceTestContext) {
        let attendance = Attendance::new(&ctx.db);
        attendance.clock_in(1, &Location::HeadOffice, ts("2024-01-10 09:00:00")).unwrap();
        attendance.clock_in(1, &Location::Remote, ts("2024-01-10 13:00:00")).unwrap();

        assert_eq!(attendance.clock_out(1, ts("2024-01-10 18:00:00")).unwrap(), 2);

        let logs = attendance.for_day(1, day()).unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|log| log.clock_out == Some(ts("2024-01-10 18:00:00"))));
        assert_eq!(logs[0].duration_hours(), 9.0);
        assert_eq!(logs[1].duration_hours(), 5.0);
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_state_transitions(ctx: &mut AttendanceTestContext) {
        let attendance = Attendance::new(&ctx.db);
        assert_eq!(attendance.state(1, day()).unwrap(), AttendanceState::NotClocked);

        attendance.clock_in(1, &Location::HeadOffice, ts("2024-01-10 09:00:00")).unwrap();
        assert_eq!(attendance.state(1, day()).unwrap(), AttendanceState::ClockedIn);

        attendance.clock_out(1, ts("2024-01-10 18:00:00")).unwrap();
        assert_eq!(attendance.state(1, day()).unwrap(), AttendanceState::ClockedOut);

        let next_day = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        assert_eq!(attendance.state(1, next_day).unwrap(), AttendanceState::NotClocked);
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_recent_is_newest_first_and_limited(ctx: &mut AttendanceTestContext) {
        let attendance = Attendance::new(&ctx.db);
        for d in [3, 1, 5, 2, 4] {
            let start = NaiveDate::from_ymd_opt(2024, 2, d).unwrap().and_hms_opt(9, 0, 0).unwrap();
            attendance.clock_in(7, &Location::HeadOffice, start).unwrap();
        }
        attendance.clock_in(8, &Location::HeadOffice, ts("2024-02-06 09:00:00")).unwrap();

        let recent = attendance.recent(7, 3).unwrap();
        let days: Vec<u32> = recent.iter().map(|log| chrono::Datelike::day(&log.date)).collect();
        assert_eq!(days, vec![5, 4, 3]);
        assert!(recent.iter().all(|log| log.employee_id == 7));
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_free_text_location_round_trips(ctx: &mut AttendanceTestContext) {
        let attendance = Attendance::new(&ctx.db);
        let site = Location::Other("Busan branch".to_string());
        attendance.clock_in(1, &site, ts("2024-01-10 09:00:00")).unwrap();

        assert_eq!(attendance.for_day(1, day()).unwrap()[0].location, site);
    }
}
