#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hrdesk::db::{db::Db, vacations::Vacations};
    use hrdesk::libs::error::HrError;
    use hrdesk::libs::vacation::{total_days, VacationRequest, VacationType};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct VacationTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for VacationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("employee.db")).unwrap();
            VacationTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(VacationTestContext)]
    #[test]
    fn test_three_day_request_is_stored(ctx: &mut VacationTestContext) {
        let vacations = Vacations::new(&ctx.db);
        let request =
            VacationRequest::new(1, VacationType::Annual, date(2024, 3, 1), date(2024, 3, 3), "Family trip").unwrap();
        assert_eq!(request.days, 3);

        let id = vacations.request(&request).unwrap();

        let stored = vacations.for_employee(1).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].vacation_type, VacationType::Annual);
        assert_eq!(stored[0].start_date, date(2024, 3, 1));
        assert_eq!(stored[0].end_date, date(2024, 3, 3));
        assert_eq!(stored[0].days, 3);
        assert_eq!(stored[0].reason, "Family trip");
    }

    #[test_context(VacationTestContext)]
    #[test]
    fn test_single_day_request(ctx: &mut VacationTestContext) {
        let vacations = Vacations::new(&ctx.db);
        let request = VacationRequest::new(1, VacationType::Sick, date(2024, 3, 1), date(2024, 3, 1), "").unwrap();
        vacations.request(&request).unwrap();

        assert_eq!(vacations.for_employee(1).unwrap()[0].days, 1);
    }

    #[test_context(VacationTestContext)]
    #[test]
    fn test_reversed_range_never_reaches_database(ctx: &mut VacationTestContext) {
        let result = VacationRequest::new(1, VacationType::Other, date(2024, 3, 3), date(2024, 3, 1), "");
        assert!(matches!(result, Err(HrError::InvalidDateRange { .. })));

        assert!(Vacations::new(&ctx.db).list().unwrap().is_empty());
    }

    #[test_context(VacationTestContext)]
    #[test]
    fn test_for_employee_filters_and_orders(ctx: &mut VacationTestContext) {
        let vacations = Vacations::new(&ctx.db);
        let requests = [
            VacationRequest::new(1, VacationType::Annual, date(2024, 1, 8), date(2024, 1, 9), "").unwrap(),
            VacationRequest::new(2, VacationType::Annual, date(2024, 2, 1), date(2024, 2, 1), "").unwrap(),
            VacationRequest::new(1, VacationType::BereavementOrFamily, date(2024, 5, 20), date(2024, 5, 22), "").unwrap(),
        ];
        for request in &requests {
            vacations.request(request).unwrap();
        }

        let mine = vacations.for_employee(1).unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].vacation_type, VacationType::BereavementOrFamily);
        assert_eq!(mine[1].start_date, date(2024, 1, 8));
        assert_eq!(total_days(&mine), 5);

        let stored: String = ctx
            .db
            .conn
            .query_row("SELECT vacation_type FROM vacations WHERE id = ?1", [mine[0].id], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, "bereavement-or-family");

        assert_eq!(vacations.list().unwrap().len(), 3);
    }
}
