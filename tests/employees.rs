#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hrdesk::db::{attendance::Attendance, db::Db, employees::Employees, vacations::Vacations};
    use hrdesk::libs::attendance::Location;
    use hrdesk::libs::employee::{Department, NewEmployee, Position};
    use hrdesk::libs::vacation::{VacationRequest, VacationType};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EmployeeTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for EmployeeTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("employee.db")).unwrap();
            EmployeeTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn kim() -> NewEmployee {
        NewEmployee::new(
            "Kim Minji",
            Position::AssistantManager,
            Department::Accounting,
            NaiveDate::from_ymd_opt(2023, 4, 3).unwrap(),
            "minji@example.com",
        )
    }

    fn lee() -> NewEmployee {
        NewEmployee::new(
            "Lee Junho",
            Position::Staff,
            Department::It,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "junho@example.com",
        )
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_register_then_list(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let id = employees.register(&kim()).unwrap();

        let all = employees.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].name, "Kim Minji");
        assert_eq!(all[0].position, Position::AssistantManager);
        assert_eq!(all[0].department, Department::Accounting);
        assert_eq!(all[0].join_date, NaiveDate::from_ymd_opt(2023, 4, 3).unwrap());
        assert_eq!(all[0].email, "minji@example.com");
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_list_in_registration_order(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let first = employees.register(&kim()).unwrap();
        let second = employees.register(&lee()).unwrap();
        // Same email twice is accepted
        let third = employees.register(&kim()).unwrap();

        let ids: Vec<i64> = employees.list().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first, second, third]);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_update_changes_only_target(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let kim_id = employees.register(&kim()).unwrap();
        let lee_id = employees.register(&lee()).unwrap();

        let mut promoted = kim();
        promoted.position = Position::Manager;
        promoted.email = "minji.kim@example.com".to_string();
        assert_eq!(employees.update(kim_id, &promoted).unwrap(), 1);

        let updated = employees.get(kim_id).unwrap().unwrap();
        assert_eq!(updated.position, Position::Manager);
        assert_eq!(updated.email, "minji.kim@example.com");

        let untouched = employees.get(lee_id).unwrap().unwrap();
        assert_eq!(NewEmployee::from(&untouched), lee());
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_update_missing_id_is_noop(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        employees.register(&kim()).unwrap();
        let before = employees.list().unwrap();

        assert_eq!(employees.update(999, &lee()).unwrap(), 0);
        assert_eq!(employees.list().unwrap(), before);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_delete_keeps_attendance_and_vacations(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        let attendance = Attendance::new(&ctx.db);
        let vacations = Vacations::new(&ctx.db);

        let kim_id = employees.register(&kim()).unwrap();
        let lee_id = employees.register(&lee()).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        attendance
            .clock_in(kim_id, &Location::HeadOffice, day.and_hms_opt(9, 0, 0).unwrap())
            .unwrap();
        let request = VacationRequest::new(kim_id, VacationType::Annual, day, day, "").unwrap();
        vacations.request(&request).unwrap();

        assert_eq!(employees.delete(kim_id).unwrap(), 1);

        let remaining = employees.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, lee_id);
        assert!(employees.get(kim_id).unwrap().is_none());

        assert_eq!(attendance.for_day(kim_id, day).unwrap().len(), 1);
        assert_eq!(vacations.for_employee(kim_id).unwrap().len(), 1);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_delete_missing_id_is_noop(ctx: &mut EmployeeTestContext) {
        let employees = Employees::new(&ctx.db);
        employees.register(&kim()).unwrap();

        assert_eq!(employees.delete(42).unwrap(), 0);
        assert_eq!(employees.list().unwrap().len(), 1);
    }

    #[test_context(EmployeeTestContext)]
    #[test]
    fn test_unknown_stored_position_is_read_error(ctx: &mut EmployeeTestContext) {
        ctx.db
            .conn
            .execute(
                "INSERT INTO employees (name, position, department, join_date, email) VALUES ('X', 'intern', 'it', '2024-01-01', '')",
                [],
            )
            .unwrap();

        assert!(Employees::new(&ctx.db).list().is_err());
    }
}
