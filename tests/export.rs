#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hrdesk::db::{attendance::Attendance, db::Db, employees::Employees};
    use hrdesk::libs::attendance::{parse_timestamp, Location};
    use hrdesk::libs::employee::{Department, NewEmployee, Position};
    use hrdesk::libs::export::{ExportData, ExportFormat, Exporter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("employee.db")).unwrap();
            ExportTestContext { temp_dir, db }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_employees_csv(ctx: &mut ExportTestContext) {
        let employees = Employees::new(&ctx.db);
        for name in ["Kim Minji", "Lee Junho"] {
            let employee = NewEmployee::new(
                name,
                Position::DeputyGeneralManager,
                Department::HumanResources,
                NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
                "hr@example.com",
            );
            employees.register(&employee).unwrap();
        }

        let path = ctx.temp_dir.path().join("employees.csv");
        let exporter = Exporter::new(ExportFormat::Csv, ExportData::Employees, Some(path.clone()));
        assert_eq!(exporter.export(&ctx.db).unwrap(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,name,position,department,join_date,email");
        assert_eq!(
            lines[1],
            "1,Kim Minji,deputy-general-manager,human-resources,2022-07-01,hr@example.com"
        );
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_attendance_json_has_hours(ctx: &mut ExportTestContext) {
        let attendance = Attendance::new(&ctx.db);
        attendance
            .clock_in(1, &Location::Remote, parse_timestamp("2024-01-10 09:00:00").unwrap())
            .unwrap();
        attendance.clock_out(1, parse_timestamp("2024-01-10 17:30:00").unwrap()).unwrap();

        let path = ctx.temp_dir.path().join("attendance.json");
        Exporter::new(ExportFormat::Json, ExportData::Attendance, Some(path.clone()))
            .export(&ctx.db)
            .unwrap();

        let rows: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rows[0]["clock_in"], "2024-01-10 09:00:00");
        assert_eq!(rows[0]["location"], "remote");
        assert_eq!(rows[0]["duration_hours"], 8.5);
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Json, ExportData::Vacations, None);
        let name = exporter.output_path().to_string_lossy().to_string();

        assert!(name.starts_with("hrdesk_vacations_"));
        assert!(name.ends_with(".json"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_default_name_matches_exported_table(ctx: &mut ExportTestContext) {
        let employee = NewEmployee::new(
            "Choi Yuna",
            Position::Staff,
            Department::Sales,
            NaiveDate::from_ymd_opt(2023, 3, 2).unwrap(),
            "",
        );
        Employees::new(&ctx.db).register(&employee).unwrap();

        let exporter = Exporter::new(ExportFormat::Csv, ExportData::Employees, None);
        let path = ctx.temp_dir.path().join(exporter.output_path());
        let exporter = Exporter::new(ExportFormat::Csv, exporter.data(), Some(path.clone()));
        assert_eq!(exporter.data(), ExportData::Employees);
        assert_eq!(exporter.export(&ctx.db).unwrap(), 1);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("hrdesk_employees_"));
        assert!(content.starts_with("id,name,position,department,join_date,email"));
        assert!(content.contains("Choi Yuna"));
    }
}
