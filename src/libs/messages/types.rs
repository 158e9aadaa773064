#[derive(Debug, Clone)]
pub enum Message {
    // === EMPLOYEE MESSAGES ===
    EmployeeRegistered(i64),
    EmployeeUpdated(i64),
    EmployeeDeleted(i64),
    EmployeeNotFound(i64),
    EmployeesHeader,
    NoEmployees,
    EmployeeOrphanedRecords(i64),

    // === ATTENDANCE MESSAGES ===
    ClockedIn(String),  // timestamp
    ClockedOut(String), // timestamp
    ClockOutWithoutClockIn(i64, String), // employee id, date
    AlreadyClockedIn(i64),
    AttendanceStatus(i64, String, String), // employee id, date, state
    AttendanceHeader(i64),
    NoAttendanceRecords(i64),
    WorkedToday(String), // formatted duration
    WorkTimeUnavailable,

    // === VACATION MESSAGES ===
    VacationRegistered(i64), // days
    VacationsHeader(i64),
    NoVacations(i64),
    VacationDaysUsed(i64),

    // === WORK HOURS MESSAGES ===
    WorkHoursHeader(i64),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportingData(String, String), // data, format

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    DatabaseLocation(String),

    // === MENU MESSAGES ===
    MenuTitle,
    MenuGoodbye,

    // === PROMPTS ===
    PromptSelectScreen,
    PromptSelectEmployee,
    PromptName,
    PromptPosition,
    PromptDepartment,
    PromptJoinDate,
    PromptEmail,
    PromptLocation,
    PromptCustomLocation,
    PromptAttendanceAction,
    PromptVacationType,
    PromptStartDate,
    PromptEndDate,
    PromptReason,
    PromptDatabasePath,
    PromptDefaultLocation,
    PromptRecentLimit,
    ConfirmDeleteEmployee(String),
    ConfirmClockInAgain,
    ConfirmRequestVacation,

    // === MIGRATION MESSAGES ===
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    RevertingMigration(u32, String),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),

    // === GENERAL ===
    OperationCancelled,
    InvalidDate(String),
}
