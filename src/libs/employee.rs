//! Employee records and the fixed position/department vocabularies.
//!
//! Positions and departments are closed sets. They are stored in the database
//! as their kebab-case tokens (`assistant-manager`, `human-resources`, ...) and
//! parsed back on read, so an unexpected value in the table surfaces as a read
//! error instead of silently flowing through the application.

use super::error::HrError;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Row id of an employee.
pub type EmployeeId = i64;

/// Job grade, ordered from junior to senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Staff,
    AssistantManager,
    Manager,
    DeputyGeneralManager,
    GeneralManager,
    Executive,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Staff,
        Position::AssistantManager,
        Position::Manager,
        Position::DeputyGeneralManager,
        Position::GeneralManager,
        Position::Executive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Staff => "staff",
            Position::AssistantManager => "assistant-manager",
            Position::Manager => "manager",
            Position::DeputyGeneralManager => "deputy-general-manager",
            Position::GeneralManager => "general-manager",
            Position::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Management,
    Accounting,
    HumanResources,
    Sales,
    It,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Management,
        Department::Accounting,
        Department::HumanResources,
        Department::Sales,
        Department::It,
        Department::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Management => "management",
            Department::Accounting => "accounting",
            Department::HumanResources => "human-resources",
            Department::Sales => "sales",
            Department::It => "it",
            Department::Marketing => "marketing",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| HrError::UnknownPosition(s.to_string()))
    }
}

impl FromStr for Department {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| HrError::UnknownDepartment(s.to_string()))
    }
}

impl ToSql for Position {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Position {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: HrError| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for Department {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Department {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: HrError| FromSqlError::Other(Box::new(e)))
    }
}

/// A stored employee row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: Position,
    pub department: Department,
    pub join_date: NaiveDate,
    pub email: String,
}

/// The mutable fields of an employee, as submitted by the register and edit forms.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub position: Position,
    pub department: Department,
    pub join_date: NaiveDate,
    pub email: String,
}

impl NewEmployee {
    pub fn new(name: &str, position: Position, department: Department, join_date: NaiveDate, email: &str) -> Self {
        NewEmployee {
            name: name.to_string(),
            position,
            department,
            join_date,
            email: email.to_string(),
        }
    }
}

impl From<&Employee> for NewEmployee {
    fn from(employee: &Employee) -> Self {
        NewEmployee {
            name: employee.name.clone(),
            position: employee.position,
            department: employee.department,
            join_date: employee.join_date,
            email: employee.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_tokens_parse_back() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>().unwrap(), position);
        }
        assert_eq!(
            "intern".parse::<Position>(),
            Err(HrError::UnknownPosition("intern".to_string()))
        );
    }

    #[test]
    fn department_rejects_unknown_token() {
        assert_eq!("it".parse::<Department>().unwrap(), Department::It);
        assert!("legal".parse::<Department>().is_err());
    }

    #[test]
    fn positions_are_ordered_by_seniority() {
        assert!(Position::Staff < Position::Manager);
        assert!(Position::GeneralManager < Position::Executive);
    }
}
