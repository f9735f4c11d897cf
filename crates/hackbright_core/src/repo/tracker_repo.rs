//! Tracker repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Fetch at most one student, project or grade row per lookup.
//! - Append students and grades, each insert committed on its own.
//!
//! # Invariants
//! - Writes validate the record before any SQL runs.
//! - Grade inserts do not check that the referenced student or project exists.
//! - When several rows match a lookup, the earliest inserted one wins.

use crate::db::DbError;
use crate::model::grade::{Grade, GradeValue};
use crate::model::project::Project;
use crate::model::student::Student;
use crate::model::ModelValidationError;
use log::debug;
use rusqlite::types::{ToSql, ToSqlOutput, Value, ValueRef};
use rusqlite::{named_params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_BY_GITHUB_SQL: &str = "SELECT first_name, last_name, github
FROM students
WHERE github = :github
ORDER BY rowid ASC
LIMIT 1;";

const PROJECT_BY_TITLE_SQL: &str = "SELECT title, description, max_grade
FROM projects
WHERE title = :title
ORDER BY rowid ASC
LIMIT 1;";

const GRADE_BY_GITHUB_TITLE_SQL: &str = "SELECT student_github, project_title, grade
FROM grades
WHERE project_title = :title AND student_github = :github
ORDER BY rowid ASC
LIMIT 1;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for tracker reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Validation(ModelValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted tracker data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ModelValidationError> for RepoError {
    fn from(value: ModelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store contract needed by the record operations.
pub trait TrackerRepository {
    fn get_student_by_github(&self, github: &str) -> RepoResult<Option<Student>>;
    fn create_student(&self, student: &Student) -> RepoResult<()>;
    fn get_project_by_title(&self, title: &str) -> RepoResult<Option<Project>>;
    fn get_grade_by_github_title(&self, github: &str, title: &str) -> RepoResult<Option<Grade>>;
    fn create_grade(&self, grade: &Grade) -> RepoResult<()>;
}

/// SQLite-backed tracker repository borrowing the session connection.
pub struct SqliteTrackerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTrackerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TrackerRepository for SqliteTrackerRepository<'_> {
    fn get_student_by_github(&self, github: &str) -> RepoResult<Option<Student>> {
        let mut stmt = self.conn.prepare(STUDENT_BY_GITHUB_SQL)?;
        let mut rows = stmt.query(named_params! { ":github": github })?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_student_row(row)?)),
            None => Ok(None),
        }
    }

    fn create_student(&self, student: &Student) -> RepoResult<()> {
        student.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO students (first_name, last_name, github)
             VALUES (:first_name, :last_name, :github);",
            named_params! {
                ":first_name": student.first_name,
                ":last_name": student.last_name,
                ":github": student.github,
            },
        )?;
        tx.commit()?;
        debug!("event=student_insert module=repo status=committed");

        Ok(())
    }

    fn get_project_by_title(&self, title: &str) -> RepoResult<Option<Project>> {
        let mut stmt = self.conn.prepare(PROJECT_BY_TITLE_SQL)?;
        let mut rows = stmt.query(named_params! { ":title": title })?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_project_row(row)?)),
            None => Ok(None),
        }
    }

    fn get_grade_by_github_title(&self, github: &str, title: &str) -> RepoResult<Option<Grade>> {
        let mut stmt = self.conn.prepare(GRADE_BY_GITHUB_TITLE_SQL)?;
        let mut rows = stmt.query(named_params! { ":title": title, ":github": github })?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_grade_row(row)?)),
            None => Ok(None),
        }
    }

    fn create_grade(&self, grade: &Grade) -> RepoResult<()> {
        grade.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO grades (student_github, project_title, grade)
             VALUES (:student_github, :project_title, :grade);",
            named_params! {
                ":student_github": grade.student_github,
                ":project_title": grade.project_title,
                ":grade": grade.grade,
            },
        )?;
        tx.commit()?;
        debug!("event=grade_insert module=repo status=committed");

        Ok(())
    }
}

impl ToSql for GradeValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Integer(value) => ToSqlOutput::Owned(Value::Integer(*value)),
            Self::Text(value) => ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes())),
        })
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    Ok(Student {
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        github: row.get("github")?,
    })
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    Ok(Project {
        title: row.get("title")?,
        description: row.get("description")?,
        max_grade: row.get("max_grade")?,
    })
}

fn parse_grade_row(row: &Row<'_>) -> RepoResult<Grade> {
    Ok(Grade {
        student_github: row.get("student_github")?,
        project_title: row.get("project_title")?,
        grade: parse_grade_value(row.get_ref("grade")?)?,
    })
}

fn parse_grade_value(value: ValueRef<'_>) -> RepoResult<GradeValue> {
    match value {
        ValueRef::Integer(value) => Ok(GradeValue::Integer(value)),
        // Schemas created outside this tool may declare a numeric column.
        // `{:?}` keeps the decimal point, so 9.0 reads back as `9.0`.
        ValueRef::Real(value) => Ok(GradeValue::Text(format!("{value:?}"))),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(|text| GradeValue::Text(text.to_string()))
            .map_err(|_| RepoError::InvalidData("non UTF-8 text in grades.grade".to_string())),
        ValueRef::Null => Err(RepoError::InvalidData(
            "missing value in grades.grade".to_string(),
        )),
        ValueRef::Blob(_) => Err(RepoError::InvalidData(
            "unexpected blob in grades.grade".to_string(),
        )),
    }
}
