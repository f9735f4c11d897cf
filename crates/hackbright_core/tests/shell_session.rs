use hackbright_core::db::open_db_in_memory;
use hackbright_core::{
    SessionEnd, SessionSummary, Shell, SqliteTrackerRepository, TrackerService, INVALID_ENTRY,
    PROMPT,
};
use rusqlite::Connection;
use std::io::Cursor;

fn run_session(conn: &Connection, script: &str) -> (SessionSummary, String) {
    let shell = Shell::new(TrackerService::new(SqliteTrackerRepository::new(conn)));
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let summary = shell.run(&mut input, &mut output).unwrap();
    (summary, String::from_utf8(output).unwrap())
}

fn count_rows(conn: &Connection, table_name: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table_name};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn new_student_then_lookup_prints_student() {
    let conn = open_db_in_memory().unwrap();

    let (summary, output) = run_session(
        &conn,
        "new_student Ada Lovelace ada\nstudent ada\nproject_title nonexistent\nquit\n",
    );

    assert!(output.contains("Successfully added student Ada Lovelace\n"));
    assert!(output.contains("Student: Ada Lovelace\nGitHub account: ada\n"));
    assert!(output.contains("No project found with title nonexistent\n"));
    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(summary.operations, 3);
}

#[test]
fn give_grade_then_lookup_prints_grade() {
    let conn = open_db_in_memory().unwrap();

    let (_, output) = run_session(
        &conn,
        "give_grade ada Markov 47\ngrade_on_project ada Markov\nquit\n",
    );

    assert!(output.contains("Successfully added grade for ada\n"));
    assert!(output.contains("ada's grade for the Markov project was 47\n"));
}

#[test]
fn project_lookup_prints_description_and_max_grade() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO projects (title, description, max_grade)
         VALUES ('Markov', 'Tweets generated from Markov chains', 50);",
        [],
    )
    .unwrap();

    let (_, output) = run_session(&conn, "project_title Markov\nquit\n");

    assert!(output.contains(
        "The Markov project involves Tweets generated from Markov chains and has a max grade of 50\n"
    ));
}

#[test]
fn unknown_command_prints_invalid_entry_and_changes_nothing() {
    let conn = open_db_in_memory().unwrap();

    let (summary, output) = run_session(&conn, "foo bar\nquit\n");

    assert_eq!(output, format!("{PROMPT}{INVALID_ENTRY}\n{PROMPT}"));
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.operations, 0);
    assert_eq!(count_rows(&conn, "students"), 0);
    assert_eq!(count_rows(&conn, "grades"), 0);
}

#[test]
fn empty_line_and_wrong_arity_are_invalid_entries() {
    let conn = open_db_in_memory().unwrap();

    let (summary, output) = run_session(
        &conn,
        "\nstudent\nnew_student Ada Lovelace\ngive_grade ada Markov 47 extra\nquit\n",
    );

    assert_eq!(output.matches(INVALID_ENTRY).count(), 4);
    assert_eq!(summary.rejected, 4);
    assert_eq!(summary.operations, 0);
    assert_eq!(count_rows(&conn, "students"), 0);
    assert_eq!(count_rows(&conn, "grades"), 0);
}

#[test]
fn quit_with_arguments_ends_session_before_later_lines() {
    let conn = open_db_in_memory().unwrap();

    let (summary, output) = run_session(&conn, "quit right now\nnew_student Ada Lovelace ada\n");

    assert_eq!(output, PROMPT);
    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(summary.operations, 0);
    assert_eq!(count_rows(&conn, "students"), 0);
}

#[test]
fn end_of_input_ends_session() {
    let conn = open_db_in_memory().unwrap();

    let (summary, output) = run_session(&conn, "student ada\n");

    assert!(output.contains("No student found with GitHub account ada\n"));
    assert_eq!(summary.end, SessionEnd::EndOfInput);
}

#[test]
fn not_found_lookups_print_messages() {
    let conn = open_db_in_memory().unwrap();

    let (_, output) = run_session(
        &conn,
        "student ghost\ngrade_on_project ghost Markov\nquit\n",
    );

    assert!(output.contains("No student found with GitHub account ghost\n"));
    assert!(output.contains("No grade found for ghost on the Markov project\n"));
    assert!(!output.contains("\n\n"));
}

#[test]
fn store_errors_are_reported_and_session_continues() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE grades;").unwrap();

    let (summary, output) = run_session(
        &conn,
        "give_grade ada Markov 47\nnew_student Ada Lovelace ada\nquit\n",
    );

    assert!(output.contains("Database error: "));
    assert!(output.contains("Successfully added student Ada Lovelace\n"));
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.operations, 2);
    assert_eq!(summary.end, SessionEnd::Quit);
}

#[test]
fn non_utf8_line_is_invalid_entry_and_session_continues() {
    let conn = open_db_in_memory().unwrap();
    let shell = Shell::new(TrackerService::new(SqliteTrackerRepository::new(&conn)));
    let mut input = Cursor::new(b"student \xff\xfe\nnew_student Ada Lovelace ada\nquit\n".to_vec());
    let mut output = Vec::new();

    let summary = shell.run(&mut input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with(&format!("{PROMPT}{INVALID_ENTRY}\n")));
    assert!(output.contains("Successfully added student Ada Lovelace\n"));
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.operations, 1);
    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(count_rows(&conn, "students"), 1);
}
