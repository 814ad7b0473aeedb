//! `show system` report inspection helpers

use ops_sysd_common::{CommitStatus, RowStore, System};

pub const FAN_SECTION: &str = "Fan details:";
pub const LED_SECTION: &str = "LED details:";
pub const PSU_SECTION: &str = "Power supply details:";
pub const TEMP_SECTION: &str = "Temperature Sensors:";

/// Data rows of a report table: the lines after the dashed rule, up to
/// the next blank line.
pub fn section_rows<'a>(report: &'a str, title: &str) -> Vec<&'a str> {
    report
        .lines()
        .skip_while(|line| *line != title)
        .skip_while(|line| !line.starts_with("---"))
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

/// Header line and rule of a report table
pub fn section_header<'a>(report: &'a str, title: &str) -> Option<(&'a str, &'a str)> {
    let mut lines = report.lines().skip_while(|line| *line != title).skip(2);
    Some((lines.next()?, lines.next()?))
}

/// Value rendered for a header block label, trimmed.
///
/// Values end at the next run of two spaces, which is enough for the
/// padded column layout as long as values themselves hold no double space.
pub fn header_value<'a>(report: &'a str, label: &str) -> Option<&'a str> {
    let prefix = format!("{:<20}: ", label);
    let start = report.find(&prefix)? + prefix.len();
    let rest = &report[start..];
    let line = rest.split('\n').next().unwrap_or("");
    Some(line.split("  ").next().unwrap_or("").trim())
}

/// First column of each row
pub fn first_column<'a>(rows: &[&'a str]) -> Vec<&'a str> {
    rows.iter()
        .filter_map(|row| row.split_whitespace().next())
        .collect()
}

/// First System row, cloned
pub fn system_row<S: RowStore + ?Sized>(store: &S) -> Option<System> {
    store.first_system().cloned()
}

/// Asserts a seeding run wrote changes
pub fn assert_seeded(status: CommitStatus) {
    assert_eq!(status, CommitStatus::Success, "seeding committed nothing");
}
