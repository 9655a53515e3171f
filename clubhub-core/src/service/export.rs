//! Attendance CSV export.
//!
//! Renders RFC 4180 output: comma-delimited, CRLF line endings, fields
//! quoted when they contain a delimiter, quote, or line break.

use chrono::NaiveDate;

use crate::models::EventAttendee;

const HEADER: [&str; 4] = ["Name", "Email", "Check in Time", "Person Type"];

/// Render attendance rows as CSV with a header row.
#[must_use]
pub fn attendance_csv(attendees: &[EventAttendee]) -> String {
    let mut out = String::new();
    write_row(&mut out, HEADER.iter().map(|h| (*h).to_string()));
    for attendee in attendees {
        write_row(
            &mut out,
            [
                format!("{} {}", attendee.first_name, attendee.last_name),
                attendee.email.clone(),
                attendee.checked_in.format("%b %d, %Y %-I:%M %p").to_string(),
                attendee.kind.to_string(),
            ]
            .into_iter(),
        );
    }
    out
}

/// Derive the export filename: `attendance_<event>_<date>.csv`, with the
/// event name lowercased and non-alphanumeric runs replaced by underscores.
#[must_use]
pub fn attendance_csv_filename(event_name: &str, event_date: Option<NaiveDate>) -> String {
    let sanitized: String = event_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let date = event_date.map_or_else(|| "no-date".to_string(), |d| d.format("%Y-%m-%d").to_string());
    format!("attendance_{sanitized}_{date}.csv")
}

fn write_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(&field));
    }
    out.push_str("\r\n");
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
