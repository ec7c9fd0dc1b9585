// src/parser/draws.rs

use crate::mbnet::models::DrawRecord;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Line Pattern (Lazy Static) ---
// Matches `<seqNo>. <day>.<month>.<year> <n0>,<n1>,<n2>,<n3>,<n4>,<n5>`,
// anchored on both ends so trailing garbage disqualifies the whole line.
static DRAW_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\. (\d+)\.(\d+)\.(\d+) (\d+),(\d+),(\d+),(\d+),(\d+),(\d+)$")
        .expect("Failed to compile DRAW_LINE_RE")
});

/// Parses a single archive line into a draw record.
///
/// Returns `None` for any deviation from the fixed format. Numeric fields too
/// large for their target type and day/month/year combinations that do not
/// form a real calendar date count as deviations and drop the line, rather
/// than degrading to a bogus value.
pub fn parse_line(line: &str) -> Option<DrawRecord> {
    let caps = DRAW_LINE_RE.captures(line)?;
    let field = |i: usize| caps[i].parse::<u32>().ok();

    let seq_no = field(1)?;
    let day = field(2)?;
    let month = field(3)?;
    let year = caps[4].parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let mut numbers = [0u32; 6];
    for (slot, group) in numbers.iter_mut().zip(5..=10) {
        *slot = field(group)?;
    }

    Some(DrawRecord {
        seq_no,
        date,
        numbers,
    })
}

/// Parses a whole archive, best effort.
///
/// Blank lines and lines not matching the draw pattern are skipped; surviving
/// records come back in file order, unsorted. Duplicate sequence numbers are
/// kept as-is.
pub fn parse_archive(text: &str) -> Vec<DrawRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(record) => records.push(record),
            None => {
                skipped += 1;
                tracing::debug!("Skipping unparseable line: {:?}", line);
            }
        }
    }

    tracing::info!("Parsed {} draws ({} lines skipped)", records.len(), skipped);
    records
}
