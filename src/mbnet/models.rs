// src/mbnet/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default URL of the full Multi Lotek draw archive published by mbnet.
pub const DEFAULT_ARCHIVE_URL: &str = "http://www.mbnet.com.pl/dl.txt";

/// One archive line in parsed form.
///
/// The source format is `<seqNo>. <day>.<month>.<year> <n0>,<n1>,<n2>,<n3>,<n4>,<n5>`,
/// e.g. `6094. 27.10.2012 5,11,17,22,33,48`. Dates carry day precision only, so
/// two records drawn on the same day always compare equal on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Sequence number assigned by the publisher. Draws are chronological in
    /// sequence order; duplicates are possible in the raw archive and kept.
    pub seq_no: u32,
    /// Calendar date of the draw.
    pub date: NaiveDate,
    /// The six numbers drawn, in published order.
    pub numbers: [u32; 6],
}
