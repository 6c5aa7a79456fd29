use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Required schema
// ---------------------------------------------------------------------------

/// Columns every dataset must provide. Names are exact and case-sensitive.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Year",
    "Sentiment",
    "Retweets",
    "Platform",
    "Country",
    "Day",
    "Hour",
];

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A single social media post observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub year: i64,
    pub sentiment: String,
    pub retweets: i64,
    pub platform: String,
    pub country: String,
    /// Weekday name, e.g. "Monday".
    pub day: String,
    /// Used as the aggregation weight of the day-wise pie.
    pub hour: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Built once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    columns: Vec<String>,
}

impl Dataset {
    /// Wrap records in source order together with the source column list.
    pub fn from_records(records: Vec<Record>, columns: Vec<String>) -> Self {
        Dataset { records, columns }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Column names exactly as they appeared in the source (extras included).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i64> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
