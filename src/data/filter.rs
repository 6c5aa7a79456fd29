use std::fmt;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Year – the only filter criterion
// ---------------------------------------------------------------------------

/// A year typed by the user. Kept as `f64` because the input field is a
/// plain number field; integral values compare equal to `Record::year`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Year(f64);

impl Year {
    /// Normalise raw input text into a filter.
    ///
    /// Empty, non-numeric, NaN and infinite input all mean "no filter".
    pub fn parse(input: &str) -> Option<Year> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(Year(v)),
            _ => None,
        }
    }

    /// Whether a record's year equals this value.
    pub fn matches(&self, year: i64) -> bool {
        year as f64 == self.0
    }
}

impl From<i64> for Year {
    fn from(year: i64) -> Self {
        Year(year as f64)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Select the records matching `year`, in dataset order.
/// `None` selects the whole dataset.
pub fn filter_records(dataset: &Dataset, year: Option<Year>) -> Vec<&Record> {
    match year {
        Some(y) => dataset
            .records()
            .iter()
            .filter(|r| y.matches(r.year))
            .collect(),
        None => dataset.records().iter().collect(),
    }
}
