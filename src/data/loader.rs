use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, Record, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can stop a dataset from loading. All variants are fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The file '{}' was not found. Ensure it exists in the working directory.", .0.display())]
    NotFound(PathBuf),

    #[error("Dataset must contain the following columns: {}", REQUIRED_COLUMNS.join(", "))]
    Schema { missing: Vec<&'static str> },

    #[error("Unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: missing value for column '{column}'")]
    MissingValue { row: usize, column: &'static str },

    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedColumnType {
        column: &'static str,
        data_type: String,
    },

    #[error("expected a top-level JSON array of objects")]
    JsonShape,

    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON")]
    Json(#[from] serde_json::Error),

    #[error("reading parquet")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("reading arrow batch")]
    Arrow(#[from] arrow::error::ArrowError),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a post dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with at least the required columns
/// * `.json`    – `[{ "Year": 2023, "Sentiment": "Positive", ... }, ...]`
/// * `.parquet` – flat table with the required columns
///
/// Extra columns are ignored.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    if let Err(source) = std::fs::metadata(path) {
        return Err(match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Schema + row parsing shared by all formats
// ---------------------------------------------------------------------------

fn check_schema(columns: &[String]) -> Result<(), LoadError> {
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|req| !columns.iter().any(|c| c == req))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::Schema { missing })
    }
}

/// Build a record from a cell accessor. `cell` returns `Ok(None)` for an
/// absent or null cell.
fn build_record<F>(row: usize, mut cell: F) -> Result<Record, LoadError>
where
    F: FnMut(&'static str) -> Result<Option<String>, LoadError>,
{
    let mut text = |column: &'static str| -> Result<String, LoadError> {
        cell(column)?.ok_or(LoadError::MissingValue { row, column })
    };
    let invalid = |column: &'static str, value: &str| LoadError::InvalidValue {
        row,
        column,
        value: value.to_string(),
    };

    let year_text = text("Year")?;
    let year = parse_integer(&year_text).ok_or_else(|| invalid("Year", &year_text))?;
    let retweets_text = text("Retweets")?;
    let retweets =
        parse_integer(&retweets_text).ok_or_else(|| invalid("Retweets", &retweets_text))?;
    let hour_text = text("Hour")?;
    let hour = hour_text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite())
        .ok_or_else(|| invalid("Hour", &hour_text))?;

    Ok(Record {
        year,
        sentiment: text("Sentiment")?,
        retweets,
        platform: text("Platform")?,
        country: text("Country")?,
        day: text("Day")?,
        hour,
    })
}

/// Integers written either plainly (`15`) or with a zero fraction (`15.0`).
fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    s.parse::<i64>().ok().or_else(|| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64)
            .map(|v| v as i64)
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    check_schema(&columns)?;

    let index: HashMap<&str, usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result?;
        let record = build_record(row_no, |column| {
            Ok(index
                .get(column)
                .and_then(|&i| row.get(i))
                .map(|v| v.to_string()))
        })?;
        records.push(record);
    }

    Ok(Dataset::from_records(records, columns))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
/// The column set is the union of keys in first-seen order.
fn load_json(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;
    let rows = root.as_array().ok_or(LoadError::JsonShape)?;

    let mut objects = Vec::with_capacity(rows.len());
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        let obj = row.as_object().ok_or(LoadError::JsonShape)?;
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
        objects.push(obj);
    }
    check_schema(&columns)?;

    let records = objects
        .iter()
        .enumerate()
        .map(|(row_no, obj)| {
            build_record(row_no, |column| Ok(obj.get(column).and_then(json_cell_text)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Dataset::from_records(records, columns))
}

fn json_cell_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    check_schema(&columns)?;

    let reader = builder.build()?;
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();
        let mut batch_columns: HashMap<&'static str, StringArray> = HashMap::new();
        for column in REQUIRED_COLUMNS {
            let array = batch.column(schema.index_of(column)?);
            batch_columns.insert(column, text_column(array, column)?);
        }

        for row in 0..batch.num_rows() {
            let row_no = records.len();
            let record = build_record(row_no, |column| {
                Ok(batch_columns
                    .get(column)
                    .filter(|array| !array.is_null(row))
                    .map(|array| array.value(row).to_string()))
            })?;
            records.push(record);
        }
    }

    Ok(Dataset::from_records(records, columns))
}

/// Cast a whole column to Utf8 so every format shares one parser.
/// Views, dictionaries and every numeric width cast cleanly.
fn text_column(col: &ArrayRef, column: &'static str) -> Result<StringArray, LoadError> {
    let text = arrow::compute::cast(col, &DataType::Utf8).map_err(|_| {
        LoadError::UnsupportedColumnType {
            column,
            data_type: format!("{:?}", col.data_type()),
        }
    })?;
    Ok(text.as_string::<i32>().clone())
}
