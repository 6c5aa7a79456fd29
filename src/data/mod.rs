/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, check columns → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, source columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  optional year → matching records
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
