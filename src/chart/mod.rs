/// Chart layer: what to draw, computed from the filtered records.
///
/// ```text
///   Dataset + Option<Year>
///        │
///        ▼
///   ┌──────────┐
///   │  render   │  filter → aggregate → four specs
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dashboard │  scatter, histogram, pie, bar
///   └──────────┘
/// ```

pub mod render;
pub mod spec;
