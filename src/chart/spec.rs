use serde::Serialize;

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------

/// Title shared by all four charts when the filter selects nothing.
pub const NO_DATA_TITLE: &str = "No data available for the selected year";

pub const SCATTER_TITLE: &str = "Scatter Plot of Retweets vs Platform";
pub const HISTOGRAM_TITLE: &str = "Histogram of Country";
pub const PIE_TITLE: &str = "Day-wise Usage";
pub const BAR_TITLE: &str = "Count of Sentiments";

/// Fill and outline of a bar-like chart. Colours are names understood by
/// [`crate::color::named_color`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarStyle {
    pub fill: String,
    pub outline: Option<String>,
    pub outline_width: f32,
}

impl BarStyle {
    pub fn solid(fill: &str) -> Self {
        BarStyle {
            fill: fill.to_string(),
            outline: None,
            outline_width: 0.0,
        }
    }

    pub fn outlined(fill: &str, outline: &str, width: f32) -> Self {
        BarStyle {
            fill: fill.to_string(),
            outline: Some(outline.to_string()),
            outline_width: width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub retweets: i64,
    pub platform: String,
    pub sentiment: String,
}

/// Retweets (x) against platform (y), coloured by sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    /// Sentiments in first-occurrence order; position is the colour slot.
    pub color_order: Vec<String>,
    /// Platforms in first-occurrence order; position is the y category.
    pub platform_order: Vec<String>,
}

/// One bar of a categorical chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Frequency of each country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSpec {
    pub title: String,
    pub x_label: String,
    pub bins: Vec<CategoryCount>,
    pub style: BarStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Summed hours per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// Sentiment counts, largest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<CategoryCount>,
    pub style: BarStyle,
}

/// The four charts produced for one filter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub scatter: ScatterSpec,
    pub histogram: HistogramSpec,
    pub pie: PieSpec,
    pub bar: BarSpec,
}

impl ScatterSpec {
    pub fn placeholder() -> Self {
        ScatterSpec {
            title: NO_DATA_TITLE.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            points: Vec::new(),
            color_order: Vec::new(),
            platform_order: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl HistogramSpec {
    pub fn placeholder() -> Self {
        HistogramSpec {
            title: NO_DATA_TITLE.to_string(),
            x_label: String::new(),
            bins: Vec::new(),
            style: BarStyle::solid("blue"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

impl PieSpec {
    pub fn placeholder() -> Self {
        PieSpec {
            title: NO_DATA_TITLE.to_string(),
            slices: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl BarSpec {
    pub fn placeholder() -> Self {
        BarSpec {
            title: NO_DATA_TITLE.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            bars: Vec::new(),
            style: BarStyle::solid("blue"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

impl Dashboard {
    /// The empty-result form: placeholder title, no data, on every chart.
    pub fn placeholder() -> Self {
        Dashboard {
            scatter: ScatterSpec::placeholder(),
            histogram: HistogramSpec::placeholder(),
            pie: PieSpec::placeholder(),
            bar: BarSpec::placeholder(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.scatter.is_empty()
            && self.histogram.is_empty()
            && self.pie.is_empty()
            && self.bar.is_empty()
    }

    #[cfg(test)]
    pub fn titles(&self) -> [&str; 4] {
        [
            self.scatter.title.as_str(),
            self.histogram.title.as_str(),
            self.pie.title.as_str(),
            self.bar.title.as_str(),
        ]
    }
}
