use crate::chart::render::render;
use crate::chart::spec::Dashboard;
use crate::data::filter::Year;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded at startup, read-only afterwards.
    dataset: Dataset,

    /// Where the dataset came from, for the status line.
    pub source: String,

    /// Raw contents of the year field.
    pub year_input: String,

    /// Filter the current charts were rendered with.
    pub year: Option<Year>,

    /// Charts for `year` (cached).
    pub charts: Dashboard,

    /// Status / warning message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset, source: impl Into<String>, year: Option<Year>) -> Self {
        let charts = render(&dataset, year);
        Self {
            dataset,
            source: source.into(),
            year_input: year.map(|y| y.to_string()).unwrap_or_default(),
            year,
            charts,
            status_message: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of records behind the current charts.
    pub fn visible_count(&self) -> usize {
        self.charts.scatter.points.len()
    }

    /// Apply the text in `year_input`. Returns whether the charts changed.
    pub fn commit_year_input(&mut self) -> bool {
        let year = Year::parse(&self.year_input);
        let trimmed = self.year_input.trim();
        self.status_message = if year.is_none() && !trimmed.is_empty() {
            log::warn!("Year input '{trimmed}' is not a number, showing all years");
            Some(format!("'{trimmed}' is not a number, showing all years"))
        } else {
            None
        };
        self.set_year(year)
    }

    /// Re-render for `year` if it differs from the current filter.
    pub fn set_year(&mut self, year: Option<Year>) -> bool {
        if year == self.year {
            return false;
        }
        self.year = year;
        self.charts = render(&self.dataset, year);
        true
    }

    /// Empty the year field and show everything.
    pub fn clear_year(&mut self) -> bool {
        self.year_input.clear();
        self.commit_year_input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::NO_DATA_TITLE;
    use crate::data::model::tests::{dataset, record};

    fn state() -> AppState {
        let ds = dataset(vec![
            record(2020, "pos", 5, "X", "US", "Mon", 3.0),
            record(2021, "neg", 2, "Y", "UK", "Tue", 1.0),
        ]);
        AppState::new(ds, "test.csv", None)
    }

    #[test]
    fn starts_unfiltered() {
        let s = state();
        assert_eq!(s.year, None);
        assert_eq!(s.visible_count(), 2);
        assert_eq!(s.year_input, "");
    }

    #[test]
    fn initial_year_is_shown_in_the_field() {
        let s = AppState::new(state().dataset().clone(), "test.csv", Some(Year::from(2021)));
        assert_eq!(s.year_input, "2021");
        assert_eq!(s.visible_count(), 1);
    }

    #[test]
    fn commit_filters_and_rerenders() {
        let mut s = state();
        s.year_input = "2020".into();
        assert!(s.commit_year_input());
        assert_eq!(s.visible_count(), 1);
        assert!(s.charts.bar.title.ends_with("(2020)"));

        // Same value again: nothing to do.
        assert!(!s.commit_year_input());
    }

    #[test]
    fn unknown_year_shows_placeholder() {
        let mut s = state();
        s.year_input = "1999".into();
        s.commit_year_input();
        assert!(s.charts.is_placeholder());
        assert_eq!(s.charts.pie.title, NO_DATA_TITLE);
        assert!(s.status_message.is_none());
    }

    #[test]
    fn non_numeric_input_means_no_filter_with_warning() {
        let mut s = state();
        s.year_input = "2020".into();
        s.commit_year_input();
        s.year_input = "last year".into();
        assert!(s.commit_year_input());
        assert_eq!(s.year, None);
        assert_eq!(s.visible_count(), 2);
        assert!(s.status_message.is_some());
    }

    #[test]
    fn clear_resets_filter() {
        let mut s = state();
        s.year_input = "2021".into();
        s.commit_year_input();
        assert!(s.clear_year());
        assert_eq!(s.year, None);
        assert!(s.year_input.is_empty());
    }
}
