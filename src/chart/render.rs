use crate::data::filter::{filter_records, Year};
use crate::data::model::{Dataset, Record};

use super::spec::{
    BarSpec, BarStyle, CategoryCount, Dashboard, HistogramSpec, PieSlice, PieSpec, ScatterPoint,
    ScatterSpec, BAR_TITLE, HISTOGRAM_TITLE, PIE_TITLE, SCATTER_TITLE,
};

// ---------------------------------------------------------------------------
// Pipeline entry-point
// ---------------------------------------------------------------------------

/// Filter `dataset` by `year` and build the four charts.
///
/// An empty selection yields [`Dashboard::placeholder`]. Pure: the same
/// inputs always give an equal result.
pub fn render(dataset: &Dataset, year: Option<Year>) -> Dashboard {
    let rows = filter_records(dataset, year);
    log::debug!(
        "render year={} rows={}",
        year.map(|y| y.to_string()).unwrap_or_else(|| "all".into()),
        rows.len()
    );

    if rows.is_empty() {
        return Dashboard::placeholder();
    }

    Dashboard {
        scatter: scatter(&rows, year),
        histogram: histogram(&rows, year),
        pie: pie(&rows, year),
        bar: bar(&rows, year),
    }
}

/// `"<base> (<year>)"` when a filter is active, otherwise just `base`.
pub fn title(base: &str, year: Option<Year>) -> String {
    match year {
        Some(y) => format!("{base} ({y})"),
        None => base.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Individual charts
// ---------------------------------------------------------------------------

fn scatter(rows: &[&Record], year: Option<Year>) -> ScatterSpec {
    ScatterSpec {
        title: title(SCATTER_TITLE, year),
        x_label: "Number of Retweets".to_string(),
        y_label: "Social Media Platform".to_string(),
        points: rows
            .iter()
            .map(|r| ScatterPoint {
                retweets: r.retweets,
                platform: r.platform.clone(),
                sentiment: r.sentiment.clone(),
            })
            .collect(),
        color_order: first_occurrence(rows.iter().map(|r| r.sentiment.as_str())),
        platform_order: first_occurrence(rows.iter().map(|r| r.platform.as_str())),
    }
}

fn histogram(rows: &[&Record], year: Option<Year>) -> HistogramSpec {
    HistogramSpec {
        title: title(HISTOGRAM_TITLE, year),
        x_label: "Country".to_string(),
        bins: count_by(rows.iter().map(|r| r.country.as_str())),
        style: BarStyle::outlined("blue", "black", 1.0),
    }
}

fn pie(rows: &[&Record], year: Option<Year>) -> PieSpec {
    PieSpec {
        title: title(PIE_TITLE, year),
        slices: sum_by(rows.iter().map(|r| (r.day.as_str(), r.hour))),
    }
}

fn bar(rows: &[&Record], year: Option<Year>) -> BarSpec {
    let mut bars = count_by(rows.iter().map(|r| r.sentiment.as_str()));
    sort_by_count_desc(&mut bars);
    BarSpec {
        title: title(BAR_TITLE, year),
        x_label: "Sentiment".to_string(),
        y_label: "Count".to_string(),
        bars,
        style: BarStyle::solid("blue"),
    }
}

// ---------------------------------------------------------------------------
// Aggregation helpers
// ---------------------------------------------------------------------------

/// Distinct values in the order they first appear.
pub fn first_occurrence<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for v in values {
        if !seen.iter().any(|s| s == v) {
            seen.push(v.to_string());
        }
    }
    seen
}

/// Occurrences per category, categories in first-occurrence order.
pub fn count_by<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|c| c.category == v) {
            Some(c) => c.count += 1,
            None => counts.push(CategoryCount {
                category: v.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

/// Summed weight per label, labels in first-occurrence order.
pub fn sum_by<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> Vec<PieSlice> {
    let mut slices: Vec<PieSlice> = Vec::new();
    for (label, weight) in pairs {
        match slices.iter_mut().find(|s| s.label == label) {
            Some(s) => s.value += weight,
            None => slices.push(PieSlice {
                label: label.to_string(),
                value: weight,
            }),
        }
    }
    slices
}

/// Largest count first; `sort_by` is stable so ties keep their order.
pub fn sort_by_count_desc(counts: &mut [CategoryCount]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::NO_DATA_TITLE;
    use crate::data::model::tests::{dataset, record};

    fn scenario() -> Dataset {
        dataset(vec![
            record(2020, "pos", 5, "X", "US", "Mon", 3.0),
            record(2020, "neg", 2, "Y", "US", "Mon", 1.0),
        ])
    }

    fn mixed() -> Dataset {
        dataset(vec![
            record(2021, "neutral", 1, "Twitter", "UK", "Tue", 2.0),
            record(2021, "pos", 7, "Facebook", "US", "Mon", 4.0),
            record(2022, "neg", 3, "Twitter", "US", "Mon", 1.0),
            record(2021, "pos", 9, "Twitter", "Canada", "Tue", 0.5),
            record(2021, "neg", 0, "Instagram", "UK", "Wed", 6.0),
            record(2021, "pos", 4, "Facebook", "UK", "Tue", 1.5),
        ])
    }

    #[test]
    fn scenario_with_matching_year() {
        let d = render(&scenario(), Some(Year::from(2020)));
        assert!(!d.is_placeholder());

        assert_eq!(d.scatter.points.len(), 2);
        assert_eq!(
            d.histogram.bins,
            vec![CategoryCount {
                category: "US".into(),
                count: 2,
            }]
        );
        assert_eq!(
            d.pie.slices,
            vec![PieSlice {
                label: "Mon".into(),
                value: 4.0,
            }]
        );
        assert_eq!(
            d.bar.bars,
            vec![
                CategoryCount {
                    category: "pos".into(),
                    count: 1,
                },
                CategoryCount {
                    category: "neg".into(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn scatter_points_carry_their_record_values() {
        let d = render(&scenario(), Some(Year::from(2020)));
        assert_eq!(
            d.scatter.points,
            vec![
                ScatterPoint {
                    retweets: 5,
                    platform: "X".into(),
                    sentiment: "pos".into(),
                },
                ScatterPoint {
                    retweets: 2,
                    platform: "Y".into(),
                    sentiment: "neg".into(),
                },
            ]
        );
    }

    #[test]
    fn scenario_with_absent_year_is_placeholder() {
        let d = render(&scenario(), Some(Year::from(2019)));
        assert!(d.is_placeholder());
        assert_eq!(d, Dashboard::placeholder());
        for t in d.titles() {
            assert_eq!(t, NO_DATA_TITLE);
        }
    }

    #[test]
    fn empty_dataset_without_filter_is_placeholder() {
        let d = render(&dataset(Vec::new()), None);
        assert!(d.is_placeholder());
    }

    #[test]
    fn record_count_matches_filtered_rows() {
        let ds = mixed();
        let d = render(&ds, Some(Year::from(2021)));
        let expected = ds.records().iter().filter(|r| r.year == 2021).count();
        assert_eq!(d.scatter.points.len(), expected);
        assert_eq!(d.histogram.bins.iter().map(|b| b.count).sum::<usize>(), expected);
        assert_eq!(d.bar.bars.iter().map(|b| b.count).sum::<usize>(), expected);
    }

    #[test]
    fn render_is_idempotent() {
        let ds = mixed();
        assert_eq!(
            render(&ds, Some(Year::from(2021))),
            render(&ds, Some(Year::from(2021)))
        );
        assert_eq!(render(&ds, None), render(&ds, None));
    }

    #[test]
    fn titles_carry_year_only_when_filtered() {
        let ds = mixed();
        let filtered = render(&ds, Some(Year::from(2021)));
        assert_eq!(
            filtered.titles(),
            [
                "Scatter Plot of Retweets vs Platform (2021)",
                "Histogram of Country (2021)",
                "Day-wise Usage (2021)",
                "Count of Sentiments (2021)",
            ]
        );

        let all = render(&ds, None);
        assert_eq!(
            all.titles(),
            [SCATTER_TITLE, HISTOGRAM_TITLE, PIE_TITLE, BAR_TITLE]
        );
        for t in all.titles() {
            assert!(!t.ends_with(')'));
        }
    }

    #[test]
    fn invalid_year_text_behaves_like_no_filter() {
        let ds = mixed();
        assert_eq!(render(&ds, Year::parse("abc")), render(&ds, None));
        assert_eq!(render(&ds, Year::parse("")), render(&ds, None));
    }

    #[test]
    fn bar_sorted_by_count_desc() {
        let ds = mixed();
        let d = render(&ds, None);
        let bars: Vec<(&str, usize)> = d
            .bar
            .bars
            .iter()
            .map(|b| (b.category.as_str(), b.count))
            .collect();
        assert_eq!(bars, vec![("pos", 3), ("neg", 2), ("neutral", 1)]);
    }

    #[test]
    fn bar_ties_follow_first_occurrence() {
        let ds = dataset(vec![
            record(2021, "b", 1, "X", "US", "Mon", 1.0),
            record(2021, "a", 1, "X", "US", "Mon", 1.0),
            record(2021, "c", 1, "X", "US", "Mon", 1.0),
            record(2021, "c", 1, "X", "US", "Mon", 1.0),
            record(2021, "a", 1, "X", "US", "Mon", 1.0),
            record(2021, "b", 1, "X", "US", "Mon", 1.0),
            record(2021, "d", 1, "X", "US", "Mon", 1.0),
        ]);
        let d = render(&ds, Some(Year::from(2021)));
        let order: Vec<&str> = d.bar.bars.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn scatter_orders_follow_filtered_first_occurrence() {
        let ds = mixed();
        let d = render(&ds, Some(Year::from(2021)));
        assert_eq!(d.scatter.color_order, vec!["neutral", "pos", "neg"]);
        assert_eq!(d.scatter.platform_order, vec!["Twitter", "Facebook", "Instagram"]);
        assert_eq!(d.scatter.x_label, "Number of Retweets");
        assert_eq!(d.scatter.y_label, "Social Media Platform");

        // The 2022 row comes first among "neg" rows overall but is filtered out.
        let d2022 = render(&ds, Some(Year::from(2022)));
        assert_eq!(d2022.scatter.color_order, vec!["neg"]);
    }

    #[test]
    fn pie_sums_hours_per_day() {
        let d = render(&mixed(), Some(Year::from(2021)));
        assert_eq!(
            d.pie.slices,
            vec![
                PieSlice {
                    label: "Tue".into(),
                    value: 4.0,
                },
                PieSlice {
                    label: "Mon".into(),
                    value: 4.0,
                },
                PieSlice {
                    label: "Wed".into(),
                    value: 6.0,
                },
            ]
        );
        assert_eq!(d.pie.slices.iter().map(|s| s.value).sum::<f64>(), 14.0);
    }

    #[test]
    fn histogram_style_has_one_unit_outline() {
        let d = render(&mixed(), None);
        assert_eq!(d.histogram.style, BarStyle::outlined("blue", "black", 1.0));
        assert_eq!(d.bar.style, BarStyle::solid("blue"));
        let countries: Vec<&str> = d.histogram.bins.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(countries, vec!["UK", "US", "Canada"]);
    }
}
