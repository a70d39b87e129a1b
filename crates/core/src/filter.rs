//! Label-based view filtering for the usage chart

use cloud_insights_types::Series;

/// Derive the filtered view of a series for a free-text query
///
/// Keeps every point whose label contains the query as a
/// case-insensitive substring, in original order. The empty query is the
/// identity; the source series is never mutated. Any string is a valid
/// query, so this function is total.
pub fn filter_series(series: &Series, query: &str) -> Series {
    if query.is_empty() {
        return series.clone();
    }
    let needle = query.to_lowercase();
    Series::new(
        series
            .iter()
            .filter(|point| point.label.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_insights_types::TimePoint;

    fn january() -> Series {
        Series::new(vec![
            TimePoint::new("Jan 01", 10),
            TimePoint::new("Jan 02", 20),
            TimePoint::new("Jan 03", 30),
        ])
    }

    #[test]
    fn test_empty_query_is_identity() {
        let series = january();
        let filtered = filter_series(&series, "");
        assert_eq!(filtered, series);
    }

    #[test]
    fn test_exact_label_match() {
        let filtered = filter_series(&january(), "Jan 02");
        assert_eq!(filtered.points, vec![TimePoint::new("Jan 02", 20)]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let filtered = filter_series(&january(), "jAn 02");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.points[0].label, "Jan 02");
    }

    #[test]
    fn test_substring_keeps_order() {
        let filtered = filter_series(&january(), "jan");
        assert_eq!(filtered, january());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_series(&january(), "02");
        let twice = filter_series(&once, "02");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_source_not_mutated() {
        let series = january();
        let _ = filter_series(&series, "nothing matches this");
        assert_eq!(series, january());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let filtered = filter_series(&january(), "Feb");
        assert!(filtered.is_empty());
    }
}
