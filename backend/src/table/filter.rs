//! Search and category filters.
//!
//! Both return dataset row indices and never touch the dataset. They are
//! recomputed from scratch on every request.

use crate::models::Dataset;

/// Rows whose `column` cell contains `query`, ignoring case.
///
/// An empty or whitespace-only query keeps every row, in order. Any other
/// query is matched as typed, spaces included.
pub fn filter(dataset: &Dataset, column: &str, query: Option<&str>) -> Vec<usize> {
    filter_rows(dataset, column, query, &dataset.all_indices())
}

/// Same as [`filter`] over an explicit subset of rows.
///
/// Passing the output of a previous call with the same query returns it
/// unchanged.
pub fn filter_rows(dataset: &Dataset, column: &str, query: Option<&str>, rows: &[usize]) -> Vec<usize> {
    let needle = match query {
        Some(q) if !q.trim().is_empty() => q.to_lowercase(),
        _ => return rows.iter().copied().filter(|&i| i < dataset.len()).collect(),
    };

    rows.iter()
        .copied()
        .filter(|&i| {
            dataset
                .cell(i, column)
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Keep rows whose category is one of `selected`.
///
/// An empty selection keeps every row.
pub fn filter_categories(dataset: &Dataset, column: &str, selected: &[String], rows: &[usize]) -> Vec<usize> {
    if selected.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .copied()
        .filter(|&i| {
            dataset
                .cell(i, column)
                .is_some_and(|value| selected.iter().any(|s| s == value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let rows = [
            ("Stimulant", "Adderall"),
            ("Stimulant", "Adderall XR"),
            ("Non-Stimulant", "Strattera"),
            ("Stimulant", "Vyvanse"),
        ];
        Dataset::new(
            vec!["Medication Type".into(), "Brand Name".into()],
            rows.iter().map(|(t, b)| vec![t.to_string(), b.to_string()]).collect(),
        )
    }

    #[test]
    fn test_case_insensitive_substring() {
        let ds = dataset();
        assert_eq!(filter(&ds, "Brand Name", Some("adder")), [0, 1]);
        assert_eq!(filter(&ds, "Brand Name", Some("XR")), [1]);
        assert_eq!(filter(&ds, "Brand Name", Some("TERA")), [2]);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let ds = dataset();
        assert_eq!(filter(&ds, "Brand Name", None), [0, 1, 2, 3]);
        assert_eq!(filter(&ds, "Brand Name", Some("")), [0, 1, 2, 3]);
        assert_eq!(filter(&ds, "Brand Name", Some("   ")), [0, 1, 2, 3]);
    }

    #[test]
    fn test_query_spaces_are_significant() {
        let ds = dataset();
        assert_eq!(filter(&ds, "Brand Name", Some("all ")), [1]);
        assert_eq!(filter(&ds, "Brand Name", Some(" xr")), [1]);
        assert!(filter(&ds, "Brand Name", Some(" adder")).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let ds = dataset();
        assert!(filter(&ds, "Brand Name", Some("ritalin")).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let ds = dataset();
        let once = filter(&ds, "Brand Name", Some("a"));
        let twice = filter_rows(&ds, "Brand Name", Some("a"), &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_column_matches_nothing() {
        let ds = dataset();
        assert!(filter(&ds, "Dosage", Some("a")).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let ds = dataset();
        let all = ds.all_indices();

        assert_eq!(filter_categories(&ds, "Medication Type", &["Non-Stimulant".to_string()], &all), [2]);
        assert_eq!(filter_categories(&ds, "Medication Type", &[], &all), all);
        assert!(filter_categories(&ds, "Medication Type", &["Other".to_string()], &all).is_empty());
    }
}
