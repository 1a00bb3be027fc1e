//! Substring search over the identity fields of a dataset

use super::record::CatalogRecord;

/// Positions (in dataset order) of the records matching `query`.
///
/// Matching is a case-insensitive substring test against article number,
/// chemical name and CAS number. The query is used as typed, without
/// trimming; an empty query keeps every record.
pub fn filter_indices<T: CatalogRecord>(records: &[T], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches_query(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Same as [`filter_indices`] but yields the records themselves.
pub fn filter_records<'a, T: CatalogRecord>(records: &'a [T], query: &str) -> Vec<&'a T> {
    filter_indices(records, query)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::record::UnitPrice;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        article: Option<&'static str>,
        name: Option<&'static str>,
        cas: Option<&'static str>,
    }

    impl CatalogRecord for Row {
        fn article_no(&self) -> Option<&str> {
            self.article
        }
        fn chemical_name(&self) -> Option<&str> {
            self.name
        }
        fn cas_number(&self) -> Option<&str> {
            self.cas
        }
        fn unit_prices(&self) -> Vec<UnitPrice> {
            Vec::new()
        }
    }

    fn row(article: &'static str, name: &'static str, cas: Option<&'static str>) -> Row {
        Row {
            article: Some(article),
            name: Some(name),
            cas,
        }
    }

    fn dataset() -> Vec<Row> {
        vec![
            row("CH-001", "Acetone", Some("67-64-1")),
            row("CH-002", "Ethanol", Some("64-17-5")),
            row("CH-003", "Sodium Chloride", Some("7647-14-5")),
            row("CH-004", "Acetic Acid", None),
            row("XY-010", "Methanol", Some("67-56-1")),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let data = dataset();
        assert_eq!(filter_indices(&data, ""), vec![0, 1, 2, 3, 4]);
        let all: Vec<Row> = filter_records(&data, "").into_iter().cloned().collect();
        assert_eq!(all, data);
    }

    #[test]
    fn test_match_is_case_insensitive_on_every_field() {
        let data = dataset();
        assert_eq!(filter_indices(&data, "ACET"), vec![0, 3]);
        assert_eq!(filter_indices(&data, "xy-0"), vec![4]);
        assert_eq!(filter_indices(&data, "64-1"), vec![0, 1]);
    }

    #[test]
    fn test_result_is_ordered_subsequence_and_every_hit_matches() {
        let data = dataset();
        for query in ["a", "anol", "67-", "ch-00", "zzz", "-"] {
            let hits = filter_indices(&data, query);
            assert!(hits.windows(2).all(|w| w[0] < w[1]), "order broken for {query}");
            let needle = query.to_lowercase();
            for idx in hits {
                let record = &data[idx];
                assert!(record
                    .search_fields()
                    .iter()
                    .any(|f| f.unwrap_or("").to_lowercase().contains(&needle)));
            }
        }
    }

    #[test]
    fn test_missing_cas_number_never_panics_and_only_matches_other_fields() {
        let data = vec![Row {
            article: None,
            name: Some("Mystery"),
            cas: None,
        }];
        assert_eq!(filter_indices(&data, ""), vec![0]);
        assert!(filter_indices(&data, "undefined").is_empty());
        assert!(filter_indices(&data, "-").is_empty());
        assert_eq!(filter_indices(&data, "myst"), vec![0]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let data = dataset();
        assert_eq!(filter_indices(&data, "sodium chloride"), vec![2]);
        assert!(filter_indices(&data, " acetone").is_empty());
    }

    #[test]
    fn test_no_match_gives_empty_view() {
        assert!(filter_records(&dataset(), "benzene").is_empty());
    }
}
