//! Filter stage: case-insensitive substring search across every field.

use tabview_types::Record;
use tabview_util::value_to_text;

/// Normalised search needle; `None` when the term filters nothing.
pub(crate) fn normalize_term(term: &str) -> Option<String> {
    if term.is_empty() { None } else { Some(term.to_lowercase()) }
}

/// Whether any field's lower-cased text contains `needle_lower`.
pub fn record_matches(record: &Record, needle_lower: &str) -> bool {
    record
        .values()
        .any(|value| value_to_text(value).to_lowercase().contains(needle_lower))
}

/// Indices of the records matching `term`, in input order.
pub(crate) fn filter_indices(records: &[Record], term: &str) -> Vec<usize> {
    match normalize_term(term) {
        None => (0..records.len()).collect(),
        Some(needle) => records
            .iter()
            .enumerate()
            .filter(|(_, record)| record_matches(record, &needle))
            .map(|(idx, _)| idx)
            .collect(),
    }
}

/// The subsequence of `records` with at least one field containing `term`.
///
/// Matching is case-insensitive and the term is used verbatim, surrounding
/// whitespace included. An empty term returns every record in its original
/// order.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    filter_indices(records, term).into_iter().map(|idx| &records[idx]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabview_types::records_from_json;

    #[test]
    fn matches_numbers_and_booleans_by_their_text() {
        let records = records_from_json(json!([
            {"amount": 1250, "settled": true},
            {"amount": 99, "settled": false}
        ]))
        .unwrap();
        assert_eq!(filter_records(&records, "125").len(), 1);
        assert_eq!(filter_records(&records, "TRUE").len(), 1);
        assert_eq!(filter_records(&records, "9").len(), 1);
    }

    #[test]
    fn null_fields_never_match() {
        let records = records_from_json(json!([{"memo": null}])).unwrap();
        assert!(filter_records(&records, "null").is_empty());
    }

    #[test]
    fn nested_values_are_searched_as_json() {
        let records = records_from_json(json!([{"tags": ["Rent", "Home"]}, {"tags": []}])).unwrap();
        assert_eq!(filter_records(&records, "home").len(), 1);
    }

    #[test]
    fn whitespace_in_the_term_is_significant() {
        let records = records_from_json(json!([{"name": "Alice Smith"}, {"name": "Alice"}])).unwrap();
        let kept = filter_records(&records, "alice ");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("name"), Some(&json!("Alice Smith")));
        assert!(filter_records(&records, "   ").is_empty());
        assert_eq!(filter_records(&records, "").len(), 2);
    }
}
