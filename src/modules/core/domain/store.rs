//! Read-only record store and the search pipeline over it

use roster_types::{OrderBy, OrderField};
use std::cmp::Ordering;
use tracing::debug;

use super::{Query, Record, RecordSource};
use crate::error::Result;

/// Ordered, immutable collection of records
///
/// Built once from a [`RecordSource`]; nothing hands out mutable access, so
/// a store behind an `Arc` can serve any number of concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a store owning the given records in their source order
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load a store from a record source
    pub fn load(source: &impl RecordSource) -> Result<Self> {
        let records = source.load()?;
        debug!("loaded {} records", records.len());
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Filter, order and page the store
    ///
    /// Never fails: an out-of-range offset yields an empty page, and the
    /// page window is clamped to the filtered set.
    pub fn search(&self, query: &Query) -> Vec<&Record> {
        debug!(?query, "search");

        let mut found = self.filter(&query.text);
        debug!("filtered {} records from {}", found.len(), self.len());

        if query.offset >= found.len() {
            debug!("offset={} out of range, returning empty page", query.offset);
            return Vec::new();
        }

        if query.order_by != OrderBy::None {
            debug!("ordering by {}", query.order_field);
            // Stable, so equal keys keep store order.
            found.sort_by(|a, b| compare(a, b, query.order_field));
        }

        if query.order_by == OrderBy::Desc {
            found.reverse();
        }

        let end = query.offset.saturating_add(query.limit).min(found.len());
        found.truncate(end);
        found.drain(..query.offset);

        debug!("returning {} records", found.len());
        found
    }

    fn filter(&self, text: &str) -> Vec<&Record> {
        if text.is_empty() {
            return self.records.iter().collect();
        }
        self.records.iter().filter(|r| r.matches(text)).collect()
    }
}

fn compare(a: &Record, b: &Record, field: OrderField) -> Ordering {
    match field {
        OrderField::Name => a.name().cmp(b.name()),
        OrderField::Id => a.id().cmp(&b.id()),
        OrderField::Age => a.age().cmp(&b.age()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_people() -> RecordStore {
        RecordStore::new(vec![
            Record::new(0, "Boyd", "Wolf", 22, "male", "Nulla cillum enim"),
            Record::new(1, "Hilda", "Mayer", 21, "female", "Sit commodo consectetur"),
        ])
    }

    fn people() -> RecordStore {
        RecordStore::new(vec![
            Record::new(3, "Everett", "Dillard", 27, "male", "Sint eu id sint irure"),
            Record::new(0, "Boyd", "Wolf", 22, "male", "Nulla cillum enim velit"),
            Record::new(4, "Owen", "Lynn", 30, "male", "Elit anim elit"),
            Record::new(1, "Hilda", "Mayer", 21, "female", "Sit commodo Velit"),
            Record::new(2, "Brooks", "Aguilar", 25, "male", "Velit ullamco est"),
            Record::new(5, "Annie", "Osborn", 22, "female", "Consectetur id nulla"),
        ])
    }

    fn ids(records: &[&Record]) -> Vec<u64> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_unfiltered_keeps_store_order() {
        let store = people();
        let found = store.search(&Query::new(100));
        assert_eq!(ids(&found), vec![3, 0, 4, 1, 2, 5]);
    }

    #[test]
    fn test_unfiltered_length_is_size_minus_offset() {
        let store = people();
        for offset in 0..10 {
            let found = store.search(&Query::new(100).with_offset(offset));
            assert_eq!(found.len(), store.len().saturating_sub(offset));
        }
    }

    #[test]
    fn test_filter_is_case_sensitive_substring() {
        let store = people();
        let query = Query::new(100).with_text("Velit");
        let found = store.search(&query);
        assert_eq!(ids(&found), vec![1, 2]);

        for record in store.records() {
            let included = found.iter().any(|r| r.id() == record.id());
            assert_eq!(included, record.matches("Velit"));
        }
    }

    #[test]
    fn test_filter_matches_full_name_across_space() {
        let store = people();
        let found = store.search(&Query::new(100).with_text("d W"));
        assert_eq!(ids(&found), vec![0]);
    }

    #[test]
    fn test_offset_out_of_range_is_empty() {
        let store = people();
        assert!(store.search(&Query::new(1).with_offset(6)).is_empty());
        assert!(store.search(&Query::new(1).with_offset(usize::MAX)).is_empty());
        let filtered = Query::new(1).with_text("Velit").with_offset(2);
        assert!(store.search(&filtered).is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::default();
        assert!(store.is_empty());
        assert!(store.search(&Query::new(10)).is_empty());
    }

    #[test]
    fn test_order_by_age_ascending() {
        let store = people();
        let query = Query::new(100).ordered_by(OrderField::Age, OrderBy::Asc);
        let found = store.search(&query);
        assert!(found.windows(2).all(|w| w[0].age() <= w[1].age()));
        // Equal ages keep store order.
        assert_eq!(ids(&found), vec![1, 0, 5, 2, 3, 4]);
    }

    #[test]
    fn test_order_by_age_descending_reverses_ascending() {
        let store = people();
        let query = Query::new(100).ordered_by(OrderField::Age, OrderBy::Desc);
        assert_eq!(ids(&store.search(&query)), vec![4, 3, 2, 5, 0, 1]);
    }

    #[test]
    fn test_order_by_id_and_name() {
        let store = people();
        let by_id = Query::new(100).ordered_by(OrderField::Id, OrderBy::Asc);
        assert_eq!(ids(&store.search(&by_id)), vec![0, 1, 2, 3, 4, 5]);

        let by_name = Query::new(100).ordered_by(OrderField::Name, OrderBy::Asc);
        let names: Vec<&str> = store.search(&by_name).iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "Annie Osborn",
                "Boyd Wolf",
                "Brooks Aguilar",
                "Everett Dillard",
                "Hilda Mayer",
                "Owen Lynn",
            ]
        );
    }

    #[test]
    fn test_none_direction_ignores_field() {
        let store = people();
        let query = Query::new(100).ordered_by(OrderField::Age, OrderBy::None);
        assert_eq!(ids(&store.search(&query)), vec![3, 0, 4, 1, 2, 5]);
    }

    #[test]
    fn test_page_slice_after_ordering() {
        let store = people();
        let query = Query::new(2)
            .with_offset(1)
            .ordered_by(OrderField::Id, OrderBy::Asc);
        assert_eq!(ids(&store.search(&query)), vec![1, 2]);

        let tail = Query::new(usize::MAX)
            .with_offset(4)
            .ordered_by(OrderField::Id, OrderBy::Asc);
        assert_eq!(ids(&store.search(&tail)), vec![4, 5]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let store = people();
        let query = Query::new(3).ordered_by(OrderField::Name, OrderBy::Desc);
        let first = ids(&store.search(&query));
        let second = ids(&store.search(&query));
        assert_eq!(first, second);
        assert_eq!(ids(&store.search(&Query::new(100))), vec![3, 0, 4, 1, 2, 5]);
    }

    #[test]
    fn test_two_people_by_age_with_lookahead() {
        let store = two_people();
        let query = Query::new(2).ordered_by(OrderField::Age, OrderBy::Asc);
        assert_eq!(ids(&store.search(&query)), vec![1, 0]);
    }

    #[test]
    fn test_load_from_source() {
        let source = vec![Record::new(9, "Ann", "Lee", 40, "female", "")];
        let store = RecordStore::load(&source).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name(), "Ann Lee");
    }
}
