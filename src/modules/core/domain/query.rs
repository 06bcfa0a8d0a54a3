//! Validated search query

use roster_types::{OrderBy, OrderField};

/// Validated search/order/page parameters for one search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Page size
    pub limit: usize,

    /// Zero-based offset into the filtered set
    pub offset: usize,

    /// Substring filter; empty means no filtering
    pub text: String,

    /// Field to order by
    pub order_field: OrderField,

    /// Direction; [`OrderBy::None`] keeps the store order
    pub order_by: OrderBy,
}

impl Query {
    /// Create a query for the first `limit` records in store order
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            offset: 0,
            text: String::new(),
            order_field: OrderField::Name,
            order_by: OrderBy::None,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Set the substring filter
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set both the order field and direction
    pub fn ordered_by(mut self, field: OrderField, direction: OrderBy) -> Self {
        self.order_field = field;
        self.order_by = direction;
        self
    }

    /// Whether the query filters the store at all
    pub fn is_filtered(&self) -> bool {
        !self.text.is_empty()
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_new() {
        let query = Query::new(10);
        assert_eq!(query.limit, 10);
        assert_eq!(query.offset, 0);
        assert!(!query.is_filtered());
        assert_eq!(query.order_field, OrderField::Name);
        assert_eq!(query.order_by, OrderBy::None);
    }

    #[test]
    fn test_query_builder() {
        let query = Query::new(5)
            .with_offset(3)
            .with_text("Velit")
            .ordered_by(OrderField::Age, OrderBy::Desc);

        assert_eq!(query.offset, 3);
        assert!(query.is_filtered());
        assert_eq!(query.order_field, OrderField::Age);
        assert_eq!(query.order_by, OrderBy::Desc);
    }
}
