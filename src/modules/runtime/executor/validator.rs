//! Search parameter validation

use roster_core::{Query, ValidationError};
use roster_types::{OrderBy, OrderField, SearchParams};
use std::str::FromStr;
use tracing::info;

/// Turns untrusted search parameters into a [`Query`]
///
/// Rules run in a fixed order (limit, offset, order_field, order_by) and the
/// first failure wins.
pub struct ParamValidator {
    default_order_by: OrderBy,
}

impl ParamValidator {
    /// Create a validator that orders by name ascending unless told otherwise
    pub fn new() -> Self {
        Self {
            default_order_by: OrderBy::Asc,
        }
    }

    /// Validate raw parameters
    ///
    /// Absent or empty parameters take their defaults: limit 1, offset 0, no
    /// filter, order field `Name`, ascending.
    pub fn validate(&self, params: &SearchParams) -> Result<Query, ValidationError> {
        let limit = match SearchParams::get(&params.limit) {
            Some(s) => match Self::parse_count(s) {
                Some(v) if v > 0 => v,
                _ => return Self::reject(ValidationError::BadLimit, s),
            },
            None => 1,
        };

        let offset = match SearchParams::get(&params.offset) {
            Some(s) => match Self::parse_count(s) {
                Some(v) => v,
                None => return Self::reject(ValidationError::BadOffset, s),
            },
            None => 0,
        };

        let text = SearchParams::get(&params.query).unwrap_or_default();

        let order_field = match SearchParams::get(&params.order_field) {
            Some(s) => match OrderField::from_str(s) {
                Ok(field) => field,
                Err(_) => return Self::reject(ValidationError::BadOrderField, s),
            },
            None => OrderField::Name,
        };

        let order_by = match SearchParams::get(&params.order_by) {
            Some(s) => match OrderBy::from_str(s) {
                Ok(direction) => direction,
                Err(_) => return Self::reject(ValidationError::BadOrderBy, s),
            },
            None => self.default_order_by,
        };

        Ok(Query::new(limit)
            .with_offset(offset)
            .with_text(text)
            .ordered_by(order_field, order_by))
    }

    /// Parse a signed integer and keep it only if it is non-negative
    fn parse_count(s: &str) -> Option<usize> {
        s.parse::<i64>()
            .ok()
            .and_then(|v| usize::try_from(v).ok())
    }

    fn reject(error: ValidationError, raw: &str) -> Result<Query, ValidationError> {
        info!("Rejected search parameter: {}: {:?}", error.code(), raw);
        Err(error)
    }
}

impl Default for ParamValidator {
    fn default() -> Self {
        Self::new()
    }
}
