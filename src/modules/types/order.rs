//! Ordering enumerations for search queries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record field a search result can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderField {
    /// Record identifier
    Id,
    /// Age in years
    Age,
    /// Derived full name
    #[default]
    Name,
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderField::Id => write!(f, "Id"),
            OrderField::Age => write!(f, "Age"),
            OrderField::Name => write!(f, "Name"),
        }
    }
}

impl FromStr for OrderField {
    type Err = String;

    /// Field names are matched case-sensitively against the allow-list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(OrderField::Id),
            "Age" => Ok(OrderField::Age),
            "Name" => Ok(OrderField::Name),
            _ => Err(format!("Unknown order field: {}", s)),
        }
    }
}

impl OrderField {
    /// Returns every accepted order field
    pub fn all() -> &'static [OrderField] {
        &[OrderField::Id, OrderField::Age, OrderField::Name]
    }
}

/// Sort direction for search results
///
/// Encoded on the wire as an integer: `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum OrderBy {
    /// Descending order
    Desc,
    /// Keep the store order
    None,
    /// Ascending order
    #[default]
    Asc,
}

impl TryFrom<i64> for OrderBy {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(OrderBy::Desc),
            0 => Ok(OrderBy::None),
            1 => Ok(OrderBy::Asc),
            _ => Err(format!("Invalid order direction: {}", value)),
        }
    }
}

impl From<OrderBy> for i64 {
    fn from(value: OrderBy) -> Self {
        match value {
            OrderBy::Desc => -1,
            OrderBy::None => 0,
            OrderBy::Asc => 1,
        }
    }
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .parse()
            .map_err(|_| format!("Invalid order direction: {}", s))?;
        OrderBy::try_from(value)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i64::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_field_from_str() {
        assert_eq!(OrderField::from_str("Id").unwrap(), OrderField::Id);
        assert_eq!(OrderField::from_str("Age").unwrap(), OrderField::Age);
        assert_eq!(OrderField::from_str("Name").unwrap(), OrderField::Name);
        assert!(OrderField::from_str("age").is_err());
        assert!(OrderField::from_str("bogus").is_err());
        assert!(OrderField::from_str("").is_err());
    }

    #[test]
    fn test_order_field_default_is_name() {
        assert_eq!(OrderField::default(), OrderField::Name);
    }

    #[test]
    fn test_order_by_from_str() {
        assert_eq!(OrderBy::from_str("-1").unwrap(), OrderBy::Desc);
        assert_eq!(OrderBy::from_str("0").unwrap(), OrderBy::None);
        assert_eq!(OrderBy::from_str("1").unwrap(), OrderBy::Asc);
        assert!(OrderBy::from_str("2").is_err());
        assert!(OrderBy::from_str("100500").is_err());
        assert!(OrderBy::from_str("asc").is_err());
    }

    #[test]
    fn test_order_by_display() {
        assert_eq!(OrderBy::Desc.to_string(), "-1");
        assert_eq!(OrderBy::None.to_string(), "0");
        assert_eq!(OrderBy::Asc.to_string(), "1");
    }

    #[test]
    fn test_order_by_serde_as_integer() {
        assert_eq!(serde_json::to_string(&OrderBy::Desc).unwrap(), "-1");
        let parsed: OrderBy = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, OrderBy::Asc);
        assert!(serde_json::from_str::<OrderBy>("5").is_err());
    }
}
