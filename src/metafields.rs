//! Metafield ordering.
//!
//! Listings can be ordered by namespace, key, or timestamps, each ascending
//! or descending, with multiple keys composed in the order given. When no
//! order is requested the sort adapts to the active filter: filtering by
//! namespace sorts by key, filtering by key sorts by namespace, and an
//! unfiltered listing sorts by namespace then key.

use crate::rest::{Metafield, MetafieldParams};
use std::cmp::Ordering;
use thiserror::Error;

/// Raised when an `--order` value names an unknown property.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown order property '{key}'. Known properties: namespace, key, create, update, each with an optional :asc or :desc suffix.")]
pub struct InvalidOrderError {
    /// The order value that was rejected.
    pub key: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SortField {
    Namespace,
    Key,
    CreatedAt,
    UpdatedAt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Asc,
    Desc,
}

/// One parsed `--order` value, e.g. `key` or `update:desc`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderBy {
    field: SortField,
    direction: Direction,
}

impl std::str::FromStr for OrderBy {
    type Err = InvalidOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s.split_once(':').map_or((s, "asc"), |(f, d)| (f, d));

        let field = match field {
            "namespace" => SortField::Namespace,
            "key" => SortField::Key,
            "create" | "created" => SortField::CreatedAt,
            "update" | "updated" => SortField::UpdatedAt,
            _ => return Err(InvalidOrderError { key: s.to_string() }),
        };

        let direction = match direction {
            "asc" => Direction::Asc,
            "desc" => Direction::Desc,
            _ => return Err(InvalidOrderError { key: s.to_string() }),
        };

        Ok(Self { field, direction })
    }
}

impl OrderBy {
    const fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }

    fn compare(self, a: &Metafield, b: &Metafield) -> Ordering {
        let ordering = match self.field {
            SortField::Namespace => compare_str(&a.namespace, &b.namespace),
            SortField::Key => compare_str(&a.key, &b.key),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };

        match self.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

fn compare_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Sorts metafields in place.
///
/// `order` keys are composed left to right; the first non-equal comparison
/// wins. An empty `order` falls back to a default derived from the active
/// filters. The sort is stable.
pub fn sort_metafields(metafields: &mut [Metafield], order: &[OrderBy], params: &MetafieldParams) {
    let default_order;
    let order = if order.is_empty() {
        default_order = default_order_for(params);
        default_order.as_slice()
    } else {
        order
    };

    metafields.sort_by(|a, b| {
        order
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
}

fn default_order_for(params: &MetafieldParams) -> Vec<OrderBy> {
    if params.namespace.is_some() {
        vec![OrderBy::new(SortField::Key, Direction::Asc)]
    } else if params.key.is_some() {
        vec![OrderBy::new(SortField::Namespace, Direction::Asc)]
    } else {
        vec![
            OrderBy::new(SortField::Namespace, Direction::Asc),
            OrderBy::new(SortField::Key, Direction::Asc),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    fn metafield(namespace: &str, key: &str, created: &str, updated: &str) -> Metafield {
        Metafield {
            id: 0,
            namespace: namespace.to_string(),
            key: key.to_string(),
            value: json!(""),
            value_type: None,
            description: None,
            owner_id: None,
            owner_resource: None,
            admin_graphql_api_id: None,
            created_at: Some(DateTime::parse_from_rfc3339(created).unwrap()),
            updated_at: Some(DateTime::parse_from_rfc3339(updated).unwrap()),
        }
    }

    fn fixtures() -> Vec<Metafield> {
        vec![
            metafield("b", "Zeta", "2024-03-01T00:00:00Z", "2024-06-01T00:00:00Z"),
            metafield("A", "alpha", "2024-01-01T00:00:00Z", "2024-08-01T00:00:00Z"),
            metafield("a", "beta", "2024-02-01T00:00:00Z", "2024-07-01T00:00:00Z"),
        ]
    }

    fn keys(metafields: &[Metafield]) -> Vec<&str> {
        metafields.iter().map(|m| m.key.as_str()).collect()
    }

    #[test]
    fn test_parses_field_and_direction() {
        assert!("namespace".parse::<OrderBy>().is_ok());
        assert!("key:desc".parse::<OrderBy>().is_ok());
        assert!("created:asc".parse::<OrderBy>().is_ok());
        assert_eq!(
            "update".parse::<OrderBy>().unwrap(),
            "updated:asc".parse::<OrderBy>().unwrap()
        );
    }

    #[test]
    fn test_rejects_unknown_order_values() {
        assert!("sideways".parse::<OrderBy>().is_err());
        assert!("key:random".parse::<OrderBy>().is_err());
    }

    #[test]
    fn test_default_sort_is_namespace_then_key() {
        let mut metafields = fixtures();
        sort_metafields(&mut metafields, &[], &MetafieldParams::default());
        assert_eq!(keys(&metafields), vec!["alpha", "beta", "Zeta"]);
    }

    #[test]
    fn test_namespace_filter_defaults_to_key_sort() {
        let params = MetafieldParams {
            namespace: Some("a".to_string()),
            key: None,
        };
        let mut metafields = fixtures();
        sort_metafields(&mut metafields, &[], &params);
        assert_eq!(keys(&metafields), vec!["alpha", "beta", "Zeta"]);
    }

    #[test]
    fn test_key_filter_defaults_to_namespace_sort() {
        let params = MetafieldParams {
            namespace: None,
            key: Some("x".to_string()),
        };
        let mut metafields = fixtures();
        sort_metafields(&mut metafields, &[], &params);
        let namespaces: Vec<&str> = metafields.iter().map(|m| m.namespace.as_str()).collect();
        // Case-insensitive, so "A" and "a" keep their input order
        assert_eq!(namespaces, vec!["A", "a", "b"]);
    }

    #[test]
    fn test_explicit_descending_timestamp_sort() {
        let order = ["update:desc".parse::<OrderBy>().unwrap()];
        let mut metafields = fixtures();
        sort_metafields(&mut metafields, &order, &MetafieldParams::default());
        assert_eq!(keys(&metafields), vec!["alpha", "beta", "Zeta"]);
    }

    #[test]
    fn test_chronological_sort_uses_timestamps_not_strings() {
        let mut metafields = vec![
            metafield("n", "late", "2024-12-01T00:00:00+09:00", "2024-12-01T00:00:00+09:00"),
            metafield("n", "early", "2024-11-30T20:00:00Z", "2024-11-30T12:00:00Z"),
        ];
        let order = ["created".parse::<OrderBy>().unwrap()];
        sort_metafields(&mut metafields, &order, &MetafieldParams::default());
        // 2024-12-01T00:00:00+09:00 is 2024-11-30T15:00:00Z
        assert_eq!(keys(&metafields), vec!["late", "early"]);
    }

    #[test]
    fn test_multi_key_sort_first_difference_wins() {
        let order = [
            "namespace".parse::<OrderBy>().unwrap(),
            "key:desc".parse::<OrderBy>().unwrap(),
        ];
        let mut metafields = fixtures();
        sort_metafields(&mut metafields, &order, &MetafieldParams::default());
        assert_eq!(keys(&metafields), vec!["beta", "alpha", "Zeta"]);
    }
}
