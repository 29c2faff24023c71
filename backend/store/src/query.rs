//! # Query
//!
//! The subset of PostgREST reads the site needs.
//!
//! - `select=*` over one collection
//! - equality filters, `field=eq.value`
//! - ascending orderings, nulls last, `order=a.asc.nullslast,b.asc.nullslast`
//! - single-object mode, which the remote store maps to an `Accept` header
//!
//! The same description is interpreted in memory by [`crate::memory::MemoryStore`].
use std::cmp::Ordering;

use crate::politicians::Politician;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<(String, String)>,
    pub order: Vec<String>,
    pub single: bool,
}

impl Query {
    pub fn from(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            single: false,
        }
    }

    pub fn eq(mut self, field: &str, value: &str) -> Self {
        self.filters.push((field.to_string(), value.to_string()));
        self
    }

    pub fn order(mut self, field: &str) -> Self {
        self.order.push(field.to_string());
        self
    }

    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Query string pairs in PostgREST syntax. Values are left raw; the HTTP client encodes them.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];

        for (field, value) in &self.filters {
            params.push((field.clone(), format!("eq.{value}")));
        }

        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|field| format!("{field}.asc.nullslast"))
                .collect::<Vec<_>>()
                .join(",");

            params.push(("order".to_string(), order));
        }

        params
    }

    pub fn matches(&self, politician: &Politician) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| politician.field(field) == Some(value.as_str()))
    }

    /// Lexicographic on each ordering column in turn, nulls after every value.
    pub fn compare(&self, a: &Politician, b: &Politician) -> Ordering {
        for field in &self.order {
            let ordering = match (a.field(field), b.field(field)) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };

            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }
}
