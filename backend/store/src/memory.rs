use async_trait::async_trait;
use tracing::debug;

use crate::{Politician, Query, RecordStore, StoreError, politicians::COLLECTION};

/// In-process stand-in for the hosted table, applying the same filter and ordering rules.
#[derive(Default)]
pub struct MemoryStore {
    politicians: Vec<Politician>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new(politicians: Vec<Politician>) -> Self {
        Self {
            politicians,
            failure: None,
        }
    }

    /// Every query fails with a 503 carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            politicians: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    fn rows(&self, query: &Query) -> Result<Vec<Politician>, StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Status {
                status: 503,
                message: message.clone(),
            });
        }

        if query.collection != COLLECTION {
            return Err(StoreError::Status {
                status: 404,
                message: format!("relation \"{}\" does not exist", query.collection),
            });
        }

        let mut rows: Vec<Politician> = self
            .politicians
            .iter()
            .filter(|politician| query.matches(politician))
            .cloned()
            .collect();

        rows.sort_by(|a, b| query.compare(a, b));

        debug!("Memory store matched {} rows", rows.len());

        Ok(rows)
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn select(&self, query: &Query) -> Result<Vec<Politician>, StoreError> {
        self.rows(query)
    }

    async fn select_one(&self, query: &Query) -> Result<Option<Politician>, StoreError> {
        let mut rows = self.rows(query)?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(StoreError::Status {
                status: 406,
                message: format!("The result contains {n} rows"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{get_politician, list_politicians};

    fn politician(id: &str, chamber: &str, kana: Option<&str>) -> Politician {
        Politician {
            id: id.to_string(),
            name: format!("議員{id}"),
            name_kana: kana.map(str::to_string),
            chamber: chamber.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_chamber_then_kana() {
        let store = MemoryStore::new(vec![
            politician("1", "衆議院", Some("わたなべ")),
            politician("2", "参議院", None),
            politician("3", "衆議院", None),
            politician("4", "参議院", Some("いとう")),
            politician("5", "衆議院", Some("あべ")),
        ]);

        let ids: Vec<String> = list_politicians(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        // "参議院" sorts before "衆議院" by code point
        assert_eq!(ids, vec!["4", "2", "5", "1", "3"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = MemoryStore::new(vec![
            politician("1", "衆議院", None),
            politician("42", "参議院", None),
        ]);

        let found = get_politician(&store, "42").await.unwrap();
        let missing = get_politician(&store, "43").await.unwrap();

        assert_eq!(found.map(|p| p.id), Some("42".to_string()));
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_failing_store() {
        let store = MemoryStore::failing("connection refused");

        assert!(list_politicians(&store).await.is_err());
        assert!(get_politician(&store, "1").await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_collection() {
        let store = MemoryStore::default();

        let error = store.select(&Query::from("parties")).await.unwrap_err();

        assert!(matches!(error, StoreError::Status { status: 404, .. }));
    }
}
