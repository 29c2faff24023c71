//! # Store
//!
//! Read access to the hosted politicians table.
//!
//! The pages only ever need two reads:
//! - every politician, ordered by chamber then phonetic name
//! - one politician by id, or nothing
//!
//! Both go through [`RecordStore`], implemented remotely by [`PostgrestStore`]
//! and in memory by [`MemoryStore`].
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod politicians;
pub mod query;
pub mod remote;

pub use memory::MemoryStore;
pub use politicians::{Chamber, Politician};
pub use query::Query;
pub use remote::PostgrestStore;

use politicians::{CHAMBER, COLLECTION, ID, NAME_KANA};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Store responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed store payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn select(&self, query: &Query) -> Result<Vec<Politician>, StoreError>;

    /// `Ok(None)` only when the query matched zero rows.
    async fn select_one(&self, query: &Query) -> Result<Option<Politician>, StoreError>;
}

pub async fn list_politicians(store: &dyn RecordStore) -> Result<Vec<Politician>, StoreError> {
    let query = Query::from(COLLECTION).order(CHAMBER).order(NAME_KANA);

    store.select(&query).await
}

pub async fn get_politician(
    store: &dyn RecordStore,
    id: &str,
) -> Result<Option<Politician>, StoreError> {
    let query = Query::from(COLLECTION).eq(ID, id).single();

    store.select_one(&query).await
}
