use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url, header::ACCEPT};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Politician, Query, RecordStore, StoreError};

const REST_PATH: &str = "rest/v1";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const NO_ROWS: &str = "PGRST116";

/// Error body PostgREST attaches to non-2xx responses.
#[derive(Deserialize, Debug)]
pub struct PostgrestError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

pub struct PostgrestStore {
    http: Client,
    base_url: String,
    api_key: String,
}

impl PostgrestStore {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, StoreError> {
        match Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => return Err(StoreError::InvalidUrl(base_url.to_string())),
        }

        let http = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn endpoint(&self, collection: &str) -> String {
        format!("{}/{REST_PATH}/{collection}", self.base_url)
    }

    async fn send(&self, query: &Query) -> Result<Response, StoreError> {
        let mut request = self
            .http
            .get(self.endpoint(&query.collection))
            .query(&query.params())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);

        if query.single {
            request = request.header(ACCEPT, SINGLE_OBJECT);
        }

        debug!("Querying {} {:?}", query.collection, query.filters);

        Ok(request.send().await?)
    }
}

#[async_trait]
impl RecordStore for PostgrestStore {
    async fn select(&self, query: &Query) -> Result<Vec<Politician>, StoreError> {
        let response = self.send(query).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn select_one(&self, query: &Query) -> Result<Option<Politician>, StoreError> {
        let response = self.send(query).await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_ACCEPTABLE && is_no_rows(&body) {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        Ok(Some(serde_json::from_str(&body)?))
    }
}

/// Single-object mode answers zero rows with 406 and code `PGRST116`.
///
/// More than one row also comes back as `PGRST116`; the details then read
/// "Results contain N rows", which is not an absent record.
fn is_no_rows(body: &str) -> bool {
    let Ok(error) = serde_json::from_str::<PostgrestError>(body) else {
        return false;
    };

    error.code.as_deref() == Some(NO_ROWS)
        && error
            .details
            .as_deref()
            .is_none_or(|details| details.contains(" 0 rows"))
}

fn status_error(status: StatusCode, body: &str) -> StoreError {
    let message = serde_json::from_str::<PostgrestError>(body)
        .ok()
        .and_then(|error| error.message)
        .unwrap_or_else(|| body.chars().take(200).collect());

    warn!("Store responded with {status}: {message}");

    StoreError::Status {
        status: status.as_u16(),
        message,
    }
}
