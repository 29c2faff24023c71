use std::sync::Arc;

use store::{PostgrestStore, RecordStore, StoreError};
use tracing::{error, info};

use crate::{config::Config, error::AppError, image::ImageHosts};

pub struct State {
    pub config: Config,
    pub image_hosts: ImageHosts,
    pub store: Option<Arc<dyn RecordStore>>,
}

impl State {
    /// Fails only when a store is configured but its client cannot be built.
    pub fn new(config: Config) -> Result<Arc<Self>, StoreError> {
        let store = match &config.store {
            Some(store_config) => {
                let store = PostgrestStore::new(
                    &store_config.url,
                    &store_config.key,
                    store_config.timeout,
                )?;
                info!("Record store at {}", store_config.url);

                Some(Arc::new(store) as Arc<dyn RecordStore>)
            }
            None => None,
        };

        Ok(Self::assemble(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn RecordStore>) -> Arc<Self> {
        Self::assemble(config, Some(store))
    }

    fn assemble(config: Config, store: Option<Arc<dyn RecordStore>>) -> Arc<Self> {
        let image_hosts = ImageHosts::new(&config.image_hosts);

        Arc::new(Self {
            config,
            image_hosts,
            store,
        })
    }

    pub fn store(&self) -> Result<&dyn RecordStore, AppError> {
        self.store.as_deref().ok_or_else(|| {
            error!("Record store URL or key is missing in the environment");
            AppError::Configuration
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::StoreConfig;

    fn config(url: Option<&str>) -> Config {
        Config {
            port: 0,
            store: url.map(|url| StoreConfig {
                url: url.to_string(),
                key: "anon-key".to_string(),
                timeout: Duration::from_secs(10),
            }),
            image_hosts: Vec::new(),
        }
    }

    #[test]
    fn test_configured_store() {
        let state = State::new(config(Some("https://xyz.supabase.co"))).unwrap();

        assert!(state.store.is_some());
        assert!(state.store().is_ok());
    }

    #[test]
    fn test_unconfigured_store() {
        let state = State::new(config(None)).unwrap();

        assert!(matches!(state.store(), Err(AppError::Configuration)));
    }

    #[test]
    fn test_invalid_store_url_fails_startup() {
        let result = State::new(config(Some("xyz.supabase.co")));

        assert!(matches!(result, Err(StoreError::InvalidUrl(_))));
    }
}
