use std::{
    env,
    fmt::Display,
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use tracing::{info, warn};

const SECRETS_DIR: &str = "/run/secrets";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_IMAGE_HOSTS: [&str; 2] = ["www.shugiin.go.jp", "www.sangiin.go.jp"];

pub struct Config {
    pub port: u16,
    pub store: Option<StoreConfig>,
    pub image_hosts: Vec<String>,
}

pub struct StoreConfig {
    pub url: String,
    pub key: String,
    pub timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        Self::from_source(|key| env::var(key).ok(), Path::new(SECRETS_DIR))
    }

    /// Builds the configuration from any key lookup, falling back to secret files under `secrets_dir`.
    pub fn from_source<F>(lookup: F, secrets_dir: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = Source {
            lookup,
            secrets_dir: secrets_dir.to_path_buf(),
        };

        Self {
            port: source.try_load("RUST_PORT", 3000),
            store: source.store(),
            image_hosts: source.image_hosts(),
        }
    }
}

struct Source<F> {
    lookup: F,
    secrets_dir: PathBuf,
}

impl<F> Source<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn try_load<T>(&self, key: &str, default: T) -> T
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        let Some(raw) = self.var(key) else {
            info!("{key} not set, using default: {default}");
            return default;
        };

        raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}, using default: {default}");
            default
        })
    }

    fn read_secret(&self, secret_name: &str) -> Option<String> {
        if let Some(value) = self.var(secret_name) {
            return Some(value);
        }

        let path = self.secrets_dir.join(secret_name);

        read_to_string(&path)
            .map(|s| s.trim().to_string())
            .map_err(|e| {
                warn!("Failed to read {secret_name} from file: {e}");
            })
            .ok()
            .filter(|s| !s.is_empty())
    }

    fn store(&self) -> Option<StoreConfig> {
        let url = self.var("SUPABASE_URL");
        let key = self.read_secret("SUPABASE_ANON_KEY");

        let (Some(url), Some(key)) = (url, key) else {
            warn!("SUPABASE_URL or SUPABASE_ANON_KEY missing, pages will report a configuration error");
            return None;
        };

        let timeout_secs = match self.try_load("STORE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS) {
            0 => {
                warn!("STORE_TIMEOUT_SECS must be positive, using default: {DEFAULT_TIMEOUT_SECS}");
                DEFAULT_TIMEOUT_SECS
            }
            secs => secs,
        };

        Some(StoreConfig {
            url,
            key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    fn image_hosts(&self) -> Vec<String> {
        match self.var("IMAGE_HOSTS") {
            Some(hosts) => hosts
                .split(',')
                .map(|host| host.trim().to_lowercase())
                .filter(|host| !host.is_empty())
                .collect(),
            None => DEFAULT_IMAGE_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}
