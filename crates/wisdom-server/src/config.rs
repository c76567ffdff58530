//! Environment-driven configuration
//!
//! Read once at startup and injected through [`crate::AppState`]; nothing
//! looks the variables up again after this point.

use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote store, e.g. `https://abcd1234.supabase.co`.
    pub store_url: String,
    /// API key sent as `apikey` and bearer token on every store request.
    pub api_key: String,
    /// Administrative password, used only by the schema setup routine.
    pub db_password: String,
    /// Listen address for the HTTP server.
    pub bind_address: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Missing store variables are a degraded state, not a startup failure:
    /// schema setup is skipped and handlers report upstream errors at call
    /// time instead.
    pub fn from_env() -> Self {
        let store_url = env_or_empty("SUPABASE_URL");
        let api_key = env_or_empty("SUPABASE_API_KEY");
        let db_password = env_or_empty("SUPABASE_DB_PASSWORD");

        if store_url.is_empty() || api_key.is_empty() {
            warn!("SUPABASE_URL / SUPABASE_API_KEY not set, store requests will fail");
        }

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        Self {
            store_url,
            api_key,
            db_password,
            bind_address,
        }
    }

    /// True when the REST interface of the store is usable.
    pub fn has_store(&self) -> bool {
        !self.store_url.is_empty() && !self.api_key.is_empty()
    }

    /// True when the setup routine can build an admin connection string.
    pub fn has_admin_credentials(&self) -> bool {
        !self.store_url.is_empty() && !self.db_password.is_empty()
    }
}

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(store_url: &str, api_key: &str, db_password: &str) -> Config {
        Config {
            store_url: store_url.to_string(),
            api_key: api_key.to_string(),
            db_password: db_password.to_string(),
            bind_address: "127.0.0.1:0".to_string(),
        }
    }

    #[test]
    fn store_needs_url_and_key() {
        assert!(config("https://x.supabase.co", "key", "").has_store());
        assert!(!config("", "key", "").has_store());
        assert!(!config("https://x.supabase.co", "", "").has_store());
    }

    #[test]
    fn admin_needs_url_and_password() {
        assert!(config("https://x.supabase.co", "", "pw").has_admin_credentials());
        assert!(!config("https://x.supabase.co", "key", "").has_admin_credentials());
        assert!(!config("", "", "pw").has_admin_credentials());
    }
}
