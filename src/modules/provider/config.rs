use std::collections::HashMap;

/// Credential variable gating the TheMovieDB provider.
pub const THEMOVIEDB_APIKEY: &str = "THEMOVIEDB_APIKEY";
/// Credential variable gating the AniList provider.
pub const ANILIST_APIKEY: &str = "ANILIST_APIKEY";

/// Provider credentials captured once at startup.
///
/// Environment access lives here and only here; the registry works against
/// this struct so factory behavior stays unit-testable with injected values.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    credentials: HashMap<String, String>,
}

impl ProviderConfig {
    /// Capture credentials from the process environment (after loading a
    /// `.env` file if one exists).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build from an explicit variable set. Empty or whitespace-only values
    /// count as unset, matching the original truthiness check on env vars.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let credentials = vars
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.trim();
                if value.is_empty() {
                    None
                } else {
                    Some((key, value.to_string()))
                }
            })
            .collect();

        Self { credentials }
    }

    /// Set a single credential, builder-style.
    pub fn with_credential(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.credentials.insert(key.into(), value);
        }
        self
    }

    /// Look up a credential by its variable name.
    pub fn credential(&self, key: &str) -> Option<&str> {
        self.credentials.get(key).map(String::as_str)
    }
}
