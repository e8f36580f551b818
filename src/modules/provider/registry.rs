use crate::modules::provider::config::{self, ProviderConfig};
use crate::modules::provider::infrastructure::external::{AniList, TheMovieDatabase};
use crate::modules::provider::traits::MetadataProvider;
use reqwest::Client;
use std::sync::Arc;

/// Constructor for one backend: shared HTTP client plus its credential.
type BuildProvider = fn(Client, String) -> Arc<dyn MetadataProvider>;

struct Registration {
    credential_var: &'static str,
    build: BuildProvider,
}

/// Registration table mapping credential variables to provider constructors.
///
/// Adding a backend is one `register` call; construction order follows
/// registration order so callers get a stable provider sequence.
pub struct ProviderRegistry {
    registrations: Vec<Registration>,
}

impl ProviderRegistry {
    /// Registry with the known backends wired in.
    pub fn new() -> Self {
        let mut registry = Self {
            registrations: Vec::new(),
        };

        registry.register(config::THEMOVIEDB_APIKEY, |client, api_key| {
            Arc::new(TheMovieDatabase::new(client, api_key))
        });
        registry.register(config::ANILIST_APIKEY, |client, api_key| {
            Arc::new(AniList::new(client, api_key))
        });

        registry
    }

    /// Register a backend gated by `credential_var`.
    pub fn register(&mut self, credential_var: &'static str, build: BuildProvider) {
        self.registrations.push(Registration {
            credential_var,
            build,
        });
    }

    /// Construct every provider the given configuration has a credential for.
    ///
    /// The HTTP client stays owned by the caller; each provider gets a cheap
    /// clone of the same connection pool. Missing credentials skip their
    /// backend silently - an empty result is a valid configuration, not an
    /// error.
    pub fn get_all(
        &self,
        config: &ProviderConfig,
        client: &Client,
    ) -> Vec<Arc<dyn MetadataProvider>> {
        let providers: Vec<Arc<dyn MetadataProvider>> = self
            .registrations
            .iter()
            .filter_map(|registration| {
                config
                    .credential(registration.credential_var)
                    .map(|api_key| (registration.build)(client.clone(), api_key.to_string()))
            })
            .collect();

        log::info!(
            "Configured {} of {} known metadata providers",
            providers.len(),
            self.registrations.len()
        );
        providers
    }

    /// Credential variables this registry recognizes, in registration order.
    pub fn recognized_credentials(&self) -> Vec<&'static str> {
        self.registrations
            .iter()
            .map(|r| r.credential_var)
            .collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
