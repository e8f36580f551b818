use crate::modules::media::{Episode, Movie, PartialShow, Show};
use crate::shared::domain::ProviderKind;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;

/// A pluggable backend capable of resolving loose media identifiers into
/// canonical records.
///
/// Every identify operation is an independent, stateless request/response
/// exchange; providers hold no lookup state between calls. Operations a
/// backend cannot serve keep their default body, which signals
/// `NotImplemented` - never a silent empty record.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Get the backend this provider talks to
    fn kind(&self) -> ProviderKind;

    /// Human-readable backend identifier, for logging and selection
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Resolve a free-text title (plus optional release year) into a movie.
    ///
    /// `languages` is the caller's preference list, most-preferred first; it
    /// drives which translations the provider fetches.
    async fn identify_movie(
        &self,
        _name: &str,
        _year: Option<i32>,
        _languages: &[String],
    ) -> AppResult<Movie> {
        Err(AppError::NotImplemented(format!(
            "Movie identification not supported by {}",
            self.name()
        )))
    }

    /// Resolve a partially-known show identity into a canonical show.
    async fn identify_show(&self, _show: &PartialShow, _languages: &[String]) -> AppResult<Show> {
        Err(AppError::NotImplemented(format!(
            "Show identification not supported by {}",
            self.name()
        )))
    }

    /// Resolve an episode from a show title and whatever numbering signals
    /// are known.
    ///
    /// All three disambiguators are independently optional; absence alone is
    /// never a validation error. `absolute` is the continuous series-wide
    /// number used when a series ignores season boundaries.
    async fn identify_episode(
        &self,
        _name: &str,
        _season: Option<u32>,
        _episode_nbr: Option<u32>,
        _absolute: Option<u32>,
        _languages: &[String],
    ) -> AppResult<Episode> {
        Err(AppError::NotImplemented(format!(
            "Episode identification not supported by {}",
            self.name()
        )))
    }
}
