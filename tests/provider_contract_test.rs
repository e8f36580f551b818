use async_trait::async_trait;
use mediascan::modules::media::{Episode, Movie, PartialShow, Show};
use mediascan::modules::provider::{AniList, MetadataProvider};
use mediascan::shared::domain::ProviderKind;
use mediascan::shared::errors::{AppError, AppResult};
use mockall::mock;
use reqwest::Client;

/// A provider that overrides nothing, to exercise the trait defaults.
struct BareProvider;

#[async_trait]
impl MetadataProvider for BareProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::TheMovieDatabase
    }
}

#[tokio::test]
async fn test_default_identify_movie_is_not_implemented() {
    let provider = BareProvider;
    let result = provider.identify_movie("Akira", Some(1988), &[]).await;
    assert!(matches!(result, Err(AppError::NotImplemented(_))));
}

#[tokio::test]
async fn test_default_identify_show_is_not_implemented() {
    let provider = BareProvider;
    let show = PartialShow {
        name: "Cowboy Bebop".to_string(),
        ..Default::default()
    };
    let result = provider.identify_show(&show, &[]).await;
    assert!(matches!(result, Err(AppError::NotImplemented(_))));
}

#[tokio::test]
async fn test_default_identify_episode_is_not_implemented() {
    let provider = BareProvider;
    let result = provider
        .identify_episode("Cowboy Bebop", Some(1), Some(5), None, &[])
        .await;
    assert!(matches!(result, Err(AppError::NotImplemented(_))));
}

#[test]
fn test_name_defaults_to_kind() {
    assert_eq!(BareProvider.name(), "themoviedatabase");
}

/// A provider that accepts every episode lookup, to check that missing
/// disambiguators are never rejected at the contract level.
struct EchoProvider;

#[async_trait]
impl MetadataProvider for EchoProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::TheMovieDatabase
    }

    async fn identify_episode(
        &self,
        name: &str,
        season: Option<u32>,
        episode_nbr: Option<u32>,
        absolute: Option<u32>,
        _languages: &[String],
    ) -> AppResult<Episode> {
        Ok(Episode {
            show: PartialShow {
                name: name.to_string(),
                ..Default::default()
            },
            season_number: season,
            episode_number: episode_nbr,
            absolute_number: absolute,
            ..Default::default()
        })
    }
}

#[tokio::test]
async fn test_any_disambiguator_subset_is_accepted() {
    let provider = EchoProvider;
    let subsets = [
        (None, None, None),
        (Some(1), None, None),
        (None, Some(5), None),
        (None, None, Some(26)),
        (Some(1), Some(5), None),
        (Some(1), None, Some(26)),
        (None, Some(5), Some(26)),
        (Some(1), Some(5), Some(26)),
    ];

    for (season, episode, absolute) in subsets {
        let result = provider
            .identify_episode("Cowboy Bebop", season, episode, absolute, &[])
            .await;
        assert!(
            result.is_ok(),
            "subset ({:?}, {:?}, {:?}) was rejected",
            season,
            episode,
            absolute
        );
    }
}

#[tokio::test]
async fn test_anilist_episode_lookup_is_not_implemented() {
    // AniList has no per-episode endpoint; it keeps the trait default.
    let provider = AniList::new(Client::new(), "token".to_string());
    let result = provider
        .identify_episode("Cowboy Bebop", Some(1), Some(5), None, &[])
        .await;
    assert!(matches!(result, Err(AppError::NotImplemented(_))));
}

mock! {
    Provider {}

    #[async_trait]
    impl MetadataProvider for Provider {
        fn kind(&self) -> ProviderKind;
        fn name(&self) -> &'static str;
        async fn identify_movie(
            &self,
            name: &str,
            year: Option<i32>,
            languages: &[String],
        ) -> AppResult<Movie>;
        async fn identify_show(&self, show: &PartialShow, languages: &[String]) -> AppResult<Show>;
        async fn identify_episode(
            &self,
            name: &str,
            season: Option<u32>,
            episode_nbr: Option<u32>,
            absolute: Option<u32>,
            languages: &[String],
        ) -> AppResult<Episode>;
    }
}

#[tokio::test]
async fn test_failures_propagate_unchanged() {
    let mut provider = MockProvider::new();
    provider
        .expect_identify_movie()
        .withf(|name, year, languages| {
            name == "Nonexistent" && year.is_none() && languages == ["en"]
        })
        .once()
        .returning(|name, _, _| Err(AppError::NotFound(format!("No movie found for '{}'", name))));

    let provider: Box<dyn MetadataProvider> = Box::new(provider);
    let err = provider
        .identify_movie("Nonexistent", None, &["en".to_string()])
        .await
        .unwrap_err();

    match err {
        AppError::NotFound(message) => assert!(message.contains("Nonexistent")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
