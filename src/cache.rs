use crate::api::{ApiError, PlayByPlay};
use crate::data_provider::NHLDataProvider;
use cached::proc_macro::cached;

pub use cached::Cached;

#[cfg(test)]
pub async fn play_by_play_entries() -> usize {
    PLAY_BY_PLAY_CACHE.lock().await.cache_size()
}

// The schedule is never cached: every refresh must hit the network.

#[cached(
    name = "PLAY_BY_PLAY_CACHE",
    ty = "cached::TimedSizedCache<i64, PlayByPlay>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(20, 30) }",
    convert = r#"{ game_id }"#,
    result = true
)]
pub async fn fetch_play_by_play_cached(
    client: &dyn NHLDataProvider,
    game_id: i64,
) -> Result<PlayByPlay, ApiError> {
    client.play_by_play(game_id).await
}

pub async fn refresh_play_by_play(
    client: &dyn NHLDataProvider,
    game_id: i64,
) -> Result<PlayByPlay, ApiError> {
    PLAY_BY_PLAY_CACHE.lock().await.cache_remove(&game_id);
    fetch_play_by_play_cached(client, game_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestProvider;

    // Tests share the global cache, so each one uses its own game ids.

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let client = TestProvider::new();
        let first = fetch_play_by_play_cached(&client, 1_000_001).await.unwrap();
        let second = fetch_play_by_play_cached(&client, 1_000_001).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.play_by_play_calls(), 1);
    }

    #[tokio::test]
    async fn test_different_games_are_separate_entries() {
        let client = TestProvider::new();
        let a = fetch_play_by_play_cached(&client, 1_000_011).await.unwrap();
        let b = fetch_play_by_play_cached(&client, 1_000_012).await.unwrap();

        assert_eq!(a.id, 1_000_011);
        assert_eq!(b.id, 1_000_012);
        assert_eq!(client.play_by_play_calls(), 2);
        assert!(play_by_play_entries().await >= 2);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let client = TestProvider::new();
        fetch_play_by_play_cached(&client, 1_000_021).await.unwrap();
        refresh_play_by_play(&client, 1_000_021).await.unwrap();
        fetch_play_by_play_cached(&client, 1_000_021).await.unwrap();

        assert_eq!(client.play_by_play_calls(), 2);
    }
}
