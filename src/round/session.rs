use axum::http::HeaderMap;
use rand::{distr::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::RoundPair;

/// Header the page echoes back so the server can find its round state.
pub const SESSION_HEADER: &str = "x-session-id";

const SESSION_ID_LEN: usize = 16;

/// Per-session round state, keyed by the session id issued on first draw.
/// Each session holds at most one pair; a new draw replaces it. Sessions
/// never observe each other's pairs.
#[derive(Clone, Default)]
pub struct RoundSessionStore {
    sessions: Arc<RwLock<HashMap<String, RoundPair>>>,
}

impl RoundSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put(&self, session_id: &str, pair: RoundPair) {
        self.sessions
            .write()
            .await
            .insert(session_id.to_string(), pair);
    }

    pub async fn current(&self, session_id: &str) -> Option<RoundPair> {
        self.sessions.read().await.get(session_id).cloned()
    }
}

pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

/// Extracts the session id from request headers, if the page sent one.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::RandomArticle;

    fn pair(origin: &str, destination: &str) -> RoundPair {
        RoundPair {
            origin: RandomArticle::new(origin, format!("https://example.test/{origin}")),
            destination: RandomArticle::new(
                destination,
                format!("https://example.test/{destination}"),
            ),
        }
    }

    #[tokio::test]
    async fn absent_until_first_draw() {
        let store = RoundSessionStore::new();
        assert!(store.current("s1").await.is_none());
    }

    #[tokio::test]
    async fn draw_overwrites_previous_pair() {
        let store = RoundSessionStore::new();
        store.put("s1", pair("A", "B")).await;
        store.put("s1", pair("C", "D")).await;

        let current = store.current("s1").await.unwrap();
        assert_eq!(current.origin.title, "C");
        assert_eq!(current.destination.title, "D");
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = RoundSessionStore::new();
        store.put("s1", pair("A", "B")).await;

        assert!(store.current("s2").await.is_none());
        assert_eq!(store.current("s1").await.unwrap().origin.title, "A");
    }

    #[tokio::test]
    async fn saving_reads_without_clearing() {
        let store = RoundSessionStore::new();
        store.put("s1", pair("A", "B")).await;

        let _read_for_save = store.current("s1").await.unwrap();
        assert!(store.current("s1").await.is_some());
    }

    #[test]
    fn session_ids_are_alphanumeric_and_distinct() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_eq!(a.len(), SESSION_ID_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }
}
