//! Session tokens and one-shot flash messages
//!
//! Each browser gets a random token in the `contact_sid` cookie. Flash
//! messages are kept server-side under that token, handed out once by
//! `FlashStore::take`, and dropped unread after the configured TTL.

use axum::{
    extract::Request,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "contact_sid";

/// Per-browser session token, available to handlers as a request extension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Fresh random token
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Token value as sent in the cookie
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the token from the request's `Cookie` headers
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, value)| value.trim())
            .filter(|value| is_token(value))
            .map(|value| Self(value.to_string()))
    }

    fn set_cookie_header(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, self.0
        ))
        .ok()
    }
}

fn is_token(value: &str) -> bool {
    !value.is_empty() && value.len() <= 64 && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Attach a `SessionToken` to every request, issuing a cookie when the
/// client has none
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let (token, issued) = match SessionToken::from_headers(request.headers()) {
        Some(token) => (token, false),
        None => (SessionToken::generate(), true),
    };

    request.extensions_mut().insert(token.clone());
    let mut response = next.run(request).await;

    if issued {
        if let Some(cookie) = token.set_cookie_header() {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
    }

    response
}

struct FlashEntry {
    messages: Vec<String>,
    expires_at: Instant,
}

/// Server-side storage for flash messages, keyed by session token
pub struct FlashStore {
    ttl: Duration,
    entries: Mutex<HashMap<SessionToken, FlashEntry>>,
}

impl FlashStore {
    /// Create a store whose messages expire `ttl` after they were last set
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Queue a message for the next page this session renders
    pub async fn push(&self, token: &SessionToken, message: impl Into<String>) {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        entries.retain(|_, entry| entry.expires_at > now);

        let entry = entries.entry(token.clone()).or_insert_with(|| FlashEntry {
            messages: Vec::new(),
            expires_at: now,
        });
        entry.messages.push(message.into());
        entry.expires_at = now + self.ttl;
    }

    /// Remove and return the pending messages for this session
    pub async fn take(&self, token: &SessionToken) -> Vec<String> {
        match self.entries.lock().await.remove(token) {
            Some(entry) if entry.expires_at > Instant::now() => entry.messages,
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_token_from_cookie_header() {
        let headers = headers_with_cookie("theme=dark; contact_sid=abc123; other=1");
        let token = SessionToken::from_headers(&headers).unwrap();
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_token_missing_or_malformed() {
        assert!(SessionToken::from_headers(&HeaderMap::new()).is_none());
        assert!(SessionToken::from_headers(&headers_with_cookie("theme=dark")).is_none());
        assert!(SessionToken::from_headers(&headers_with_cookie("contact_sid=")).is_none());
        assert!(SessionToken::from_headers(&headers_with_cookie("contact_sid=a;b")).is_some());
        assert!(SessionToken::from_headers(&headers_with_cookie("contact_sid=../x")).is_none());
    }

    #[test]
    fn test_generated_token_round_trips_through_cookie() {
        let token = SessionToken::generate();
        let cookie = format!("{}={}", SESSION_COOKIE, token.as_str());
        assert_eq!(
            SessionToken::from_headers(&headers_with_cookie(&cookie)),
            Some(token)
        );
    }

    #[tokio::test]
    async fn test_flash_is_read_once() {
        let store = FlashStore::new(Duration::from_secs(60));
        let token = SessionToken::generate();

        store.push(&token, "Contact added successfully!").await;
        assert_eq!(store.take(&token).await, vec!["Contact added successfully!"]);
        assert!(store.take(&token).await.is_empty());
    }

    #[tokio::test]
    async fn test_flash_is_per_session() {
        let store = FlashStore::new(Duration::from_secs(60));
        let alice = SessionToken::generate();
        let bob = SessionToken::generate();

        store.push(&alice, "first").await;
        store.push(&alice, "second").await;

        assert!(store.take(&bob).await.is_empty());
        assert_eq!(store.take(&alice).await, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_flash_expires() {
        let store = FlashStore::new(Duration::ZERO);
        let token = SessionToken::generate();

        store.push(&token, "gone").await;
        assert!(store.take(&token).await.is_empty());
    }
}
