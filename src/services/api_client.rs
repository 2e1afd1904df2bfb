//! Typed client for the companion backend's CRUD API (users, adventures,
//! friends, memories).

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{AdventureError, Result};
use crate::types::api::{
    AuthResponse, Friend, FriendRequest, FriendRequestAction, Memory, NewAdventure, NewMemory,
    SavedAdventure, User,
};

#[derive(Debug, Deserialize)]
struct AdventureEnvelope {
    adventure: SavedAdventure,
}

#[derive(Debug, Deserialize)]
struct AdventuresEnvelope {
    adventures: Vec<SavedAdventure>,
}

#[derive(Debug, Deserialize)]
struct UsersEnvelope {
    users: Vec<Friend>,
}

#[derive(Debug, Deserialize)]
struct RequestsEnvelope {
    requests: Vec<FriendRequest>,
}

#[derive(Debug, Deserialize)]
struct FriendsEnvelope {
    friends: Vec<Friend>,
}

#[derive(Debug, Deserialize)]
struct MemoryEnvelope {
    memory: Memory,
}

#[derive(Debug, Deserialize)]
struct MemoriesEnvelope {
    memories: Vec<Memory>,
}

/// REST client for the backend service.
///
/// The bearer token is held in memory only: `sign_up`/`sign_in` capture it
/// from the auth response and `sign_out` drops it. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Attach the auth header (when signed in), send, and map non-2xx
    /// responses to [`AdventureError::Api`] using the body's `message` field
    /// when one is present.
    async fn execute<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let mut builder = builder.header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "backend response");

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or(text);
            return Err(AdventureError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<AuthResponse> {
        let builder = self.http.post(self.url("/register")).json(&json!({
            "email": email,
            "password": password,
            "username": username,
        }));
        let response: AuthResponse = self.execute(builder).await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<AuthResponse> {
        let builder = self.http.post(self.url("/login")).json(&json!({
            "email": email,
            "password": password,
        }));
        let response: AuthResponse = self.execute(builder).await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    pub fn sign_out(&mut self) {
        self.token = None;
    }

    pub async fn profile(&self) -> Result<User> {
        self.execute(self.http.get(self.url("/user/profile"))).await
    }

    pub async fn save_adventure(&self, adventure: &NewAdventure) -> Result<SavedAdventure> {
        let builder = self.http.post(self.url("/adventures")).json(adventure);
        let envelope: AdventureEnvelope = self.execute(builder).await?;
        Ok(envelope.adventure)
    }

    pub async fn adventures(&self) -> Result<Vec<SavedAdventure>> {
        let envelope: AdventuresEnvelope =
            self.execute(self.http.get(self.url("/adventures"))).await?;
        Ok(envelope.adventures)
    }

    pub async fn search_friends(&self, query: &str) -> Result<Vec<Friend>> {
        let builder = self
            .http
            .get(self.url("/friends/search"))
            .query(&[("q", query)]);
        let envelope: UsersEnvelope = self.execute(builder).await?;
        Ok(envelope.users)
    }

    pub async fn send_friend_request(&self, friend_id: i64, message: Option<&str>) -> Result<()> {
        // omit the key entirely when there is no message; the backend
        // defaults it server-side
        let mut body = json!({ "friend_id": friend_id });
        if let Some(message) = message {
            body["message"] = json!(message);
        }
        let builder = self.http.post(self.url("/friends/request")).json(&body);
        let _: Value = self.execute(builder).await?;
        Ok(())
    }

    pub async fn friend_requests(&self) -> Result<Vec<FriendRequest>> {
        let envelope: RequestsEnvelope = self
            .execute(self.http.get(self.url("/friends/requests")))
            .await?;
        Ok(envelope.requests)
    }

    pub async fn respond_to_friend_request(
        &self,
        request_id: i64,
        action: FriendRequestAction,
    ) -> Result<()> {
        let path = format!("/friends/requests/{request_id}/respond");
        let builder = self
            .http
            .post(self.url(&path))
            .json(&json!({ "action": action.as_str() }));
        let _: Value = self.execute(builder).await?;
        Ok(())
    }

    pub async fn friends(&self) -> Result<Vec<Friend>> {
        let envelope: FriendsEnvelope = self.execute(self.http.get(self.url("/friends"))).await?;
        Ok(envelope.friends)
    }

    pub async fn save_memory(&self, memory: &NewMemory) -> Result<Memory> {
        let builder = self.http.post(self.url("/memories")).json(memory);
        let envelope: MemoryEnvelope = self.execute(builder).await?;
        Ok(envelope.memory)
    }

    pub async fn memories(&self) -> Result<Vec<Memory>> {
        let envelope: MemoriesEnvelope =
            self.execute(self.http.get(self.url("/memories"))).await?;
        Ok(envelope.memories)
    }

    /// Probe the profile endpoint with the held token. A failed probe drops
    /// the token so the caller can re-authenticate.
    pub async fn is_authenticated(&mut self) -> bool {
        if self.token.is_none() {
            return false;
        }
        match self.profile().await {
            Ok(_) => true,
            Err(err) => {
                debug!(error = %err, "auth probe failed, dropping token");
                self.token = None;
                false
            }
        }
    }
}
