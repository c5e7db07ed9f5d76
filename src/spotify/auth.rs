use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use crate::{
    Error, Res, config,
    types::{Token, TokenResponse},
};

/// Supplies bearer tokens to the metadata client.
///
/// Token acquisition and refresh live behind this trait so the client never
/// depends on process-wide credential state. Implementations decide how a
/// token is obtained; the client only asks for one per request and reports
/// rejected tokens through [`CredentialProvider::invalidate`].
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Returns a bearer token valid for the next request.
    async fn access_token(&self) -> Res<String>;

    /// Drops any cached token so the next [`access_token`](Self::access_token)
    /// call obtains a fresh one.
    async fn invalidate(&self) {}
}

/// A bearer token obtained out-of-band.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticToken {
    async fn access_token(&self) -> Res<String> {
        if self.token.trim().is_empty() {
            return Err(Error::Auth("no access token configured".to_string()));
        }
        Ok(self.token.clone())
    }
}

/// OAuth 2.0 client-credentials grant with an in-memory token cache.
///
/// The token is requested on first use and again once the cached one is
/// within [`Token::EXPIRY_MARGIN`] seconds of expiring or has been
/// invalidated.
///
/// # Example
///
/// ```
/// let credentials = ClientCredentials::new(
///     Client::new(),
///     "https://accounts.spotify.com/api/token",
///     "client-id",
///     "client-secret",
/// );
/// let token = credentials.access_token().await?;
/// ```
pub struct ClientCredentials {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<Token>>,
}

impl ClientCredentials {
    pub fn new(
        http: Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            cached: Mutex::new(None),
        }
    }

    /// Builds the provider from `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`
    /// and `SPOTIFY_API_TOKEN_URL`.
    pub fn from_env() -> Res<Self> {
        Ok(Self::new(
            Client::new(),
            config::spotify_apitoken_url(),
            config::spotify_client_id()?,
            config::spotify_client_secret()?,
        ))
    }

    async fn request_token(&self) -> Res<Token> {
        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("token request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Auth(format!(
                "token request was rejected with {status}: {body}"
            )));
        }
        if !status.is_success() {
            return Err(Error::Upstream(format!(
                "token request failed with {status}"
            )));
        }

        let body = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| Error::Upstream(format!("cannot parse token response: {e}")))?;

        Ok(Token::new(body.access_token, body.expires_in))
    }
}

#[async_trait]
impl CredentialProvider for ClientCredentials {
    async fn access_token(&self) -> Res<String> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }
}

/// Picks the credential provider from the environment.
///
/// A configured `SPOTIFY_ACCESS_TOKEN` is used as is; otherwise the
/// client-credentials grant is set up from the client ID and secret.
pub fn provider_from_env() -> Res<Arc<dyn CredentialProvider>> {
    match config::spotify_access_token() {
        Some(token) => Ok(Arc::new(StaticToken::new(token))),
        None => Ok(Arc::new(ClientCredentials::from_env()?)),
    }
}
