// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Credentials attach authentication headers to each request.
//!
//! Token acquisition is out of scope for this crate. Applications bring
//! their own token source and plug it in through the [Credentials] trait,
//! or use [StaticTokenCredentials] when they already hold an access token.

use http::HeaderMap;
use http::header::AUTHORIZATION;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The OAuth 2.0 scope granting full control over buckets and objects.
pub const STORAGE_SCOPE: &str = "https://www.googleapis.com/auth/devstorage.full_control";

/// The default scopes requested by token providers for this service.
pub fn default_scopes() -> Vec<String> {
    [
        "https://www.googleapis.com/auth/cloud-platform",
        "https://www.googleapis.com/auth/cloud-platform.read-only",
        "https://www.googleapis.com/auth/devstorage.full_control",
        "https://www.googleapis.com/auth/devstorage.read_only",
        "https://www.googleapis.com/auth/devstorage.read_write",
    ]
    .map(str::to_string)
    .to_vec()
}

/// An error trying to produce authentication headers.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct CredentialsError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl CredentialsError {
    pub fn from_msg<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn from_source<M, T>(message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Into<BoxError>,
    {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Produces the authentication headers for each request.
#[async_trait::async_trait]
pub trait Credentials: std::fmt::Debug + Send + Sync {
    async fn headers(&self) -> Result<HeaderMap, CredentialsError>;
}

/// Credentials wrapping an access token supplied by the application.
///
/// The token is sent as `Authorization: Bearer {token}` on every request.
/// The application is responsible for refreshing it.
pub struct StaticTokenCredentials {
    token: String,
}

impl StaticTokenCredentials {
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenCredentials {
    // Never include the token in debug output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenCredentials")
            .field("token", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl Credentials for StaticTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        let mut value: http::HeaderValue = format!("Bearer {}", self.token)
            .parse()
            .map_err(|e| CredentialsError::from_source("invalid access token", e))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

/// Credentials that send no authentication headers.
///
/// Useful for anonymous access to public buckets and for tests.
#[derive(Debug, Default)]
pub struct AnonymousCredentials;

impl AnonymousCredentials {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Credentials for AnonymousCredentials {
    async fn headers(&self) -> Result<HeaderMap, CredentialsError> {
        Ok(HeaderMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result = anyhow::Result<()>;

    #[tokio::test]
    async fn static_token_headers() -> Result {
        let credentials = StaticTokenCredentials::new("test-token");
        let headers = credentials.headers().await?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value.to_str()?, "Bearer test-token");
        Ok(())
    }

    #[tokio::test]
    async fn static_token_rejects_invalid_values() {
        let credentials = StaticTokenCredentials::new("bad\ntoken");
        let err = credentials.headers().await.unwrap_err();
        assert!(err.to_string().contains("invalid access token"), "{err}");
    }

    #[test]
    fn static_token_debug_does_not_leak() {
        let credentials = StaticTokenCredentials::new("super-secret");
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("super-secret"), "{fmt}");
        assert!(fmt.contains("[censored]"), "{fmt}");
    }

    #[tokio::test]
    async fn anonymous_headers_are_empty() -> Result {
        let headers = AnonymousCredentials::new().headers().await?;
        assert!(headers.is_empty());
        Ok(())
    }

    #[test]
    fn scopes() {
        assert!(default_scopes().contains(&STORAGE_SCOPE.to_string()));
    }
}
