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

//! The Cloud Storage client.

use crate::Result;
use crate::builder;
use crate::credentials::{AnonymousCredentials, Credentials};
use crate::error::Error;
use crate::model;
use serde::de::DeserializeOwned;
use std::sync::Arc;

const DEFAULT_HOST: &str = "https://storage.googleapis.com";

/// Implements a client for the Cloud Storage JSON API bucket surface.
///
/// # Example
/// ```no_run
/// # async fn sample() -> google_cloud_storage_v1::Result<()> {
/// use google_cloud_storage_v1::client::Storage;
/// let client = Storage::builder().build().await?;
/// let bucket = client.get_bucket("my-bucket").send().await?;
/// println!("bucket details={bucket:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `Storage` use the `with_*` methods in the type returned by
/// [builder()][Storage::builder].
///
/// `Storage` holds a connection pool internally, it is advised to create one
/// and then reuse it. You do not need to wrap `Storage` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct Storage {
    inner: Arc<StorageInner>,
}

#[derive(Debug)]
pub(crate) struct StorageInner {
    pub client: reqwest::Client,
    pub credentials: Arc<dyn Credentials>,
    pub endpoint: String,
}

impl Storage {
    /// Returns a builder for [Storage].
    ///
    /// ```no_run
    /// # async fn sample() -> google_cloud_storage_v1::Result<()> {
    /// use google_cloud_storage_v1::client::Storage;
    /// let client = Storage::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Fetches the metadata of a bucket.
    ///
    /// Sending the request returns `Ok(None)` when the bucket does not
    /// exist.
    pub fn get_bucket<T: Into<String>>(&self, bucket: T) -> builder::GetBucket {
        builder::GetBucket::new(self.inner.clone(), bucket.into())
    }

    /// Creates a bucket. The resource must carry at least the bucket name
    /// (`id`) and the owning project (`project_id`).
    pub fn insert_bucket(&self, bucket: model::Bucket) -> builder::InsertBucket {
        builder::InsertBucket::new(self.inner.clone(), bucket)
    }

    /// Deletes an empty bucket. Deleting a bucket that does not exist is
    /// not an error.
    pub fn delete_bucket<T: Into<String>>(&self, bucket: T) -> builder::DeleteBucket {
        builder::DeleteBucket::new(self.inner.clone(), bucket.into())
    }

    /// Lists the buckets of a project, one page per request.
    ///
    /// Use `by_page()` or `by_item()` on the returned builder to iterate
    /// past the first page.
    pub fn list_buckets<T: Into<String>>(&self, project_id: T) -> builder::ListBuckets {
        builder::ListBuckets::new(self.inner.clone(), project_id.into())
    }
}

impl StorageInner {
    /// Starts a request to `{endpoint}{path}` with the query parameters
    /// common to every call.
    pub(crate) fn request(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{path}", self.endpoint))
            .query(&[("alt", "json"), ("prettyPrint", "false")])
    }

    async fn apply_auth_headers(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        let headers = self
            .credentials
            .headers()
            .await
            .map_err(Error::authentication)?;
        Ok(builder.headers(headers))
    }

    /// Sends the request and deserializes the response body.
    pub(crate) async fn execute<O: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<O> {
        let response = self.send(builder).await?;
        response.json::<O>().await.map_err(Error::deser)
    }

    /// Sends the request and discards any response body.
    pub(crate) async fn execute_unit(&self, builder: reqwest::RequestBuilder) -> Result<()> {
        let _ = self.send(builder).await?;
        Ok(())
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let builder = self.apply_auth_headers(builder).await?;
        let response = builder.send().await.map_err(Error::io)?;
        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            tracing::debug!(status_code, "request failed");
            let headers = response.headers().clone();
            let payload = response.bytes().await.map_err(Error::io)?;
            return Err(Error::http(status_code, headers, payload));
        }
        Ok(response)
    }
}

/// The set of characters that are percent encoded in request paths.
///
/// Encode the following characters when they appear in the bucket name of a
/// request URL:
///     !, #, $, &, ', (, ), *, +, ,, /, :, ;, =, ?, @, [, ], and space.
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b'!')
    .add(b'#')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b' ');

/// Percent encode a path component.
pub(crate) fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

/// A builder for [Storage].
///
/// ```no_run
/// # async fn sample() -> google_cloud_storage_v1::Result<()> {
/// use google_cloud_storage_v1::client::Storage;
/// use google_cloud_storage_v1::credentials::StaticTokenCredentials;
/// let client = Storage::builder()
///     .with_endpoint("https://storage.googleapis.com")
///     .with_credentials(StaticTokenCredentials::new("my-access-token"))
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    endpoint: Option<String>,
    credentials: Option<Arc<dyn Credentials>>,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint. The default is `https://storage.googleapis.com`.
    pub fn with_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the credentials. The default is
    /// [AnonymousCredentials][crate::credentials::AnonymousCredentials]:
    /// this crate does not issue tokens, applications with authenticated
    /// workloads must provide a credentials implementation.
    pub fn with_credentials<T: Credentials + 'static>(mut self, v: T) -> Self {
        self.credentials = Some(Arc::new(v));
        self
    }

    /// Creates the [Storage] client.
    pub async fn build(self) -> Result<Storage> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(Error::io)?;
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .trim_end_matches('/')
            .to_string();
        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(AnonymousCredentials::new()));
        Ok(Storage {
            inner: Arc::new(StorageInner {
                client,
                credentials,
                endpoint,
            }),
        })
    }
}
