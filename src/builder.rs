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

//! Request builders for the bucket operations.
//!
//! Builders are created from the [client][crate::client::Storage] methods,
//! configured with `set_*()` calls, and sent with `send()`.

use crate::Result;
use crate::client::{StorageInner, enc};
use crate::error::Error;
use crate::model::{Bucket, ListPage, Projection};
use crate::paginator::{ItemPaginator, Paginator};
use std::sync::Arc;

/// The request builder for [Storage::get_bucket][crate::client::Storage::get_bucket].
#[derive(Clone, Debug)]
pub struct GetBucket {
    inner: Arc<StorageInner>,
    bucket: String,
    projection: Option<Projection>,
}

impl GetBucket {
    pub(crate) fn new(inner: Arc<StorageInner>, bucket: String) -> Self {
        Self {
            inner,
            bucket,
            projection: None,
        }
    }

    /// Selects the set of properties to return. ACLs are omitted by
    /// default.
    pub fn set_projection(mut self, v: Projection) -> Self {
        self.projection = Some(v);
        self
    }

    /// Sends the request. Returns `Ok(None)` when the bucket does not
    /// exist.
    pub async fn send(self) -> Result<Option<Bucket>> {
        tracing::debug!(rpc = "Buckets.get", bucket = %self.bucket);
        let mut builder = self
            .inner
            .request(reqwest::Method::GET, format!("/storage/v1/b/{}", enc(&self.bucket)));
        if let Some(projection) = self.projection {
            builder = builder.query(&[("projection", projection.value())]);
        }
        match self.inner.execute::<Bucket>(builder).await {
            Ok(bucket) => Ok(Some(bucket)),
            Err(e) if e.http_status_code() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// The request builder for [Storage::insert_bucket][crate::client::Storage::insert_bucket].
#[derive(Clone, Debug)]
pub struct InsertBucket {
    inner: Arc<StorageInner>,
    bucket: Bucket,
    projection: Option<Projection>,
}

impl InsertBucket {
    pub(crate) fn new(inner: Arc<StorageInner>, bucket: Bucket) -> Self {
        Self {
            inner,
            bucket,
            projection: None,
        }
    }

    /// Selects the set of properties returned for the created bucket.
    pub fn set_projection(mut self, v: Projection) -> Self {
        self.projection = Some(v);
        self
    }

    /// Sends the request. Returns the created bucket.
    pub async fn send(self) -> Result<Bucket> {
        tracing::debug!(rpc = "Buckets.insert", bucket = ?self.bucket.id);
        let body = serde_json::to_value(&self.bucket).map_err(Error::ser)?;
        let mut builder = self
            .inner
            .request(reqwest::Method::POST, "/storage/v1/b".to_string())
            .json(&body);
        if let Some(projection) = self.projection {
            builder = builder.query(&[("projection", projection.value())]);
        }
        self.inner.execute::<Bucket>(builder).await
    }
}

/// The request builder for [Storage::delete_bucket][crate::client::Storage::delete_bucket].
#[derive(Clone, Debug)]
pub struct DeleteBucket {
    inner: Arc<StorageInner>,
    bucket: String,
}

impl DeleteBucket {
    pub(crate) fn new(inner: Arc<StorageInner>, bucket: String) -> Self {
        Self { inner, bucket }
    }

    /// Sends the request. Deleting a bucket that does not exist succeeds.
    pub async fn send(self) -> Result<()> {
        tracing::debug!(rpc = "Buckets.delete", bucket = %self.bucket);
        let builder = self
            .inner
            .request(reqwest::Method::DELETE, format!("/storage/v1/b/{}", enc(&self.bucket)));
        match self.inner.execute_unit(builder).await {
            Ok(()) => Ok(()),
            Err(e) if e.http_status_code() == Some(404) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// The request builder for [Storage::list_buckets][crate::client::Storage::list_buckets].
#[derive(Clone, Debug)]
pub struct ListBuckets {
    inner: Arc<StorageInner>,
    project_id: String,
    page_token: Option<String>,
    max_results: Option<u32>,
    projection: Option<Projection>,
}

impl ListBuckets {
    pub(crate) fn new(inner: Arc<StorageInner>, project_id: String) -> Self {
        Self {
            inner,
            project_id,
            page_token: None,
            max_results: None,
            projection: None,
        }
    }

    /// Resumes the listing from a continuation token returned on a
    /// previous page.
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Limits the number of buckets per page.
    pub fn set_max_results(mut self, v: u32) -> Self {
        self.max_results = Some(v);
        self
    }

    /// Selects the set of properties to return for each bucket.
    pub fn set_projection(mut self, v: Projection) -> Self {
        self.projection = Some(v);
        self
    }

    /// Sends the request and returns a single page.
    ///
    /// A project without buckets, or an unknown project, yields an empty
    /// page.
    pub async fn send(self) -> Result<ListPage<Bucket>> {
        tracing::debug!(rpc = "Buckets.list", project_id = %self.project_id);
        let mut builder = self
            .inner
            .request(reqwest::Method::GET, "/storage/v1/b".to_string())
            .query(&[("projectId", self.project_id.as_str())]);
        if let Some(token) = self.page_token.as_deref() {
            builder = builder.query(&[("pageToken", token)]);
        }
        if let Some(max_results) = self.max_results {
            builder = builder.query(&[("maxResults", max_results)]);
        }
        if let Some(projection) = self.projection {
            builder = builder.query(&[("projection", projection.value())]);
        }
        match self.inner.execute::<ListPage<Bucket>>(builder).await {
            Ok(page) => Ok(page),
            Err(e) if e.http_status_code() == Some(404) => Ok(ListPage::default()),
            Err(e) => Err(e),
        }
    }

    /// Streams the pages of the listing, re-issuing the request with each
    /// continuation token.
    pub fn by_page(self) -> Paginator<ListPage<Bucket>, Error> {
        let seed = self.page_token.clone().unwrap_or_default();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.page_token = if token.is_empty() { None } else { Some(token) };
            builder.send()
        };
        Paginator::new(seed, execute)
    }

    /// Streams the buckets of the listing across page boundaries.
    pub fn by_item(self) -> ItemPaginator<Bucket, Error> {
        self.by_page().into_items()
    }
}
