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

//! Google Cloud Client Libraries for Rust - Cloud Storage JSON API,
//! bucket surface.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases.
//!
//! This crate contains a client for the bucket operations of the
//! [Cloud Storage] JSON API: get, insert, delete and list, with lazy
//! streaming over paginated listings.
//!
//! # Quickstart
//!
//! ```no_run
//! # async fn sample() -> google_cloud_storage_v1::Result<()> {
//! use google_cloud_storage_v1::client::Storage;
//! let client = Storage::builder().build().await?;
//! let mut buckets = client.list_buckets("my-project").by_item();
//! while let Some(bucket) = buckets.next().await.transpose()? {
//!     println!("{:?}", bucket.id);
//! }
//! # Ok(()) }
//! ```
//!
//! [Cloud Storage]: https://cloud.google.com/storage

pub mod builder;
pub mod client;
pub mod credentials;
pub mod error;
pub mod model;
pub mod paginator;

pub use crate::error::Error;

/// A `Result` alias where the `Err` case is this crate's [Error].
pub type Result<T> = std::result::Result<T, Error>;
