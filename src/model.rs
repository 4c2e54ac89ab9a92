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

//! The resource model for the Cloud Storage JSON API bucket surface.
//!
//! All types map one to one onto the JSON representation used by the
//! service. They are constructed with `T::new()` followed by chained
//! `set_*()` calls:
//!
//! ```
//! use google_cloud_storage_v1::model::Bucket;
//! let bucket = Bucket::new()
//!     .set_id("my-bucket")
//!     .set_project_id("my-project");
//! assert_eq!(bucket.id.as_deref(), Some("my-bucket"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The resource kind discriminator carried by every JSON API resource.
///
/// The service tags each resource and each list response with a `kind`
/// field; the value is always one of this closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "storage#bucket")]
    Bucket,
    #[serde(rename = "storage#buckets")]
    Buckets,
    #[serde(rename = "storage#bucketAccessControl")]
    BucketAccessControl,
    #[serde(rename = "storage#bucketAccessControls")]
    BucketAccessControls,
    #[serde(rename = "storage#object")]
    Object,
    #[serde(rename = "storage#objects")]
    Objects,
    #[serde(rename = "storage#objectAccessControl")]
    ObjectAccessControl,
    #[serde(rename = "storage#objectAccessControls")]
    ObjectAccessControls,
}

impl Kind {
    /// The wire representation, e.g. `storage#bucket`.
    pub fn value(&self) -> &'static str {
        match self {
            Kind::Bucket => "storage#bucket",
            Kind::Buckets => "storage#buckets",
            Kind::BucketAccessControl => "storage#bucketAccessControl",
            Kind::BucketAccessControls => "storage#bucketAccessControls",
            Kind::Object => "storage#object",
            Kind::Objects => "storage#objects",
            Kind::ObjectAccessControl => "storage#objectAccessControl",
            Kind::ObjectAccessControls => "storage#objectAccessControls",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

/// The role granted to the entity of an access control entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Owner,
    Reader,
    Writer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Role::Owner => "OWNER",
            Role::Reader => "READER",
            Role::Writer => "WRITER",
        };
        f.write_str(value)
    }
}

/// Selects how much of a resource the service returns.
///
/// Rendered as the `projection` query parameter on get and list requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    /// Omit ACL properties.
    NoAcl,
    /// Include all properties.
    Full,
}

impl Projection {
    pub fn value(&self) -> &'static str {
        match self {
            Projection::NoAcl => "no_acl",
            Projection::Full => "full",
        }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

/// The owner of a bucket or object. The owner's role is always `OWNER`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Owner {
    /// The entity, in the form `user-{id}` or `group-{id}`.
    pub entity: Option<String>,

    /// The ID of the entity.
    pub entity_id: Option<String>,
}

impl Owner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entity<T: Into<String>>(mut self, v: T) -> Self {
        self.entity = Some(v.into());
        self
    }

    pub fn set_entity_id<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_id = Some(v.into());
        self
    }
}

/// The website configuration of a bucket, used when serving its contents
/// under a custom domain.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Website {
    /// The directory index suffix, e.g. `index.html`.
    pub main_page_suffix: Option<String>,

    /// The object served on missing-object requests, e.g. `404.html`.
    pub not_found_page: Option<String>,
}

impl Website {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_main_page_suffix<T: Into<String>>(mut self, v: T) -> Self {
        self.main_page_suffix = Some(v.into());
        self
    }

    pub fn set_not_found_page<T: Into<String>>(mut self, v: T) -> Self {
        self.not_found_page = Some(v.into());
        self
    }
}

/// An access control entry on a bucket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BucketAccessControl {
    pub kind: Kind,

    /// The ID of the entry, `{bucket}/{entity}`.
    pub id: Option<String>,

    pub self_link: Option<String>,

    /// The name of the bucket this entry applies to. Always present on
    /// resources returned by the service.
    pub bucket: String,

    /// The entity holding the permission: `user-{id}`, `group-{id}`,
    /// `allUsers`, `allAuthenticatedUsers`, etc.
    pub entity: Option<String>,

    pub role: Option<Role>,

    /// The email address associated with the entity, if any.
    pub email: Option<String>,

    pub entity_id: Option<String>,

    /// The domain associated with the entity, if any.
    pub domain: Option<String>,
}

impl Default for BucketAccessControl {
    fn default() -> Self {
        Self {
            kind: Kind::BucketAccessControl,
            id: None,
            self_link: None,
            bucket: String::new(),
            entity: None,
            role: None,
            email: None,
            entity_id: None,
            domain: None,
        }
    }
}

impl BucketAccessControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = v.into();
        self
    }

    pub fn set_entity<T: Into<String>>(mut self, v: T) -> Self {
        self.entity = Some(v.into());
        self
    }

    pub fn set_role(mut self, v: Role) -> Self {
        self.role = Some(v);
        self
    }

    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    pub fn set_entity_id<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_id = Some(v.into());
        self
    }

    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }
}

/// An access control entry applied to new objects by default.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectAccessControl {
    pub kind: Kind,

    pub id: Option<String>,

    pub self_link: Option<String>,

    pub bucket: Option<String>,

    /// The name of the object, absent on bucket-level default entries.
    pub object: Option<String>,

    pub entity: Option<String>,

    pub role: Option<Role>,

    pub email: Option<String>,

    pub entity_id: Option<String>,

    pub domain: Option<String>,
}

impl Default for ObjectAccessControl {
    fn default() -> Self {
        Self {
            kind: Kind::ObjectAccessControl,
            id: None,
            self_link: None,
            bucket: None,
            object: None,
            entity: None,
            role: None,
            email: None,
            entity_id: None,
            domain: None,
        }
    }
}

impl ObjectAccessControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    pub fn set_object<T: Into<String>>(mut self, v: T) -> Self {
        self.object = Some(v.into());
        self
    }

    pub fn set_entity<T: Into<String>>(mut self, v: T) -> Self {
        self.entity = Some(v.into());
        self
    }

    pub fn set_role(mut self, v: Role) -> Self {
        self.role = Some(v);
        self
    }

    pub fn set_email<T: Into<String>>(mut self, v: T) -> Self {
        self.email = Some(v.into());
        self
    }

    pub fn set_entity_id<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_id = Some(v.into());
        self
    }

    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }
}

/// A bucket resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bucket {
    pub kind: Kind,

    /// The name of the bucket.
    pub id: Option<String>,

    /// The URI of this bucket.
    pub self_link: Option<String>,

    /// The project the bucket belongs to.
    pub project_id: Option<String>,

    /// The creation time of the bucket, RFC 3339.
    pub time_created: Option<DateTime<Utc>>,

    /// Access controls on the bucket, only populated with the full
    /// projection.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub acl: Vec<BucketAccessControl>,

    /// Default access controls applied to new objects, only populated with
    /// the full projection.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_object_acl: Vec<ObjectAccessControl>,

    pub owner: Option<Owner>,

    /// The geographic location of the bucket, e.g. `US` or `EU`.
    pub location: Option<String>,

    pub website: Option<Website>,
}

impl Default for Bucket {
    fn default() -> Self {
        Self {
            kind: Kind::Bucket,
            id: None,
            self_link: None,
            project_id: None,
            time_created: None,
            acl: Vec::new(),
            default_object_acl: Vec::new(),
            owner: None,
            location: None,
            website: None,
        }
    }
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    pub fn set_time_created(mut self, v: DateTime<Utc>) -> Self {
        self.time_created = Some(v);
        self
    }

    pub fn set_acl<I>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = BucketAccessControl>,
    {
        self.acl = v.into_iter().collect();
        self
    }

    pub fn set_default_object_acl<I>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = ObjectAccessControl>,
    {
        self.default_object_acl = v.into_iter().collect();
        self
    }

    pub fn set_owner(mut self, v: Owner) -> Self {
        self.owner = Some(v);
        self
    }

    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    pub fn set_website(mut self, v: Website) -> Self {
        self.website = Some(v);
        self
    }
}

/// One page of a list response.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPage<T> {
    pub kind: Kind,

    /// The continuation token. Absent on the last page.
    pub next_page_token: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<T>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            kind: Kind::Buckets,
            next_page_token: None,
            items: Vec::new(),
        }
    }
}

impl<T> crate::paginator::PageableResponse for ListPage<T> {
    type PageItem = T;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}
