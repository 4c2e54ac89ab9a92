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

//! The error types produced by this crate.

use crate::credentials::CredentialsError;
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error type for all client operations.
///
/// The type is opaque. Applications should use the predicates
/// ([is_service()][Error::is_service], [is_transport()][Error::is_transport],
/// etc.) and accessors ([status()][Error::status],
/// [http_status_code()][Error::http_status_code]) instead of matching on its
/// internals.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// The request could not be serialized.
    pub(crate) fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    pub(crate) fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The credentials could not produce the request headers.
    pub(crate) fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// A transport problem without a full HTTP response, such as a broken
    /// connection.
    pub(crate) fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A non-2xx HTTP response.
    ///
    /// When the payload parses as the standard Google error body this
    /// becomes a service error; otherwise it is a transport error carrying
    /// the raw payload.
    pub(crate) fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        if let Ok(wrapper) = serde_json::from_slice::<ErrorWrapper>(&payload) {
            let details = ServiceDetails {
                status: wrapper.error,
                status_code: Some(status_code),
                headers: Some(headers),
            };
            return Self {
                kind: ErrorKind::Service(Box::new(details)),
                source: None,
            };
        }
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// An error reported by the service, without HTTP metadata. Useful in
    /// tests and mocks.
    pub fn service(status: Status) -> Self {
        let details = ServiceDetails {
            status,
            status_code: None,
            headers: None,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// An uncategorized error.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// The error details reported by the service, if any.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            _ => None,
        }
    }

    /// The HTTP status code of the response, if the error includes one.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers of the HTTP response, if the error includes them.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The raw payload of the HTTP response, when it could not be parsed as
    /// a service error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Transport(d), source) => d.display(source.as_deref(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                )
            }
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => write!(f, "a problem making a request"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Authentication,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
    Other,
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + Send + Sync + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, self.status_code) {
            (Some(e), _) => write!(f, "a transport problem prevented the request {e}"),
            (None, Some(code)) => {
                write!(f, "the HTTP transport reports a [{code}] error")
            }
            (None, None) => write!(f, "a transport problem prevented the request"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status: Status,
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

/// The error details embedded in a non-2xx response body.
///
/// The service wraps these as `{"error": {"code": ..., "message": ...,
/// "errors": [...]}}`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The HTTP status code of the error.
    pub code: i32,

    /// A developer-facing description of the error.
    pub message: String,

    /// Per-cause details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorInfo>,
}

impl Status {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_code(mut self, v: i32) -> Self {
        self.code = v;
        self
    }

    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    pub fn set_errors<I>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = ErrorInfo>,
    {
        self.errors = v.into_iter().collect();
        self
    }
}

/// One cause inside a service error.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorInfo {
    /// The scope of the error, e.g. `global`.
    pub domain: Option<String>,

    /// The stable identifier of the cause, e.g. `notFound`.
    pub reason: Option<String>,

    pub message: Option<String>,

    /// The request element the error applies to.
    pub location: Option<String>,

    /// How to interpret `location`, e.g. `header` or `parameter`.
    pub location_type: Option<String>,
}

impl ErrorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = Some(v.into());
        self
    }

    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = Some(v.into());
        self
    }
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: Status,
}
