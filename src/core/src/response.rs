// Copyright 2025 Platform Services SDK Authors
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

//! Response types.
//!
//! This module contains types related to service responses. Notably it
//! contains the `Response` type itself. Typically you'll import this type.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use platform_services_core::Result;
//! # use platform_services_core::response::Response;
//! // A type representing a service resource, for example, a catalog entry.
//! struct Resource {
//!   // ...
//! }
//!
//! async fn make_service_call(id: &str) -> Result<Response<Resource>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = make_service_call("my-entry").await?;
//! if let Some(etag) = response.headers().get("ETag") {
//!     // do something with the etag
//! }
//! let resource = response.body();
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use platform_services_core::Result;
//! # use platform_services_core::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents a service response.
///
/// Applications rarely need to create instances of this struct, except in
/// mocks. The client libraries return it from every operation, with the
/// decoded model as the body, and the HTTP status code and headers in the
/// [Parts].
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// The status code is `200 OK` and the headers are empty.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, preserving the metadata.
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// Component parts of a response.
///
/// The response status code and headers.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,

    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status<V>(mut self, v: V) -> Self
    where
        V: Into<http::StatusCode>,
    {
        self.status = v.into();
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert("etag", http::HeaderValue::from_static("\"v1\""));
        let parts = Parts::new()
            .set_status(http::StatusCode::CREATED)
            .set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn response_map() {
        let mut headers = http::HeaderMap::new();
        headers.insert("etag", http::HeaderValue::from_static("\"v1\""));
        let response = Response::from_parts(Parts::new().set_headers(headers.clone()), "42");
        let response = response.map(|s| s.len());
        assert_eq!(response.body(), &2);
        assert_eq!(response.headers(), &headers);
    }
}
