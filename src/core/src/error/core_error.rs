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

use super::ServiceError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the request may timeout before a
/// response is received, the response may not match the expected schema, or
/// the library may be unable to format the request due to invalid or missing
/// application inputs.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use platform_services_core::error::Error;
/// match example_function() {
///     Err(e) if e.service_error().is_some() => {
///         println!("service error {e}, status {:?}", e.http_status_code());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use platform_services_core::error::ServiceError;
///     # Err(Error::service(ServiceError::new("not found"), 404, http::HeaderMap::new()))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use platform_services_core::error::{Error, ServiceError};
    /// let details = ServiceError::new("entry not found");
    /// let error = Error::service(details.clone(), 404, http::HeaderMap::new());
    /// assert_eq!(error.service_error(), Some(&details));
    /// assert_eq!(error.http_status_code(), Some(404));
    /// ```
    pub fn service(error: ServiceError, status_code: u16, headers: HeaderMap) -> Self {
        let details = ServiceDetails {
            error,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The error payload returned by the service, if any.
    ///
    /// The service reports errors as a JSON object with a human-readable
    /// message and, sometimes, a trace identifier useful when contacting
    /// support. When the service returns a payload in that format the client
    /// library parses it into a [ServiceError].
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.error),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use platform_services_core::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use platform_services_core::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. The request completed in
    /// the service, but the payload is not valid JSON or does not match the
    /// schema of the expected model.
    ///
    /// # Troubleshooting
    ///
    /// When the payload is valid JSON the [source][std::error::Error::source]
    /// is a [DecodeError][crate::mapping::DecodeError] naming the field, and
    /// the enclosing type, that failed to decode.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use platform_services_core::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing invalid or missing request parameters.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use platform_services_core::error::Error;
    /// use platform_services_core::error::validation::ValidationError;
    /// let error = Error::validation(ValidationError::EmptyPathParameter("id"));
    /// assert!(error.is_validation());
    /// assert!(error.source().is_some());
    /// ```
    pub fn validation<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(source.into()),
        }
    }

    /// The request was missing required parameters or the parameters had an
    /// invalid format.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required field
    /// in the options struct was not initialized, or a header name or value
    /// contains characters not allowed in HTTP headers.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use platform_services_core::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(400, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the service. For
    /// example, a proxy or load balancer may generate errors without the
    /// detailed payload described in [ServiceError]. In such cases the client
    /// library returns the status code, headers, and http payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => Some(d.status_code),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => Some(&d.headers),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only set for errors where the payload could not be parsed as a
    /// [ServiceError].
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// A problem reported by the transport layer.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or a
    /// any HTTP error that did not include a status code or other headers.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
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

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request. This type of error is
    /// rare, but includes crashes and restarts on proxies and load balancers,
    /// or DNS resolution failures for a misconfigured endpoint.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, load balancer, or other network
    /// element generated before the service is able to send a full response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Validation, Some(e)) => {
                write!(f, "the request parameters are invalid: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with status {} described as: {}",
                    d.status_code,
                    d.error.message()
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Validation,
    Serialization,
    Deserialization,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
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
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    error: ServiceError,
    status_code: u16,
    headers: HeaderMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::validation::ValidationError;
    use http::HeaderValue;
    use std::error::Error as StdError;

    #[test]
    fn service() {
        let details = ServiceError::new("entry not found").set_trace("trace-123");
        let mut headers = HeaderMap::new();
        headers.insert("x-correlation-id", HeaderValue::from_static("abc"));
        let error = Error::service(details.clone(), 404, headers.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.service_error(), Some(&details));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.to_string().contains("entry not found"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("deadline exceeded");
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("deadline exceeded"), "{error}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("bad body");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("bad body"), "{error}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser("bad payload");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("bad payload"), "{error}");
    }

    #[test]
    fn validation() {
        let error = Error::validation(ValidationError::EmptyPathParameter("object_id"));
        assert!(error.is_validation(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<ValidationError>());
        assert_eq!(got, Some(&ValidationError::EmptyPathParameter("object_id")));
        assert!(error.to_string().contains("object_id"), "{error}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/plain"));
        let error = Error::http(503, headers.clone(), bytes::Bytes::from_static(b"try again"));
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(503));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"try again"))
        );
        assert!(error.to_string().contains("[503]"), "{error}");
        assert!(error.to_string().contains("try again"), "{error}");
    }

    #[test]
    fn http_binary_payload() {
        let error = Error::http(
            500,
            HeaderMap::new(),
            bytes::Bytes::from_static(&[0xff, 0xfe]),
        );
        assert!(error.to_string().contains("[500]"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io("connection reset");
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }
}
