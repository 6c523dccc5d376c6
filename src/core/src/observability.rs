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

//! Tracing spans for client requests and HTTP attempts.
//!
//! The library never installs a subscriber. Applications that want the spans
//! configure one, e.g. with `tracing-subscriber`.

use crate::error::Error;
use crate::http::ServiceInfo;
use crate::response::Response;
use tracing::{Span, field};

pub const OTEL_NAME: &str = "otel.name";
pub const OTEL_STATUS_CODE: &str = "otel.status_code";
pub const OTEL_STATUS_DESCRIPTION: &str = "otel.status_description";
pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
pub const URL_FULL: &str = "url.full";
pub const SERVER_ADDRESS: &str = "server.address";
pub const ERROR_TYPE: &str = "error.type";
pub const SDK_SERVICE: &str = "sdk.service";
pub const SDK_OPERATION: &str = "sdk.operation";
pub const SDK_CLIENT_VERSION: &str = "sdk.client.version";
pub const SDK_CLIENT_ARTIFACT: &str = "sdk.client.artifact";

pub mod status_codes {
    pub const UNSET: &str = "UNSET";
    pub const OK: &str = "OK";
    pub const ERROR: &str = "ERROR";
}

/// Creates the span covering one call of a client method.
///
/// # Example
/// ```
/// # use platform_services_core::http::ServiceInfo;
/// # use platform_services_core::observability::create_client_request_span;
/// static INFO: ServiceInfo = ServiceInfo {
///     service_name: "global_catalog",
///     service_version: "V1",
///     default_endpoint: "https://example.com",
///     client_artifact: "example",
///     client_version: "1.0.0",
/// };
/// let span = create_client_request_span(&INFO, "get_catalog_entry");
/// ```
pub fn create_client_request_span(info: &'static ServiceInfo, operation: &str) -> Span {
    tracing::info_span!(
        "client_request",
        { OTEL_NAME } = format!("{}::{operation}", info.client_artifact),
        { SDK_SERVICE } = info.service_name,
        { SDK_OPERATION } = operation,
        { SDK_CLIENT_VERSION } = info.client_version,
        { SDK_CLIENT_ARTIFACT } = info.client_artifact,
        // Fields to be recorded later
        { OTEL_STATUS_CODE } = status_codes::UNSET,
        { OTEL_STATUS_DESCRIPTION } = field::Empty,
        { ERROR_TYPE } = field::Empty,
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
    )
}

/// Records the final status on the client request span.
pub fn record_client_request_span<T>(result: &Result<Response<T>, Error>, span: &Span) {
    match result {
        Ok(_) => {
            span.record(OTEL_STATUS_CODE, status_codes::OK);
        }
        Err(err) => {
            span.record(OTEL_STATUS_CODE, status_codes::ERROR);
            span.record(ERROR_TYPE, error_type(err));
            span.record(OTEL_STATUS_DESCRIPTION, err.to_string());
            if let Some(status) = err.http_status_code() {
                span.record(HTTP_RESPONSE_STATUS_CODE, status as i64);
            }
        }
    }
}

/// Creates the span covering one HTTP request.
pub(crate) fn create_http_attempt_span(
    request: &reqwest::Request,
    info: &'static ServiceInfo,
    operation: &str,
) -> Span {
    let url = request.url();
    let method = request.method();
    tracing::info_span!(
        "http_request",
        { OTEL_NAME } = format!("{method} {operation}"),
        { HTTP_REQUEST_METHOD } = method.as_str(),
        { URL_FULL } = url.as_str(),
        { SERVER_ADDRESS } = url.host_str().unwrap_or(""),
        { SDK_SERVICE } = info.service_name,
        { SDK_OPERATION } = operation,
        // Fields to be recorded later
        { OTEL_STATUS_CODE } = status_codes::UNSET,
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { ERROR_TYPE } = field::Empty,
    )
}

/// Records the outcome of sending the request, before the body is read.
pub(crate) fn record_http_response_attributes(
    span: &Span,
    result: Result<&reqwest::Response, &Error>,
) {
    match result {
        Ok(response) => {
            span.record(HTTP_RESPONSE_STATUS_CODE, response.status().as_u16() as i64);
        }
        Err(err) => record_http_error(span, err),
    }
}

pub(crate) fn record_http_error(span: &Span, err: &Error) {
    span.record(OTEL_STATUS_CODE, status_codes::ERROR);
    span.record(ERROR_TYPE, error_type(err));
    if let Some(status) = err.http_status_code() {
        span.record(HTTP_RESPONSE_STATUS_CODE, status as i64);
    }
}

/// A low-cardinality name for the kind of error.
pub fn error_type(err: &Error) -> String {
    if let Some(status) = err.http_status_code() {
        return status.to_string();
    }
    match err {
        e if e.is_timeout() => "CLIENT_TIMEOUT".to_string(),
        e if e.is_io() => "CLIENT_CONNECTION_ERROR".to_string(),
        e if e.is_validation() => "CLIENT_VALIDATION_ERROR".to_string(),
        e if e.is_serialization() => "CLIENT_REQUEST_ERROR".to_string(),
        e if e.is_deserialization() => "CLIENT_RESPONSE_DECODE_ERROR".to_string(),
        _ => "INTERNAL".to_string(),
    }
}
