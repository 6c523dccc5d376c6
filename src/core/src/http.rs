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

use crate::Result;
use crate::client_builder::Error as BuilderError;
use crate::client_builder::internal::ClientConfig;
use crate::error::validation::ValidationError;
use crate::error::{Error, ServiceError};
use crate::mapping::{self, Model, json_type};
use crate::observability;
use crate::options::RequestOptions;
use crate::response::{Parts, Response};
use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde_json::{Map, Value};
use tracing::Instrument;

pub const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

mod info {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref SDK_USER_AGENT: String =
            format!("platform-services-rust-sdk/{VERSION}");
    }
}

/// Describes the service targeted by a client.
///
/// Generated libraries create one static instance of this struct.
#[derive(Debug, PartialEq)]
pub struct ServiceInfo {
    /// The service name, e.g. `global_catalog`.
    pub service_name: &'static str,
    /// The service version, e.g. `V1`.
    pub service_version: &'static str,
    /// The endpoint used when the application does not configure one.
    pub default_endpoint: &'static str,
    /// The crate name of the client library.
    pub client_artifact: &'static str,
    /// The crate version of the client library.
    pub client_version: &'static str,
}

impl ServiceInfo {
    /// The value of the `X-IBMCloud-SDK-Analytics` header for an operation.
    pub fn analytics_header_value(&self, operation: &str) -> String {
        format!(
            "service_name={};service_version={};operation_id={operation}",
            self.service_name, self.service_version
        )
    }
}

/// Percent-encode everything except unreserved characters in path parameters.
const PATH_PARAMETER: percent_encoding::AsciiSet = percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The body of a [Request].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(Map<String, Value>),
    Bytes {
        content_type: Option<String>,
        data: Bytes,
    },
}

/// The kind of response payload an operation expects.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Accept {
    #[default]
    Json,
    Binary,
    /// The operation ignores any response body.
    None,
}

/// A request, before it is bound to an endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    method: Method,
    operation: &'static str,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Body,
    accept: Accept,
}

impl Request {
    /// Creates a request for the root path.
    ///
    /// `operation` is the API operation ID, e.g. `GetCatalogEntry`. It names
    /// the operation in telemetry and analytics headers.
    pub fn new(method: Method, operation: &'static str) -> Self {
        Self {
            method,
            operation,
            path: String::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Body::Empty,
            accept: Accept::Json,
        }
    }

    /// Appends a literal path segment.
    pub fn segment(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }

    /// Appends a path segment with the value of a parameter.
    ///
    /// The value is percent-encoded. Empty values are rejected.
    ///
    /// # Example
    /// ```
    /// # use platform_services_core::http::Request;
    /// let request = Request::new(http::Method::GET, "GetEntry")
    ///     .path_parameter("id", "a/b c")?;
    /// assert_eq!(request.path(), "/a%2Fb%20c");
    /// # Ok::<(), platform_services_core::error::Error>(())
    /// ```
    pub fn path_parameter(mut self, name: &'static str, value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::validation(ValidationError::EmptyPathParameter(name)));
        }
        self.path.push('/');
        self.path
            .extend(percent_encoding::utf8_percent_encode(value, &PATH_PARAMETER));
        Ok(self)
    }

    /// Adds a query parameter if the value is present.
    pub fn query<V: ToString>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.query.push((name.to_string(), v.to_string()));
        }
        self
    }

    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds all the headers in `iter`, in order.
    pub fn headers<I, K, V>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn json(mut self, body: Map<String, Value>) -> Self {
        self.body = Body::Json(body);
        self
    }

    pub fn bytes(mut self, content_type: Option<String>, data: Bytes) -> Self {
        self.body = Body::Bytes { content_type, data };
        self
    }

    pub fn accept(mut self, accept: Accept) -> Self {
        self.accept = accept;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The request path, relative to the endpoint. Always starts with `/`.
    pub fn path(&self) -> &str {
        if self.path.is_empty() { "/" } else { &self.path }
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn header_pairs(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn accept_kind(&self) -> Accept {
        self.accept
    }
}

/// A response payload, before it is converted to the operation result.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Payload {
    /// The response had no body, or the body was ignored.
    #[default]
    Empty,
    Json(Value),
    Bytes(Bytes),
}

/// The response payload does not have the shape expected by the operation.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("an error occurred while processing the operation response: expected {expected}, found {found}")]
pub struct UnexpectedPayload {
    expected: &'static str,
    found: &'static str,
}

impl UnexpectedPayload {
    fn new(expected: &'static str, payload: &Payload) -> Error {
        let found = match payload {
            Payload::Empty => "an empty body",
            Payload::Json(v) => json_type(v),
            Payload::Bytes(_) => "binary data",
        };
        Error::deser(Self { expected, found })
    }
}

impl Response<Payload> {
    /// Decodes a JSON object payload into a model.
    pub fn decode<T: Model>(self) -> Result<Response<T>> {
        let (parts, body) = self.into_parts();
        let model = match &body {
            Payload::Json(Value::Object(m)) => {
                mapping::decode::<T>(m).map_err(decode_error::<T>)?
            }
            other => return Err(UnexpectedPayload::new("an object", other)),
        };
        Ok(Response::from_parts(parts, model))
    }

    /// Decodes a JSON array payload into a list of models.
    pub fn decode_list<T: Model>(self) -> Result<Response<Vec<T>>> {
        let (parts, body) = self.into_parts();
        let list = match &body {
            Payload::Json(Value::Array(items)) => {
                mapping::decode_list::<T>(items).map_err(decode_error::<T>)?
            }
            other => return Err(UnexpectedPayload::new("an array", other)),
        };
        Ok(Response::from_parts(parts, list))
    }

    /// Returns the payload as bytes. An empty body yields empty bytes.
    pub fn into_bytes(self) -> Result<Response<Bytes>> {
        let (parts, body) = self.into_parts();
        match body {
            Payload::Bytes(b) => Ok(Response::from_parts(parts, b)),
            Payload::Empty => Ok(Response::from_parts(parts, Bytes::new())),
            other => Err(UnexpectedPayload::new("binary data", &other)),
        }
    }

    /// Drops the payload.
    pub fn discard(self) -> Response<()> {
        self.map(|_| ())
    }
}

/// Sends requests to a service.
///
/// Client libraries use [ReqwestTransport] to send requests over HTTP. Tests
/// may provide other implementations.
#[async_trait::async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    async fn execute(&self, request: Request, options: RequestOptions) -> Result<Response<Payload>>;
}

/// Validates an endpoint and removes any trailing `/`.
pub fn validate_endpoint(endpoint: &str) -> crate::client_builder::Result<String> {
    let url = url::Url::parse(endpoint).map_err(BuilderError::config)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BuilderError::config(format!(
            "the endpoint must be an http or https URL, got {endpoint}"
        )));
    }
    Ok(endpoint.trim_end_matches('/').to_string())
}

/// A [Transport] based on [reqwest].
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
    endpoint: String,
    info: &'static ServiceInfo,
    headers: HeaderMap,
    timeout: Option<std::time::Duration>,
    user_agent: Option<String>,
}

impl ReqwestTransport {
    pub fn new(
        config: ClientConfig,
        info: &'static ServiceInfo,
    ) -> crate::client_builder::Result<Self> {
        let endpoint = validate_endpoint(&config.resolve_endpoint(info.default_endpoint))?;
        let headers = config
            .headers
            .iter()
            .try_fold(HeaderMap::new(), |mut map, (k, v)| {
                let (name, value) = to_header(k, v)?;
                map.append(name, value);
                Ok::<_, ValidationError>(map)
            })
            .map_err(BuilderError::config)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            endpoint,
            info,
            headers,
            timeout: config.timeout,
            user_agent: config.user_agent,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn builder(
        &self,
        request: &Request,
        options: &RequestOptions,
    ) -> Result<reqwest::RequestBuilder> {
        let mut builder = self.inner.request(
            request.method().clone(),
            format!("{}{}", self.endpoint, request.path()),
        );
        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }

        let mut headers = self.headers.clone();
        let user_agent = match options.user_agent().as_ref().or(self.user_agent.as_ref()) {
            Some(prefix) => format!("{prefix} {}", *info::SDK_USER_AGENT),
            None => info::SDK_USER_AGENT.clone(),
        };
        let (name, value) = to_header(http::header::USER_AGENT.as_str(), &user_agent)
            .map_err(Error::validation)?;
        headers.insert(name, value);
        headers.insert(
            HeaderName::from_static(ANALYTICS_HEADER),
            HeaderValue::from_str(&self.info.analytics_header_value(request.operation()))
                .map_err(Error::ser)?,
        );
        match request.accept_kind() {
            Accept::Json => {
                headers.insert(http::header::ACCEPT, HeaderValue::from_static("application/json"));
            }
            Accept::Binary => {
                headers.insert(http::header::ACCEPT, HeaderValue::from_static("*/*"));
            }
            Accept::None => {}
        }
        match request.body() {
            Body::Empty => {}
            Body::Json(body) => {
                builder = builder.json(body);
            }
            Body::Bytes { content_type, data } => {
                if let Some(ct) = content_type {
                    let (name, value) = to_header(http::header::CONTENT_TYPE.as_str(), ct)
                        .map_err(Error::validation)?;
                    headers.insert(name, value);
                }
                builder = builder.body(data.clone());
            }
        }
        for (k, v) in request.header_pairs().iter().chain(options.headers()) {
            let (name, value) = to_header(k, v).map_err(Error::validation)?;
            headers.insert(name, value);
        }
        builder = builder.headers(headers);
        if let Some(t) = (*options.attempt_timeout()).or(self.timeout) {
            builder = builder.timeout(t);
        }
        Ok(builder)
    }

    async fn request_attempt(
        &self,
        request: reqwest::Request,
        accept: Accept,
    ) -> Result<Response<Payload>> {
        let span = tracing::Span::current();
        let result = self.inner.execute(request).await.map_err(Self::map_send_error);
        observability::record_http_response_attributes(&span, result.as_ref());
        let response = result?;
        if !response.status().is_success() {
            let error = self::to_http_error(response).await;
            observability::record_http_error(&span, &error);
            return Err(error);
        }
        self::to_http_response(response, accept).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: Request,
        options: RequestOptions,
    ) -> Result<Response<Payload>> {
        let builder = self.builder(&request, &options)?;
        let http_request = builder.build().map_err(Error::ser)?;
        let span =
            observability::create_http_attempt_span(&http_request, self.info, request.operation());
        self.request_attempt(http_request, request.accept_kind())
            .instrument(span)
            .await
    }
}

fn to_header(
    name: &str,
    value: &str,
) -> std::result::Result<(HeaderName, HeaderValue), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidHeader {
        name: name.to_string(),
        reason,
    };
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    Ok((header_name, header_value))
}

pub async fn to_http_error(response: reqwest::Response) -> Error {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = match response.bytes().await {
        Ok(b) => b,
        Err(e) => return Error::io(e),
    };
    match ServiceError::try_from(&body) {
        Ok(error) => Error::service(error, status_code, headers),
        Err(_) => Error::http(status_code, headers, body),
    }
}

fn decode_error<T: Model>(e: mapping::DecodeError) -> Error {
    tracing::debug!(
        type_name = T::schema().name,
        path = %e.path(),
        "cannot decode response: {e}"
    );
    Error::deser(e)
}

async fn to_http_response(
    response: reqwest::Response,
    accept: Accept,
) -> Result<Response<Payload>> {
    let parts = Parts::new()
        .set_status(response.status())
        .set_headers(response.headers().clone());
    let body = response.bytes().await.map_err(Error::io)?;
    let payload = match accept {
        Accept::None => Payload::Empty,
        Accept::Binary => Payload::Bytes(body),
        Accept::Json if body.is_empty() => Payload::Empty,
        Accept::Json => {
            Payload::Json(serde_json::from_slice::<Value>(&body).map_err(Error::deser)?)
        }
    };
    Ok(Response::from_parts(parts, payload))
}
