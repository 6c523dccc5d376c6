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

use super::Error;
use serde_json::Value;

/// The error details returned by the service.
///
/// The services report errors using a JSON object. Most include an `errors`
/// array where each element has a `code` and a human readable `message`, plus a
/// `trace` identifier. Some older endpoints (and some proxies in front of the
/// services) use a flat `error`, `message` or `errorMessage` field instead. The
/// client library accepts all these formats and preserves the full payload in
/// [details][ServiceError::details].
///
/// # Example
/// ```
/// use platform_services_core::error::ServiceError;
/// let payload = bytes::Bytes::from_static(br#"{
///     "errors": [{"code": "not_found", "message": "entry `svc1` not found"}],
///     "trace": "8a6b0e"
/// }"#);
/// let error = ServiceError::try_from(&payload)?;
/// assert_eq!(error.message(), "entry `svc1` not found");
/// assert_eq!(error.code(), Some("not_found"));
/// assert_eq!(error.trace(), Some("8a6b0e"));
/// # Ok::<(), platform_services_core::error::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    message: String,
    code: Option<String>,
    trace: Option<String>,
    details: Value,
}

impl ServiceError {
    /// Creates a new instance with the given message.
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Sets the error code.
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets the trace identifier.
    pub fn set_trace<T: Into<String>>(mut self, v: T) -> Self {
        self.trace = Some(v.into());
        self
    }

    /// Sets the full error payload.
    pub fn set_details<T: Into<Value>>(mut self, v: T) -> Self {
        self.details = v.into();
        self
    }

    /// The human readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error code of the first reported error, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The trace identifier, include it when contacting support.
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// The full error payload.
    pub fn details(&self) -> &Value {
        &self.details
    }
}

impl TryFrom<&bytes::Bytes> for ServiceError {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let details = serde_json::from_slice::<Value>(value).map_err(Error::deser)?;
        let Some(object) = details.as_object() else {
            return Err(Error::deser("the error payload is not a JSON object"));
        };
        let first = object
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first());
        let message = first
            .and_then(|e| e.get("message"))
            .or_else(|| object.get("error"))
            .or_else(|| object.get("message"))
            .or_else(|| object.get("errorMessage"))
            .and_then(Value::as_str)
            .ok_or_else(|| Error::deser("the error payload does not contain a message"))?;
        let code = first
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let trace = object
            .get("trace")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self {
            message: message.to_string(),
            code,
            trace,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"errors": [{"code": "c", "message": "m1"}], "trace": "t"}), "m1"; "errors")]
    #[test_case(json!({"errors": [{"message": "m1"}, {"message": "m2"}]}), "m1"; "first error")]
    #[test_case(json!({"error": "m2"}), "m2"; "flat error")]
    #[test_case(json!({"message": "m3", "status_code": 400}), "m3"; "flat message")]
    #[test_case(json!({"errorMessage": "m4"}), "m4"; "error message")]
    fn message(input: Value, want: &str) -> anyhow::Result<()> {
        let payload = bytes::Bytes::from(input.to_string());
        let got = ServiceError::try_from(&payload)?;
        assert_eq!(got.message(), want);
        assert_eq!(got.details(), &input);
        Ok(())
    }

    #[test]
    fn code_and_trace() -> anyhow::Result<()> {
        let input = json!({
            "errors": [{
                "code": "not_found",
                "message": "gone",
                "more_info": "https://example.com"
            }],
            "trace": "trace-id",
            "status_code": 404
        });
        let payload = bytes::Bytes::from(input.to_string());
        let got = ServiceError::try_from(&payload)?;
        let want = ServiceError::new("gone")
            .set_code("not_found")
            .set_trace("trace-id")
            .set_details(input);
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("not json"; "not json")]
    #[test_case("[1, 2]"; "not an object")]
    #[test_case(r#"{"status": 500}"#; "no message")]
    #[test_case(r#"{"error": {"nested": true}}"#; "message is not a string")]
    fn invalid(input: &str) {
        let payload = bytes::Bytes::from(input.to_string());
        let got = ServiceError::try_from(&payload);
        assert!(
            matches!(&got, Err(e) if e.is_deserialization()),
            "{got:?}"
        );
    }
}
