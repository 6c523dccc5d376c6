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

//! Errors detected while validating request parameters.

/// A request parameter is missing or has an invalid value.
///
/// The client library reports these problems before any request is sent, as
/// the source of an [Error][super::Error] where
/// [is_validation()][super::Error::is_validation] returns `true`.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required parameter was not set.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
    /// A path parameter was set to an empty string.
    #[error("path parameter `{0}` must not be empty")]
    EmptyPathParameter(&'static str),
    /// A header name or value cannot be sent over HTTP.
    #[error("invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },
}

pub fn missing(name: &'static str) -> super::Error {
    super::Error::validation(ValidationError::MissingParameter(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_parameter() {
        let error = missing("overview_ui");
        assert!(error.is_validation(), "{error:?}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<ValidationError>());
        assert_eq!(source, Some(&ValidationError::MissingParameter("overview_ui")));
        assert!(error.to_string().contains("overview_ui"), "{error}");
    }

    #[test]
    fn display() {
        let e = ValidationError::EmptyPathParameter("id");
        assert_eq!(e.to_string(), "path parameter `id` must not be empty");
        let e = ValidationError::InvalidHeader {
            name: "bad header".to_string(),
            reason: "invalid HTTP header name".to_string(),
        };
        assert!(e.to_string().contains("bad header"), "{e}");
    }
}
