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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the behavior of some
//! calls. Applications sometimes change the timeout for an specific call, or
//! need to send additional headers. The per-operation `*Options` structs carry
//! the headers, the client libraries convert them into a [RequestOptions].

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for this request.
    ///
    /// Overrides the timeout configured in the client, if any.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Adds a header sent with this request.
    ///
    /// Headers set here replace any headers of the same name set by the client
    /// library or configured in the client.
    pub fn insert_header<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.push((name.into(), value.into()));
    }

    /// The additional headers for this request.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl<K, V> FromIterator<(K, V)> for RequestOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut options = Self::default();
        iter.into_iter()
            .for_each(|(k, v)| options.insert_header(k, v));
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();

        assert_eq!(opts.user_agent(), &None);
        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        assert_eq!(opts.attempt_timeout(), &None);
        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.attempt_timeout(), &Some(d));

        assert!(opts.headers().is_empty());
        opts.insert_header("x-test", "v1");
        assert_eq!(opts.headers(), &[("x-test".to_string(), "v1".to_string())]);
    }

    #[test]
    fn from_iter() {
        let opts = [("a", "1"), ("b", "2")]
            .into_iter()
            .collect::<RequestOptions>();
        assert_eq!(
            opts.headers(),
            &[
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }
}
