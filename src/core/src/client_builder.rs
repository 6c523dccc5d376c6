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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or send additional headers
//! with every request. The Platform Services client libraries for Rust use a
//! generic builder type to provide such functionality. The types in this
//! module implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use platform_services_core::client_builder::examples;
//! # use platform_services_core::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use platform_services_core::client_builder::examples;
//! # use platform_services_core::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.example.com/api/v1")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use std::time::Duration;

/// The result type for client builders.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```
/// # use platform_services_core::client_builder::examples;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = match Client::builder().with_endpoint("not a url").build().await {
///     Ok(c) => c,
///     Err(e) if e.is_config() => { println!("bad endpoint: {e}"); return; }
///     Err(e) => { println!("error {e}"); return; }
/// };
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client configuration is invalid, for example, the
    /// endpoint is not an `http` or `https` URL.
    pub fn is_config(&self) -> bool {
        matches!(&self.0, ErrorKind::Config(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn config<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Config(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("invalid client configuration")]
    Config(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the Platform Services client libraries for Rust a "client" represents
/// a connection to a specific service. Each client library defines a
/// `builder()` function that returns one of these builders.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: internal::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    ///
    /// ```
    /// # use platform_services_core::client_builder::examples;
    /// # use platform_services_core::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint must be an absolute `http` or `https` URL, including any
    /// path prefix of the service, e.g. `https://example.com/api/v1`.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Reads the endpoint from the environment.
    ///
    /// The variable name is the service name in upper case followed by
    /// `_URL`, for example `GLOBAL_CATALOG_URL`. An endpoint set with
    /// [with_endpoint][Self::with_endpoint] takes precedence.
    pub fn from_env(mut self) -> Self {
        self.config.endpoint_from_env = true;
        self
    }

    /// Adds a header sent with every request made by the client.
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.config.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the timeout for each request.
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.timeout = Some(v.into());
        self
    }

    /// Prefixes the `User-Agent` header sent by the client.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }
}

/// Not part of the public API, subject to change without notice.
#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        fn build(
            self,
            config: internal::ClientConfig,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(service_name: &'static str, factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig {
                service_name,
                ..ClientConfig::default()
            },
        }
    }

    /// Configure a client.
    ///
    /// A common client configuration for all clients.
    #[derive(Clone, Debug, Default)]
    pub struct ClientConfig {
        pub service_name: &'static str,
        pub endpoint: Option<String>,
        pub endpoint_from_env: bool,
        pub headers: Vec<(String, String)>,
        pub timeout: Option<Duration>,
        pub user_agent: Option<String>,
    }

    impl ClientConfig {
        /// The name of the environment variable overriding the endpoint.
        pub fn endpoint_env_var(&self) -> String {
            format!("{}_URL", self.service_name.to_uppercase())
        }

        /// Returns the endpoint to use, before validation.
        ///
        /// An explicit endpoint wins over the environment, which wins over the
        /// default.
        pub fn resolve_endpoint(&self, default_endpoint: &str) -> String {
            if let Some(e) = &self.endpoint {
                return e.clone();
            }
            if self.endpoint_from_env {
                if let Ok(e) = std::env::var(self.endpoint_env_var()) {
                    if !e.is_empty() {
                        return e;
                    }
                }
            }
            default_endpoint.to_string()
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig;
    use super::Result;

    pub const DEFAULT_ENDPOINT: &str = "https://example.com/api/v1";

    pub struct Client(Config, String);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder("example_service", client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            let endpoint =
                crate::http::validate_endpoint(&config.resolve_endpoint(DEFAULT_ENDPOINT))?;
            Ok(Self(config, endpoint))
        }

        pub fn endpoint(&self) -> &str {
            &self.1
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

}
