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

//! Platform Services Client Libraries for Rust - Global Catalog API
//!
//! The global catalog stores the definitions of the services, plans,
//! deployments and templates offered by the platform.
//!
//! This crate contains traits, types, and functions to interact with the
//! Global Catalog API. Most applications will use the structs defined in the
//! [client] module.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use platform_services_globalcatalog_v1::client::GlobalCatalog;
//! use platform_services_globalcatalog_v1::options::GetCatalogEntryOptions;
//! let client = GlobalCatalog::builder().from_env().build().await?;
//! let response = client
//!     .get_catalog_entry(GetCatalogEntryOptions::new("my-service-id"))
//!     .await?;
//! println!("{:?}", response.body().provider);
//! # anyhow::Result::<()>::Ok(()) });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

/// The request parameters for each operation.
pub mod options;

pub use sdk::Result;
pub use sdk::error::Error;
pub use sdk::response::Response;

/// Concrete implementations of this client library traits.
pub mod client;

/// Traits to mock the clients in this library.
pub mod stub;

mod transport;

pub(crate) mod info {
    use sdk::http::ServiceInfo;

    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub(crate) const DEFAULT_ENDPOINT: &str = "https://globalcatalog.cloud.ibm.com/api/v1";

    pub(crate) static SERVICE: ServiceInfo = ServiceInfo {
        service_name: "global_catalog",
        service_version: "V1",
        default_endpoint: DEFAULT_ENDPOINT,
        client_artifact: NAME,
        client_version: VERSION,
    };
}
