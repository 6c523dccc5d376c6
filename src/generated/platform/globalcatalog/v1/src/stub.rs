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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

pub(crate) mod dynamic;

use crate::Result;
use crate::model;
use crate::options::*;
use sdk::options::RequestOptions;
use sdk::response::Response;


/// Defines the trait used to implement [super::client::GlobalCatalog].
///
/// Application developers may need to implement this trait to mock
/// `client::GlobalCatalog`. In other use-cases, application developers only
/// use `client::GlobalCatalog` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new operations from time to time. Adding a method to this
/// trait is not a breaking change, the default implementations panic.
pub trait GlobalCatalog: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::GlobalCatalog::list_catalog_entries].
    fn list_catalog_entries(
        &self,
        _req: ListCatalogEntriesOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::SearchResult>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::create_catalog_entry].
    fn create_catalog_entry(
        &self,
        _req: CreateCatalogEntryOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::CatalogEntry>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::get_catalog_entry].
    fn get_catalog_entry(
        &self,
        _req: GetCatalogEntryOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::CatalogEntry>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::update_catalog_entry].
    fn update_catalog_entry(
        &self,
        _req: UpdateCatalogEntryOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::CatalogEntry>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::delete_catalog_entry].
    fn delete_catalog_entry(
        &self,
        _req: DeleteCatalogEntryOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::get_child_objects].
    fn get_child_objects(
        &self,
        _req: GetChildObjectsOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<Vec<model::SearchResult>>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::restore_catalog_entry].
    fn restore_catalog_entry(
        &self,
        _req: RestoreCatalogEntryOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::get_visibility].
    fn get_visibility(
        &self,
        _req: GetVisibilityOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::Visibility>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::update_visibility].
    fn update_visibility(
        &self,
        _req: UpdateVisibilityOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::get_pricing].
    fn get_pricing(
        &self,
        _req: GetPricingOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::PricingGet>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::get_audit_logs].
    fn get_audit_logs(
        &self,
        _req: GetAuditLogsOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::SearchResult>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::list_artifacts].
    fn list_artifacts(
        &self,
        _req: ListArtifactsOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<model::Artifacts>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::get_artifact].
    fn get_artifact(
        &self,
        _req: GetArtifactOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<bytes::Bytes>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::upload_artifact].
    fn upload_artifact(
        &self,
        _req: UploadArtifactOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub()
    }

    /// Implements [super::client::GlobalCatalog::delete_artifact].
    fn delete_artifact(
        &self,
        _req: DeleteArtifactOptions,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Response<()>>> + Send {
        unimplemented_stub()
    }
}

async fn unimplemented_stub<T: Send>() -> Result<T> {
    unimplemented!(concat!(
        "to prevent breaking changes as the service gains new operations, the ",
        "stub traits provide default implementations of each method. The client ",
        "library overrides all of them, so this error is only expected in test ",
        "code mocking the client. Verify that your mock implements all the ",
        "methods used in your test."
    ));
}
