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

//! A dyn-compatible, crate-private version of [super::GlobalCatalog].

use crate::Result;
use crate::model;
use crate::options::*;
use sdk::options::RequestOptions;
use sdk::response::Response;

#[async_trait::async_trait]
pub trait GlobalCatalog: std::fmt::Debug + Send + Sync {
    async fn list_catalog_entries(
        &self,
        req: ListCatalogEntriesOptions,
        options: RequestOptions,
    ) -> Result<Response<model::SearchResult>>;

    async fn create_catalog_entry(
        &self,
        req: CreateCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>>;

    async fn get_catalog_entry(
        &self,
        req: GetCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>>;

    async fn update_catalog_entry(
        &self,
        req: UpdateCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>>;

    async fn delete_catalog_entry(
        &self,
        req: DeleteCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn get_child_objects(
        &self,
        req: GetChildObjectsOptions,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::SearchResult>>>;

    async fn restore_catalog_entry(
        &self,
        req: RestoreCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn get_visibility(
        &self,
        req: GetVisibilityOptions,
        options: RequestOptions,
    ) -> Result<Response<model::Visibility>>;

    async fn update_visibility(
        &self,
        req: UpdateVisibilityOptions,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn get_pricing(
        &self,
        req: GetPricingOptions,
        options: RequestOptions,
    ) -> Result<Response<model::PricingGet>>;

    async fn get_audit_logs(
        &self,
        req: GetAuditLogsOptions,
        options: RequestOptions,
    ) -> Result<Response<model::SearchResult>>;

    async fn list_artifacts(
        &self,
        req: ListArtifactsOptions,
        options: RequestOptions,
    ) -> Result<Response<model::Artifacts>>;

    async fn get_artifact(
        &self,
        req: GetArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<bytes::Bytes>>;

    async fn upload_artifact(
        &self,
        req: UploadArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<()>>;

    async fn delete_artifact(
        &self,
        req: DeleteArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<()>>;
}

/// All implementations of [super::GlobalCatalog] also implement [GlobalCatalog].
#[async_trait::async_trait]
impl<T: super::GlobalCatalog> GlobalCatalog for T {
    async fn list_catalog_entries(
        &self,
        req: ListCatalogEntriesOptions,
        options: RequestOptions,
    ) -> Result<Response<model::SearchResult>> {
        T::list_catalog_entries(self, req, options).await
    }

    async fn create_catalog_entry(
        &self,
        req: CreateCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        T::create_catalog_entry(self, req, options).await
    }

    async fn get_catalog_entry(
        &self,
        req: GetCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        T::get_catalog_entry(self, req, options).await
    }

    async fn update_catalog_entry(
        &self,
        req: UpdateCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        T::update_catalog_entry(self, req, options).await
    }

    async fn delete_catalog_entry(
        &self,
        req: DeleteCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_catalog_entry(self, req, options).await
    }

    async fn get_child_objects(
        &self,
        req: GetChildObjectsOptions,
        options: RequestOptions,
    ) -> Result<Response<Vec<model::SearchResult>>> {
        T::get_child_objects(self, req, options).await
    }

    async fn restore_catalog_entry(
        &self,
        req: RestoreCatalogEntryOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::restore_catalog_entry(self, req, options).await
    }

    async fn get_visibility(
        &self,
        req: GetVisibilityOptions,
        options: RequestOptions,
    ) -> Result<Response<model::Visibility>> {
        T::get_visibility(self, req, options).await
    }

    async fn update_visibility(
        &self,
        req: UpdateVisibilityOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::update_visibility(self, req, options).await
    }

    async fn get_pricing(
        &self,
        req: GetPricingOptions,
        options: RequestOptions,
    ) -> Result<Response<model::PricingGet>> {
        T::get_pricing(self, req, options).await
    }

    async fn get_audit_logs(
        &self,
        req: GetAuditLogsOptions,
        options: RequestOptions,
    ) -> Result<Response<model::SearchResult>> {
        T::get_audit_logs(self, req, options).await
    }

    async fn list_artifacts(
        &self,
        req: ListArtifactsOptions,
        options: RequestOptions,
    ) -> Result<Response<model::Artifacts>> {
        T::list_artifacts(self, req, options).await
    }

    async fn get_artifact(
        &self,
        req: GetArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<bytes::Bytes>> {
        T::get_artifact(self, req, options).await
    }

    async fn upload_artifact(
        &self,
        req: UploadArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::upload_artifact(self, req, options).await
    }

    async fn delete_artifact(
        &self,
        req: DeleteArtifactOptions,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        T::delete_artifact(self, req, options).await
    }
}
