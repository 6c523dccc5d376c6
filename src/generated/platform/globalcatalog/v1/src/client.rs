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

use crate::model;
use crate::options::*;
use crate::{Response, Result};
use sdk::observability::{create_client_request_span, record_client_request_span};
use sdk::options::RequestOptions;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::Instrument;

/// Implements a client for the Global Catalog API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use platform_services_globalcatalog_v1::client::GlobalCatalog;
/// # use platform_services_globalcatalog_v1::options::ListCatalogEntriesOptions;
/// let client = GlobalCatalog::builder().build().await?;
/// let mut options = ListCatalogEntriesOptions::new();
/// options.q = Some("kind:service".to_string());
/// let result = client.list_catalog_entries(options).await?.into_body();
/// for entry in result.entries()? {
///     println!("{:?} {}", entry.id, entry.name);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The catalog of services, plans, deployments and templates available in
/// the platform, with their user interface text, pricing, visibility and
/// artifacts.
///
/// # Configuration
///
/// To configure `GlobalCatalog` use the `with_*` methods in the type returned
/// by [builder()][GlobalCatalog::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://globalcatalog.cloud.ibm.com/api/v1`). Applications using
///   private endpoints may need to override this default.
/// * [from_env()]: reads the endpoint from the `GLOBAL_CATALOG_URL`
///   environment variable.
///
/// [with_endpoint()]: sdk::client_builder::ClientBuilder::with_endpoint
/// [from_env()]: sdk::client_builder::ClientBuilder::from_env
///
/// # Pooling and Cloning
///
/// `GlobalCatalog` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `GlobalCatalog` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct GlobalCatalog {
    inner: Arc<dyn super::stub::dynamic::GlobalCatalog>,
}

/// The builder returned by [GlobalCatalog::builder].
pub type ClientBuilder = sdk::client_builder::ClientBuilder<Factory>;

#[doc(hidden)]
pub struct Factory;
impl sdk::client_builder::internal::ClientFactory for Factory {
    type Client = GlobalCatalog;
    async fn build(
        self,
        config: sdk::client_builder::internal::ClientConfig,
    ) -> sdk::client_builder::Result<Self::Client> {
        Self::Client::new(config).await
    }
}

impl GlobalCatalog {
    /// Returns a builder for [GlobalCatalog].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use platform_services_globalcatalog_v1::client::GlobalCatalog;
    /// let client = GlobalCatalog::builder().build().await?;
    /// # anyhow::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> ClientBuilder {
        sdk::client_builder::internal::new_builder(crate::info::SERVICE.service_name, Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::GlobalCatalog + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    async fn new(
        config: sdk::client_builder::internal::ClientConfig,
    ) -> sdk::client_builder::Result<Self> {
        let inner = crate::transport::GlobalCatalog::new(config).await?;
        Ok(Self::from_stub(inner))
    }

    /// Returns the top-level catalog entries visible to the caller.
    ///
    /// Use `q` to filter, and `include` to request more properties. The
    /// resources of the result are catalog entries, see
    /// [SearchResult::entries][model::SearchResult::entries].
    pub async fn list_catalog_entries(
        &self,
        req: ListCatalogEntriesOptions,
    ) -> Result<Response<model::SearchResult>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "list_catalog_entries");
        let result = self
            .inner
            .list_catalog_entries(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Creates a catalog entry.
    ///
    /// The `id`, `name`, and `kind` must not be empty. Only administrators and
    /// editors of the parent entry can create entries.
    pub async fn create_catalog_entry(
        &self,
        req: CreateCatalogEntryOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "create_catalog_entry");
        let result = self
            .inner
            .create_catalog_entry(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Gets a catalog entry by ID.
    ///
    /// # Example
    /// ```no_run
    /// # use platform_services_globalcatalog_v1::client::GlobalCatalog;
    /// # use platform_services_globalcatalog_v1::options::GetCatalogEntryOptions;
    /// async fn sample(client: &GlobalCatalog) -> anyhow::Result<()> {
    ///     let mut options = GetCatalogEntryOptions::new("my-service-id");
    ///     options.include = Some("*".to_string());
    ///     let entry = client.get_catalog_entry(options).await?.into_body();
    ///     println!("{} provided by {}", entry.name, entry.provider.name);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_catalog_entry(
        &self,
        req: GetCatalogEntryOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "get_catalog_entry");
        let result = self
            .inner
            .get_catalog_entry(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Replaces a catalog entry.
    ///
    /// Set `move` to change the parent of the entry.
    pub async fn update_catalog_entry(
        &self,
        req: UpdateCatalogEntryOptions,
    ) -> Result<Response<model::CatalogEntry>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "update_catalog_entry");
        let result = self
            .inner
            .update_catalog_entry(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Deletes a catalog entry.
    ///
    /// The entry can be recovered with
    /// [restore_catalog_entry][GlobalCatalog::restore_catalog_entry] until it
    /// is permanently removed by the service.
    pub async fn delete_catalog_entry(
        &self,
        req: DeleteCatalogEntryOptions,
    ) -> Result<Response<()>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "delete_catalog_entry");
        let result = self
            .inner
            .delete_catalog_entry(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Returns the children of a catalog entry, filtered by `kind`.
    ///
    /// Use `*` as the kind to return all children.
    pub async fn get_child_objects(
        &self,
        req: GetChildObjectsOptions,
    ) -> Result<Response<Vec<model::SearchResult>>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "get_child_objects");
        let result = self
            .inner
            .get_child_objects(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Restores a deleted catalog entry.
    pub async fn restore_catalog_entry(
        &self,
        req: RestoreCatalogEntryOptions,
    ) -> Result<Response<()>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "restore_catalog_entry");
        let result = self
            .inner
            .restore_catalog_entry(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Returns the visibility restrictions of a catalog entry.
    pub async fn get_visibility(
        &self,
        req: GetVisibilityOptions,
    ) -> Result<Response<model::Visibility>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "get_visibility");
        let result = self
            .inner
            .get_visibility(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Changes the accounts that can see a catalog entry.
    pub async fn update_visibility(&self, req: UpdateVisibilityOptions) -> Result<Response<()>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "update_visibility");
        let result = self
            .inner
            .update_visibility(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Returns the pricing of a plan or deployment.
    pub async fn get_pricing(&self, req: GetPricingOptions) -> Result<Response<model::PricingGet>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "get_pricing");
        let result = self
            .inner
            .get_pricing(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Returns the audit log records of a catalog entry.
    ///
    /// The resources of the result are audit records, not catalog entries.
    pub async fn get_audit_logs(
        &self,
        req: GetAuditLogsOptions,
    ) -> Result<Response<model::SearchResult>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "get_audit_logs");
        let result = self
            .inner
            .get_audit_logs(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Lists the artifacts attached to a catalog entry.
    pub async fn list_artifacts(
        &self,
        req: ListArtifactsOptions,
    ) -> Result<Response<model::Artifacts>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "list_artifacts");
        let result = self
            .inner
            .list_artifacts(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Downloads the contents of an artifact.
    pub async fn get_artifact(&self, req: GetArtifactOptions) -> Result<Response<bytes::Bytes>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "get_artifact");
        let result = self
            .inner
            .get_artifact(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Uploads the contents of an artifact.
    ///
    /// Only administrators and editors can upload artifacts.
    pub async fn upload_artifact(&self, req: UploadArtifactOptions) -> Result<Response<()>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "upload_artifact");
        let result = self
            .inner
            .upload_artifact(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }

    /// Deletes an artifact.
    pub async fn delete_artifact(&self, req: DeleteArtifactOptions) -> Result<Response<()>> {
        let options = request_options(&req.headers);
        let span = create_client_request_span(&crate::info::SERVICE, "delete_artifact");
        let result = self
            .inner
            .delete_artifact(req, options)
            .instrument(span.clone())
            .await;
        record_client_request_span(&result, &span);
        result
    }
}

fn request_options(headers: &HashMap<String, String>) -> RequestOptions {
    headers.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(GlobalCatalog: Clone, Send, Sync, std::fmt::Debug);

    #[tokio::test]
    async fn build() -> anyhow::Result<()> {
        let _client = GlobalCatalog::builder().build().await?;
        let _client = GlobalCatalog::builder()
            .with_endpoint("http://localhost:8080/api/v1/")
            .with_header("x-custom", "value")
            .with_timeout(std::time::Duration::from_secs(5))
            .with_user_agent("my-app/1.0")
            .build()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn build_bad_endpoint() {
        let err = GlobalCatalog::builder()
            .with_endpoint("ftp://example.com")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_config(), "{err:?}");
    }

    #[test]
    fn request_options_from_headers() {
        let headers = HashMap::from([("x-a".to_string(), "1".to_string())]);
        let options = request_options(&headers);
        assert_eq!(options.headers(), [("x-a".to_string(), "1".to_string())]);
    }
}
