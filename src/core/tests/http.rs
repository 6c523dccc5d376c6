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

//! These tests run the reqwest transport against a local HTTP server. They
//! verify the request URL, headers and body, and how responses and errors are
//! converted.

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::Method;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use platform_services_core::client_builder::internal::ClientConfig;
    use platform_services_core::http::{
        Accept, Payload, ReqwestTransport, Request, ServiceInfo, Transport,
    };
    use platform_services_core::options::RequestOptions;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    static INFO: ServiceInfo = ServiceInfo {
        service_name: "test_service",
        service_version: "V1",
        default_endpoint: "https://test.example.com/api/v1",
        client_artifact: "test-artifact",
        client_version: "1.0.0",
    };

    fn test_config(server: &Server) -> ClientConfig {
        ClientConfig {
            service_name: INFO.service_name,
            endpoint: Some(format!("http://{}/api/v1/", server.addr())),
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn get_json() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v1/entry-1"),
                request::query(url_decoded(contains(("account", "acc")))),
                request::query(url_decoded(contains(("complete", "true")))),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains((
                    "x-ibmcloud-sdk-analytics",
                    "service_name=test_service;service_version=V1;operation_id=GetEntry"
                ))),
                request::headers(contains(("user-agent", matches("^platform-services-rust-sdk/")))),
            ])
            .respond_with(json_encoded(json!({"id": "entry-1"}))),
        );

        let transport = ReqwestTransport::new(test_config(&server), &INFO)?;
        assert_eq!(transport.endpoint(), format!("http://{}/api/v1", server.addr()));
        let request = Request::new(Method::GET, "GetEntry")
            .path_parameter("id", "entry-1")?
            .query("account", Some("acc"))
            .query("complete", Some(true));
        let response = transport.execute(request, RequestOptions::default()).await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.into_body(), Payload::Json(json!({"id": "entry-1"})));
        Ok(())
    }

    #[tokio::test]
    async fn post_json_with_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/api/v1/"),
                request::headers(contains(("x-default", "from-config"))),
                request::headers(contains(("x-request", "from-request"))),
                request::headers(contains(("x-option", "from-options"))),
                request::headers(contains((
                    "user-agent",
                    matches("^my-app/2.0 platform-services-rust-sdk/")
                ))),
                request::body(json_decoded(eq(json!({"name": "n", "tags": ["a"]})))),
            ])
            .respond_with(status_code(201).body(json!({"name": "n"}).to_string())),
        );

        let mut config = test_config(&server);
        config.headers.push(("x-default".into(), "from-config".into()));
        config.user_agent = Some("my-app/2.0".into());
        let transport = ReqwestTransport::new(config, &INFO)?;

        let mut body = serde_json::Map::new();
        body.insert("name".into(), json!("n"));
        body.insert("tags".into(), json!(["a"]));
        let request = Request::new(Method::POST, "CreateEntry")
            .header("x-request", "from-request")
            .json(body);
        let options = RequestOptions::from_iter([("x-option", "from-options")]);
        let response = transport.execute(request, options).await?;
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(response.into_body(), Payload::Json(json!({"name": "n"})));
        Ok(())
    }

    #[tokio::test]
    async fn binary_upload_and_download() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/api/v1/obj/artifacts/a.txt"),
                request::headers(contains(("content-type", "text/plain"))),
                request::body(matches("^hello$")),
            ])
            .respond_with(status_code(200)),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v1/obj/artifacts/a.txt"),
                request::headers(contains(("accept", "*/*"))),
            ])
            .respond_with(status_code(200).body("hello")),
        );

        let transport = ReqwestTransport::new(test_config(&server), &INFO)?;
        let request = Request::new(Method::PUT, "UploadArtifact")
            .path_parameter("object_id", "obj")?
            .segment("artifacts")
            .path_parameter("artifact_id", "a.txt")?
            .bytes(Some("text/plain".into()), Bytes::from_static(b"hello"))
            .accept(Accept::None);
        let response = transport.execute(request, RequestOptions::default()).await?;
        assert_eq!(response.into_body(), Payload::Empty);

        let request = Request::new(Method::GET, "GetArtifact")
            .path_parameter("object_id", "obj")?
            .segment("artifacts")
            .path_parameter("artifact_id", "a.txt")?
            .accept(Accept::Binary);
        let response = transport.execute(request, RequestOptions::default()).await?;
        assert_eq!(response.into_bytes()?.into_body(), Bytes::from_static(b"hello"));
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/api/v1/missing"))
                .respond_with(
                    status_code(404)
                        .append_header("content-type", "application/json")
                        .body(
                            json!({
                                "errors": [{"code": "not_found", "message": "entry not found"}],
                                "trace": "trace-1"
                            })
                            .to_string(),
                        ),
                ),
        );

        let transport = ReqwestTransport::new(test_config(&server), &INFO)?;
        let request = Request::new(Method::DELETE, "DeleteEntry").path_parameter("id", "missing")?;
        let err = transport
            .execute(request, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let service = err.service_error().expect("should have a service error");
        assert_eq!(service.message(), "entry not found");
        assert_eq!(service.code(), Some("not_found"));
        assert_eq!(service.trace(), Some("trace-1"));
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v1/"))
                .respond_with(status_code(500).body("<html>oops</html>")),
        );

        let transport = ReqwestTransport::new(test_config(&server), &INFO)?;
        let err = transport
            .execute(Request::new(Method::GET, "ListEntries"), RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(500));
        assert!(err.service_error().is_none(), "{err:?}");
        assert_eq!(err.http_payload(), Some(&Bytes::from_static(b"<html>oops</html>")));
        Ok(())
    }

    #[tokio::test]
    async fn timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/v1/"))
                .respond_with(delay_and_then(Duration::from_secs(2), status_code(200))),
        );

        let mut config = test_config(&server);
        config.timeout = Some(Duration::from_millis(50));
        let transport = ReqwestTransport::new(config, &INFO)?;
        let err = transport
            .execute(Request::new(Method::GET, "ListEntries"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_error() -> Result<()> {
        let config = ClientConfig {
            endpoint: Some("http://127.0.0.1:1".into()),
            ..ClientConfig::default()
        };
        let transport = ReqwestTransport::new(config, &INFO)?;
        let err = transport
            .execute(Request::new(Method::GET, "ListEntries"), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_header() -> Result<()> {
        let server = Server::run();
        let transport = ReqwestTransport::new(test_config(&server), &INFO)?;
        let request = Request::new(Method::GET, "ListEntries").header("bad header", "v");
        let err = transport
            .execute(request, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        Ok(())
    }

    #[test]
    fn invalid_default_header() {
        let config = ClientConfig {
            headers: vec![("x-ok".into(), "bad\nvalue".into())],
            ..ClientConfig::default()
        };
        let got = ReqwestTransport::new(config, &INFO);
        assert!(matches!(&got, Err(e) if e.is_config()), "{got:?}");
    }
}
