//! Integration tests for belvo-rs against a mock Belvo API.
//!
//! Every test starts its own `wiremock` server and logs in with the key pair
//! `foo`/`bar`, so no credentials or network access are needed.
//!
//! Run with: cargo test --test api_tests
//! Set RUST_LOG=belvo_rs=debug to see request logs.

use std::path::PathBuf;
use std::sync::Once;

use futures_util::StreamExt;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use belvo_rs::api::DEFAULT_WIDGET_SCOPES;
use belvo_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Start a mock API that accepts the `foo`/`bar` key pair.
async fn mock_api() -> MockServer {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(basic_auth("foo", "bar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    server
}

/// Create a client logged in to the mock API.
async fn create_client(server: &MockServer) -> BelvoClient {
    BelvoClient::new("foo", "bar", Some(&server.uri()))
        .await
        .expect("login against mock API")
}

/// Expect exactly one POST on `endpoint` carrying exactly `body`.
async fn expect_post(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(1)
        .mount(server)
        .await;
}

fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

fn page(server: &MockServer, next: Option<&str>, results: Value) -> Value {
    json!({
        "count": 3,
        "next": next.map(|query| format!("{}/api/links/{}", server.uri(), query)),
        "previous": null,
        "results": results,
    })
}

// =============================================================================
// Session Tests
// =============================================================================

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_succeeds() {
        let server = mock_api().await;
        let client = create_client(&server).await;

        assert!(client.session().is_authenticated().await);
        assert_eq!(
            client.session().base_url().as_str(),
            format!("{}/api/", server.uri())
        );
    }

    #[tokio::test]
    async fn test_login_rejected() {
        init_logging();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let err = BelvoClient::new("foo", "wrong", Some(&server.uri()))
            .await
            .unwrap_err();
        match err {
            Error::Authentication(message) => assert_eq!(message, "Login failed."),
            other => panic!("Expected Authentication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_requests_carry_basic_auth() {
        let server = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/links/some-id/"))
            .and(basic_auth("foo", "bar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "some-id" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let link = client.links().detail("some-id", None).await.unwrap();
        assert_eq!(link["id"], "some-id");
    }
}

// =============================================================================
// Links Tests
// =============================================================================

mod links_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_link() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/links/"))
            .and(body_json(json!({
                "institution": "erebor_mx_retail",
                "username": "janedoe",
                "password": "123456",
                "access_mode": "single",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "new-link" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let link = client
            .links()
            .create("erebor_mx_retail", "janedoe", "123456", LinkOptions::default())
            .await
            .unwrap();
        assert_eq!(link["id"], "new-link");
    }

    #[tokio::test]
    async fn test_create_recurrent_link_with_token() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/links/"))
            .and(body_json(json!({
                "institution": "erebor_mx_retail",
                "username": "janedoe",
                "password": "123456",
                "access_mode": "recurrent",
                "token": "1234ab",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "new-link" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .links()
            .create(
                "erebor_mx_retail",
                "janedoe",
                "123456",
                LinkOptions {
                    access_mode: Some(AccessMode::Recurrent),
                    token: Some("1234ab".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_link_with_certificate() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/links/"))
            .and(body_json(json!({
                "institution": "erebor_mx_retail",
                "username": "janedoe",
                "password": "123456",
                "access_mode": "single",
                "certificate": "aGVsbG8=",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "new-link" })))
            .expect(1)
            .mount(&server)
            .await;

        let certificate =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/certificate.txt");
        let client = create_client(&server).await;
        client
            .links()
            .create(
                "erebor_mx_retail",
                "janedoe",
                "123456",
                LinkOptions {
                    certificate: Some(certificate),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_link() {
        let server = mock_api().await;
        Mock::given(method("PUT"))
            .and(path("/api/links/some-id/"))
            .and(body_json(json!({ "password": "new-pass" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "some-id" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .links()
            .update("some-id", Some("new-pass"), None, LinkOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_link_token() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/links/some-id/token/"))
            .and(body_json(json!({ "scopes": "read_links,write_links" })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "access": "a", "refresh": "r" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let token = client
            .links()
            .token("some-id", "read_links,write_links")
            .await
            .unwrap();
        assert_eq!(token["access"], "a");
    }

    #[tokio::test]
    async fn test_resume_link() {
        let server = mock_api().await;
        Mock::given(method("PATCH"))
            .and(path("/api/links/"))
            .and(body_json(json!({
                "session": "session-id",
                "token": "1234ab",
                "link": "some-link",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "some-link" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .links()
            .resume("session-id", "1234ab", Some("some-link"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_patch_without_options_sends_empty_body() {
        let server = mock_api().await;
        Mock::given(method("PATCH"))
            .and(path("/api/links/some-id/"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "some-id" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .links()
            .patch("some-id", LinkOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_patch_keeps_access_mode_when_only_token_set() {
        let server = mock_api().await;
        Mock::given(method("PATCH"))
            .and(path("/api/links/some-id/"))
            .and(body_json(json!({ "token": "1234ab" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "some-id" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .links()
            .patch(
                "some-id",
                LinkOptions {
                    token: Some("1234ab".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_patch_access_mode() {
        let server = mock_api().await;
        Mock::given(method("PATCH"))
            .and(path("/api/links/some-id/"))
            .and(body_json(json!({ "access_mode": "recurrent" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "some-id" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .links()
            .patch(
                "some-id",
                LinkOptions {
                    access_mode: Some(AccessMode::Recurrent),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let server = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/links/missing/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not found." })),
            )
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let err = client.links().detail("missing", None).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_not_found());
        assert!(err.detail().unwrap_or_default().contains("Not found."));
    }

    #[tokio::test]
    async fn test_delete() {
        let server = mock_api().await;
        Mock::given(method("DELETE"))
            .and(path("/api/links/some-id/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/links/missing/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        assert!(client.links().delete("some-id").await.unwrap());
        assert!(!client.links().delete("missing").await.unwrap());
    }
}

// =============================================================================
// Pagination Tests
// =============================================================================

mod pagination_tests {
    use super::*;

    async fn mount_first_page(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/links/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(
                server,
                Some("?page=2"),
                json!([{ "id": 1 }, { "id": 2 }]),
            )))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_list_follows_next_links() {
        let server = mock_api().await;
        mount_first_page(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/links/"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(page(&server, None, json!([{ "id": 3 }]))),
            )
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let links = client.links().list(None).await.unwrap();
        let ids: Vec<i64> = links.iter().filter_map(|l| l["id"].as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_list_passes_initial_params() {
        let server = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/institutions/"))
            .and(query_param("country_code", "MX"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{ "name": "erebor_mx_retail" }],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params: QueryParams = vec![("country_code".into(), "MX".into())];

        let client = create_client(&server).await;
        let institutions = client.institutions().list(Some(params)).await.unwrap();
        assert_eq!(institutions.len(), 1);
    }

    #[tokio::test]
    async fn test_stream_is_lazy() {
        let server = mock_api().await;
        mount_first_page(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/links/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(&server, None, json!([]))))
            .with_priority(1)
            .expect(0)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let mut stream = client.links().list_stream(None);
        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first["id"], 1);
        let second = stream.next().await.unwrap().unwrap();
        assert_eq!(second["id"], 2);
    }

    #[tokio::test]
    async fn test_list_fails_when_a_page_fails() {
        let server = mock_api().await;
        mount_first_page(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/links/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .with_priority(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let err = client.links().list(None).await.unwrap_err();
        assert!(err.is_server_error());
    }

    #[tokio::test]
    async fn test_for_each_delivers_items_before_failure() {
        let server = mock_api().await;
        mount_first_page(&server).await;
        Mock::given(method("GET"))
            .and(path("/api/links/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .with_priority(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let mut seen = Vec::new();
        let result = client
            .links()
            .for_each(None, |link| seen.push(link["id"].clone()))
            .await;

        assert!(result.is_err());
        assert_eq!(seen, vec![json!(1), json!(2)]);
    }
}

// =============================================================================
// Retrieve Tests
// =============================================================================

mod retrieve_tests {
    use super::*;

    #[tokio::test]
    async fn test_accounts_save_data_defaults_to_true() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/accounts/"))
            .and(body_json(json!({ "link": "some-link", "save_data": true })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .accounts()
            .retrieve("some-link", AccountOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_owners_save_data_can_be_disabled() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/owners/"))
            .and(body_json(json!({ "link": "some-link", "save_data": false })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .owners()
            .retrieve(
                "some-link",
                OwnerOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_balances_date_to_defaults_to_today() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/balances/"))
            .and(body_json(json!({
                "link": "some-link",
                "date_from": "2019-07-01",
                "date_to": today(),
                "account": "some-account",
                "save_data": true,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .balances()
            .retrieve(
                "some-link",
                "2019-07-01",
                BalanceOptions {
                    account: Some("some-account".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_transactions_explicit_date_to() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/transactions/"))
            .and(body_json(json!({
                "link": "some-link",
                "date_from": "2019-07-01",
                "date_to": "2019-07-31",
                "save_data": true,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .transactions()
            .retrieve(
                "some-link",
                "2019-07-01",
                TransactionOptions {
                    date_to: Some("2019-07-31".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_invoices_type_is_uppercase() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/invoices/"))
            .and(body_json(json!({
                "link": "some-link",
                "date_from": "2019-01-01",
                "date_to": "2019-12-31",
                "type": "INFLOW",
                "save_data": true,
                "attach_xml": true,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .invoices()
            .retrieve(
                "some-link",
                "2019-01-01",
                "2019-12-31",
                InvoiceType::Inflow,
                InvoiceOptions {
                    attach_xml: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_statements_body() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/statements/"))
            .and(body_json(json!({
                "link": "some-link",
                "account": "some-account",
                "year": 2019,
                "month": 12,
                "save_data": true,
                "attach_pdf": true,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .statements()
            .retrieve(
                "some-link",
                "some-account",
                2019,
                12,
                StatementOptions {
                    attach_pdf: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_investments_portfolios_outside_api_root() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/investments/portfolios/"))
            .and(body_json(json!({ "link": "some-link", "save_data": true })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .investments_portfolios()
            .retrieve("some-link", RetrieveOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_investments_keep_base_path_prefix() {
        init_logging();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/belvo/api/"))
            .and(basic_auth("foo", "bar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        expect_post(
            &server,
            "/belvo/investments/portfolios/",
            json!({ "link": "some-link", "save_data": true }),
        )
        .await;
        expect_post(
            &server,
            "/belvo/api/accounts/",
            json!({ "link": "some-link", "save_data": true }),
        )
        .await;

        let url = format!("{}/belvo", server.uri());
        let client = BelvoClient::new("foo", "bar", Some(&url)).await.unwrap();
        client
            .investments_portfolios()
            .retrieve("some-link", RetrieveOptions::default())
            .await
            .unwrap();
        client
            .accounts()
            .retrieve("some-link", AccountOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_widget_token_uses_key_pair() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/token/"))
            .and(body_json(json!({
                "id": "foo",
                "password": "bar",
                "scopes": DEFAULT_WIDGET_SCOPES,
                "link_id": "some-link",
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "access": "a", "refresh": "r" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let token = client
            .widget_tokens()
            .create(WidgetTokenOptions {
                link_id: Some("some-link".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(token["refresh"], "r");
    }
}

// =============================================================================
// Tax Tests
// =============================================================================

mod tax_tests {
    use super::*;

    #[tokio::test]
    async fn test_tax_returns_yearly() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/tax-returns/"))
            .and(body_json(json!({
                "link": "some-link",
                "save_data": true,
                "year_from": 2019,
                "year_to": 2020,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .tax_returns()
            .retrieve("some-link", Some(2019), Some(2020), TaxReturnOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_tax_returns_monthly_uses_dates() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/tax-returns/"))
            .and(body_json(json!({
                "link": "some-link",
                "save_data": true,
                "type": "monthly",
                "date_from": "2020-01-01",
                "date_to": "2020-06-30",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .tax_returns()
            .retrieve(
                "some-link",
                Some(2019),
                Some(2020),
                TaxReturnOptions {
                    tax_return_type: Some(TaxReturnType::Monthly),
                    date_from: Some("2020-01-01".into()),
                    date_to: Some("2020-06-30".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_tax_returns_cannot_resume() {
        let server = mock_api().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        let err = client
            .tax_returns()
            .resume("session-id", "1234ab", None)
            .await
            .unwrap_err();
        match err {
            Error::UnsupportedOperation { resource, operation } => {
                assert_eq!(resource, "TaxReturn");
                assert_eq!(operation, "resume");
            }
            other => panic!("Expected UnsupportedOperation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_institutions_can_resume() {
        let server = mock_api().await;
        Mock::given(method("PATCH"))
            .and(path("/api/institutions/"))
            .and(body_json(json!({ "session": "session-id", "token": "1234ab" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .institutions()
            .resume("session-id", "1234ab", None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_tax_compliance_status_attach_pdf() {
        let server = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/tax-compliance-status/"))
            .and(body_json(json!({
                "link": "some-link",
                "save_data": true,
                "attach_pdf": true,
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_client(&server).await;
        client
            .tax_compliance_status()
            .retrieve(
                "some-link",
                TaxComplianceStatusOptions {
                    attach_pdf: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
}

// =============================================================================
// Default Value Tests
// =============================================================================

mod defaults_tests {
    use super::*;

    #[tokio::test]
    async fn test_incomes_save_data() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/api/incomes/",
            json!({ "link": "some-link", "save_data": true }),
        )
        .await;
        expect_post(
            &server,
            "/api/incomes/",
            json!({
                "link": "some-link",
                "save_data": false,
                "date_from": "2020-01-01",
                "date_to": "2020-03-31",
            }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .incomes()
            .retrieve("some-link", IncomeOptions::default())
            .await
            .unwrap();
        client
            .incomes()
            .retrieve(
                "some-link",
                IncomeOptions {
                    save_data: Some(false),
                    date_from: Some("2020-01-01".into()),
                    date_to: Some("2020-03-31".into()),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_recurring_expenses_save_data() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/api/recurring-expenses/",
            json!({ "link": "some-link", "save_data": true }),
        )
        .await;
        expect_post(
            &server,
            "/api/recurring-expenses/",
            json!({ "link": "some-link", "save_data": false, "token": "1234ab" }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .recurring_expenses()
            .retrieve("some-link", RetrieveOptions::default())
            .await
            .unwrap();
        client
            .recurring_expenses()
            .retrieve(
                "some-link",
                RetrieveOptions {
                    token: Some("1234ab".into()),
                    save_data: Some(false),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_risk_insights_save_data() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/api/risk-insights/",
            json!({ "link": "some-link", "save_data": true }),
        )
        .await;
        expect_post(
            &server,
            "/api/risk-insights/",
            json!({ "link": "some-link", "save_data": false }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .risk_insights()
            .retrieve("some-link", RetrieveOptions::default())
            .await
            .unwrap();
        client
            .risk_insights()
            .retrieve(
                "some-link",
                RetrieveOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_financial_reports_save_data() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/api/financial-reports/",
            json!({ "link": "some-link", "save_data": true }),
        )
        .await;
        expect_post(
            &server,
            "/api/financial-reports/",
            json!({ "link": "some-link", "save_data": false, "account": "some-account" }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .financial_reports()
            .retrieve("some-link", FinancialReportOptions::default())
            .await
            .unwrap();
        client
            .financial_reports()
            .retrieve(
                "some-link",
                FinancialReportOptions {
                    account: Some("some-account".into()),
                    save_data: Some(false),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_investments_transactions_defaults() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/investments/transactions/",
            json!({
                "link": "some-link",
                "date_from": "2020-01-01",
                "date_to": today(),
                "save_data": true,
            }),
        )
        .await;
        expect_post(
            &server,
            "/investments/transactions/",
            json!({
                "link": "some-link",
                "date_from": "2020-01-01",
                "date_to": "2020-02-01",
                "save_data": false,
            }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .investments_transactions()
            .retrieve("some-link", "2020-01-01", InvestmentsTransactionOptions::default())
            .await
            .unwrap();
        client
            .investments_transactions()
            .retrieve(
                "some-link",
                "2020-01-01",
                InvestmentsTransactionOptions {
                    date_to: Some("2020-02-01".into()),
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_transactions_date_to_defaults_to_today() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/api/transactions/",
            json!({
                "link": "some-link",
                "date_from": "2020-01-01",
                "date_to": today(),
                "save_data": false,
            }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .transactions()
            .retrieve(
                "some-link",
                "2020-01-01",
                TransactionOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_accounts_and_statements_save_data_false() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/api/accounts/",
            json!({ "link": "some-link", "save_data": false }),
        )
        .await;
        expect_post(
            &server,
            "/api/statements/",
            json!({
                "link": "some-link",
                "account": "some-account",
                "year": 2020,
                "month": 1,
                "save_data": false,
            }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .accounts()
            .retrieve(
                "some-link",
                AccountOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        client
            .statements()
            .retrieve(
                "some-link",
                "some-account",
                2020,
                1,
                StatementOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_invoices_and_balances_save_data_false() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/api/invoices/",
            json!({
                "link": "some-link",
                "date_from": "2020-01-01",
                "date_to": "2020-01-31",
                "type": "OUTFLOW",
                "save_data": false,
            }),
        )
        .await;
        expect_post(
            &server,
            "/api/balances/",
            json!({
                "link": "some-link",
                "date_from": "2020-01-01",
                "date_to": "2020-01-31",
                "save_data": false,
            }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .invoices()
            .retrieve(
                "some-link",
                "2020-01-01",
                "2020-01-31",
                InvoiceType::Outflow,
                InvoiceOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        client
            .balances()
            .retrieve(
                "some-link",
                "2020-01-01",
                BalanceOptions {
                    date_to: Some("2020-01-31".into()),
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_tax_resources_save_data() {
        let server = mock_api().await;
        expect_post(
            &server,
            "/api/tax-status/",
            json!({ "link": "some-link", "save_data": true }),
        )
        .await;
        expect_post(
            &server,
            "/api/tax-status/",
            json!({ "link": "some-link", "save_data": false }),
        )
        .await;
        expect_post(
            &server,
            "/api/tax-compliance-status/",
            json!({ "link": "some-link", "save_data": false }),
        )
        .await;
        expect_post(
            &server,
            "/api/tax-returns/",
            json!({ "link": "some-link", "save_data": false, "year_from": 2019 }),
        )
        .await;

        let client = create_client(&server).await;
        client
            .tax_status()
            .retrieve("some-link", TaxStatusOptions::default())
            .await
            .unwrap();
        client
            .tax_status()
            .retrieve(
                "some-link",
                TaxStatusOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        client
            .tax_compliance_status()
            .retrieve(
                "some-link",
                TaxComplianceStatusOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        client
            .tax_returns()
            .retrieve(
                "some-link",
                Some(2019),
                None,
                TaxReturnOptions {
                    save_data: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
}
