//! Gateway tests: endpoint wiring, error classification and retries.

mod common;

use common::{client, FakeTransport, Reply, BASE_URL};
use ranking_insight_sdk::models::ProductFilter;
use ranking_insight_sdk::transport::Method;
use ranking_insight_sdk::{ErrorKind, RankingClient, RankingError};
use serde_json::json;

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

#[test]
fn health_and_stats() {
    let c = client(common::healthy_transport());

    let health = c.health().unwrap();
    assert_eq!(health.status, "ok");
    assert!(health.initialized);

    let stats = c.stats().unwrap();
    assert_eq!(stats.total_products, 120);
    assert_eq!(stats.laneige_products, 4);
    assert_eq!(stats.top5_products, 2);
    assert_eq!(stats.average_rank, 6.3);
}

#[test]
fn products_list_sends_filter_as_query() {
    let transport = FakeTransport::new().with_json("/api/products", common::products_json());
    let log = transport.log();
    let c = client(transport);

    let products = c
        .products()
        .list(&ProductFilter {
            category: Some("lip_care".into()),
            laneige_only: true,
            limit: Some(5),
        })
        .unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].product_name, "Lip Sleeping Mask");
    assert_eq!(products[2].rating, None);
    assert_eq!(products[1].skin_type.as_deref(), Some("All"));

    let req = log.last();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, format!("{BASE_URL}/api/products"));
    assert_eq!(
        req.query,
        vec![
            ("category".to_string(), "lip_care".to_string()),
            ("laneige_only".to_string(), "true".to_string()),
            ("limit".to_string(), "5".to_string()),
        ]
    );
}

#[test]
fn default_product_filter_sends_no_query() {
    let transport = FakeTransport::new().with_json("/api/products", json!([]));
    let log = transport.log();
    let c = client(transport);

    assert!(c.products().list(&ProductFilter::default()).unwrap().is_empty());
    assert!(log.last().query.is_empty());
}

#[test]
fn laneige_products() {
    let c = client(common::healthy_transport());
    let products = c.products().laneige().unwrap();
    assert!(products.iter().all(|p| p.is_laneige));
}

#[test]
fn ranking_history_defaults_to_all_categories() {
    let transport = FakeTransport::new().with_json(
        "/api/rankings",
        json!({
            "lip_care": [
                {"product_id": 1, "product_name": "Lip Sleeping Mask", "brand": "LANEIGE",
                 "is_laneige": true, "price": 24.0, "day_2": 4, "day_1": 8, "day_10": 1},
                {"product_name": "Competitor Balm", "brand": "Other", "is_laneige": false,
                 "day_1": 2, "day_2": null}
            ]
        }),
    );
    let log = transport.log();
    let c = client(transport);

    let history = c.rankings().history(None, 14).unwrap();
    assert_eq!(
        log.last().query,
        vec![
            ("category".to_string(), "all".to_string()),
            ("days".to_string(), "14".to_string()),
        ]
    );

    let rows = history.get("lip_care").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].days(),
        vec![(1, Some(8.0)), (2, Some(4.0)), (10, Some(1.0))]
    );
    assert_eq!(rows[1].observed_ranks(), vec![2.0]);
    assert!(!rows[1].is_laneige);
}

#[test]
fn ranking_history_for_one_category() {
    let transport = FakeTransport::new().with_json("/api/rankings", json!({"skincare": []}));
    let log = transport.log();
    let c = client(transport);

    let history = c.rankings().history(Some("skincare"), 30).unwrap();
    assert!(history.get("skincare").unwrap().is_empty());
    assert_eq!(log.last().query[0], ("category".to_string(), "skincare".to_string()));
}

#[test]
fn summary_preserves_category_and_product_order() {
    let c = client(common::healthy_transport());
    let summary = c.rankings().summary().unwrap();

    assert_eq!(summary.keys().collect::<Vec<_>>(), vec!["lip_care", "skincare"]);
    let skincare = summary.get("skincare").unwrap();
    assert_eq!(
        skincare.keys().collect::<Vec<_>>(),
        vec!["Water Bank Cream", "Cream Skin Toner"]
    );
    let cream = skincare.get("Water Bank Cream").unwrap();
    assert_eq!(cream.current_rank, Some(12));
    assert_eq!(cream.top10_days, None);
}

#[test]
fn chart_data_sends_days() {
    let transport = FakeTransport::new().with_bytes("/api/rankings/chart-data", common::CHART_JSON.as_bytes());
    let log = transport.log();
    let c = client(transport);

    let points = c.rankings().chart_data(7).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].date, "Day 1");
    assert_eq!(points[0].rank("Lip_Sleeping_Mask"), Some(8.0));
    assert_eq!(points[1].rank("Lip_Glowy_Balm"), None);
    assert_eq!(log.last().query, vec![("days".to_string(), "7".to_string())]);
}

#[test]
fn chat_posts_message() {
    let transport = FakeTransport::new().with_json(
        "/api/chat",
        json!({"response": "Lip Sleeping Mask is #1", "context_used": []}),
    );
    let log = transport.log();
    let c = client(transport);

    let reply = c.chat().send("  Which product ranks best?  ").unwrap();
    assert_eq!(reply.response, "Lip Sleeping Mask is #1");
    assert_eq!(reply.context_used, Some(vec![]));

    let req = log.last();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(json!({"message": "Which product ranks best?"})));
}

#[test]
fn blank_chat_message_is_rejected_locally() {
    let transport = FakeTransport::new();
    let log = transport.log();
    let c = client(transport);

    let err = c.chat().send("   ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(log.count(), 0);
}

#[test]
fn reports_list_and_generate() {
    let transport = common::healthy_transport().with_json(
        "/api/reports/generate",
        json!({
            "success": true,
            "filepath": "output/ranking_report_20261017.xlsx",
            "filename": "ranking_report_20261017.xlsx"
        }),
    );
    let log = transport.log();
    let c = client(transport);

    let reports = c.reports().list().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].size, 18432);

    let generated = c.reports().generate(14).unwrap();
    assert!(generated.success);
    assert_eq!(generated.filename, "ranking_report_20261017.xlsx");
    assert_eq!(log.last().body, Some(json!({"days": 14})));
}

#[test]
fn generate_rejects_zero_days() {
    let c = client(FakeTransport::new());
    assert_eq!(
        c.reports().generate(0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn download_url_is_pure_and_encoded() {
    let transport = FakeTransport::new();
    let log = transport.log();
    let c = client(transport);

    assert_eq!(
        c.reports().download_url("ranking_report_20261016.xlsx"),
        format!("{BASE_URL}/api/reports/download/ranking_report_20261016.xlsx")
    );
    assert_eq!(
        c.reports().download_url("q3 report.xlsx"),
        format!("{BASE_URL}/api/reports/download/q3%20report.xlsx")
    );
    assert_eq!(log.count(), 0);
}

#[test]
fn download_to_writes_file() {
    let transport = FakeTransport::new().with_bytes(
        "/api/reports/download/ranking_report_20261016.xlsx",
        b"PK\x03\x04xlsx-bytes",
    );
    let c = client(transport);
    let dir = tempfile::tempdir().unwrap();

    let path = c
        .reports()
        .download_to("ranking_report_20261016.xlsx", dir.path())
        .unwrap();
    assert_eq!(path, dir.path().join("ranking_report_20261016.xlsx"));
    assert_eq!(std::fs::read(&path).unwrap(), b"PK\x03\x04xlsx-bytes");
}

#[test]
fn failed_download_leaves_no_file() {
    let transport = FakeTransport::new();
    let c = client(transport);
    let dir = tempfile::tempdir().unwrap();

    let err = c.reports().download_to("missing.xlsx", dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HttpStatus(404));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn download_rejects_path_traversal() {
    let transport = FakeTransport::new();
    let log = transport.log();
    let c = client(transport);
    let dir = tempfile::tempdir().unwrap();

    let err = c.reports().download_to("../secret.xlsx", dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(log.count(), 0);
}

#[test]
fn vector_sync_and_insights() {
    let transport = common::healthy_transport().with_json(
        "/api/vectordb/sync",
        json!({"success": true, "updated_count": 10, "history_days": 30, "message": "Sync complete!"}),
    );
    let c = client(transport);

    let sync = c.sync_vector_db().unwrap();
    assert!(sync.success);
    assert_eq!(sync.updated_count, 10);
    assert_eq!(sync.history_days, Some(30));

    let insights = c.insights().unwrap();
    assert_eq!(insights.performance_cards[0].kind, "best_seller");
    assert_eq!(insights.marketing_cards[0].recommendations.len(), 1);
    assert_eq!(insights.performance_chart[0].top5_rate, 40.0);
    assert_eq!(insights.category_trend[0].growth, 12.0);
    assert_eq!(insights.last_updated.as_deref(), Some("2026-10-16T09:00:00"));
}

#[test]
fn insights_tolerate_missing_sections() {
    let transport = FakeTransport::new().with_json("/api/insights", json!({"performanceCards": []}));
    let insights = client(transport).insights().unwrap();
    assert!(insights.marketing_cards.is_empty());
    assert!(insights.last_updated.is_none());
}

#[test]
fn db_stats_returns_raw_json() {
    let transport = FakeTransport::new().with_json("/api/db/stats", json!({"total_dates": 30}));
    assert_eq!(client(transport).db_stats().unwrap()["total_dates"], 30);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn http_status_error_carries_code_and_context() {
    let transport = FakeTransport::new().with_status("/api/stats", 503);
    let err = client(transport).stats().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::HttpStatus(503));
    assert_eq!(err.context(), Some("Failed to fetch stats"));
    assert!(err.to_string().starts_with("Failed to fetch stats"));
}

#[test]
fn transport_error_is_classified() {
    let transport = FakeTransport::new().with_failure("/api/insights", "connection refused");
    let err = client(transport).insights().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn malformed_json_is_a_decode_error() {
    let transport = FakeTransport::new().with_json("/api/stats", json!({"total_products": "many"}));
    let err = client(transport).stats().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(!err.is_retryable());
}

#[test]
fn non_json_body_is_a_decode_error() {
    let transport = FakeTransport::new().with_bytes("/api/rankings/summary", b"<html>oops</html>");
    let err = client(transport).rankings().summary().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.context(), Some("Failed to fetch ranking summary"));
}

#[test]
fn unknown_endpoint_is_404() {
    let err = client(FakeTransport::new()).stats().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HttpStatus(404));
}

// ---------------------------------------------------------------------------
// Retries
// ---------------------------------------------------------------------------

#[test]
fn get_retries_server_errors_then_succeeds() {
    let transport = FakeTransport::new().with_sequence(
        "/api/stats",
        vec![
            Reply::Json(503, json!({})),
            Reply::Fail("reset by peer".into()),
            Reply::Json(200, common::stats_json()),
        ],
    );
    let log = transport.log();
    let c = client(transport);

    assert_eq!(c.stats().unwrap().total_products, 120);
    assert_eq!(log.count_path("/api/stats"), 3);
}

#[test]
fn retries_are_bounded() {
    let transport = FakeTransport::new().with_status("/api/stats", 500);
    let log = transport.log();
    let c = client(transport);

    assert_eq!(c.stats().unwrap_err().kind(), ErrorKind::HttpStatus(500));
    // One attempt plus two retries.
    assert_eq!(log.count_path("/api/stats"), 3);
}

#[test]
fn client_errors_are_not_retried() {
    let transport = FakeTransport::new().with_status("/api/stats", 404);
    let log = transport.log();
    let c = client(transport);

    assert!(c.stats().is_err());
    assert_eq!(log.count_path("/api/stats"), 1);
}

#[test]
fn post_requests_are_not_retried() {
    let transport = FakeTransport::new().with_status("/api/reports/generate", 502);
    let log = transport.log();
    let c = client(transport);

    assert_eq!(
        c.reports().generate(30).unwrap_err().kind(),
        ErrorKind::HttpStatus(502)
    );
    assert_eq!(log.count_path("/api/reports/generate"), 1);
}

#[test]
fn zero_retries_sends_once() {
    let transport = FakeTransport::new().with_status("/api/stats", 503);
    let log = transport.log();
    let c = RankingClient::builder()
        .base_url(BASE_URL)
        .max_retries(0)
        .transport(transport)
        .build()
        .unwrap();

    assert!(c.stats().is_err());
    assert_eq!(log.count(), 1);
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn base_url_must_be_http() {
    let err = RankingClient::builder()
        .base_url("ftp://example.com")
        .transport(FakeTransport::new())
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, RankingError::InvalidArgument(_)));
}

#[test]
fn trailing_slash_is_trimmed() {
    let c = RankingClient::builder()
        .base_url("http://ranking.test/")
        .transport(FakeTransport::new())
        .build()
        .unwrap();
    assert_eq!(c.base_url(), "http://ranking.test");
    assert_eq!(
        c.to_string(),
        "RankingClient(base_url=http://ranking.test, max_retries=2)"
    );
}

#[test]
fn default_transport_builds_without_network() {
    let c = RankingClient::builder()
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    assert_eq!(c.base_url(), "http://127.0.0.1:9");
}
