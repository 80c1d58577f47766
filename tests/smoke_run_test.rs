use httpmock::prelude::*;
use regression_apitest::core::runner::build_base_url;
use regression_apitest::core::CheckKind;
use regression_apitest::{ReqwestFetcher, SmokeError, SmokeRunner};
use std::time::Duration;

fn runner_for(base_url: String) -> SmokeRunner<ReqwestFetcher> {
    let fetcher = ReqwestFetcher::new(Duration::from_secs(5)).unwrap();
    SmokeRunner::new(fetcher, base_url)
}

#[tokio::test]
async fn test_end_to_end_all_checks_pass() {
    let server = MockServer::start();
    let wikifolios = server.mock(|when, then| {
        when.method(GET).path("/api/v1/wikifolios");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 1, "name": "Tech Growth"},
                {"id": 2, "name": "Dividend Focus"}
            ]));
    });
    let trades = server.mock(|when, then| {
        when.method(GET).path("/api/v1/trades");
        then.status(200).body(r#"{"trades": []}"#);
    });

    // httpmock 的 base_url 帶 scheme，build_base_url 應保留原樣
    let base_url = build_base_url(&server.base_url()).unwrap();
    let runner = runner_for(base_url);

    let calls = vec!["api/v1/wikifolios".to_string(), "api/v1/trades".to_string()];
    let summary = runner.run(&calls).await.unwrap();

    wikifolios.assert();
    trades.assert();
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.failed_calls(), 0);
}

#[tokio::test]
async fn test_address_without_scheme() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/trades");
        then.status(200).body("[]");
    });

    let address = format!("127.0.0.1:{}", server.port());
    let runner = runner_for(build_base_url(&address).unwrap());

    let outcome = runner.check_api_call("api/v1/trades").await.unwrap();

    mock.assert();
    assert!(outcome.url.starts_with("http://127.0.0.1:"));
    assert!(outcome.passed());
}

#[tokio::test]
async fn test_failed_checks_do_not_stop_the_run() {
    let server = MockServer::start();
    let null_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/wikifolios");
        then.status(200).body("null");
    });
    let html_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/trades");
        then.status(502).body("<html><body>Bad Gateway</body></html>");
    });
    let ok_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/import/wikifolios");
        then.status(200).body(r#""imported""#);
    });

    let runner = runner_for(server.base_url());
    let calls = vec![
        "api/v1/wikifolios".to_string(),
        "api/v1/trades".to_string(),
        "api/v1/import/wikifolios".to_string(),
    ];
    let summary = runner.run(&calls).await.unwrap();

    null_mock.assert();
    html_mock.assert();
    ok_mock.assert();

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.passed_calls(), 1);

    let null_failures: Vec<CheckKind> = summary.outcomes[0].failed_checks().collect();
    assert_eq!(null_failures, vec![CheckKind::NotNull]);

    let html_failures: Vec<CheckKind> = summary.outcomes[1].failed_checks().collect();
    assert_eq!(html_failures, vec![CheckKind::ValidJson]);

    assert!(summary.outcomes[2].passed());
}

#[tokio::test]
async fn test_empty_body_is_not_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/empty");
        then.status(204);
    });

    let runner = runner_for(server.base_url());
    let outcome = runner.check_api_call("/empty").await.unwrap();

    let failures: Vec<CheckKind> = outcome.failed_checks().collect();
    assert_eq!(failures, vec![CheckKind::ValidJson]);
}

#[tokio::test]
async fn test_unreachable_server_aborts_run() {
    // 綁定後立即釋放的埠，不會有人監聽
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let runner = runner_for(format!("http://127.0.0.1:{}", port));
    let calls = vec!["api/v1/trades".to_string()];
    let err = runner.run(&calls).await.unwrap_err();

    assert!(matches!(err, SmokeError::RequestError { .. }));
    assert!(err.is_transport());
}
