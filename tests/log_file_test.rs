use httpmock::prelude::*;
use regression_apitest::utils::logger::{init_logger, LogLevel, LogTarget};
use regression_apitest::{ReqwestFetcher, SmokeRunner};
use std::time::Duration;
use tempfile::TempDir;

// 全域 subscriber 只能安裝一次，所以這個檔案只放一個測試
#[tokio::test]
async fn test_run_writes_results_to_log_file() {
    std::env::remove_var("RUST_LOG");

    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("regressionapitest.log");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/wikifolios");
        then.status(200).body(r#"[{"id":1}]"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/trades");
        then.status(200).body("null");
    });

    let guard = init_logger(&LogTarget::File(log_path.clone()), LogLevel::Trace).unwrap();

    let fetcher = ReqwestFetcher::new(Duration::from_secs(5)).unwrap();
    let runner = SmokeRunner::new(fetcher, server.base_url());
    let calls = vec!["api/v1/wikifolios".to_string(), "api/v1/trades".to_string()];
    runner.run(&calls).await.unwrap();

    drop(guard);

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Creating requests for"));
    assert!(log.contains("Checking API call: api/v1/wikifolios"));
    assert!(log.contains("API call api/v1/wikifolios succeeded: response was a valid JSON"));
    assert!(log.contains("API call api/v1/trades failed: the response was null"));
    assert!(log.contains("API call api/v1/trades succeeded: response was a valid JSON"));
    // Trace 等級會記錄回應內容
    assert!(log.contains("Got following response body"));
    assert!(log.contains(r#"[{"id":1}]"#));
}
