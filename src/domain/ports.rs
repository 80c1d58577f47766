use crate::utils::error::Result;
use async_trait::async_trait;

/// 取得 URL 回應內容的 HTTP 端口
#[async_trait]
pub trait ResponseFetcher: Send + Sync {
    async fn fetch_body(&self, url: &str) -> Result<String>;
}

/// 一層設定來源 (命令列、TOML 檔)，沒有值時回傳 None
pub trait ConfigSource {
    fn server_address(&self) -> Option<&str>;
    fn api_calls(&self) -> Option<&[String]>;
    fn log_file(&self) -> Option<&str>;
    fn log_level(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> Option<u64>;
}
