use anyhow::Context;
use clap::Parser;
use regression_apitest::adapters::prompt::resolve_server_address;
use regression_apitest::core::runner::{build_base_url, join_api_url};
use regression_apitest::domain::ports::ConfigSource;
use regression_apitest::utils::{logger, validation::Validate};
use regression_apitest::{CliConfig, FileConfig, ReqwestFetcher, Settings, SmokeRunner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match &cli.config {
        Some(path) => {
            let config = FileConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path.display()))?;
            config.validate().context("Invalid config file")?;
            Some(config)
        }
        None => None,
    };

    // 命令列優先於設定檔
    let mut layers: Vec<&dyn ConfigSource> = Vec::new();
    layers.push(&cli);
    if let Some(config) = &file_config {
        layers.push(config);
    }

    let settings = Settings::resolve(&layers);
    settings.validate().context("Configuration validation failed")?;

    let guard = logger::init_logger(&settings.log_target, settings.log_level)
        .context("Failed to initialize logging")?;

    let base_url = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        resolve_server_address(
            settings.server_address.as_deref(),
            &mut stdin.lock(),
            &mut stdout.lock(),
        )
        .and_then(|address| build_base_url(&address))
    };
    let base_url = match base_url {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("❌ {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            drop(guard);
            std::process::exit(1);
        }
    };

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no requests will be sent");
        for api_call in &settings.api_calls {
            tracing::info!("Would request: {}", join_api_url(&base_url, api_call));
        }
        return Ok(());
    }

    let fetcher = ReqwestFetcher::new(settings.timeout).context("Failed to build HTTP client")?;
    let runner = SmokeRunner::new(fetcher, base_url);

    if let Err(e) = runner.run(&settings.api_calls).await {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        // 先 drop guard 讓日誌寫完再結束
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}
