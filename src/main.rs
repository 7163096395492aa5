use anyhow::Result;
use skypanel::{SkypanelConfig, web};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &SkypanelConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = SkypanelConfig::load()?;
    init_tracing(&config);

    tracing::info!(version = skypanel::VERSION, "starting skypanel");
    web::run(&config).await
}
