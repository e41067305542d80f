use chef_menu::cli::Cli;
use chef_menu::config::AppConfig;
use chef_menu::error::MenuError;
use chef_menu::logging::init_logging;
use chef_menu::output::OutputMode;
use chef_menu::shell::{self, ShellOptions};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config).map_err(MenuError::from)?;
    config.validate().map_err(MenuError::InvalidConfig)?;

    init_logging(&config.logging);
    info!(config_dir = %cli.config, "starting chef-menu");

    shell::run(
        &config,
        ShellOptions {
            mode: OutputMode::from_json_flag(cli.json),
            skip_splash: cli.skip_splash,
        },
    )
    .await?;

    Ok(())
}
