//! Handler for the `run` command.

use std::path::Path;
use std::sync::Arc;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{banner, load_config, output};
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_report_service, FX_FALLBACK_NAME};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::controller::{shutdown_signal, ProcessController};

/// Execute the run command.
pub async fn execute(config_path: Option<&Path>, args: &RunArgs) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".into();
    }

    if !args.dry_run {
        config.require_telegram()?;
    }

    let styled_output = config.logging.format != "json";
    if !args.no_banner && styled_output && !output::is_quiet() {
        banner::print_banner();
    }
    if styled_output {
        print_startup_config(&config, args.dry_run);
    }

    config.init_logging();

    let service = Arc::new(build_report_service(&config, args.dry_run)?);
    let controller = ProcessController::new(
        service,
        config.schedule.schedule(),
        config.schedule.tick_interval(),
    );
    controller.run_until(shutdown_signal()).await
}

/// Print the effective schedule and which providers are active.
fn print_startup_config(config: &Config, dry_run: bool) {
    let schedule = &config.schedule;
    let creds = &config.credentials;

    output::header(env!("CARGO_PKG_VERSION"));
    output::field(
        "Schedule",
        format!(
            "open {} · close {} ({})",
            output::highlight(schedule.open),
            output::highlight(schedule.close),
            schedule.timezone
        ),
    );
    output::field(
        "Weekends",
        if schedule.skip_weekends {
            "skipped"
        } else {
            "included"
        },
    );
    if output::verbosity() > 0 {
        output::field("Tick", format!("{}s", schedule.tick_interval_secs));
        output::field("Timeout", format!("{}s", config.sources.timeout_secs));
    }

    let fx = if creds.koreaexim_api_key.is_some() {
        format!("Korea Eximbank {}", output::muted(format!("(fallback {FX_FALLBACK_NAME})")))
    } else {
        format!(
            "{FX_FALLBACK_NAME} {}",
            output::muted("(KOREAEXIM_API_KEY not set)")
        )
    };
    output::field("FX", fx);

    let fuel = if creds.opinet_api_key.is_some() {
        "Opinet".to_string()
    } else {
        format!("disabled {}", output::muted("(OPINET_API_KEY not set)"))
    };
    output::field("Fuel", fuel);

    if dry_run {
        output::field("Delivery", "log only");
        output::warning("Dry-run mode enabled - reports will be logged, not sent");
    } else {
        let chat = creds.telegram_chat_id.as_deref().unwrap_or("-");
        output::field("Delivery", format!("Telegram chat {chat}"));
    }
}
