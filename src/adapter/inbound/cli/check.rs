//! Handlers for the `check` command group.

use std::path::Path;

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::adapter::inbound::cli::{load_config, output};
use crate::domain::FxRates;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap::{build_notifier, build_providers};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::credentials::{
    KOREAEXIM_API_KEY, OPINET_API_KEY, TELEGRAM_BOT_TOKEN, TELEGRAM_CHAT_ID,
};
use crate::port::outbound::clock::Clock;
use crate::port::outbound::source::FxRateProvider;

/// Validate configuration and list credential status.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let creds = &config.credentials;
    let credentials = [
        (TELEGRAM_BOT_TOKEN, creds.telegram_bot_token.is_some()),
        (TELEGRAM_CHAT_ID, creds.telegram_chat_id.is_some()),
        (KOREAEXIM_API_KEY, creds.koreaexim_api_key.is_some()),
        (OPINET_API_KEY, creds.opinet_api_key.is_some()),
    ];
    let telegram_ready = config.require_telegram().is_ok();

    if output::is_json() {
        let set: serde_json::Map<String, Value> = credentials
            .iter()
            .map(|(name, set)| ((*name).to_string(), Value::Bool(*set)))
            .collect();
        output::json_output(json!({
            "command": "check.config",
            "valid": true,
            "schedule": {
                "open": config.schedule.open.to_string(),
                "close": config.schedule.close.to_string(),
                "skip_weekends": config.schedule.skip_weekends,
                "timezone": config.schedule.timezone.name(),
                "tick_interval_secs": config.schedule.tick_interval_secs,
            },
            "credentials": set,
            "telegram_ready": telegram_ready,
        }));
        return Ok(());
    }

    output::section("Configuration");
    output::field("Open", config.schedule.open);
    output::field("Close", config.schedule.close);
    output::field("Timezone", config.schedule.timezone);
    output::field("Weekends", if config.schedule.skip_weekends { "skipped" } else { "included" });
    output::field("Tick", format!("{}s", config.schedule.tick_interval_secs));
    output::field("Timeout", format!("{}s", config.sources.timeout_secs));

    output::section("Credentials");
    for (name, set) in credentials {
        let status = if set {
            output::highlight("set")
        } else {
            output::muted("not set")
        };
        output::field(name, status);
    }

    output::success("Configuration is valid");
    if !telegram_ready {
        output::warning("Telegram credentials missing: `run` will refuse to start");
        output::hint("set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID in the environment or .env");
    }
    Ok(())
}

/// Send a test message through the configured notifier.
pub async fn execute_telegram(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let creds = config.require_telegram()?;
    let notifier = build_notifier(&config, false)?;

    let now = SystemClock::new(config.schedule.timezone).now();
    let text = format!(
        "✅ <b>Market notifier test</b>\n📅 {}",
        now.format("%Y-%m-%d %H:%M (%Z)")
    );

    if !output::is_json() {
        output::section("Telegram Check");
    }
    let pb = output::spinner("Sending Telegram test message");
    if let Err(e) = notifier.send(&text).await {
        output::spinner_fail(&pb, "Telegram test message not delivered");
        return Err(e);
    }
    output::spinner_success(&pb, "Telegram test message sent");

    let masked = masked_token(&creds.bot_token);
    if output::is_json() {
        output::json_output(json!({
            "command": "check.telegram",
            "masked_token": masked,
            "chat_id": creds.chat_id,
            "status": "sent",
        }));
        return Ok(());
    }

    output::field("Bot token", masked);
    output::field("Chat ID", &creds.chat_id);
    output::hint("check Telegram for the message");
    Ok(())
}

#[cfg(feature = "telegram")]
fn masked_token(token: &str) -> String {
    crate::adapter::outbound::notifier::telegram::format::mask_token(token)
}

#[cfg(not(feature = "telegram"))]
fn masked_token(_token: &str) -> String {
    "(telegram feature disabled)".to_string()
}

/// Query every configured provider once and report what came back.
pub async fn execute_sources(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let providers = build_providers(&config);
    let today = SystemClock::new(config.schedule.timezone).now().date_naive();
    let mut results: Vec<Value> = Vec::new();

    if !output::is_json() {
        output::section("Source Check");
    }

    match &providers.fx_primary {
        Some(primary) => check_fx(primary.as_ref(), today, &mut results).await,
        None => skipped(&mut results, "Korea Eximbank", KOREAEXIM_API_KEY),
    }

    check_fx(providers.fx_fallback.as_ref(), today, &mut results).await;

    match &providers.fuel {
        Some(fuel) => {
            let pb = output::spinner("Fuel: Opinet");
            match fuel.national_averages().await {
                Ok(quotes) => {
                    let message = format!("Fuel: Opinet ({} products)", quotes.len());
                    output::spinner_success(&pb, &message);
                    results.push(json!({ "source": "Opinet", "ok": true, "count": quotes.len() }));
                }
                Err(e) => {
                    output::spinner_fail(&pb, &format!("Fuel: Opinet: {e}"));
                    results.push(failure("Opinet", &e));
                }
            }
        }
        None => skipped(&mut results, "Opinet", OPINET_API_KEY),
    }

    let symbols = &config.sources.symbols;
    let quotes = [
        ("WTI", &symbols.wti),
        ("Brent", &symbols.brent),
        ("Gold", &symbols.gold),
    ];
    for (label, symbol) in quotes {
        let pb = output::spinner(&format!("Quote: {label} ({symbol})"));
        match providers.quotes.spot_price(symbol).await {
            Ok(price) => {
                output::spinner_success(&pb, &format!("Quote: {label} ({symbol}) ${price:.2}"));
                results.push(json!({ "source": symbol, "ok": true, "price": price }));
            }
            Err(e) => {
                output::spinner_fail(&pb, &format!("Quote: {label} ({symbol}): {e}"));
                results.push(failure(symbol, &e));
            }
        }
    }

    let failed = results.iter().filter(|r| r["ok"] == Value::Bool(false)).count();
    if output::is_json() {
        output::json_output(json!({
            "command": "check.sources",
            "results": results,
            "failed": failed,
        }));
        return Ok(());
    }

    if failed == 0 {
        output::success("All configured sources responded");
    } else {
        output::warning(&format!(
            "{failed} source(s) failed; their sections will show as unavailable"
        ));
    }
    Ok(())
}

async fn check_fx(provider: &dyn FxRateProvider, today: NaiveDate, results: &mut Vec<Value>) {
    let name = provider.name();
    let pb = output::spinner(&format!("FX: {name}"));
    match provider.fetch_rates(today).await {
        Ok(rates) => {
            output::spinner_success(&pb, &format!("FX: {name} ({})", describe_rates(&rates)));
            results.push(json!({ "source": name, "ok": true, "count": rates.len() }));
        }
        Err(e) => {
            output::spinner_fail(&pb, &format!("FX: {name}: {e}"));
            results.push(failure(name, &e));
        }
    }
}

fn failure(source: &str, error: &Error) -> Value {
    json!({ "source": source, "ok": false, "error": error.to_string() })
}

fn skipped(results: &mut Vec<Value>, source: &str, credential: &str) {
    if !output::is_json() {
        output::note(&format!("{source}: skipped ({credential} not set)"));
    }
    results.push(json!({ "source": source, "ok": null, "skipped": true }));
}

fn describe_rates(rates: &FxRates) -> String {
    rates
        .iter()
        .map(|(currency, rate)| format!("{currency} {rate:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}
