//! Composition root: builds adapters and services from configuration.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::exchangerate::ExchangeRateApiClient;
use crate::adapter::outbound::http::build_client;
use crate::adapter::outbound::koreaexim::KoreaEximClient;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::opinet::OpinetClient;
use crate::adapter::outbound::yahoo::YahooChartClient;
use crate::application::fx::{FxService, PerCurrencyFxProvider};
use crate::application::indicators::IndicatorSources;
use crate::application::service::ReportService;
use crate::error::Result;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::notifier::{LogNotifier, Notifier};
use crate::port::outbound::source::{FuelPriceSource, FxRateProvider, QuoteSource};

/// Name shown for the per-currency FX fallback.
pub const FX_FALLBACK_NAME: &str = "ExchangeRate-API";

/// Every upstream provider, before they are grouped into an
/// [`IndicatorSources`]. Kept separate so diagnostics can query each one.
pub struct Providers {
    /// `None` when `KOREAEXIM_API_KEY` is unset.
    pub fx_primary: Option<Arc<dyn FxRateProvider>>,
    pub fx_fallback: Arc<dyn FxRateProvider>,
    /// `None` when `OPINET_API_KEY` is unset.
    pub fuel: Option<Arc<dyn FuelPriceSource>>,
    pub quotes: Arc<dyn QuoteSource>,
}

impl Providers {
    pub fn into_indicator_sources(self, config: &Config) -> IndicatorSources {
        IndicatorSources::new(
            FxService::new(self.fx_primary, self.fx_fallback),
            self.fuel,
            self.quotes,
            config.sources.symbols.clone(),
        )
    }
}

/// Build all providers from configuration and credentials.
pub fn build_providers(config: &Config) -> Providers {
    let sources = &config.sources;
    let http = build_client(sources.timeout());

    let fx_primary: Option<Arc<dyn FxRateProvider>> =
        match &config.credentials.koreaexim_api_key {
            Some(key) => Some(Arc::new(KoreaEximClient::new(
                http.clone(),
                sources.koreaexim_url.clone(),
                key.clone(),
            ))),
            None => {
                info!("KOREAEXIM_API_KEY not set, FX rates use the public fallback");
                None
            }
        };

    let lookup = Arc::new(ExchangeRateApiClient::new(
        http.clone(),
        sources.exchangerate_url.clone(),
    ));
    let fx_fallback: Arc<dyn FxRateProvider> =
        Arc::new(PerCurrencyFxProvider::new(FX_FALLBACK_NAME, lookup));

    let fuel: Option<Arc<dyn FuelPriceSource>> = match &config.credentials.opinet_api_key {
        Some(key) => Some(Arc::new(OpinetClient::new(
            http.clone(),
            sources.opinet_url.clone(),
            key.clone(),
        ))),
        None => {
            info!("OPINET_API_KEY not set, domestic fuel prices disabled");
            None
        }
    };

    let quotes: Arc<dyn QuoteSource> = Arc::new(YahooChartClient::new(
        http,
        sources.yahoo_url.clone(),
        sources.user_agent.clone(),
    ));

    Providers {
        fx_primary,
        fx_fallback,
        fuel,
        quotes,
    }
}

/// Build the notifier.
///
/// A dry run logs reports instead of sending them and needs no credentials.
/// Otherwise Telegram credentials are required.
#[cfg(feature = "telegram")]
pub fn build_notifier(config: &Config, dry_run: bool) -> Result<Arc<dyn Notifier>> {
    if dry_run {
        info!("Dry run: reports are logged, not sent");
        return Ok(Arc::new(LogNotifier));
    }

    let creds = config.require_telegram()?;
    let http = build_client(config.sources.timeout());
    Ok(Arc::new(TelegramNotifier::new(
        http,
        TelegramConfig {
            bot_token: creds.bot_token,
            chat_id: creds.chat_id,
            api_url: config.telegram.api_url.clone(),
        },
    )))
}

/// Build the notifier (non-telegram variant).
#[cfg(not(feature = "telegram"))]
pub fn build_notifier(_config: &Config, dry_run: bool) -> Result<Arc<dyn Notifier>> {
    if !dry_run {
        warn!("Built without the telegram feature, reports are logged only");
    }
    Ok(Arc::new(LogNotifier))
}

/// Wire the report service: providers, notifier and system clock.
pub fn build_report_service(config: &Config, dry_run: bool) -> Result<ReportService> {
    let notifier = build_notifier(config, dry_run)?;
    let indicators = build_providers(config).into_indicator_sources(config);
    let clock = SystemClock::new(config.schedule.timezone);

    let creds = &config.credentials;
    if creds.koreaexim_api_key.is_none() && creds.opinet_api_key.is_none() {
        warn!("No provider API keys configured, reports use public sources only");
    }

    Ok(ReportService::new(
        Arc::new(indicators),
        notifier,
        Arc::new(clock),
    ))
}
