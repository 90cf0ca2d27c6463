//! Formats an [`IndicatorSnapshot`] into a Telegram HTML message.
//!
//! Composition is pure and cannot fail: every section renders either the
//! values that were fetched or a single "unavailable" line.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Currency, FuelProduct, IndicatorSnapshot, ReportKind};

use super::markup::escape_html;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Currencies in display order.
const FX_ORDER: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Jpy100, Currency::Cny];

/// Compose the report for `kind` from `snapshot`.
pub fn compose(kind: ReportKind, snapshot: &IndicatorSnapshot) -> String {
    let (header, emoji) = match kind {
        ReportKind::Startup => ("🚀 <b>Market Notifier Started</b> 🚀", "📊"),
        ReportKind::Open => ("🔔 <b>Market Open</b> 🔔", "🌅"),
        ReportKind::Close => ("🔔 <b>Market Close</b> 🔔", "🌆"),
    };

    let mut msg = format!(
        "{}\n📅 {}\n",
        header,
        snapshot.taken_at.format("%Y-%m-%d %H:%M (%Z)")
    );

    push_fx(&mut msg, snapshot);
    push_international_oil(&mut msg, snapshot);
    push_domestic_fuel(&mut msg, snapshot);
    push_gold(&mut msg, snapshot);

    msg.push_str(&format!("\n{emoji} Have a good trading day! {emoji}"));
    msg
}

/// Final message sent when the process shuts down.
pub fn shutdown_notice() -> String {
    "🔴 <b>Market notifier stopped.</b>".to_string()
}

/// Half-up to two decimals, zero-padded.
fn two_places(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn push_section(msg: &mut String, title: &str) {
    msg.push_str(&format!("\n{RULE}\n{title}\n{RULE}\n"));
}

fn push_fx(msg: &mut String, snapshot: &IndicatorSnapshot) {
    let title = match &snapshot.fx.source {
        Some(source) => format!("💱 <b>Exchange Rates</b> <i>({})</i>", escape_html(source)),
        None => "💱 <b>Exchange Rates</b>".to_string(),
    };
    push_section(msg, &title);

    let rates = &snapshot.fx.rates;
    if rates.is_empty() {
        msg.push_str("❌ Exchange rates unavailable\n");
        return;
    }

    for currency in FX_ORDER {
        if let Some(rate) = rates.get(&currency) {
            msg.push_str(&format!(
                "{} {}/KRW: {} KRW\n",
                currency.flag(),
                currency.label(),
                two_places(*rate)
            ));
        }
    }
}

fn push_international_oil(msg: &mut String, snapshot: &IndicatorSnapshot) {
    push_section(msg, "🛢️ <b>International Oil</b>");

    if snapshot.wti.is_none() && snapshot.brent.is_none() {
        msg.push_str("❌ International oil prices unavailable\n");
        return;
    }
    if let Some(wti) = snapshot.wti {
        msg.push_str(&format!("🇺🇸 WTI: ${}\n", two_places(wti)));
    }
    if let Some(brent) = snapshot.brent {
        msg.push_str(&format!("🇬🇧 Brent: ${}\n", two_places(brent)));
    }
}

fn push_domestic_fuel(msg: &mut String, snapshot: &IndicatorSnapshot) {
    push_section(msg, "⛽ <b>Domestic Fuel</b> <i>(national average)</i>");

    if snapshot.fuel.is_empty() {
        msg.push_str("❌ Domestic fuel prices unavailable\n");
        return;
    }

    for product in FuelProduct::ALL {
        if let Some(quote) = snapshot.fuel_quote(product) {
            msg.push_str(&format!(
                "{} {}: {} KRW {}\n",
                product.icon(),
                product.label(),
                escape_html(&quote.price),
                quote.direction().glyph()
            ));
        }
    }
}

fn push_gold(msg: &mut String, snapshot: &IndicatorSnapshot) {
    push_section(msg, "🥇 <b>Gold</b>");

    match snapshot.gold {
        Some(gold) => msg.push_str(&format!("💰 Gold: ${}/oz\n", two_places(gold))),
        None => msg.push_str("❌ Gold price unavailable\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FuelQuote, FxQuote};
    use chrono::TimeZone;
    use chrono_tz::Asia::Seoul;
    use rust_decimal_macros::dec;

    fn empty_snapshot() -> IndicatorSnapshot {
        let taken_at = Seoul.with_ymd_and_hms(2026, 10, 19, 9, 0, 12).unwrap();
        IndicatorSnapshot::empty(taken_at)
    }

    fn full_snapshot() -> IndicatorSnapshot {
        let mut snapshot = empty_snapshot();
        snapshot.fx = FxQuote {
            rates: [
                (Currency::Usd, dec!(1380.5)),
                (Currency::Eur, dec!(1601.35)),
                (Currency::Jpy100, dec!(942.11)),
            ]
            .into_iter()
            .collect(),
            source: Some("Korea Eximbank".into()),
        };
        snapshot.fuel = vec![
            FuelQuote {
                product: FuelProduct::Gasoline,
                price: "1650.23".into(),
                delta: "120".into(),
            },
            FuelQuote {
                product: FuelProduct::Diesel,
                price: "1521.37".into(),
                delta: "-50".into(),
            },
            FuelQuote {
                product: FuelProduct::Lpg,
                price: "1011.40".into(),
                delta: "0".into(),
            },
        ];
        snapshot.wti = Some(dec!(71.42));
        snapshot.brent = Some(dec!(75.1));
        snapshot.gold = Some(dec!(2400));
        snapshot
    }

    #[test]
    fn all_absent_renders_only_unavailable_lines() {
        let msg = compose(ReportKind::Open, &empty_snapshot());

        assert!(msg.starts_with("🔔 <b>Market Open</b> 🔔\n📅 2026-10-19 09:00 (KST)\n"));
        assert!(msg.ends_with("🌅 Have a good trading day! 🌅"));
        assert_eq!(msg.matches("unavailable").count(), 4);
        assert!(msg.contains("❌ Exchange rates unavailable"));
        assert!(msg.contains("❌ International oil prices unavailable"));
        assert!(msg.contains("❌ Domestic fuel prices unavailable"));
        assert!(msg.contains("❌ Gold price unavailable"));
        assert!(!msg.contains("KRW:"));
        assert!(!msg.contains('$'));
        assert!(!msg.contains("<i>(Korea"));
    }

    #[test]
    fn renders_fetched_values() {
        let msg = compose(ReportKind::Close, &full_snapshot());

        assert!(msg.starts_with("🔔 <b>Market Close</b> 🔔"));
        assert!(msg.contains("💱 <b>Exchange Rates</b> <i>(Korea Eximbank)</i>"));
        assert!(msg.contains("🇺🇸 USD/KRW: 1380.50 KRW\n"));
        assert!(msg.contains("🇪🇺 EUR/KRW: 1601.35 KRW\n"));
        assert!(msg.contains("🇯🇵 JPY(100)/KRW: 942.11 KRW\n"));
        assert!(!msg.contains("CNY/KRW"));
        assert!(msg.contains("🇺🇸 WTI: $71.42\n"));
        assert!(msg.contains("🇬🇧 Brent: $75.10\n"));
        assert!(msg.contains("💰 Gold: $2400.00/oz\n"));
        assert!(!msg.contains("unavailable"));
        assert!(msg.ends_with("🌆 Have a good trading day! 🌆"));
    }

    #[test]
    fn fuel_lines_carry_direction_glyphs() {
        let msg = compose(ReportKind::Startup, &full_snapshot());

        assert!(msg.contains("⛽ Gasoline: 1650.23 KRW 📈\n"));
        assert!(msg.contains("🚛 Diesel: 1521.37 KRW 📉\n"));
        assert!(msg.contains("🔥 LPG: 1011.40 KRW ➖\n"));
        assert!(!msg.contains("Kerosene"));
    }

    #[test]
    fn only_one_oil_benchmark_available() {
        let mut snapshot = empty_snapshot();
        snapshot.brent = Some(dec!(75.1));
        let msg = compose(ReportKind::Open, &snapshot);

        assert!(msg.contains("🇬🇧 Brent: $75.10"));
        assert!(!msg.contains("WTI"));
        assert!(!msg.contains("International oil prices unavailable"));
    }

    #[test]
    fn startup_header() {
        let msg = compose(ReportKind::Startup, &empty_snapshot());
        assert!(msg.starts_with("🚀 <b>Market Notifier Started</b> 🚀"));
        assert!(msg.ends_with("📊 Have a good trading day! 📊"));
    }

    #[test]
    fn provider_strings_are_escaped() {
        let mut snapshot = empty_snapshot();
        snapshot.fuel = vec![FuelQuote {
            product: FuelProduct::Kerosene,
            price: "<1300>".into(),
            delta: "".into(),
        }];
        let msg = compose(ReportKind::Open, &snapshot);
        assert!(msg.contains("Kerosene: &lt;1300&gt; KRW ➖"));
    }

    #[test]
    fn prices_round_half_up_to_two_places() {
        let mut snapshot = empty_snapshot();
        snapshot.gold = Some(dec!(2411.255));
        snapshot.wti = Some(dec!(71.4));
        let msg = compose(ReportKind::Open, &snapshot);

        assert!(msg.contains("💰 Gold: $2411.26/oz"));
        assert!(msg.contains("🇺🇸 WTI: $71.40"));
    }

    #[test]
    fn shutdown_notice_text() {
        assert_eq!(shutdown_notice(), "🔴 <b>Market notifier stopped.</b>");
    }
}
