//! Indicator values gathered for a single report.

use std::collections::BTreeMap;
use std::fmt;

use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;

/// Currencies quoted against KRW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Currency {
    Usd,
    Eur,
    /// Japanese yen, quoted per 100 units.
    Jpy100,
    Cny,
}

impl Currency {
    /// Display label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Jpy100 => "JPY(100)",
            Self::Cny => "CNY",
        }
    }

    #[must_use]
    pub const fn flag(&self) -> &'static str {
        match self {
            Self::Usd => "🇺🇸",
            Self::Eur => "🇪🇺",
            Self::Jpy100 => "🇯🇵",
            Self::Cny => "🇨🇳",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// KRW-denominated rates keyed by currency.
pub type FxRates = BTreeMap<Currency, Decimal>;

/// FX rates together with the provider that answered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FxQuote {
    pub rates: FxRates,
    /// Provider name, `None` when no provider returned anything.
    pub source: Option<String>,
}

/// Domestic fuel products tracked by the national average price feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FuelProduct {
    Gasoline,
    Diesel,
    Kerosene,
    Lpg,
}

impl FuelProduct {
    pub const ALL: [FuelProduct; 4] = [
        FuelProduct::Gasoline,
        FuelProduct::Diesel,
        FuelProduct::Kerosene,
        FuelProduct::Lpg,
    ];

    /// Provider product code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Gasoline => "B027",
            Self::Diesel => "D047",
            Self::Kerosene => "C004",
            Self::Lpg => "K015",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code.trim())
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gasoline => "Gasoline",
            Self::Diesel => "Diesel",
            Self::Kerosene => "Kerosene",
            Self::Lpg => "LPG",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Gasoline => "⛽",
            Self::Diesel => "🚛",
            Self::Kerosene => "🛢️",
            Self::Lpg => "🔥",
        }
    }
}

/// Day-over-day movement of a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    /// Classify a provider delta string.
    ///
    /// A leading `-` is down; an empty or zero delta is flat; anything
    /// else is up.
    #[must_use]
    pub fn from_delta(delta: &str) -> Self {
        let delta = delta.trim();
        if delta.starts_with('-') {
            return Self::Down;
        }
        if delta.is_empty() || delta.parse::<Decimal>().is_ok_and(|v| v.is_zero()) {
            return Self::Flat;
        }
        Self::Up
    }

    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Up => "📈",
            Self::Down => "📉",
            Self::Flat => "➖",
        }
    }
}

/// National average price for one fuel product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelQuote {
    pub product: FuelProduct,
    /// Price as the provider formats it.
    pub price: String,
    /// Day-over-day change as the provider formats it.
    pub delta: String,
}

impl FuelQuote {
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::from_delta(&self.delta)
    }
}

/// Everything one report shows. Built fresh per report.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    /// Local time the snapshot was taken.
    pub taken_at: DateTime<Tz>,
    pub fx: FxQuote,
    /// Fuel quotes in product order; empty when unavailable.
    pub fuel: Vec<FuelQuote>,
    pub wti: Option<Decimal>,
    pub brent: Option<Decimal>,
    /// Gold spot, USD per troy ounce.
    pub gold: Option<Decimal>,
}

impl IndicatorSnapshot {
    /// A snapshot with every indicator absent.
    #[must_use]
    pub fn empty(taken_at: DateTime<Tz>) -> Self {
        Self {
            taken_at,
            fx: FxQuote::default(),
            fuel: Vec::new(),
            wti: None,
            brent: None,
            gold: None,
        }
    }

    /// Fuel quote for a product, if fetched.
    #[must_use]
    pub fn fuel_quote(&self, product: FuelProduct) -> Option<&FuelQuote> {
        self.fuel.iter().find(|q| q.product == product)
    }
}

/// A price usable in a report: strictly positive.
#[must_use]
pub fn usable_price(value: Decimal) -> Option<Decimal> {
    (value > Decimal::ZERO).then_some(value)
}
