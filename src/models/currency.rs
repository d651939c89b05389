//! Currency policy
//!
//! Maps each supported currency code to its display symbol and decimal
//! rule. Adding a currency means adding one enum variant and its entry in
//! [`Currency::info`]; no other component matches on the code beyond
//! reading `has_decimals`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::LedgerError;

/// Supported currency codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Pkr,
}

impl Currency {
    /// All supported currencies, for selection UIs
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Pkr];

    /// The display policy for this code
    pub const fn info(self) -> CurrencyInfo {
        match self {
            Currency::Usd => CurrencyInfo {
                code: Currency::Usd,
                symbol: "$",
                has_decimals: true,
            },
            Currency::Pkr => CurrencyInfo {
                code: Currency::Pkr,
                symbol: "Rs ",
                has_decimals: false,
            },
        }
    }

    /// The ISO-style code string
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Pkr => "PKR",
        }
    }

    /// Human-readable name, for selection UIs
    pub const fn name(self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Pkr => "Pakistani Rupee",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "PKR" => Ok(Currency::Pkr),
            other => Err(LedgerError::validation(
                "currency",
                format!("Unknown currency code: '{}'. Supported: USD, PKR", other),
            )),
        }
    }
}

/// The display policy associated with a currency code
///
/// `symbol` and `has_decimals` are derived from `code`; deserialization
/// reconstructs them from the code so a stored value can never disagree
/// with the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "CurrencyInfoRepr")]
pub struct CurrencyInfo {
    pub code: Currency,
    pub symbol: &'static str,
    pub has_decimals: bool,
}

// Hand-written to stay generic over `'de`: deriving `Deserialize` here ties
// `'de` to `'static` because of the `&'static str` field (serde scans field
// lifetimes even with `from`), which breaks `DeserializeOwned`. Delegating
// through the owned `CurrencyInfoRepr` is behaviorally identical to the
// `#[serde(from = "CurrencyInfoRepr")]` derive.
impl<'de> Deserialize<'de> for CurrencyInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        CurrencyInfoRepr::deserialize(deserializer).map(CurrencyInfo::from)
    }
}

/// Wire shape for a persisted currency preference
#[derive(Serialize, Deserialize)]
struct CurrencyInfoRepr {
    code: Currency,
    symbol: String,
    has_decimals: bool,
}

impl From<CurrencyInfoRepr> for CurrencyInfo {
    fn from(repr: CurrencyInfoRepr) -> Self {
        // symbol/has_decimals are rebuilt from the code, so stale or
        // tampered stored fields cannot break the invariant
        repr.code.info()
    }
}

impl From<CurrencyInfo> for CurrencyInfoRepr {
    fn from(info: CurrencyInfo) -> Self {
        Self {
            code: info.code,
            symbol: info.symbol.to_string(),
            has_decimals: info.has_decimals,
        }
    }
}

impl Default for CurrencyInfo {
    fn default() -> Self {
        Currency::Usd.info()
    }
}

impl CurrencyInfo {
    /// Parse a user-entered amount under this currency's decimal rule
    ///
    /// Currencies without decimals round to the nearest whole unit, halves
    /// away from zero ("12.50" entered under PKR becomes 13).
    pub fn parse_amount(&self, input: &str) -> Result<Money, LedgerError> {
        let amount = Money::parse(input)
            .map_err(|e| LedgerError::validation("amount", e.to_string()))?;

        if self.has_decimals {
            Ok(amount)
        } else {
            Ok(amount.round_to_units())
        }
    }

    /// Format an amount under this currency's decimal rule
    ///
    /// With decimals: always exactly two fractional digits. Without:
    /// rounded to whole units, no decimal point.
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let magnitude = amount.abs();

        if self.has_decimals {
            format!(
                "{}{}{}.{:02}",
                sign,
                self.symbol,
                magnitude.units(),
                magnitude.cents_part()
            )
        } else {
            format!(
                "{}{}{}",
                sign,
                self.symbol,
                magnitude.round_to_units().units()
            )
        }
    }

    /// Format with an explicit leading sign, for daily totals and list rows
    ///
    /// Zero formats as positive ("+"), matching the daily-total display
    /// rule where a net of zero counts as positive.
    pub fn format_signed(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "+" };
        format!("{}{}", sign, self.format(amount.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_table() {
        let usd = Currency::Usd.info();
        assert_eq!(usd.symbol, "$");
        assert!(usd.has_decimals);

        let pkr = Currency::Pkr.info();
        assert_eq!(pkr.symbol, "Rs ");
        assert!(!pkr.has_decimals);
    }

    #[test]
    fn test_code_parsing() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("pkr".parse::<Currency>().unwrap(), Currency::Pkr);
        assert!("EUR".parse::<Currency>().is_err());
    }

    #[test]
    fn test_usd_format_always_two_decimals() {
        let usd = Currency::Usd.info();
        assert_eq!(usd.format(Money::from_cents(1050)), "$10.50");
        assert_eq!(usd.format(Money::from_cents(1000)), "$10.00");
        assert_eq!(usd.format(Money::from_cents(5)), "$0.05");
        assert_eq!(usd.format(Money::from_cents(-5000)), "-$50.00");
    }

    #[test]
    fn test_pkr_format_never_shows_decimal_point() {
        let pkr = Currency::Pkr.info();
        assert_eq!(pkr.format(Money::from_cents(1300)), "Rs 13");
        assert_eq!(pkr.format(Money::from_cents(1250)), "Rs 13");
        assert_eq!(pkr.format(Money::from_cents(1249)), "Rs 12");
        assert_eq!(pkr.format(Money::from_cents(-500)), "-Rs 5");
        assert!(!pkr.format(Money::from_cents(1250)).contains('.'));
    }

    #[test]
    fn test_parse_amount_rounds_for_no_decimal_currency() {
        let pkr = Currency::Pkr.info();
        assert_eq!(pkr.parse_amount("12.50").unwrap().cents(), 1300);
        assert_eq!(pkr.parse_amount("12.49").unwrap().cents(), 1200);
        assert_eq!(pkr.parse_amount("12").unwrap().cents(), 1200);

        let usd = Currency::Usd.info();
        assert_eq!(usd.parse_amount("12.50").unwrap().cents(), 1250);
    }

    #[test]
    fn test_format_signed() {
        let usd = Currency::Usd.info();
        assert_eq!(usd.format_signed(Money::from_cents(1050)), "+$10.50");
        assert_eq!(usd.format_signed(Money::from_cents(-1050)), "-$10.50");
        assert_eq!(usd.format_signed(Money::zero()), "+$0.00");
    }

    #[test]
    fn test_roundtrip_preserves_invariant() {
        let pkr = Currency::Pkr.info();
        let json = serde_json::to_string(&pkr).unwrap();
        let back: CurrencyInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pkr);

        // A stored value whose derived fields disagree with the code is
        // corrected on load
        let tampered = r#"{"code":"PKR","symbol":"$","has_decimals":true}"#;
        let fixed: CurrencyInfo = serde_json::from_str(tampered).unwrap();
        assert_eq!(fixed, pkr);
    }

    #[test]
    fn test_default_is_usd() {
        assert_eq!(CurrencyInfo::default().code, Currency::Usd);
    }
}
