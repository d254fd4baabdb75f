//! Profit/loss report types.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// The window a report is generated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    /// Start of the window (inclusive).
    pub start: Timestamp,
    /// End of the window (inclusive).
    pub end: Timestamp,
}

/// Taxable and tax-free totals for one event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PnlTotals {
    /// Profit or loss subject to taxation.
    pub taxable: Decimal,
    /// Profit or loss outside the taxable window.
    pub free: Decimal,
}

/// Per-category profit/loss totals of one report.
///
/// The backend keys this map by event category ("trade", "fee",
/// "staking", ...); the set of categories is open-ended, so it stays a
/// map rather than a struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfitLossOverview(pub BTreeMap<String, PnlTotals>);

impl ProfitLossOverview {
    /// Sum of the taxable column over all categories.
    pub fn total_taxable(&self) -> Decimal {
        self.0.values().map(|totals| totals.taxable).sum()
    }

    /// Sum of the tax-free column over all categories.
    pub fn total_free(&self) -> Decimal {
        self.0.values().map(|totals| totals.free).sum()
    }

    /// Net profit or loss across both columns.
    pub fn net(&self) -> Decimal {
        self.total_taxable() + self.total_free()
    }
}

/// Summary of a previously generated profit/loss report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Report {
    /// Backend-assigned report identifier.
    pub identifier: u64,
    /// When the report was generated.
    pub timestamp: Timestamp,
    /// Start of the reported window.
    pub start_ts: Timestamp,
    /// End of the reported window.
    pub end_ts: Timestamp,
    /// Timestamp of the first event that was processed.
    pub first_processed_timestamp: Timestamp,
    /// Timestamp of the last event that was processed.
    pub last_processed_timestamp: Timestamp,
    /// Number of events processed so far.
    pub processed_actions: u64,
    /// Total number of events in the window.
    pub total_actions: u64,
    /// Per-category totals.
    pub overview: ProfitLossOverview,
}

/// One line event of a report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfitLossEvent {
    /// Event category.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Venue or chain the event happened on.
    pub location: String,
    /// When the event happened.
    pub timestamp: Timestamp,
    /// Asset involved, if any.
    #[serde(default)]
    pub asset: Option<String>,
    /// Free-form backend notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Amount outside the taxable window.
    pub free_amount: Decimal,
    /// Amount subject to taxation.
    pub taxable_amount: Decimal,
    /// Price of the asset at event time, in the profit currency.
    pub price: Decimal,
    /// Tax-free profit/loss contribution of this event.
    pub pnl_free: Decimal,
    /// Taxable profit/loss contribution of this event.
    pub pnl_taxable: Decimal,
}

/// A page request for report events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// Maximum number of events to return.
    pub limit: u32,
    /// Number of events to skip.
    pub offset: u32,
}

/// An acquisition the backend could not find while generating a report.
///
/// The user either imported incomplete history or needs to add a manual
/// acquisition event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissingAcquisition {
    /// The asset whose acquisition is missing.
    pub asset: String,
    /// When the spend that lacks an acquisition happened.
    pub time: Timestamp,
    /// Amount the backend could match.
    pub found_amount: Decimal,
    /// Amount left unmatched.
    pub missing_amount: Decimal,
}

/// A price the backend could not find while generating a report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissingPrice {
    /// Asset the price was needed for.
    pub from_asset: String,
    /// Currency the price was needed in.
    pub to_asset: String,
    /// When the price was needed.
    pub time: Timestamp,
}

/// Report-generation problems the user must act on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionableItems {
    /// Spends without a matching acquisition.
    pub missing_acquisitions: Vec<MissingAcquisition>,
    /// Price lookups that failed.
    pub missing_prices: Vec<MissingPrice>,
}

/// Parameters for a diagnostic dump of report-generation inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugExportPayload {
    /// Start of the window to dump.
    pub from_timestamp: Timestamp,
    /// End of the window to dump.
    pub to_timestamp: Timestamp,
    /// Server-side directory to write the dump into. When absent the
    /// backend returns the dump in the task result instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_report_parses_backend_payload() {
        let raw = r#"{
            "identifier": 7,
            "timestamp": 1650000000,
            "start_ts": 1609459200,
            "end_ts": 1640995199,
            "first_processed_timestamp": 1609459300,
            "last_processed_timestamp": 1640995000,
            "processed_actions": 418,
            "total_actions": 418,
            "overview": {
                "trade": {"taxable": "90.5", "free": "-2.25"},
                "fee": {"taxable": "-10.5", "free": "0"}
            }
        }"#;

        let report: Report = serde_json::from_str(raw).unwrap();
        assert_eq!(report.identifier, 7);
        assert_eq!(report.processed_actions, 418);
        assert_eq!(report.overview.total_taxable(), dec("80"));
        assert_eq!(report.overview.total_free(), dec("-2.25"));
        assert_eq!(report.overview.net(), dec("77.75"));
    }

    #[test]
    fn test_event_type_uses_wire_key() {
        let raw = r#"{
            "type": "trade",
            "location": "kraken",
            "timestamp": 1620000000,
            "asset": "ETH",
            "free_amount": "0",
            "taxable_amount": "1.5",
            "price": "2450.10",
            "pnl_free": "0",
            "pnl_taxable": "120.33"
        }"#;

        let event: ProfitLossEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.event_type, "trade");
        assert_eq!(event.asset.as_deref(), Some("ETH"));
        assert!(event.notes.is_none());
        assert_eq!(event.taxable_amount, dec("1.5"));
    }

    #[test]
    fn test_amounts_accept_string_and_number_forms() {
        let a: PnlTotals = serde_json::from_str(r#"{"taxable": "1.5", "free": 0}"#).unwrap();
        assert_eq!(a.taxable, dec("1.5"));
        assert_eq!(a.free, Decimal::ZERO);
    }

    #[test]
    fn test_actionable_items_parse() {
        let raw = r#"{
            "missing_acquisitions": [
                {"asset": "BTC", "time": 1618000000, "found_amount": "0.5", "missing_amount": "0.1"}
            ],
            "missing_prices": [
                {"from_asset": "XYZ", "to_asset": "EUR", "time": 1618100000}
            ]
        }"#;

        let items: ActionableItems = serde_json::from_str(raw).unwrap();
        assert_eq!(items.missing_acquisitions.len(), 1);
        assert_eq!(items.missing_acquisitions[0].missing_amount, dec("0.1"));
        assert_eq!(items.missing_prices[0].from_asset, "XYZ");
    }

    #[test]
    fn test_debug_payload_omits_absent_directory() {
        let payload = DebugExportPayload {
            from_timestamp: 1,
            to_timestamp: 2,
            directory_path: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("directory_path").is_none());
    }
}
