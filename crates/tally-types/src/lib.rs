//! Common types used throughout `tally`.
//!
//! This crate provides the wire types exchanged with the Tally
//! portfolio accounting backend. All of them are transient data
//! records: the backend owns their lifecycle, clients only
//! serialize and deserialize them.

mod collection;
mod reports;
mod task;

pub use collection::Collection;
pub use reports::{
    ActionableItems, DebugExportPayload, MissingAcquisition, MissingPrice, PageRequest, PnlTotals,
    ProfitLossEvent, ProfitLossOverview, Report, ReportPeriod,
};
pub use task::PendingTask;

// Callers construct and compare amounts with the same decimal type the
// wire types use.
pub use rust_decimal::Decimal;

/// A unix timestamp in seconds, as the backend speaks them.
pub type Timestamp = i64;
