//! Tip extraction from `channel.tips` event payloads.
//!
//! Expected shape:
//! ```json
//! {
//!   "donation": {
//!     "user": { "username": "alice" },
//!     "amount": 5,
//!     "currency": "USD",
//!     "message": "go team"
//!   },
//!   "status": "completed",
//!   "provider": "paypal"
//! }
//! ```
//! Only a missing/mistyped `donation` object fails extraction; every other
//! field falls back to its own default.

use serde_json::Value;

use super::envelope::str_field;
use crate::error::{Result, TipfaxError};

/// A single tip, ready for display/printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipRecord {
    pub username: String,
    /// Formatted with exactly two fraction digits.
    pub amount: String,
    pub currency: String,
    pub message: String,
    pub status: String,
    pub provider: String,
}

impl Default for TipRecord {
    fn default() -> Self {
        Self {
            username: "Unknown".into(),
            amount: "0.00".into(),
            currency: "USD".into(),
            message: String::new(),
            status: "unknown".into(),
            provider: "unknown".into(),
        }
    }
}

impl TipRecord {
    /// Extract a tip from the `data` of a tips-topic message.
    pub fn from_event(data: &Value) -> Result<Self> {
        if !data.is_object() {
            return Err(TipfaxError::Parse("tip data is not an object".into()));
        }
        let donation = data
            .get("donation")
            .filter(|d| d.is_object())
            .ok_or_else(|| TipfaxError::Parse("tip data has no donation object".into()))?;

        let d = TipRecord::default();
        Ok(Self {
            username: donation
                .get("user")
                .and_then(|u| str_field(u, "username"))
                .unwrap_or(d.username),
            amount: donation
                .get("amount")
                .and_then(Value::as_f64)
                .map(|a| format!("{a:.2}"))
                .unwrap_or(d.amount),
            currency: str_field(donation, "currency").unwrap_or(d.currency),
            message: str_field(donation, "message").unwrap_or(d.message),
            status: str_field(data, "status").unwrap_or(d.status),
            provider: str_field(data, "provider").unwrap_or(d.provider),
        })
    }

    /// Lines printed on a receipt, in order.
    pub fn receipt_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Tip from {}: {} {}", self.username, self.amount, self.currency),
            format!("Status: {}", self.status),
        ];
        if !self.message.is_empty() {
            lines.push(format!("Message: {}", self.message));
        }
        lines
    }
}
