//! Expense model
//!
//! A single recorded outflow attributed to an envelope by name. Expenses are
//! immutable once recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Date format used in snapshots
pub const SNAPSHOT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent (positive)
    #[serde(rename = "montant")]
    pub amount: Money,

    /// Name of the envelope this expense is charged to
    ///
    /// Not guaranteed to name an existing envelope.
    #[serde(rename = "categorie")]
    pub envelope: String,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,

    /// Date of the expense
    #[serde(with = "snapshot_date")]
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount: Money,
        envelope: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            envelope: envelope.into(),
            description: description.into(),
            date,
        }
    }

    /// Check whether this expense is charged to the named envelope
    pub fn is_for(&self, envelope: &str) -> bool {
        self.envelope == envelope
    }
}

/// `YYYY-MM-DD` (de)serialization for expense dates
mod snapshot_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::SNAPSHOT_DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(SNAPSHOT_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, SNAPSHOT_DATE_FORMAT)
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}
