//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Payment link DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A partial payment link record for creation.
///
/// Any subset of the entity's fields. No defaulting happens here; missing
/// required columns fail at the storage layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentLinkDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A partial field set for updates.
///
/// Unset fields are left untouched by the storage layer. There is no `id`
/// field - the identifier is immutable once assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentLinkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Write outcome
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a write-by-identifier operation.
///
/// The affected-row count is how callers infer existence: 1 means the
/// identifier matched a record, 0 means it did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOutcome {
    pub affected: u64,
}

impl WriteOutcome {
    pub fn new(affected: u64) -> Self {
        Self { affected }
    }
}
