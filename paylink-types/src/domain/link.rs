//! PaymentLink domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::PaymentLinkDraft;

/// A persisted payment link record.
///
/// This is metadata describing a payable link, not a payment transaction.
/// The `id` is assigned by the storage layer and is immutable once set;
/// `created_at` / `updated_at` are likewise storage-assigned.
///
/// No invariant is enforced between `amount`, `currency` and `status`
/// here - validation is the storage layer's or caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    /// Unique identifier, assigned by the storage layer
    pub id: String,
    /// Display label
    pub name: String,
    /// Stock-keeping unit identifier
    pub sku: String,
    /// Non-negative amount in major currency units
    pub amount: f64,
    /// Currency code (ISO-4217-like, unvalidated)
    pub currency: String,
    /// Free-form status string, e.g. "active"
    pub status: String,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl PaymentLink {
    /// Reconstructs a payment link from storage fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: String,
        name: String,
        sku: String,
        amount: f64,
        currency: String,
        status: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            sku,
            amount,
            currency,
            status,
            created_at,
            updated_at,
        }
    }
}

/// An unsaved payment link, produced by the repository's pure `build` step.
///
/// Mirrors the draft field-for-field: every field is optional and nothing is
/// defaulted. Missing NOT NULL columns surface as storage errors on save,
/// not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPaymentLink {
    pub id: Option<String>,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<String>,
}

impl NewPaymentLink {
    /// Pure in-memory construction from a partial record. No I/O.
    pub fn from_draft(draft: PaymentLinkDraft) -> Self {
        Self {
            id: draft.id,
            name: draft.name,
            sku: draft.sku,
            amount: draft.amount,
            currency: draft.currency,
            status: draft.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_passes_fields_through() {
        let draft = PaymentLinkDraft {
            id: Some("1".to_string()),
            name: Some("Test Payment".to_string()),
            sku: Some("TEST123".to_string()),
            amount: Some(100.0),
            currency: Some("USD".to_string()),
            status: Some("active".to_string()),
        };

        let link = NewPaymentLink::from_draft(draft);

        assert_eq!(link.id.as_deref(), Some("1"));
        assert_eq!(link.name.as_deref(), Some("Test Payment"));
        assert_eq!(link.sku.as_deref(), Some("TEST123"));
        assert_eq!(link.amount, Some(100.0));
        assert_eq!(link.currency.as_deref(), Some("USD"));
        assert_eq!(link.status.as_deref(), Some("active"));
    }

    #[test]
    fn test_from_draft_keeps_missing_fields_unset() {
        let draft = PaymentLinkDraft {
            name: Some("Bare".to_string()),
            ..Default::default()
        };

        let link = NewPaymentLink::from_draft(draft);

        assert_eq!(link.name.as_deref(), Some("Bare"));
        assert!(link.id.is_none());
        assert!(link.sku.is_none());
        assert!(link.amount.is_none());
        assert!(link.currency.is_none());
        assert!(link.status.is_none());
    }
}
