//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, in-memory test doubles) implement this trait.

use crate::domain::{NewPaymentLink, PaymentLink};
use crate::dto::{PaymentLinkDraft, PaymentLinkPatch, WriteOutcome};
use crate::error::RepoError;

/// The repository port for payment link persistence.
///
/// Five capabilities: pure construction, persist, lookup, update-by-id and
/// delete-by-id. Each async operation is a single independent round trip
/// with no cross-operation ordering guarantee; concurrency control is the
/// storage engine's problem, not this trait's.
#[async_trait::async_trait]
pub trait PaymentLinkRepository: Send + Sync + 'static {
    /// Builds an unsaved entity from a partial record.
    ///
    /// Pure in-memory construction, no I/O. The draft is passed through
    /// verbatim; identifiers and timestamps are assigned by `save`.
    fn build(&self, draft: PaymentLinkDraft) -> NewPaymentLink {
        NewPaymentLink::from_draft(draft)
    }

    /// Persists an entity, returning the possibly-enriched stored record
    /// (storage-assigned id and timestamps included).
    async fn save(&self, link: NewPaymentLink) -> Result<PaymentLink, RepoError>;

    /// Looks up exactly one record by identifier equality.
    async fn find_one(&self, id: &str) -> Result<Option<PaymentLink>, RepoError>;

    /// Applies a partial field set to the record matching `id`.
    ///
    /// Affects zero or one row; the outcome reports which.
    async fn update(&self, id: &str, patch: PaymentLinkPatch) -> Result<WriteOutcome, RepoError>;

    /// Removes the record matching `id`. Affects zero or one row.
    async fn delete(&self, id: &str) -> Result<WriteOutcome, RepoError>;
}
