//! Payment link application service.
//!
//! Thin mediation between callers and the persistent store. Contains NO
//! infrastructure logic and no business validation beyond what the
//! repository reports - "not found" is normalized to `None`/`false`,
//! storage failures propagate untouched.

use paylink_types::{
    PaymentLink, PaymentLinkDraft, PaymentLinkPatch, PaymentLinkRepository, RepoError,
};

/// Application service for payment link CRUD.
///
/// Generic over `R: PaymentLinkRepository` - the adapter is injected at
/// construction time and held for the service's lifetime. The service is
/// otherwise stateless; concurrent calls for the same identifier are not
/// coordinated here.
pub struct PaymentLinkService<R: PaymentLinkRepository> {
    repo: R,
}

impl<R: PaymentLinkRepository> PaymentLinkService<R> {
    /// Creates a new service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Builds an entity from the partial record and persists it.
    ///
    /// The draft is passed through unchanged - no required-field checks
    /// here; constraint violations surface as storage-layer failures.
    /// Returns exactly what persistence returns.
    pub async fn create_payment_link(
        &self,
        draft: PaymentLinkDraft,
    ) -> Result<PaymentLink, RepoError> {
        let link = self.repo.build(draft);
        self.repo.save(link).await
    }

    /// Looks up a payment link by identifier.
    ///
    /// Absence is a normal, representable result: `Ok(None)`, never an
    /// error.
    pub async fn get_payment_link_by_id(
        &self,
        id: &str,
    ) -> Result<Option<PaymentLink>, RepoError> {
        self.repo.find_one(id).await
    }

    /// Applies a partial update, then re-fetches the current record.
    ///
    /// The re-fetch happens regardless of whether the update matched any
    /// row, so callers always see current state - `None` when no record
    /// with that identifier exists, including when the update affected
    /// zero rows. The write and the read are two independent requests
    /// with no transactional wrapping: a concurrent delete between them
    /// yields `None` even though the update itself succeeded.
    pub async fn update_payment_link(
        &self,
        id: &str,
        patch: PaymentLinkPatch,
    ) -> Result<Option<PaymentLink>, RepoError> {
        self.repo.update(id, patch).await?;
        self.repo.find_one(id).await
    }

    /// Deletes the payment link matching `id`.
    ///
    /// Returns `true` iff exactly one row was affected, `false` when the
    /// identifier matched nothing. Never errors on "not found".
    pub async fn delete_payment_link(&self, id: &str) -> Result<bool, RepoError> {
        let outcome = self.repo.delete(id).await?;
        Ok(outcome.affected == 1)
    }
}
