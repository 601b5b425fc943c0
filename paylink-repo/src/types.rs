//! Shared database types with feature-gated fields for SQLite and PostgreSQL.

use sqlx::FromRow;

use paylink_types::{PaymentLink, RepoError};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Payment link row from database.
///
/// SQLite stores timestamps as RFC 3339 text; PostgreSQL stores them
/// natively.
#[derive(FromRow)]
pub struct DbPaymentLink {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,

    #[cfg(not(feature = "sqlite"))]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[cfg(feature = "sqlite")]
    pub created_at: String,

    #[cfg(not(feature = "sqlite"))]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    #[cfg(feature = "sqlite")]
    pub updated_at: String,
}

impl DbPaymentLink {
    /// Convert database row to domain PaymentLink.
    pub fn into_domain(self) -> Result<PaymentLink, RepoError> {
        #[cfg(not(feature = "sqlite"))]
        let (created_at, updated_at) = (self.created_at, self.updated_at);

        #[cfg(feature = "sqlite")]
        let (created_at, updated_at) = {
            let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
                .map_err(|e| RepoError::Database(e.to_string()))?
                .with_timezone(&chrono::Utc);

            let updated_at = chrono::DateTime::parse_from_rfc3339(&self.updated_at)
                .map_err(|e| RepoError::Database(e.to_string()))?
                .with_timezone(&chrono::Utc);

            (created_at, updated_at)
        };

        Ok(PaymentLink::from_parts(
            self.id,
            self.name,
            self.sku,
            self.amount,
            self.currency,
            self.status,
            created_at,
            updated_at,
        ))
    }
}
