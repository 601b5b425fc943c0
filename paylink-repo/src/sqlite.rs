//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use uuid::Uuid;

use paylink_types::{
    NewPaymentLink, PaymentLink, PaymentLinkPatch, PaymentLinkRepository, RepoError, WriteOutcome,
};

use crate::types::DbPaymentLink;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_payment_links.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentLinkRepository for SqliteRepo {
    async fn save(&self, link: NewPaymentLink) -> Result<PaymentLink, RepoError> {
        let id = link.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = chrono::Utc::now().to_rfc3339();

        // Options bind as NULL; missing NOT NULL columns fail here, which
        // is exactly where constraint violations are supposed to surface.
        sqlx::query(
            r#"INSERT INTO payment_links (id, name, sku, amount, currency, status, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(&link.name)
        .bind(&link.sku)
        .bind(link.amount)
        .bind(&link.currency)
        .bind(&link.status)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        // Return the stored row so callers see storage-assigned fields.
        self.find_one(&id).await?.ok_or(RepoError::NotFound)
    }

    async fn find_one(&self, id: &str) -> Result<Option<PaymentLink>, RepoError> {
        let row: Option<DbPaymentLink> = sqlx::query_as(
            r#"SELECT id, name, sku, amount, currency, status, created_at, updated_at
               FROM payment_links WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbPaymentLink::into_domain).transpose()
    }

    async fn update(&self, id: &str, patch: PaymentLinkPatch) -> Result<WriteOutcome, RepoError> {
        let now = chrono::Utc::now().to_rfc3339();

        // COALESCE keeps unset fields untouched; `id` is not updatable.
        let result = sqlx::query(
            r#"UPDATE payment_links
               SET name = COALESCE(?, name),
                   sku = COALESCE(?, sku),
                   amount = COALESCE(?, amount),
                   currency = COALESCE(?, currency),
                   status = COALESCE(?, status),
                   updated_at = ?
               WHERE id = ?"#,
        )
        .bind(&patch.name)
        .bind(&patch.sku)
        .bind(patch.amount)
        .bind(&patch.currency)
        .bind(&patch.status)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(WriteOutcome::new(result.rows_affected()))
    }

    async fn delete(&self, id: &str) -> Result<WriteOutcome, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payment_links WHERE id = ?"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(WriteOutcome::new(result.rows_affected()))
    }
}
