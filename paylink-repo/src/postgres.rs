//! PostgreSQL repository adapter.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use paylink_types::{
    NewPaymentLink, PaymentLink, PaymentLinkPatch, PaymentLinkRepository, RepoError, WriteOutcome,
};

use crate::types::DbPaymentLink;

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_payment_links_pg.sql"),
        "0001",
    )
    .await?;

    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentLinkRepository for PostgresRepo {
    async fn save(&self, link: NewPaymentLink) -> Result<PaymentLink, RepoError> {
        let id = link.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let now = Utc::now();

        sqlx::query(
            r#"INSERT INTO payment_links (id, name, sku, amount, currency, status, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
        )
        .bind(&id)
        .bind(&link.name)
        .bind(&link.sku)
        .bind(link.amount)
        .bind(&link.currency)
        .bind(&link.status)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        self.find_one(&id).await?.ok_or(RepoError::NotFound)
    }

    async fn find_one(&self, id: &str) -> Result<Option<PaymentLink>, RepoError> {
        let row: Option<DbPaymentLink> = sqlx::query_as(
            r#"SELECT id, name, sku, amount, currency, status, created_at, updated_at
               FROM payment_links WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbPaymentLink::into_domain).transpose()
    }

    async fn update(&self, id: &str, patch: PaymentLinkPatch) -> Result<WriteOutcome, RepoError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"UPDATE payment_links
               SET name = COALESCE($1, name),
                   sku = COALESCE($2, sku),
                   amount = COALESCE($3, amount),
                   currency = COALESCE($4, currency),
                   status = COALESCE($5, status),
                   updated_at = $6
               WHERE id = $7"#,
        )
        .bind(&patch.name)
        .bind(&patch.sku)
        .bind(patch.amount)
        .bind(&patch.currency)
        .bind(&patch.status)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(WriteOutcome::new(result.rows_affected()))
    }

    async fn delete(&self, id: &str) -> Result<WriteOutcome, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payment_links WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(WriteOutcome::new(result.rows_affected()))
    }
}
