// MySQL-backed expense store
//
// One table, `expenses`, keyed by the UUID `id` (unique index). The
// auto-increment `seq` column only exists to give List a stable insertion order.
// `id` uses a binary NO PAD collation so lookups match exactly, like the
// in-memory store.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::config::DatabaseConfig;
use crate::core::error::{StoreError, StoreResult};
use crate::core::traits::{Repository, StoreLifecycle};
use crate::modules::expenses::models::{Expense, ExpenseFields};

/// Store handle injected into the expense service
pub trait ExpenseRepository:
    Repository<Expense, Changes = ExpenseFields> + StoreLifecycle
{
}

impl<T> ExpenseRepository for T where
    T: Repository<Expense, Changes = ExpenseFields> + StoreLifecycle
{
}

/// Repository for expense database operations
pub struct MySqlExpenseRepository {
    pool: MySqlPool,
}

impl MySqlExpenseRepository {
    /// Create a new expense repository over an existing pool
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Open the pool described by `config` and bring the schema up to date
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = config.create_pool().await?;
        let repository = Self::new(pool);
        repository.migrate().await?;
        Ok(repository)
    }

    /// Run embedded migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl Repository<Expense> for MySqlExpenseRepository {
    type Changes = ExpenseFields;

    async fn list(&self) -> StoreResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, title, amount
            FROM expenses
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Expense>> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, title, amount
            FROM expenses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(expense)
    }

    async fn insert(&self, expense: Expense) -> StoreResult<Expense> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, title, amount)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&expense.id)
        .bind(&expense.title)
        .bind(expense.amount)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StoreError::DuplicateId(expense.id.clone());
                }
            }
            StoreError::Database(e)
        })?;

        Ok(expense)
    }

    async fn update(&self, id: &str, changes: ExpenseFields) -> StoreResult<Option<Expense>> {
        // MySQL reports changed rows, not matched rows, so an update that
        // writes identical values would look like a miss. Lock the row first.
        let mut tx = self.pool.begin().await?;

        let existing: Option<String> =
            sqlx::query_scalar("SELECT id FROM expenses WHERE id = ? FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(existing_id) = existing else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            r#"
            UPDATE expenses
            SET title = ?, amount = ?
            WHERE id = ?
            "#,
        )
        .bind(&changes.title)
        .bind(changes.amount)
        .bind(&existing_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(Expense {
            id: existing_id,
            title: changes.title,
            amount: changes.amount,
        }))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl StoreLifecycle for MySqlExpenseRepository {
    fn backend(&self) -> &'static str {
        "mysql"
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
