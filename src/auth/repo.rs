use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::auth::repo_types::{NewUser, User};

const USER_COLUMNS: &str = "id, name, email, password_hash, is_admin, is_active, created_at, updated_at";

/// Credential store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by (already normalised) email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Insert `new` as an active admin, but only while the table is empty.
    /// Returns `None` when any user already exists.
    async fn insert_first_admin(&self, new: NewUser) -> anyhow::Result<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .context("find user by email")?;
        Ok(user)
    }

    async fn insert_first_admin(&self, new: NewUser) -> anyhow::Result<Option<User>> {
        let mut tx = self.db.begin().await.context("begin tx")?;

        // Blocks concurrent writers until commit so only one bootstrap wins.
        sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .context("lock users")?;

        let any: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users)")
            .fetch_one(&mut *tx)
            .await
            .context("check users exist")?;
        if any {
            tx.rollback().await.context("rollback tx")?;
            return Ok(None);
        }

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, name, email, password_hash, is_admin, is_active)
            VALUES ($1, $2, $3, $4, TRUE, TRUE)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(new.id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .fetch_one(&mut *tx)
        .await
        .context("insert admin")?;

        tx.commit().await.context("commit tx")?;
        Ok(Some(user))
    }
}
