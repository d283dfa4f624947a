use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

/// Creates the SQLite connection pool, creating the database file if needed.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Bootstraps the schema. Every statement is idempotent so this runs on
/// every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            id            TEXT PRIMARY KEY,
            personal_info TEXT NOT NULL,
            work_history  TEXT NOT NULL,
            education     TEXT NOT NULL,
            skills        TEXT NOT NULL,
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id              TEXT PRIMARY KEY,
            profile_id      TEXT NOT NULL,
            job_type        TEXT NOT NULL,
            title           TEXT NOT NULL,
            content         TEXT NOT NULL,
            is_active       INTEGER NOT NULL DEFAULT 0,
            is_true_resume  INTEGER NOT NULL DEFAULT 0,
            job_description TEXT,
            company_name    TEXT,
            created_at      TEXT NOT NULL,
            updated_at      TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cover_letters (
            id              TEXT PRIMARY KEY,
            resume_id       TEXT NOT NULL,
            job_title       TEXT NOT NULL,
            company_name    TEXT NOT NULL,
            job_description TEXT,
            content         TEXT NOT NULL,
            created_at      TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interview_preps (
            id         TEXT PRIMARY KEY,
            resume_id  TEXT NOT NULL UNIQUE,
            questions  TEXT NOT NULL,
            notes      TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS skills_reports (
            id              TEXT PRIMARY KEY,
            resume_id       TEXT NOT NULL,
            job_description TEXT NOT NULL,
            matched_skills  TEXT NOT NULL,
            suggestions     TEXT NOT NULL,
            created_at      TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}
