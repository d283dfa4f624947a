//! Persistence for generated resumes.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::resume::{ResumeContent, ResumeRow};

/// Fields for a fresh record; the store assigns id and timestamps.
pub struct NewResume<'a> {
    pub profile_id: &'a str,
    pub job_type: &'a str,
    pub title: &'a str,
    pub content: &'a ResumeContent,
    pub is_true_resume: bool,
    pub job_description: Option<&'a str>,
    pub company_name: Option<&'a str>,
}

pub async fn create_resume(pool: &SqlitePool, new: NewResume<'_>) -> Result<ResumeRow, sqlx::Error> {
    let id = Uuid::new_v4().simple().to_string();
    let now = Utc::now();

    sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes
            (id, profile_id, job_type, title, content, is_active, is_true_resume,
             job_description, company_name, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, 0, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&id)
    .bind(new.profile_id)
    .bind(new.job_type)
    .bind(new.title)
    .bind(Json(new.content))
    .bind(new.is_true_resume)
    .bind(new.job_description)
    .bind(new.company_name)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_resume(pool: &SqlitePool, id: &str) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_resumes(pool: &SqlitePool) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn update_resume(
    pool: &SqlitePool,
    id: &str,
    job_type: &str,
    title: &str,
    content: &ResumeContent,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        r#"
        UPDATE resumes
        SET job_type = ?, title = ?, content = ?, updated_at = ?
        WHERE id = ?
        RETURNING *
        "#,
    )
    .bind(job_type)
    .bind(title)
    .bind(Json(content))
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_resume(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Marks one resume active and every other inactive.
pub async fn set_active_resume(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("UPDATE resumes SET is_active = 0")
        .execute(&mut *tx)
        .await?;
    let result = sqlx::query("UPDATE resumes SET is_active = 1, updated_at = ? WHERE id = ?")
        .bind(Utc::now())
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        // Unknown id: roll back so existing resumes keep their active flag.
        tx.rollback().await?;
        return Ok(false);
    }
    tx.commit().await?;
    Ok(true)
}

/// The single unembellished "true" resume, if one exists.
pub async fn find_true_resume(pool: &SqlitePool) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE is_true_resume = 1 LIMIT 1")
        .fetch_optional(pool)
        .await
}

pub async fn delete_true_resumes(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resumes WHERE is_true_resume = 1")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    // Single connection so every query sees the same in-memory database.
    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    fn sample_content() -> ResumeContent {
        ResumeContent {
            summary: "A summary.".to_string(),
            ..Default::default()
        }
    }

    async fn insert(pool: &SqlitePool, title: &str, is_true: bool) -> ResumeRow {
        create_resume(
            pool,
            NewResume {
                profile_id: "p1",
                job_type: "General",
                title,
                content: &sample_content(),
                is_true_resume: is_true,
                job_description: None,
                company_name: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_fetch_round_trip() {
        let pool = test_pool().await;
        let created = insert(&pool, "General Resume", false).await;
        assert!(!created.is_active);

        let fetched = get_resume(&pool, &created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.content.0.summary, "A summary.");
        assert!(get_resume(&pool, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_active_leaves_exactly_one_active() {
        let pool = test_pool().await;
        let first = insert(&pool, "First", false).await;
        let second = insert(&pool, "Second", false).await;

        assert!(set_active_resume(&pool, &first.id).await.unwrap());
        assert!(set_active_resume(&pool, &second.id).await.unwrap());

        let rows = list_resumes(&pool).await.unwrap();
        let active: Vec<_> = rows.iter().filter(|r| r.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second.id);
    }

    #[tokio::test]
    async fn test_set_active_unknown_id_changes_nothing() {
        let pool = test_pool().await;
        let row = insert(&pool, "Only", false).await;
        assert!(set_active_resume(&pool, &row.id).await.unwrap());

        assert!(!set_active_resume(&pool, "missing").await.unwrap());
        // A failed activation must not deactivate the current active resume.
        let rows = list_resumes(&pool).await.unwrap();
        assert!(rows.iter().any(|r| r.is_active));
    }

    #[tokio::test]
    async fn test_true_resume_is_replaced_not_accumulated() {
        let pool = test_pool().await;
        let original = insert(&pool, "Original Resume", true).await;
        assert_eq!(
            find_true_resume(&pool).await.unwrap().unwrap().id,
            original.id
        );

        assert_eq!(delete_true_resumes(&pool).await.unwrap(), 1);
        assert!(find_true_resume(&pool).await.unwrap().is_none());

        let replacement = insert(&pool, "Original Resume", true).await;
        let found = find_true_resume(&pool).await.unwrap().unwrap();
        assert_eq!(found.id, replacement.id);
        assert_eq!(list_resumes(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_true_resumes_spares_regular_resumes() {
        let pool = test_pool().await;
        insert(&pool, "Original Resume", true).await;
        let regular = insert(&pool, "Sales Resume", false).await;

        assert_eq!(delete_true_resumes(&pool).await.unwrap(), 1);
        let rows = list_resumes(&pool).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, regular.id);
    }
}
