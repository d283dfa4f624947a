//! Profile storage and HTTP handlers. The app keeps a single profile row;
//! saving replaces it wholesale.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use sqlx::types::Json as SqlJson;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileData, ProfileRow};
use crate::state::AppState;

pub async fn get_profile(pool: &SqlitePool) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles LIMIT 1")
        .fetch_optional(pool)
        .await
}

/// Upserts the single profile row, preserving its id and created_at when it
/// already exists.
pub async fn save_profile(pool: &SqlitePool, data: &ProfileData) -> Result<ProfileRow, sqlx::Error> {
    let now = Utc::now();

    if let Some(existing) = get_profile(pool).await? {
        sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles
            SET personal_info = ?, work_history = ?, education = ?, skills = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(SqlJson(&data.personal_info))
        .bind(SqlJson(&data.work_history))
        .bind(SqlJson(&data.education))
        .bind(SqlJson(&data.skills))
        .bind(now)
        .bind(&existing.id)
        .fetch_one(pool)
        .await
    } else {
        let id = Uuid::new_v4().simple().to_string();
        sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles
                (id, personal_info, work_history, education, skills, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(SqlJson(&data.personal_info))
        .bind(SqlJson(&data.work_history))
        .bind(SqlJson(&data.education))
        .bind(SqlJson(&data.skills))
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }
}

/// GET /api/v1/profile
pub async fn handle_get(
    State(state): State<AppState>,
) -> Result<Json<Option<ProfileRow>>, AppError> {
    Ok(Json(get_profile(&state.db).await?))
}

/// PUT /api/v1/profile
pub async fn handle_save(
    State(state): State<AppState>,
    Json(data): Json<ProfileData>,
) -> Result<Json<ProfileRow>, AppError> {
    Ok(Json(save_profile(&state.db, &data).await?))
}
