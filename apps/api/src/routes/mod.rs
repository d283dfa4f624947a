pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;
use crate::{coach, interview, letters, license, profile, resume, skills};

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/profile", get(profile::handle_get).put(profile::handle_save))
        .route("/resumes/generate", post(resume::handlers::handle_generate))
        .route("/resumes/true", post(resume::handlers::handle_generate_true))
        .route("/resumes/customize", post(resume::handlers::handle_customize))
        .route("/resumes", get(resume::handlers::handle_list))
        .route(
            "/resumes/:id",
            get(resume::handlers::handle_get)
                .put(resume::handlers::handle_update)
                .delete(resume::handlers::handle_delete),
        )
        .route("/resumes/:id/activate", post(resume::handlers::handle_activate))
        .route(
            "/cover-letters",
            post(letters::handle_generate).get(letters::handle_list),
        )
        .route(
            "/interview-prep/:resume_id",
            post(interview::handle_generate).get(interview::handle_get),
        )
        .route(
            "/interview-prep/:resume_id/notes",
            put(interview::handle_save_notes),
        )
        .route("/coaches", get(coach::handle_list))
        .route("/coach/chat", post(coach::handle_chat))
        .route("/skills/analyze", post(skills::handle_analyze))
        .route("/skills", get(skills::handle_list))
        .route("/license/verify", post(license::handle_verify));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .with_state(state)
}
