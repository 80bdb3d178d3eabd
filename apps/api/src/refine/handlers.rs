use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::SectionKey;
use crate::mutation::ops::{self, DetailHost};
use crate::refine::polish::{polish, star_rewrite, suggest_tech_stack};
use crate::refine::star::{compose_star, StarGuide};
use crate::sessions::store::DocumentSession;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

/// POST /api/v1/refine/star
/// Pure composition; no model call involved.
pub async fn handle_compose_star(Json(guide): Json<StarGuide>) -> Json<TextResponse> {
    Json(TextResponse {
        text: compose_star(&guide),
    })
}

#[derive(Debug, Deserialize)]
pub struct StarRewriteRequest {
    pub role: String,
    pub content: String,
}

/// POST /api/v1/refine/star-rewrite
pub async fn handle_star_rewrite(
    State(state): State<AppState>,
    Json(req): Json<StarRewriteRequest>,
) -> Json<TextResponse> {
    let text = star_rewrite(state.llm.as_ref(), &req.role, &req.content).await;
    Json(TextResponse { text })
}

#[derive(Debug, Deserialize)]
pub struct TechStackRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TechStackResponse {
    pub items: Vec<String>,
}

/// POST /api/v1/refine/tech-stack
pub async fn handle_tech_stack(
    State(state): State<AppState>,
    Json(req): Json<TechStackRequest>,
) -> Json<TechStackResponse> {
    let items = suggest_tech_stack(state.llm.as_ref(), &req.description).await;
    Json(TechStackResponse { items })
}

#[derive(Debug, Deserialize)]
pub struct PolishDetailRequest {
    pub section: SectionKey,
    pub item_index: usize,
    pub bullet_index: usize,
}

/// POST /api/v1/sessions/:id/polish
///
/// Polishes one bullet and writes the result back. Whatever the polish step
/// returns — possibly the original text — becomes the new bullet; callers
/// are expected to keep only one polish in flight per bullet.
pub async fn handle_polish_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PolishDetailRequest>,
) -> Result<Json<DocumentSession>, AppError> {
    let host = DetailHost::try_from(req.section)?;
    let session = state.sessions.get(id).await?;
    let current =
        ops::detail_text(&session.document, host, req.item_index, req.bullet_index)?.to_string();

    let polished = polish(state.llm.as_ref(), &current).await;

    let session = state
        .sessions
        .mutate(id, |doc| {
            ops::set_detail(doc, host, req.item_index, req.bullet_index, polished)
        })
        .await?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct ApplyStarRequest {
    pub section: SectionKey,
    pub item_index: usize,
    pub bullet_index: usize,
    #[serde(flatten)]
    pub guide: StarGuide,
}

/// POST /api/v1/sessions/:id/star
/// Composes the STAR sentence and writes it into the addressed bullet.
pub async fn handle_apply_star(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ApplyStarRequest>,
) -> Result<Json<DocumentSession>, AppError> {
    let host = DetailHost::try_from(req.section)?;
    let text = compose_star(&req.guide);

    let session = state
        .sessions
        .mutate(id, |doc| {
            ops::set_detail(doc, host, req.item_index, req.bullet_index, text)
        })
        .await?;
    Ok(Json(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::store::SessionStore;

    async fn make_state_with_session() -> (AppState, Uuid) {
        let state = AppState {
            sessions: SessionStore::new(),
            llm: None,
            config: crate::config::Config::for_tests(),
        };
        let session = state
            .sessions
            .create(crate::models::seed::seed_document())
            .await
            .unwrap();
        (state, session.id)
    }

    #[tokio::test]
    async fn test_compose_star_endpoint_returns_the_template_sentence() {
        let Json(resp) = handle_compose_star(Json(StarGuide {
            situation: "S".to_string(),
            task: "T".to_string(),
            action: "A".to_string(),
            result: "R".to_string(),
        }))
        .await;
        assert_eq!(resp.text, "在S背景下，针对T难题，采用A，最终R。");
    }

    #[tokio::test]
    async fn test_polish_without_client_writes_back_the_original() {
        let (state, id) = make_state_with_session().await;
        let before = state.sessions.get(id).await.unwrap();
        let original = before.document.internships[0].details[0].clone();

        let Json(session) = handle_polish_detail(
            State(state),
            Path(id),
            Json(PolishDetailRequest {
                section: SectionKey::Internships,
                item_index: 0,
                bullet_index: 0,
            }),
        )
        .await
        .unwrap();

        assert_eq!(session.document.internships[0].details[0], original);
        assert_eq!(session.revision, 1);
    }

    #[tokio::test]
    async fn test_polish_validates_bullet_indices() {
        let (state, id) = make_state_with_session().await;
        let err = handle_polish_detail(
            State(state),
            Path(id),
            Json(PolishDetailRequest {
                section: SectionKey::Internships,
                item_index: 0,
                bullet_index: 42,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange { .. }));
    }

    #[tokio::test]
    async fn test_apply_star_writes_the_composed_sentence() {
        let (state, id) = make_state_with_session().await;
        let Json(session) = handle_apply_star(
            State(state),
            Path(id),
            Json(ApplyStarRequest {
                section: SectionKey::Projects,
                item_index: 0,
                bullet_index: 0,
                guide: StarGuide {
                    situation: "秒杀场景".to_string(),
                    task: "超卖".to_string(),
                    action: "Redis+Lua".to_string(),
                    result: "零超卖".to_string(),
                },
            }),
        )
        .await
        .unwrap();
        assert_eq!(
            session.document.projects[0].details[0],
            "在秒杀场景背景下，针对超卖难题，采用Redis+Lua，最终零超卖。"
        );
    }
}
