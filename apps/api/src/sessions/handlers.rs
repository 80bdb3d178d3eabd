use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::Document;
use crate::models::seed::seed_document;
use crate::sessions::store::DocumentSession;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Starting document; the template seed is used when omitted.
    #[serde(default)]
    pub document: Option<Document>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<DocumentSession>, AppError> {
    let document = req.document.unwrap_or_else(seed_document);
    let session = state.sessions.create(document).await?;
    tracing::info!("session {} created", session.id);
    Ok(Json(session))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentSession>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{SectionKey, SectionOrder};

    fn make_state() -> AppState {
        AppState {
            sessions: crate::sessions::store::SessionStore::new(),
            llm: None,
            config: crate::config::Config::for_tests(),
        }
    }

    #[tokio::test]
    async fn test_create_without_document_uses_the_seed() {
        let state = make_state();
        let Json(session) =
            handle_create_session(State(state.clone()), Json(CreateSessionRequest::default()))
                .await
                .unwrap();
        assert_eq!(session.document.personal_info.name, "张工科");

        let Json(fetched) = handle_get_session(State(state), Path(session.id)).await.unwrap();
        assert_eq!(fetched.document, session.document);
    }

    #[tokio::test]
    async fn test_create_rejects_a_broken_section_order() {
        let state = make_state();
        let mut document = seed_document();
        document.section_order = serde_json::from_value::<SectionOrder>(serde_json::json!([
            "education", "education", "projects", "skills"
        ]))
        .unwrap();
        assert_eq!(document.section_order.keys()[0], SectionKey::Education);

        let err = handle_create_session(
            State(state),
            Json(CreateSessionRequest {
                document: Some(document),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
