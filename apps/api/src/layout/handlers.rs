use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::catalogue::LayoutId;
use crate::layout::engine::compose;
use crate::layout::tree::RenderedResume;
use crate::models::document::SectionKey;
use crate::sections;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LayoutInfo {
    pub id: LayoutId,
    pub name: &'static str,
}

/// GET /api/v1/layouts
pub async fn handle_list_layouts() -> Json<Vec<LayoutInfo>> {
    Json(
        LayoutId::ALL
            .iter()
            .map(|id| LayoutInfo {
                id: *id,
                name: id.display_name(),
            })
            .collect(),
    )
}

#[derive(Debug, Serialize)]
pub struct SectionInfoView {
    pub key: SectionKey,
    pub label: &'static str,
}

/// GET /api/v1/sections
/// Registry listing the ordering UI labels its cards with.
pub async fn handle_list_sections() -> Json<Vec<SectionInfoView>> {
    Json(
        SectionKey::ALL
            .iter()
            .map(|key| SectionInfoView {
                key: *key,
                label: sections::label(*key),
            })
            .collect(),
    )
}

/// GET /api/v1/sessions/:id/render/:layout
pub async fn handle_render(
    State(state): State<AppState>,
    Path((id, layout)): Path<(Uuid, String)>,
) -> Result<Json<RenderedResume>, AppError> {
    let layout: LayoutId = layout.parse()?;
    let session = state.sessions.get(id).await?;
    let tree = compose(&session.document, layout);
    tracing::debug!(
        "composed '{layout}' at revision {} ({} sections)",
        session.revision,
        tree.rendered_keys().len()
    );
    Ok(Json(tree))
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
    async fn test_list_layouts_exposes_all_six() {
        let Json(layouts) = handle_list_layouts().await;
        assert_eq!(layouts.len(), 6);
        assert!(layouts.iter().any(|l| l.name == "侧栏创意"));
    }

    #[tokio::test]
    async fn test_list_sections_exposes_registry_labels() {
        let Json(sections) = handle_list_sections().await;
        assert_eq!(sections.len(), 4);
        assert!(sections
            .iter()
            .any(|s| s.key == SectionKey::Internships && s.label == "实习经历"));
    }

    #[tokio::test]
    async fn test_render_composes_the_requested_layout() {
        let (state, id) = make_state_with_session().await;
        let Json(tree) = handle_render(State(state), Path((id, "left-column".to_string())))
            .await
            .unwrap();
        assert_eq!(tree.layout, LayoutId::LeftColumn);
        assert_eq!(tree.regions.len(), 2);
    }

    #[tokio::test]
    async fn test_render_rejects_an_unregistered_layout() {
        let (state, id) = make_state_with_session().await;
        let err = handle_render(State(state), Path((id, "brutalist".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownLayout(_)));
    }
}
