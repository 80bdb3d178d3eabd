use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{PersonalInfo, SectionKey, SkillGroup};
use crate::models::patch::{
    EducationPatch, EntryPatch, InternshipPatch, ProjectPatch, SkillGroupPatch,
};
use crate::mutation::ops::{
    self, DetailHost, EducationDraft, InternshipDraft, MoveDirection, NewEntry, ProjectDraft,
};
use crate::sessions::store::DocumentSession;
use crate::state::AppState;

fn parse_section(raw: &str) -> Result<SectionKey, AppError> {
    raw.parse()
}

fn parse_body<T: serde::de::DeserializeOwned>(section: SectionKey, body: Value) -> Result<T, AppError> {
    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("invalid payload for section '{section}': {e}")))
}

/// PUT /api/v1/sessions/:id/personal
pub async fn handle_replace_personal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(info): Json<PersonalInfo>,
) -> Result<Json<DocumentSession>, AppError> {
    let session = state
        .sessions
        .mutate(id, |doc| Ok(ops::replace_personal_info(doc, info)))
        .await?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct AppendEntryRequest {
    pub section: SectionKey,
    #[serde(default = "default_entry_body")]
    pub entry: Value,
}

fn default_entry_body() -> Value {
    Value::Object(serde_json::Map::new())
}

/// POST /api/v1/sessions/:id/entries
pub async fn handle_append_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AppendEntryRequest>,
) -> Result<Json<DocumentSession>, AppError> {
    let entry = match req.section {
        SectionKey::Education => {
            NewEntry::Education(parse_body::<EducationDraft>(req.section, req.entry)?)
        }
        SectionKey::Internships => {
            NewEntry::Internship(parse_body::<InternshipDraft>(req.section, req.entry)?)
        }
        SectionKey::Projects => {
            NewEntry::Project(parse_body::<ProjectDraft>(req.section, req.entry)?)
        }
        SectionKey::Skills => {
            NewEntry::SkillGroup(parse_body::<SkillGroup>(req.section, req.entry)?)
        }
    };

    let session = state
        .sessions
        .mutate(id, |doc| Ok(ops::append_entry(doc, entry)))
        .await?;
    Ok(Json(session))
}

/// PATCH /api/v1/sessions/:id/entries/:section/:index
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(Uuid, String, usize)>,
    Json(body): Json<Value>,
) -> Result<Json<DocumentSession>, AppError> {
    let section = parse_section(&section)?;
    let patch = match section {
        SectionKey::Education => EntryPatch::Education(parse_body::<EducationPatch>(section, body)?),
        SectionKey::Internships => {
            EntryPatch::Internship(parse_body::<InternshipPatch>(section, body)?)
        }
        SectionKey::Projects => EntryPatch::Project(parse_body::<ProjectPatch>(section, body)?),
        SectionKey::Skills => EntryPatch::SkillGroup(parse_body::<SkillGroupPatch>(section, body)?),
    };

    let session = state
        .sessions
        .mutate(id, |doc| ops::update_entry(doc, section, index, patch))
        .await?;
    Ok(Json(session))
}

/// DELETE /api/v1/sessions/:id/entries/:section/:index
pub async fn handle_remove_entry(
    State(state): State<AppState>,
    Path((id, section, index)): Path<(Uuid, String, usize)>,
) -> Result<Json<DocumentSession>, AppError> {
    let section = parse_section(&section)?;
    let session = state
        .sessions
        .mutate(id, |doc| ops::remove_entry(doc, section, index))
        .await?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from_index: usize,
    pub direction: MoveDirection,
}

/// POST /api/v1/sessions/:id/order
pub async fn handle_reorder_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<DocumentSession>, AppError> {
    let session = state
        .sessions
        .mutate(id, |doc| {
            ops::reorder_section(doc, req.from_index, req.direction)
        })
        .await?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct AppendDetailRequest {
    pub section: SectionKey,
    pub item_index: usize,
    #[serde(default)]
    pub text: String,
}

/// POST /api/v1/sessions/:id/details
pub async fn handle_append_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AppendDetailRequest>,
) -> Result<Json<DocumentSession>, AppError> {
    let host = DetailHost::try_from(req.section)?;
    let session = state
        .sessions
        .mutate(id, |doc| {
            ops::append_detail(doc, host, req.item_index, req.text)
        })
        .await?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct SetDetailRequest {
    pub section: SectionKey,
    pub item_index: usize,
    pub bullet_index: usize,
    pub text: String,
}

/// PUT /api/v1/sessions/:id/details
pub async fn handle_set_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetDetailRequest>,
) -> Result<Json<DocumentSession>, AppError> {
    let host = DetailHost::try_from(req.section)?;
    let session = state
        .sessions
        .mutate(id, |doc| {
            ops::set_detail(doc, host, req.item_index, req.bullet_index, req.text)
        })
        .await?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct RemoveDetailRequest {
    pub section: SectionKey,
    pub item_index: usize,
    pub bullet_index: usize,
}

/// DELETE /api/v1/sessions/:id/details
pub async fn handle_remove_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RemoveDetailRequest>,
) -> Result<Json<DocumentSession>, AppError> {
    let host = DetailHost::try_from(req.section)?;
    let session = state
        .sessions
        .mutate(id, |doc| {
            ops::remove_detail(doc, host, req.item_index, req.bullet_index)
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
    async fn test_append_entry_assigns_an_id_and_bumps_revision() {
        let (state, id) = make_state_with_session().await;
        let Json(session) = handle_append_entry(
            State(state),
            Path(id),
            Json(AppendEntryRequest {
                section: SectionKey::Projects,
                entry: serde_json::json!({"name": "新项目", "techStack": "Rust"}),
            }),
        )
        .await
        .unwrap();

        assert_eq!(session.revision, 1);
        assert_eq!(session.document.projects.len(), 2);
        assert_eq!(session.document.projects[1].name, "新项目");
    }

    #[tokio::test]
    async fn test_update_entry_rejects_unknown_patch_fields() {
        let (state, id) = make_state_with_session().await;
        let err = handle_update_entry(
            State(state),
            Path((id, "education".to_string(), 0)),
            Json(serde_json::json!({"ranking": "top 1%"})),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unknown_section_in_path_is_reported_as_such() {
        let (state, id) = make_state_with_session().await;
        let err = handle_remove_entry(
            State(state),
            Path((id, "awards".to_string(), 0)),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::UnknownSectionKey(_)));
    }

    #[tokio::test]
    async fn test_detail_routes_reject_sections_without_bullets() {
        let (state, id) = make_state_with_session().await;
        let err = handle_append_detail(
            State(state),
            Path(id),
            Json(AppendDetailRequest {
                section: SectionKey::Skills,
                item_index: 0,
                text: String::new(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_reorder_round_trip_through_the_handler() {
        let (state, id) = make_state_with_session().await;
        let Json(session) = handle_reorder_section(
            State(state),
            Path(id),
            Json(ReorderRequest {
                from_index: 0,
                direction: MoveDirection::Down,
            }),
        )
        .await
        .unwrap();
        assert_eq!(
            session.document.section_order.keys()[0],
            SectionKey::Skills
        );
    }
}
