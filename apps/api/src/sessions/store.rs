//! In-memory session store — the only stateful part of the service.
//!
//! A session owns one document. Mutations go through [`SessionStore::mutate`]:
//! the operator runs against the current snapshot and the store swaps in the
//! result only on success, so a failed edit can never corrupt the last good
//! snapshot. Sessions live for the process lifetime; there is no persistence.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::Document;

#[derive(Debug, Clone, Serialize)]
pub struct DocumentSession {
    pub id: Uuid,
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub document: Document,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, DocumentSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session around a document. Externally supplied documents are
    /// validated; the seed always passes.
    pub async fn create(&self, document: Document) -> Result<DocumentSession, AppError> {
        document.validate()?;
        let now = Utc::now();
        let session = DocumentSession {
            id: Uuid::new_v4(),
            revision: 0,
            created_at: now,
            updated_at: now,
            document,
        };
        self.inner.write().await.insert(session.id, session.clone());
        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> Result<DocumentSession, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Applies a pure mutation operator to the session's current snapshot.
    /// On success the new document replaces the old one and the revision is
    /// bumped; on error the stored snapshot is untouched.
    pub async fn mutate<F>(&self, id: Uuid, op: F) -> Result<DocumentSession, AppError>
    where
        F: FnOnce(&Document) -> Result<Document, AppError>,
    {
        let mut guard = self.inner.write().await;
        let session = guard
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

        let next = op(&session.document)?;
        session.document = next;
        session.revision += 1;
        session.updated_at = Utc::now();
        Ok(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::seed_document;
    use crate::mutation::ops::{remove_entry, reorder_section, MoveDirection};
    use crate::models::document::SectionKey;

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let store = SessionStore::new();
        let created = store.create(seed_document()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.document, created.document);
        assert_eq!(fetched.revision, 0);
    }

    #[tokio::test]
    async fn test_get_unknown_session_is_not_found() {
        let store = SessionStore::new();
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_mutate_swaps_the_snapshot_and_bumps_revision() {
        let store = SessionStore::new();
        let created = store.create(seed_document()).await.unwrap();

        let updated = store
            .mutate(created.id, |doc| reorder_section(doc, 0, MoveDirection::Down))
            .await
            .unwrap();
        assert_eq!(updated.revision, 1);
        assert_ne!(updated.document.section_order, created.document.section_order);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_the_last_good_snapshot() {
        let store = SessionStore::new();
        let created = store.create(seed_document()).await.unwrap();

        let err = store
            .mutate(created.id, |doc| remove_entry(doc, SectionKey::Projects, 99))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange { .. }));

        let after = store.get(created.id).await.unwrap();
        assert_eq!(after.document, created.document);
        assert_eq!(after.revision, 0);
    }
}
