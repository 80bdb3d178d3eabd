//! Section registry — the one place that knows what a section key means.
//!
//! The layout engine never special-cases section identity; it asks this
//! table for the backing list, the display label, and the empty-list policy.

use crate::models::document::{Document, SectionKey};

/// What a renderer does when the backing list is empty.
///
/// The two modes are intentionally NOT unified: internships vanish entirely
/// when empty, while the other three sections keep their heading over an
/// empty body. Product has not signed off on unifying this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    AlwaysShow,
    SuppressWhenEmpty,
}

#[derive(Debug, Clone, Copy)]
pub struct SectionInfo {
    pub key: SectionKey,
    pub label: &'static str,
    pub policy: EmptyPolicy,
}

static REGISTRY: [SectionInfo; 4] = [
    SectionInfo {
        key: SectionKey::Education,
        label: "教育经历",
        policy: EmptyPolicy::AlwaysShow,
    },
    SectionInfo {
        key: SectionKey::Internships,
        label: "实习经历",
        policy: EmptyPolicy::SuppressWhenEmpty,
    },
    SectionInfo {
        key: SectionKey::Projects,
        label: "项目经历",
        policy: EmptyPolicy::AlwaysShow,
    },
    SectionInfo {
        key: SectionKey::Skills,
        label: "专业技能",
        policy: EmptyPolicy::AlwaysShow,
    },
];

pub fn info(key: SectionKey) -> &'static SectionInfo {
    match key {
        SectionKey::Education => &REGISTRY[0],
        SectionKey::Internships => &REGISTRY[1],
        SectionKey::Projects => &REGISTRY[2],
        SectionKey::Skills => &REGISTRY[3],
    }
}

pub fn label(key: SectionKey) -> &'static str {
    info(key).label
}

pub fn policy(key: SectionKey) -> EmptyPolicy {
    info(key).policy
}

/// Number of entries in the list a key reads from.
pub fn entry_count(doc: &Document, key: SectionKey) -> usize {
    match key {
        SectionKey::Education => doc.education.len(),
        SectionKey::Internships => doc.internships.len(),
        SectionKey::Projects => doc.projects.len(),
        SectionKey::Skills => doc.skills.len(),
    }
}

pub fn is_empty(doc: &Document, key: SectionKey) -> bool {
    entry_count(doc, key) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::seed_document;

    #[test]
    fn test_registry_covers_every_key() {
        for key in SectionKey::ALL {
            let entry = info(key);
            assert_eq!(entry.key, key);
            assert!(!entry.label.is_empty());
        }
    }

    #[test]
    fn test_only_internships_suppress_when_empty() {
        for key in SectionKey::ALL {
            let expected = if key == SectionKey::Internships {
                EmptyPolicy::SuppressWhenEmpty
            } else {
                EmptyPolicy::AlwaysShow
            };
            assert_eq!(policy(key), expected, "policy mismatch for {key}");
        }
    }

    #[test]
    fn test_entry_count_reads_the_backing_list() {
        let doc = seed_document();
        assert_eq!(entry_count(&doc, SectionKey::Education), 2);
        assert_eq!(entry_count(&doc, SectionKey::Internships), 1);
        assert_eq!(entry_count(&doc, SectionKey::Projects), 1);
        assert_eq!(entry_count(&doc, SectionKey::Skills), 5);
        assert!(!is_empty(&doc, SectionKey::Skills));
    }
}
