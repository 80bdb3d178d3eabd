//! Résumé document model — the single owned aggregate every other module
//! reads from. All child lists are owned exclusively by the `Document`;
//! nothing is shared across documents.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Contact card rendered at the top of every layout. Replaced as a whole,
/// never field-patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    /// Target role, e.g. "Java后端开发工程师".
    pub job_intention: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    /// Opaque displayable handle (data URL or plain URL). Never validated here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// Assigned once at creation, never reused or recomputed.
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub college: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Ordered achievement bullets. Insertion order is user-controlled.
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub tech_stack: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// The four user-orderable content sections. `PersonalInfo` is not a member;
/// it always renders first by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Education,
    Internships,
    Projects,
    Skills,
}

impl SectionKey {
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Education,
        SectionKey::Internships,
        SectionKey::Projects,
        SectionKey::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Education => "education",
            SectionKey::Internships => "internships",
            SectionKey::Projects => "projects",
            SectionKey::Skills => "skills",
        }
    }
}

impl std::str::FromStr for SectionKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "education" => Ok(SectionKey::Education),
            "internships" => Ok(SectionKey::Internships),
            "projects" => Ok(SectionKey::Projects),
            "skills" => Ok(SectionKey::Skills),
            other => Err(AppError::UnknownSectionKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-controlled ordering of the four sections.
///
/// Invariant: always a permutation of exactly `SectionKey::ALL` — no
/// duplicates, no omissions. The only mutation is an adjacent swap, which
/// preserves the invariant by construction; externally supplied orders are
/// checked with [`SectionOrder::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionOrder(Vec<SectionKey>);

impl SectionOrder {
    pub fn keys(&self) -> &[SectionKey] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Swaps two adjacent entries. Callers guarantee both indices are in
    /// range; the swap cannot break the permutation invariant.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    /// Checks the permutation invariant on an externally supplied order.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.0.len() != SectionKey::ALL.len() {
            return Err(AppError::Validation(format!(
                "section order must contain exactly {} keys, got {}",
                SectionKey::ALL.len(),
                self.0.len()
            )));
        }
        for key in SectionKey::ALL {
            if !self.0.contains(&key) {
                return Err(AppError::Validation(format!(
                    "section order is missing '{key}'"
                )));
            }
        }
        Ok(())
    }
}

impl Default for SectionOrder {
    fn default() -> Self {
        SectionOrder(vec![
            SectionKey::Education,
            SectionKey::Skills,
            SectionKey::Internships,
            SectionKey::Projects,
        ])
    }
}

/// The full résumé aggregate. Every mutation produces a new `Document`;
/// existing snapshots stay valid until dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub section_order: SectionOrder,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub internships: Vec<Internship>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

impl Document {
    /// Checks the cross-field invariants on an externally supplied document.
    pub fn validate(&self) -> Result<(), AppError> {
        self.section_order.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_a_permutation() {
        let order = SectionOrder::default();
        assert!(order.validate().is_ok());
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn test_validate_rejects_duplicate_keys() {
        let order = SectionOrder(vec![
            SectionKey::Education,
            SectionKey::Education,
            SectionKey::Projects,
            SectionKey::Skills,
        ]);
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_order() {
        let order = SectionOrder(vec![SectionKey::Education, SectionKey::Skills]);
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_section_key_round_trips_through_str() {
        for key in SectionKey::ALL {
            let parsed: SectionKey = key.as_str().parse().unwrap();
            assert_eq!(parsed, key);
        }
        assert!("awards".parse::<SectionKey>().is_err());
    }

    #[test]
    fn test_document_serializes_with_camel_case_fields() {
        let doc = crate::models::seed::seed_document();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("sectionOrder").is_some());
        assert!(json["personalInfo"].get("jobIntention").is_some());
        assert!(json["projects"][0].get("techStack").is_some());
    }
}
