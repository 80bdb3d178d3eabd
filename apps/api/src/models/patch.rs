//! Typed partial updates for list entries.
//!
//! Each entity gets its own patch struct: recognized fields only, unknown
//! fields rejected at deserialization. A patch never touches an entry's id.

use serde::Deserialize;

use crate::models::document::{Education, Internship, Project, SkillGroup};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub college: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    pub honors: Option<String>,
    pub courses: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InternshipPatch {
    pub company: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub summary: Option<String>,
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub summary: Option<String>,
    pub tech_stack: Option<String>,
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillGroupPatch {
    pub category: Option<String>,
    pub items: Option<Vec<String>>,
}

/// A patch addressed at one section's entry type. The mutation operator
/// rejects a variant applied to the wrong section.
#[derive(Debug, Clone)]
pub enum EntryPatch {
    Education(EducationPatch),
    Internship(InternshipPatch),
    Project(ProjectPatch),
    SkillGroup(SkillGroupPatch),
}

impl EducationPatch {
    pub fn apply(self, entry: &mut Education) {
        if let Some(v) = self.school {
            entry.school = v;
        }
        if let Some(v) = self.degree {
            entry.degree = v;
        }
        if let Some(v) = self.college {
            entry.college = v;
        }
        if let Some(v) = self.start_date {
            entry.start_date = v;
        }
        if let Some(v) = self.end_date {
            entry.end_date = v;
        }
        if let Some(v) = self.gpa {
            entry.gpa = Some(v);
        }
        if let Some(v) = self.honors {
            entry.honors = Some(v);
        }
        if let Some(v) = self.courses {
            entry.courses = Some(v);
        }
    }
}

impl InternshipPatch {
    pub fn apply(self, entry: &mut Internship) {
        if let Some(v) = self.company {
            entry.company = v;
        }
        if let Some(v) = self.role {
            entry.role = v;
        }
        if let Some(v) = self.start_date {
            entry.start_date = v;
        }
        if let Some(v) = self.end_date {
            entry.end_date = v;
        }
        if let Some(v) = self.summary {
            entry.summary = Some(v);
        }
        if let Some(v) = self.details {
            entry.details = v;
        }
    }
}

impl ProjectPatch {
    pub fn apply(self, entry: &mut Project) {
        if let Some(v) = self.name {
            entry.name = v;
        }
        if let Some(v) = self.role {
            entry.role = Some(v);
        }
        if let Some(v) = self.link {
            entry.link = Some(v);
        }
        if let Some(v) = self.start_date {
            entry.start_date = v;
        }
        if let Some(v) = self.end_date {
            entry.end_date = v;
        }
        if let Some(v) = self.summary {
            entry.summary = v;
        }
        if let Some(v) = self.tech_stack {
            entry.tech_stack = v;
        }
        if let Some(v) = self.details {
            entry.details = v;
        }
    }
}

impl SkillGroupPatch {
    pub fn apply(self, entry: &mut SkillGroup) {
        if let Some(v) = self.category {
            entry.category = v;
        }
        if let Some(v) = self.items {
            entry.items = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_are_rejected() {
        let raw = r#"{"school": "A大学", "ranking": "top"}"#;
        let parsed: Result<EducationPatch, _> = serde_json::from_str(raw);
        assert!(parsed.is_err(), "unrecognized field must not merge silently");
    }

    #[test]
    fn test_patch_leaves_unspecified_fields_alone() {
        let mut entry = Education {
            id: uuid::Uuid::new_v4(),
            school: "A大学".to_string(),
            degree: "硕士".to_string(),
            college: "计算机学院".to_string(),
            start_date: "2022-09".to_string(),
            end_date: "2025-06".to_string(),
            gpa: Some("3.8".to_string()),
            honors: None,
            courses: None,
        };
        let before_id = entry.id;

        let patch: EducationPatch =
            serde_json::from_str(r#"{"school": "B大学"}"#).unwrap();
        patch.apply(&mut entry);

        assert_eq!(entry.school, "B大学");
        assert_eq!(entry.degree, "硕士");
        assert_eq!(entry.gpa.as_deref(), Some("3.8"));
        assert_eq!(entry.id, before_id);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let patch: ProjectPatch =
            serde_json::from_str(r#"{"techStack": "Rust, axum", "startDate": "2024-01"}"#)
                .unwrap();
        assert_eq!(patch.tech_stack.as_deref(), Some("Rust, axum"));
        assert_eq!(patch.start_date.as_deref(), Some("2024-01"));
    }
}
