//! Mutation operators — pure functions from one document to the next.
//!
//! Every operator takes the current `Document` by reference and returns a
//! fresh one; the input is never modified, so earlier snapshots stay valid.
//! Out-of-range indices are hard errors. There is no clamping.

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{
    Document, Education, Internship, PersonalInfo, Project, SectionKey, SkillGroup,
};
use crate::models::patch::EntryPatch;

/// Direction for an adjacent-swap section move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

/// The two lists that carry nested detail bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailHost {
    Internships,
    Projects,
}

impl DetailHost {
    fn list_name(&self) -> &'static str {
        match self {
            DetailHost::Internships => "internships",
            DetailHost::Projects => "projects",
        }
    }
}

impl TryFrom<SectionKey> for DetailHost {
    type Error = AppError;

    fn try_from(key: SectionKey) -> Result<Self, Self::Error> {
        match key {
            SectionKey::Internships => Ok(DetailHost::Internships),
            SectionKey::Projects => Ok(DetailHost::Projects),
            other => Err(AppError::Validation(format!(
                "section '{other}' has no detail bullets"
            ))),
        }
    }
}

// ── New-entry drafts ────────────────────────────────────────────────────────
// Drafts mirror their entity minus the id; `append_entry` assigns it. Fields
// default to empty so a client can add a blank card and fill it in.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EducationDraft {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub honors: Option<String>,
    #[serde(default)]
    pub courses: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InternshipDraft {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// An entry to append, addressed at its target section.
#[derive(Debug, Clone)]
pub enum NewEntry {
    Education(EducationDraft),
    Internship(InternshipDraft),
    Project(ProjectDraft),
    SkillGroup(SkillGroup),
}

// ── Operators ───────────────────────────────────────────────────────────────

pub fn replace_personal_info(doc: &Document, info: PersonalInfo) -> Document {
    let mut next = doc.clone();
    next.personal_info = info;
    next
}

/// Appends a new entry, assigning a fresh id where the entity carries one.
pub fn append_entry(doc: &Document, entry: NewEntry) -> Document {
    let mut next = doc.clone();
    match entry {
        NewEntry::Education(d) => next.education.push(Education {
            id: Uuid::new_v4(),
            school: d.school,
            degree: d.degree,
            college: d.college,
            start_date: d.start_date,
            end_date: d.end_date,
            gpa: d.gpa,
            honors: d.honors,
            courses: d.courses,
        }),
        NewEntry::Internship(d) => next.internships.push(Internship {
            id: Uuid::new_v4(),
            company: d.company,
            role: d.role,
            start_date: d.start_date,
            end_date: d.end_date,
            summary: d.summary,
            details: d.details,
        }),
        NewEntry::Project(d) => next.projects.push(Project {
            id: Uuid::new_v4(),
            name: d.name,
            role: d.role,
            link: d.link,
            start_date: d.start_date,
            end_date: d.end_date,
            summary: d.summary,
            tech_stack: d.tech_stack,
            details: d.details,
        }),
        NewEntry::SkillGroup(g) => next.skills.push(g),
    }
    next
}

/// Merges a typed patch into the entry at `index`, preserving its id and
/// every unspecified field. The patch variant must match the section.
pub fn update_entry(
    doc: &Document,
    section: SectionKey,
    index: usize,
    patch: EntryPatch,
) -> Result<Document, AppError> {
    check_index(section, index, crate::sections::entry_count(doc, section))?;

    let mut next = doc.clone();
    match (section, patch) {
        (SectionKey::Education, EntryPatch::Education(p)) => p.apply(&mut next.education[index]),
        (SectionKey::Internships, EntryPatch::Internship(p)) => {
            p.apply(&mut next.internships[index])
        }
        (SectionKey::Projects, EntryPatch::Project(p)) => p.apply(&mut next.projects[index]),
        (SectionKey::Skills, EntryPatch::SkillGroup(p)) => p.apply(&mut next.skills[index]),
        (section, _) => {
            return Err(AppError::Validation(format!(
                "patch does not match section '{section}'"
            )))
        }
    }
    Ok(next)
}

/// Removes the entry at `index`; later entries shift down in order.
pub fn remove_entry(
    doc: &Document,
    section: SectionKey,
    index: usize,
) -> Result<Document, AppError> {
    check_index(section, index, crate::sections::entry_count(doc, section))?;

    let mut next = doc.clone();
    match section {
        SectionKey::Education => {
            next.education.remove(index);
        }
        SectionKey::Internships => {
            next.internships.remove(index);
        }
        SectionKey::Projects => {
            next.projects.remove(index);
        }
        SectionKey::Skills => {
            next.skills.remove(index);
        }
    }
    Ok(next)
}

/// Swaps the section at `from_index` with its neighbor in `direction`.
/// Moving past either boundary is a no-op, not an error.
pub fn reorder_section(
    doc: &Document,
    from_index: usize,
    direction: MoveDirection,
) -> Result<Document, AppError> {
    let len = doc.section_order.len();
    if from_index >= len {
        return Err(AppError::IndexOutOfRange {
            list: "sectionOrder",
            index: from_index,
            len,
        });
    }

    let mut next = doc.clone();
    match direction {
        MoveDirection::Up if from_index > 0 => {
            next.section_order.swap(from_index, from_index - 1);
        }
        MoveDirection::Down if from_index < len - 1 => {
            next.section_order.swap(from_index, from_index + 1);
        }
        _ => {} // already at the boundary
    }
    Ok(next)
}

pub fn set_detail(
    doc: &Document,
    host: DetailHost,
    item_index: usize,
    bullet_index: usize,
    text: String,
) -> Result<Document, AppError> {
    let mut next = doc.clone();
    let details = host_details_mut(&mut next, host, item_index)?;
    if bullet_index >= details.len() {
        return Err(AppError::IndexOutOfRange {
            list: "details",
            index: bullet_index,
            len: details.len(),
        });
    }
    details[bullet_index] = text;
    Ok(next)
}

pub fn append_detail(
    doc: &Document,
    host: DetailHost,
    item_index: usize,
    text: String,
) -> Result<Document, AppError> {
    let mut next = doc.clone();
    host_details_mut(&mut next, host, item_index)?.push(text);
    Ok(next)
}

pub fn remove_detail(
    doc: &Document,
    host: DetailHost,
    item_index: usize,
    bullet_index: usize,
) -> Result<Document, AppError> {
    let mut next = doc.clone();
    let details = host_details_mut(&mut next, host, item_index)?;
    if bullet_index >= details.len() {
        return Err(AppError::IndexOutOfRange {
            list: "details",
            index: bullet_index,
            len: details.len(),
        });
    }
    details.remove(bullet_index);
    Ok(next)
}

/// Reads the current text of one detail bullet, with the same index
/// validation as the detail mutations.
pub fn detail_text<'a>(
    doc: &'a Document,
    host: DetailHost,
    item_index: usize,
    bullet_index: usize,
) -> Result<&'a str, AppError> {
    let details = match host {
        DetailHost::Internships => doc
            .internships
            .get(item_index)
            .map(|i| &i.details)
            .ok_or(AppError::IndexOutOfRange {
                list: host.list_name(),
                index: item_index,
                len: doc.internships.len(),
            })?,
        DetailHost::Projects => doc
            .projects
            .get(item_index)
            .map(|p| &p.details)
            .ok_or(AppError::IndexOutOfRange {
                list: host.list_name(),
                index: item_index,
                len: doc.projects.len(),
            })?,
    };
    details
        .get(bullet_index)
        .map(|s| s.as_str())
        .ok_or(AppError::IndexOutOfRange {
            list: "details",
            index: bullet_index,
            len: details.len(),
        })
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn check_index(section: SectionKey, index: usize, len: usize) -> Result<(), AppError> {
    if index >= len {
        return Err(AppError::IndexOutOfRange {
            list: section.as_str(),
            index,
            len,
        });
    }
    Ok(())
}

fn host_details_mut<'a>(
    doc: &'a mut Document,
    host: DetailHost,
    item_index: usize,
) -> Result<&'a mut Vec<String>, AppError> {
    match host {
        DetailHost::Internships => {
            let len = doc.internships.len();
            doc.internships
                .get_mut(item_index)
                .map(|i| &mut i.details)
                .ok_or(AppError::IndexOutOfRange {
                    list: host.list_name(),
                    index: item_index,
                    len,
                })
        }
        DetailHost::Projects => {
            let len = doc.projects.len();
            doc.projects
                .get_mut(item_index)
                .map(|p| &mut p.details)
                .ok_or(AppError::IndexOutOfRange {
                    list: host.list_name(),
                    index: item_index,
                    len,
                })
        }
    }
}
