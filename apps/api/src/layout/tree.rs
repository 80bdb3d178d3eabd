//! Render tree — the typed, serializable output of the layout engine.
//!
//! A composed résumé is a frame plus one or two regions; each region holds
//! an optional fixed header block and the dynamic section blocks in
//! section-order. Nodes carry the layout's typography decisions (heading
//! treatment, date separators, photo placement) as data, so rendering the
//! same document twice yields identical trees.

use serde::Serialize;

use crate::layout::catalogue::LayoutId;
use crate::models::document::SectionKey;

/// Structural frame of a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    SingleColumn,
    /// Fixed-width side column plus flexible main column.
    TwoColumn { sidebar_ratio: f32 },
}

/// An independent visual placement target within one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Full,
    Sidebar,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Location,
    Phone,
    Email,
    Github,
    Blog,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoPlacement {
    HeaderRight,
    TopRightFloat,
    SidebarTop,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    /// Opaque handle passed through from `PersonalInfo.photo_url`.
    pub source: String,
    pub placement: PhotoPlacement,
}

/// Fixed block composed from `PersonalInfo`, independent of section order.
/// Split layouts may spread it over both regions (photo and contact in the
/// sidebar, name and tagline in the main column).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_heading: Option<String>,
    pub contact: Vec<ContactItem>,
    pub links: Vec<ContactItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

/// Heading treatment, one flavor per template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingStyle {
    /// Vertical accent bar before the title (现代商务).
    AccentBar,
    /// Shaded, underlined strip (经典学术).
    Boxed,
    /// Uppercase title with a thick left rule (极客技术).
    SideRule,
    /// Small dual-language caption (极简主义).
    DualLanguage,
    /// Letter-spaced caps over a thin underline (侧栏创意 sidebar).
    TrackedCaps,
    /// Title with a hairline rule trailing to the margin (高端雅致).
    TrailingRule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub text: String,
    pub style: HeadingStyle,
}

/// One dated card: an education record, internship, or project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryCard {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    /// Secondary chips: links, tech stacks, gpa notes. Order is meaningful.
    pub annotations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub bullets: Vec<String>,
}

impl EntryCard {
    pub fn new(title: impl Into<String>) -> Self {
        EntryCard {
            title: title.into(),
            subtitle: None,
            date_range: None,
            annotations: Vec::new(),
            summary: None,
            bullets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Entry(EntryCard),
    /// Label + body line, used by skill tables.
    LabeledRow { label: String, text: String },
}

/// One dynamic section as rendered into one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    pub key: SectionKey,
    pub heading: Heading,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionBlock {
    pub region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderBlock>,
    pub sections: Vec<SectionBlock>,
}

/// The fully composed visual document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedResume {
    pub layout: LayoutId,
    pub frame: Frame,
    pub regions: Vec<RegionBlock>,
}

impl RenderedResume {
    /// Section keys rendered across all regions, in emission order.
    pub fn rendered_keys(&self) -> Vec<SectionKey> {
        self.regions
            .iter()
            .flat_map(|r| r.sections.iter().map(|s| s.key))
            .collect()
    }
}
