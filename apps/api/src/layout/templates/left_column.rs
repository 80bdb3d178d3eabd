//! 侧栏创意 — the split layout. A fixed-width sidebar carries the photo,
//! the 联系方式 block, education and skills; the main column carries the
//! name, tagline, internships and projects. The two region tables partition
//! the full section-key set.

use crate::layout::catalogue::{LayoutPlan, RegionPlan};
use crate::layout::templates::contact;
use crate::layout::tree::{
    ContactKind, Element, EntryCard, Frame, HeaderBlock, Heading, HeadingStyle, Photo,
    PhotoPlacement, Region, SectionBlock,
};
use crate::models::document::{Document, PersonalInfo, SectionKey};

const FALLBACK_TAGLINE: &str = "求职意向：软件开发工程师";
const SIDEBAR_RATIO: f32 = 0.32;

pub fn plan() -> LayoutPlan {
    LayoutPlan {
        frame: Frame::TwoColumn {
            sidebar_ratio: SIDEBAR_RATIO,
        },
        regions: vec![
            RegionPlan {
                region: Region::Sidebar,
                header: Some(sidebar_header),
                render: render_sidebar,
            },
            RegionPlan {
                region: Region::Main,
                header: Some(main_header),
                render: render_main,
            },
        ],
    }
}

/// Photo and contact details live in the sidebar, under a fixed heading.
fn sidebar_header(info: &PersonalInfo) -> HeaderBlock {
    let mut items = vec![
        contact(ContactKind::Phone, &info.phone),
        contact(ContactKind::Email, &info.email),
        contact(ContactKind::Location, &info.location),
    ];
    if let Some(github) = &info.github {
        items.push(contact(ContactKind::Github, github));
    }

    HeaderBlock {
        name: None,
        tagline: None,
        contact_heading: Some("联系方式".to_string()),
        contact: items,
        links: Vec::new(),
        photo: info.photo_url.as_ref().map(|src| Photo {
            source: src.clone(),
            placement: PhotoPlacement::SidebarTop,
        }),
    }
}

/// Name and tagline open the main column.
fn main_header(info: &PersonalInfo) -> HeaderBlock {
    let tagline = if info.job_intention.is_empty() {
        FALLBACK_TAGLINE.to_string()
    } else {
        info.job_intention.clone()
    };

    HeaderBlock {
        name: Some(info.name.clone()),
        tagline: Some(tagline),
        contact_heading: None,
        contact: Vec::new(),
        links: Vec::new(),
        photo: None,
    }
}

fn dates(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

fn render_sidebar(key: SectionKey, doc: &Document) -> Option<SectionBlock> {
    let block = match key {
        SectionKey::Education => SectionBlock {
            key,
            heading: Heading {
                text: "教育背景".to_string(),
                style: HeadingStyle::TrackedCaps,
            },
            // Sidebar cards are trimmed down: school, degree, dates.
            elements: doc
                .education
                .iter()
                .map(|edu| {
                    let mut card = EntryCard::new(&edu.school);
                    card.subtitle = Some(edu.degree.clone());
                    card.date_range = Some(dates(&edu.start_date, &edu.end_date));
                    Element::Entry(card)
                })
                .collect(),
        },
        SectionKey::Skills => SectionBlock {
            key,
            heading: Heading {
                text: "技能专长".to_string(),
                style: HeadingStyle::TrackedCaps,
            },
            elements: doc
                .skills
                .iter()
                .map(|group| Element::LabeledRow {
                    label: group.category.clone(),
                    text: group.items.join(", "),
                })
                .collect(),
        },
        SectionKey::Internships | SectionKey::Projects => return None,
    };
    Some(block)
}

fn render_main(key: SectionKey, doc: &Document) -> Option<SectionBlock> {
    let block = match key {
        SectionKey::Internships => SectionBlock {
            key,
            heading: Heading {
                text: "实习经历".to_string(),
                style: HeadingStyle::AccentBar,
            },
            elements: doc
                .internships
                .iter()
                .map(|job| {
                    let mut card = EntryCard::new(&job.company);
                    card.date_range = Some(dates(&job.start_date, &job.end_date));
                    card.subtitle = Some(job.role.clone());
                    card.bullets = job.details.clone();
                    Element::Entry(card)
                })
                .collect(),
        },
        SectionKey::Projects => SectionBlock {
            key,
            heading: Heading {
                text: "项目经历".to_string(),
                style: HeadingStyle::AccentBar,
            },
            elements: doc
                .projects
                .iter()
                .map(|proj| {
                    let mut card = EntryCard::new(&proj.name);
                    card.date_range = Some(dates(&proj.start_date, &proj.end_date));
                    if let Some(link) = &proj.link {
                        card.annotations.push(link.clone());
                    }
                    card.annotations.push(format!("技术栈：{}", proj.tech_stack));
                    card.summary = Some(proj.summary.clone());
                    card.bullets = proj.details.clone();
                    Element::Entry(card)
                })
                .collect(),
        },
        SectionKey::Education | SectionKey::Skills => return None,
    };
    Some(block)
}
