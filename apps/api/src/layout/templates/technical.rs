//! 极客技术 — uppercase side-rule headings, mono tech-stack chips, compact
//! education rows. Falls back to a stock tagline when no role is set.

use crate::layout::catalogue::{LayoutPlan, RegionPlan};
use crate::layout::templates::contact;
use crate::layout::tree::{
    ContactKind, Element, EntryCard, Frame, HeaderBlock, Heading, HeadingStyle, Photo,
    PhotoPlacement, Region, SectionBlock,
};
use crate::models::document::{Document, PersonalInfo, SectionKey};

const FALLBACK_TAGLINE: &str = "求职意向：软件工程师";

pub fn plan() -> LayoutPlan {
    LayoutPlan {
        frame: Frame::SingleColumn,
        regions: vec![RegionPlan {
            region: Region::Full,
            header: Some(header),
            render,
        }],
    }
}

fn header(info: &PersonalInfo) -> HeaderBlock {
    let mut links = Vec::new();
    if let Some(github) = &info.github {
        links.push(contact(ContactKind::Github, github));
    }
    if let Some(blog) = &info.blog {
        links.push(contact(ContactKind::Blog, blog));
    }

    let tagline = if info.job_intention.is_empty() {
        FALLBACK_TAGLINE.to_string()
    } else {
        info.job_intention.clone()
    };

    HeaderBlock {
        name: Some(info.name.clone()),
        tagline: Some(tagline),
        contact_heading: None,
        contact: vec![
            contact(ContactKind::Email, &info.email),
            contact(ContactKind::Phone, &info.phone),
            contact(ContactKind::Location, &info.location),
        ],
        links,
        photo: info.photo_url.as_ref().map(|src| Photo {
            source: src.clone(),
            placement: PhotoPlacement::HeaderRight,
        }),
    }
}

fn heading(text: &str) -> Heading {
    Heading {
        text: text.to_string(),
        style: HeadingStyle::SideRule,
    }
}

fn dates(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

fn render(key: SectionKey, doc: &Document) -> Option<SectionBlock> {
    let block = match key {
        SectionKey::Skills => SectionBlock {
            key,
            heading: heading("专业技能"),
            elements: doc
                .skills
                .iter()
                .map(|group| Element::LabeledRow {
                    label: group.category.clone(),
                    text: group.items.join(" / "),
                })
                .collect(),
        },
        SectionKey::Projects => SectionBlock {
            key,
            heading: heading("项目经历"),
            elements: doc
                .projects
                .iter()
                .map(|proj| {
                    let mut card = EntryCard::new(&proj.name);
                    card.date_range = Some(dates(&proj.start_date, &proj.end_date));
                    if let Some(link) = &proj.link {
                        card.annotations.push(format!("[{link}]"));
                    }
                    card.annotations.push(proj.tech_stack.clone());
                    card.bullets = proj.details.clone();
                    Element::Entry(card)
                })
                .collect(),
        },
        SectionKey::Internships => SectionBlock {
            key,
            heading: heading("实习经历"),
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
        SectionKey::Education => SectionBlock {
            key,
            heading: heading("教育背景"),
            elements: doc
                .education
                .iter()
                .map(|edu| {
                    let mut card = EntryCard::new(&edu.school);
                    card.date_range = Some(dates(&edu.start_date, &edu.end_date));
                    card.subtitle = Some(format!("{} | {}", edu.college, edu.degree));
                    if let Some(gpa) = &edu.gpa {
                        card.annotations.push(gpa.clone());
                    }
                    Element::Entry(card)
                })
                .collect(),
        },
    };
    Some(block)
}
