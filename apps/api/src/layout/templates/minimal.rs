//! 极简主义 — dual-language captions, mono dates, plain dot bullets.
//! Honors are dropped; only the gpa survives as a quiet note.

use crate::layout::catalogue::{LayoutPlan, RegionPlan};
use crate::layout::templates::contact;
use crate::layout::tree::{
    ContactKind, Element, EntryCard, Frame, HeaderBlock, Heading, HeadingStyle, Photo,
    PhotoPlacement, Region, SectionBlock,
};
use crate::models::document::{Document, PersonalInfo, SectionKey};

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

    HeaderBlock {
        name: Some(info.name.clone()),
        tagline: (!info.job_intention.is_empty()).then(|| info.job_intention.clone()),
        contact_heading: None,
        contact: vec![
            contact(ContactKind::Location, &info.location),
            contact(ContactKind::Phone, &info.phone),
            contact(ContactKind::Email, &info.email),
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
        style: HeadingStyle::DualLanguage,
    }
}

fn dates(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

fn render(key: SectionKey, doc: &Document) -> Option<SectionBlock> {
    let block = match key {
        SectionKey::Education => SectionBlock {
            key,
            heading: heading("Education // 教育背景"),
            elements: doc
                .education
                .iter()
                .map(|edu| {
                    let mut card = EntryCard::new(&edu.school);
                    card.date_range = Some(dates(&edu.start_date, &edu.end_date));
                    card.subtitle = Some(format!("{} | {}", edu.degree, edu.college));
                    if let Some(gpa) = &edu.gpa {
                        card.annotations.push(gpa.clone());
                    }
                    Element::Entry(card)
                })
                .collect(),
        },
        SectionKey::Skills => SectionBlock {
            key,
            heading: heading("Skills // 专业技能"),
            elements: doc
                .skills
                .iter()
                .map(|group| Element::LabeledRow {
                    label: group.category.clone(),
                    text: group.items.join("；"),
                })
                .collect(),
        },
        SectionKey::Internships => SectionBlock {
            key,
            heading: heading("Experience // 实习经历"),
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
            heading: heading("Projects // 项目经历"),
            elements: doc
                .projects
                .iter()
                .map(|proj| {
                    let mut card = EntryCard::new(&proj.name);
                    card.date_range = Some(dates(&proj.start_date, &proj.end_date));
                    if let Some(link) = &proj.link {
                        card.annotations.push(link.clone());
                    }
                    card.annotations.push(proj.tech_stack.clone());
                    card.bullets = proj.details.clone();
                    Element::Entry(card)
                })
                .collect(),
        },
    };
    Some(block)
}
