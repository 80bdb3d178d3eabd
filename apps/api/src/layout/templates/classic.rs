//! 经典学术 — serif register, shaded headings, en-dash date ranges, photo
//! floated at the top-right corner. Internship summaries are not shown.

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

    HeaderBlock {
        name: Some(info.name.clone()),
        tagline: (!info.job_intention.is_empty())
            .then(|| format!("求职意向：{}", info.job_intention)),
        contact_heading: None,
        contact: vec![
            contact(ContactKind::Location, &info.location),
            contact(ContactKind::Phone, &info.phone),
            contact(ContactKind::Email, &info.email),
        ],
        links,
        photo: info.photo_url.as_ref().map(|src| Photo {
            source: src.clone(),
            placement: PhotoPlacement::TopRightFloat,
        }),
    }
}

fn heading(text: &str) -> Heading {
    Heading {
        text: text.to_string(),
        style: HeadingStyle::Boxed,
    }
}

fn dates(start: &str, end: &str) -> String {
    format!("{start} – {end}")
}

fn render(key: SectionKey, doc: &Document) -> Option<SectionBlock> {
    let block = match key {
        SectionKey::Education => SectionBlock {
            key,
            heading: heading("教育背景"),
            elements: doc
                .education
                .iter()
                .map(|edu| {
                    let mut card = EntryCard::new(&edu.school);
                    card.date_range = Some(dates(&edu.start_date, &edu.end_date));
                    card.subtitle = Some(format!("{}，{}", edu.college, edu.degree));
                    // gpa carries honors along; honors alone are not shown
                    if let Some(gpa) = &edu.gpa {
                        let note = match &edu.honors {
                            Some(honors) => format!("相关成绩：{gpa} | 荣誉：{honors}"),
                            None => format!("相关成绩：{gpa}"),
                        };
                        card.annotations.push(note);
                    }
                    Element::Entry(card)
                })
                .collect(),
        },
        SectionKey::Skills => SectionBlock {
            key,
            heading: heading("专业技能"),
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
                        card.annotations.push(format!("({link})"));
                    }
                    card.annotations.push(format!("技术栈：{}", proj.tech_stack));
                    card.bullets = proj.details.clone();
                    Element::Entry(card)
                })
                .collect(),
        },
    };
    Some(block)
}
