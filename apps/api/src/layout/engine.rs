//! Layout engine — projects a document through a layout plan into a render
//! tree. Pure and deterministic: same document + same layout, same tree.

use crate::layout::catalogue::{self, LayoutId};
use crate::layout::tree::{RegionBlock, RenderedResume};
use crate::models::document::Document;
use crate::sections::{self, EmptyPolicy};

/// Composes the full visual document for one layout.
///
/// The stored section order is the single ordering authority: every region
/// walks it in document order and emits only the keys it owns. A key whose
/// registry policy is `SuppressWhenEmpty` and whose backing list is empty is
/// skipped in every region; `AlwaysShow` sections render their heading over
/// an empty body.
pub fn compose(doc: &Document, layout: LayoutId) -> RenderedResume {
    let plan = catalogue::plan(layout);

    let regions = plan
        .regions
        .iter()
        .map(|region_plan| {
            let header = region_plan.header.map(|build| build(&doc.personal_info));

            let mut blocks = Vec::new();
            for &key in doc.section_order.keys() {
                if sections::policy(key) == EmptyPolicy::SuppressWhenEmpty
                    && sections::is_empty(doc, key)
                {
                    continue;
                }
                if let Some(section) = (region_plan.render)(key, doc) {
                    blocks.push(section);
                }
            }

            RegionBlock {
                region: region_plan.region,
                header,
                sections: blocks,
            }
        })
        .collect();

    RenderedResume {
        layout,
        frame: plan.frame,
        regions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::SectionKey;
    use crate::models::seed::seed_document;
    use crate::mutation::ops::{reorder_section, MoveDirection};
    use std::collections::BTreeSet;

    #[test]
    fn test_rendering_twice_yields_identical_trees() {
        let doc = seed_document();
        for layout in LayoutId::ALL {
            let first = compose(&doc, layout);
            let second = compose(&doc, layout);
            assert_eq!(first, second, "{layout} must be deterministic");
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap(),
                "{layout} serialized output must be byte-identical"
            );
        }
    }

    #[test]
    fn test_every_layout_respects_the_stored_section_order() {
        let mut doc = seed_document();
        // [education, skills, internships, projects] -> [skills, internships, projects, education]
        doc = reorder_section(&doc, 0, MoveDirection::Down).unwrap();
        doc = reorder_section(&doc, 1, MoveDirection::Down).unwrap();
        doc = reorder_section(&doc, 2, MoveDirection::Down).unwrap();

        for layout in LayoutId::ALL {
            let tree = compose(&doc, layout);
            for region in &tree.regions {
                let keys: Vec<SectionKey> = region.sections.iter().map(|s| s.key).collect();
                let expected: Vec<SectionKey> = doc
                    .section_order
                    .keys()
                    .iter()
                    .copied()
                    .filter(|k| keys.contains(k))
                    .collect();
                assert_eq!(
                    keys, expected,
                    "{layout}/{:?}: region order must follow the document order",
                    region.region
                );
            }
        }
    }

    #[test]
    fn test_split_layout_renders_each_key_in_exactly_one_region() {
        let doc = seed_document();
        let tree = compose(&doc, LayoutId::LeftColumn);
        assert_eq!(tree.regions.len(), 2);

        let keys = tree.rendered_keys();
        assert_eq!(keys.len(), SectionKey::ALL.len());
        let unique: BTreeSet<&'static str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(unique.len(), SectionKey::ALL.len(), "no key may repeat");
    }

    #[test]
    fn test_empty_internships_vanish_in_every_layout() {
        let mut doc = seed_document();
        doc.internships.clear();

        for layout in LayoutId::ALL {
            let tree = compose(&doc, layout);
            assert!(
                !tree.rendered_keys().contains(&SectionKey::Internships),
                "{layout}: empty internships must leave no artifact"
            );
        }
    }

    #[test]
    fn test_empty_always_show_sections_keep_their_heading() {
        let mut doc = seed_document();
        doc.projects.clear();

        for layout in LayoutId::ALL {
            let tree = compose(&doc, layout);
            let block = tree
                .regions
                .iter()
                .flat_map(|r| r.sections.iter())
                .find(|s| s.key == SectionKey::Projects)
                .unwrap_or_else(|| panic!("{layout}: empty projects must still render a heading"));
            assert!(block.elements.is_empty(), "{layout}: body must be empty");
            assert!(!block.heading.text.is_empty());
        }
    }

    #[test]
    fn test_header_is_composed_independently_of_section_order() {
        let doc = seed_document();
        let reordered = reorder_section(&doc, 0, MoveDirection::Down).unwrap();

        for layout in LayoutId::ALL {
            let a = compose(&doc, layout);
            let b = compose(&reordered, layout);
            let headers_a: Vec<_> = a.regions.iter().map(|r| r.header.clone()).collect();
            let headers_b: Vec<_> = b.regions.iter().map(|r| r.header.clone()).collect();
            assert_eq!(headers_a, headers_b, "{layout}: header ignores section order");
        }
    }

    #[test]
    fn test_photo_passes_through_opaquely() {
        let mut doc = seed_document();
        doc.personal_info.photo_url = Some("data:image/png;base64,AAAA".to_string());

        let tree = compose(&doc, LayoutId::Modern);
        let header = tree.regions[0].header.as_ref().unwrap();
        assert_eq!(
            header.photo.as_ref().map(|p| p.source.as_str()),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_missing_photo_renders_no_photo_slot() {
        let mut doc = seed_document();
        doc.personal_info.photo_url = None;

        for layout in LayoutId::ALL {
            let tree = compose(&doc, layout);
            for region in &tree.regions {
                if let Some(header) = &region.header {
                    assert!(header.photo.is_none(), "{layout}: no photo handle, no slot");
                }
            }
        }
    }
}
