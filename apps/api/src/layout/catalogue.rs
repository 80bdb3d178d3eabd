//! Layout catalogue — the closed set of supported layouts and their plans.
//!
//! Each layout is one variant of `LayoutId`; dispatch is an exhaustive
//! match, so adding a layout means adding a variant and one template module,
//! and the compiler points at every site that must learn about it. Nothing
//! here touches the document model or the mutation operators.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::templates;
use crate::layout::tree::{Frame, HeaderBlock, Region, SectionBlock};
use crate::models::document::{Document, PersonalInfo, SectionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutId {
    Modern,
    Classic,
    Technical,
    Minimal,
    LeftColumn,
    HighEnd,
}

impl LayoutId {
    pub const ALL: [LayoutId; 6] = [
        LayoutId::Modern,
        LayoutId::Classic,
        LayoutId::Technical,
        LayoutId::Minimal,
        LayoutId::LeftColumn,
        LayoutId::HighEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutId::Modern => "modern",
            LayoutId::Classic => "classic",
            LayoutId::Technical => "technical",
            LayoutId::Minimal => "minimal",
            LayoutId::LeftColumn => "left-column",
            LayoutId::HighEnd => "high-end",
        }
    }

    /// Display name shown in the template picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            LayoutId::Modern => "现代商务",
            LayoutId::Classic => "经典学术",
            LayoutId::Technical => "极客技术",
            LayoutId::Minimal => "极简主义",
            LayoutId::LeftColumn => "侧栏创意",
            LayoutId::HighEnd => "高端雅致",
        }
    }
}

impl std::str::FromStr for LayoutId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" => Ok(LayoutId::Modern),
            "classic" => Ok(LayoutId::Classic),
            "technical" => Ok(LayoutId::Technical),
            "minimal" => Ok(LayoutId::Minimal),
            "left-column" => Ok(LayoutId::LeftColumn),
            "high-end" => Ok(LayoutId::HighEnd),
            other => Err(AppError::UnknownLayout(other.to_string())),
        }
    }
}

impl std::fmt::Display for LayoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders one section key into one region, or `None` when the key does not
/// belong to that region.
pub type SectionRenderer = fn(SectionKey, &Document) -> Option<SectionBlock>;

/// Builds a region's fixed header from the personal info block.
pub type HeaderRenderer = fn(&PersonalInfo) -> HeaderBlock;

pub struct RegionPlan {
    pub region: Region,
    pub header: Option<HeaderRenderer>,
    pub render: SectionRenderer,
}

pub struct LayoutPlan {
    pub frame: Frame,
    pub regions: Vec<RegionPlan>,
}

/// Resolves the plan for a layout. Total over the closed `LayoutId` set;
/// unknown identifiers are rejected earlier, at string-parse time.
pub fn plan(layout: LayoutId) -> LayoutPlan {
    match layout {
        LayoutId::Modern => templates::modern::plan(),
        LayoutId::Classic => templates::classic::plan(),
        LayoutId::Technical => templates::technical::plan(),
        LayoutId::Minimal => templates::minimal::plan(),
        LayoutId::LeftColumn => templates::left_column::plan(),
        LayoutId::HighEnd => templates::high_end::plan(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::seed_document;
    use std::collections::BTreeMap;

    #[test]
    fn test_layout_ids_round_trip_through_str() {
        for id in LayoutId::ALL {
            let parsed: LayoutId = id.as_str().parse().unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_unknown_layout_string_is_rejected() {
        let err = "two-column".parse::<LayoutId>().unwrap_err();
        assert!(matches!(err, AppError::UnknownLayout(_)));
    }

    #[test]
    fn test_serde_uses_kebab_case_identifiers() {
        assert_eq!(
            serde_json::to_string(&LayoutId::LeftColumn).unwrap(),
            r#""left-column""#
        );
        let parsed: LayoutId = serde_json::from_str(r#""high-end""#).unwrap();
        assert_eq!(parsed, LayoutId::HighEnd);
    }

    /// Every layout's region tables must cover the full key set exactly once.
    /// For single-region layouts that means the one renderer accepts every
    /// key; for the split layout the two tables must partition the set.
    #[test]
    fn test_region_tables_partition_the_key_set() {
        let doc = seed_document();
        for layout in LayoutId::ALL {
            let plan = plan(layout);
            let mut seen: BTreeMap<&'static str, usize> = BTreeMap::new();
            for key in SectionKey::ALL {
                for region in &plan.regions {
                    if (region.render)(key, &doc).is_some() {
                        *seen.entry(key.as_str()).or_default() += 1;
                    }
                }
            }
            for key in SectionKey::ALL {
                assert_eq!(
                    seen.get(key.as_str()),
                    Some(&1),
                    "{layout}: key '{key}' must render in exactly one region"
                );
            }
        }
    }

    #[test]
    fn test_split_layout_has_two_regions_with_headers() {
        let plan = plan(LayoutId::LeftColumn);
        assert!(matches!(plan.frame, Frame::TwoColumn { .. }));
        assert_eq!(plan.regions.len(), 2);
        assert!(plan.regions.iter().all(|r| r.header.is_some()));
    }

    #[test]
    fn test_single_region_layouts_have_one_region() {
        for layout in [
            LayoutId::Modern,
            LayoutId::Classic,
            LayoutId::Technical,
            LayoutId::Minimal,
            LayoutId::HighEnd,
        ] {
            let plan = plan(layout);
            assert!(matches!(plan.frame, Frame::SingleColumn));
            assert_eq!(plan.regions.len(), 1, "{layout} should be single-region");
            assert_eq!(plan.regions[0].region, Region::Full);
        }
    }
}
