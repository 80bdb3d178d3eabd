//! Template modules, one per catalogue entry. Each owns its typography and
//! structure; they share nothing beyond the engine contract and the tiny
//! constructors below.

pub mod classic;
pub mod high_end;
pub mod left_column;
pub mod minimal;
pub mod modern;
pub mod technical;

use crate::layout::tree::{ContactItem, ContactKind};

pub(crate) fn contact(kind: ContactKind, value: &str) -> ContactItem {
    ContactItem {
        kind,
        value: value.to_string(),
    }
}
