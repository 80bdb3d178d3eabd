pub mod document;
pub mod patch;
pub mod seed;
