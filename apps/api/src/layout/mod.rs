// Multi-template composition: one document, six layouts, one ordering
// authority. Rendering is pure and re-runs fully on every request.

pub mod catalogue;
pub mod engine;
pub mod handlers;
pub mod templates;
pub mod tree;

// Re-export the public API consumed by other modules (sessions, routes).
pub use catalogue::LayoutId;
pub use engine::compose;
pub use tree::RenderedResume;
