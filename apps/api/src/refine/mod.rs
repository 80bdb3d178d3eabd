// Text refinement: the LLM-backed polish/rewrite helpers and the guided
// STAR composer. Every entry point degrades to the caller's input — a
// refinement can change a bullet, never lose one.

pub mod handlers;
pub mod polish;
pub mod prompts;
pub mod star;
