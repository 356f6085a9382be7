// src/extractors/mod.rs
pub mod block;
pub mod rules;
pub mod span;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use block::{extract_block, extract_blocks, Block};
#[allow(unused_imports)]
pub use rules::{ExtractionRule, Fragment, Strategy, RULES};
#[allow(unused_imports)]
pub use span::extract_span;
