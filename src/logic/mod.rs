//! Match identifier resolution and advancement synthesis.

mod advancement;
mod bracket;
mod double_elim;
mod resolver;
mod standings;
mod tables;

pub use advancement::{generate, template_tag};
pub use resolver::{classify_bracket_side, invert, resolve, validate};
