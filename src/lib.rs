pub mod config;
pub mod core;
pub mod quiz;
pub mod session;

pub use crate::core::converter::{
    convert_to_latin, convert_to_script, to_latin, to_script, toggle_direction, Direction, Transliterator,
};
pub use crate::core::glyph::{Category, GlyphEntry, GlyphTable};
pub use crate::core::index::{build_forward_index, build_reverse_index, ForwardIndex, ReverseIndex};
