//! Aksara Batak transliteration core

pub mod audit;
pub mod converter;
pub mod glyph;
pub mod index;
pub mod unicode;
