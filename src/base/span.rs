//! Byte-offset spans, backed by the `text-size` crate.

pub use text_size::{TextRange, TextSize};

/// Build a [`TextRange`] from raw byte offsets.
///
/// Panics if `from > to`, matching [`TextRange::new`].
pub fn span(from: u32, to: u32) -> TextRange {
    TextRange::new(TextSize::new(from), TextSize::new(to))
}
