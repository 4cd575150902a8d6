//! Re-chunking of streamed text into fixed-size pieces.

/// Split `text` into pieces of at most `size` characters, left to right.
///
/// Counts characters rather than bytes so no piece splits a code point.
/// A `size` of zero is treated as one.
pub fn pieces(text: &str, size: usize) -> Pieces<'_> {
    Pieces {
        rest: text,
        size: size.max(1),
    }
}

/// Iterator returned by [`pieces`].
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    rest: &'a str,
    size: usize,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(self.size)
            .map(|(index, _)| index)
            .unwrap_or(self.rest.len());
        let (piece, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(piece)
    }
}
