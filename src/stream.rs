//! stream.rs
//!
//! The token stream every extractor works on, and the anchor-relative
//! field reader that most of the record is filled with.
//!
//! A flattened form has no field/value delimiters; order is the only
//! structure. A [`TokenStream`] keeps the tokens it was built from and a
//! *view* over them. Repair passes hide tokens from the view
//! ([`TokenStream::suppress`]) instead of deleting them, so the view only
//! ever shrinks and any visible position can still be mapped back to
//! where it sat in the document ([`TokenStream::origin`]).
//!
//! All indices taken or returned by the methods below are view indices.

use crate::anchors;

/// Applies the clean-up the form needs before it can be split:
/// paragraph breaks become token separators, decorative glyphs and the
/// "not printed when checked" boilerplate are dropped.
///
/// Single line breaks inside a cell are kept; see [`strip_line_breaks`].
pub fn normalize(flattened: &str) -> String {
    let mut text = flattened.replace("\n\n", " ");
    for glyph in anchors::DECORATIVE_GLYPHS {
        text = text.replace(glyph, "");
    }
    text = text.replace(anchors::NO_PRINT_PHRASE, "");
    text.replacen(anchors::BUY_ASSISTIVE, "", 1)
}

/// Removes the single line breaks that [`normalize`] leaves inside cells.
pub fn strip_line_breaks(normalized: &str) -> String {
    normalized.replace("\r\n", "").replace('\n', "")
}

/// Ordered, shrink-only sequence of text tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
    /// Positions in `tokens` that are still visible, ascending.
    view: Vec<usize>,
}

impl TokenStream {
    /// Splits normalized text on the single-space separator. Consecutive
    /// separators produce empty tokens, which stand for blank cells.
    pub fn tokenize(normalized: &str) -> Self {
        Self::from_tokens(normalized.split(' '))
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let view = (0..tokens.len()).collect();
        TokenStream { tokens, view }
    }

    /// Number of visible tokens.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Number of tokens hidden by repair passes so far.
    pub fn suppressed(&self) -> usize {
        self.tokens.len() - self.view.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.view.get(index).map(|&i| self.tokens[i].as_str())
    }

    /// Token at `index`, or the empty string past either end.
    pub fn token(&self, index: usize) -> &str {
        self.get(index).unwrap_or("")
    }

    /// Where a visible token sat in the stream as originally tokenized.
    pub fn origin(&self, index: usize) -> Option<usize> {
        self.view.get(index).copied()
    }

    /// Position of the first visible token equal to `keyword`.
    pub fn position(&self, keyword: &str) -> Option<usize> {
        self.position_from(keyword, 0)
    }

    /// Position of the first visible token equal to `keyword` at or after `start`.
    pub fn position_from(&self, keyword: &str, start: usize) -> Option<usize> {
        (start..self.len()).find(|&i| self.token(i) == keyword)
    }

    /// Every position holding `keyword`, in document order.
    pub fn positions<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = usize> + 'a {
        (0..self.len()).filter(move |&i| self.token(i) == keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.position(keyword).is_some()
    }

    /// Reads the token `offset` places after the first `keyword`.
    ///
    /// Returns the empty string when the keyword is absent, when the read
    /// falls past the end, or when the token read is `delimiter`: a blank
    /// cell on the form flattens to the next label following directly.
    ///
    /// ```
    /// # use case_plan_import::stream::TokenStream;
    /// let s = TokenStream::from_tokens(["代理人姓名", "陳大文", "代理人手機", "代理人關係"]);
    /// assert_eq!(s.read_field("代理人姓名", "代理人手機", 1), "陳大文");
    /// assert_eq!(s.read_field("代理人手機", "代理人關係", 1), "");
    /// assert_eq!(s.read_field("代理人地址", "", 1), "");
    /// ```
    pub fn read_field(&self, keyword: &str, delimiter: &str, offset: usize) -> &str {
        let value = self.read_at(keyword, offset);
        if value == delimiter {
            ""
        } else {
            value
        }
    }

    /// Reads the token `offset` places after the first `keyword`, with no
    /// delimiter check. Empty when the keyword is absent.
    pub fn read_at(&self, keyword: &str, offset: usize) -> &str {
        match self.position(keyword) {
            Some(i) => self.token(i + offset),
            None => "",
        }
    }

    /// Concatenates the visible tokens in `start..end` without separators.
    pub fn join(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        (start..end).map(|i| self.token(i)).collect()
    }

    /// Hides the token at `index` from the view. Returns its original
    /// position, or `None` if `index` was already past the end.
    pub fn suppress(&mut self, index: usize) -> Option<usize> {
        if index < self.view.len() {
            Some(self.view.remove(index))
        } else {
            None
        }
    }
}
