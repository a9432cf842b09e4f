//! Single-pass scanner for delimited tokens.

use stencil_domain::{DelimiterPair, DomainResult};

use super::handler::TokenHandler;

const ESCAPE: char = '\\';

/// Scans text for tokens bounded by a [`DelimiterPair`] and substitutes
/// each one with the output of its [`TokenHandler`].
#[derive(Debug, Clone)]
pub struct TokenScanner<H> {
    delimiters: DelimiterPair,
    handler: H,
}

impl<H: TokenHandler> TokenScanner<H> {
    /// Creates a scanner for the given markers and handler.
    #[must_use]
    pub const fn new(delimiters: DelimiterPair, handler: H) -> Self {
        Self {
            delimiters,
            handler,
        }
    }

    /// Consumes the scanner, returning its handler.
    #[must_use]
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Like [`parse`](Self::parse), treating absent text as empty.
    pub fn parse_opt(&mut self, text: Option<&str>) -> String {
        text.map_or_else(String::new, |text| self.parse(text))
    }

    /// Replaces every token in `text` with its handler output.
    ///
    /// Malformed input never fails: an unterminated token is copied to the
    /// output verbatim (from its open marker to the end of the text) and
    /// ends the scan.
    pub fn parse(&mut self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let open = self.delimiters.open();
        let close = self.delimiters.close();

        let Some(mut start) = text.find(open) else {
            return text.to_string();
        };

        let mut builder = String::with_capacity(text.len());
        let mut expression = String::new();
        let mut offset = 0;

        loop {
            if text[offset..start].ends_with(ESCAPE) {
                // Escaped open marker: drop the backslash, keep the marker.
                builder.push_str(&text[offset..start - ESCAPE.len_utf8()]);
                builder.push_str(open);
                offset = start + open.len();
            } else {
                expression.clear();
                builder.push_str(&text[offset..start]);
                offset = start + open.len();

                let mut end = find_from(text, close, offset);
                while let Some(candidate) = end {
                    if text[offset..candidate].ends_with(ESCAPE) {
                        expression.push_str(&text[offset..candidate - ESCAPE.len_utf8()]);
                        expression.push_str(close);
                        offset = candidate + close.len();
                        end = find_from(text, close, offset);
                    } else {
                        expression.push_str(&text[offset..candidate]);
                        break;
                    }
                }

                match end {
                    Some(candidate) => {
                        builder.push_str(&self.handler.handle_token(&expression));
                        offset = candidate + close.len();
                    }
                    None => {
                        tracing::debug!(
                            position = start,
                            "unterminated token, keeping remainder as text"
                        );
                        builder.push_str(&text[start..]);
                        offset = text.len();
                    }
                }
            }

            match find_from(text, open, offset) {
                Some(next) => start = next,
                None => break,
            }
        }

        if offset < text.len() {
            builder.push_str(&text[offset..]);
        }

        builder
    }
}

/// Finds `pattern` in `text` at or after byte offset `from`.
fn find_from(text: &str, pattern: &str, from: usize) -> Option<usize> {
    text.get(from..)?.find(pattern).map(|index| from + index)
}

/// Scans `text` for `open ... close` tokens and replaces each with the
/// output of `handler`.
///
/// # Errors
///
/// Returns [`stencil_domain::DomainError::EmptyDelimiter`] if either marker is
/// empty. Scanning itself never fails.
pub fn scan_and_replace(
    text: &str,
    open: &str,
    close: &str,
    handler: impl TokenHandler,
) -> DomainResult<String> {
    let delimiters = DelimiterPair::new(open, close)?;
    Ok(TokenScanner::new(delimiters, handler).parse(text))
}
