//! Delimiter pair marking the bounds of a token

use std::borrow::Cow;

use crate::error::{DomainError, DomainResult};

/// The open/close markers a token scanner searches for.
///
/// Both markers are guaranteed non-empty. They may differ in length and
/// content, and neither is restricted to a single character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelimiterPair {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl DelimiterPair {
    /// Marker opening a property placeholder.
    pub const PLACEHOLDER_OPEN: &'static str = "${";

    /// Marker closing a property placeholder.
    pub const PLACEHOLDER_CLOSE: &'static str = "}";

    /// Creates a delimiter pair.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyDelimiter`] if either marker is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_domain::DelimiterPair;
    ///
    /// let pair = DelimiterPair::new("#{", "}").unwrap();
    /// assert_eq!(pair.open(), "#{");
    /// assert!(DelimiterPair::new("", "}").is_err());
    /// ```
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> DomainResult<Self> {
        let open = open.into();
        let close = close.into();

        if open.is_empty() {
            return Err(DomainError::EmptyDelimiter { marker: "open" });
        }
        if close.is_empty() {
            return Err(DomainError::EmptyDelimiter { marker: "close" });
        }

        Ok(Self {
            open: Cow::Owned(open),
            close: Cow::Owned(close),
        })
    }

    /// The `${` / `}` pair used for property placeholders.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            open: Cow::Borrowed(Self::PLACEHOLDER_OPEN),
            close: Cow::Borrowed(Self::PLACEHOLDER_CLOSE),
        }
    }

    /// Returns the opening marker.
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Returns the closing marker.
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Wraps `content` back into the markers, reproducing the original token text.
    #[must_use]
    pub fn wrap(&self, content: &str) -> String {
        let mut token = String::with_capacity(self.open.len() + content.len() + self.close.len());
        token.push_str(&self.open);
        token.push_str(content);
        token.push_str(&self.close);
        token
    }
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_multichar_markers() {
        let pair = DelimiterPair::new("<%=", "%>").unwrap();
        assert_eq!(pair.open(), "<%=");
        assert_eq!(pair.close(), "%>");
    }

    #[test]
    fn test_new_accepts_identical_markers() {
        let pair = DelimiterPair::new("|", "|").unwrap();
        assert_eq!(pair.open(), pair.close());
    }

    #[test]
    fn test_empty_open_rejected() {
        assert_eq!(
            DelimiterPair::new("", "}"),
            Err(DomainError::EmptyDelimiter { marker: "open" })
        );
    }

    #[test]
    fn test_empty_close_rejected() {
        assert_eq!(
            DelimiterPair::new("${", ""),
            Err(DomainError::EmptyDelimiter { marker: "close" })
        );
    }

    #[test]
    fn test_placeholder_pair() {
        let pair = DelimiterPair::placeholder();
        assert_eq!(pair.open(), "${");
        assert_eq!(pair.close(), "}");
        assert_eq!(pair, DelimiterPair::new("${", "}").unwrap());
    }

    #[test]
    fn test_wrap() {
        let pair = DelimiterPair::placeholder();
        assert_eq!(pair.wrap("db.user"), "${db.user}");
        assert_eq!(pair.wrap(""), "${}");
    }

    #[test]
    fn test_error_message() {
        let err = DomainError::EmptyDelimiter { marker: "close" };
        assert_eq!(err.to_string(), "close delimiter must not be empty");
    }
}
