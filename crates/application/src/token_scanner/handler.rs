//! Token resolution capability

/// Produces the replacement for one token.
///
/// `content` is the literal text between the open and close markers, with
/// escape backslashes in front of close markers already removed. It may be
/// empty.
pub trait TokenHandler {
    /// Returns the text that replaces the whole token.
    fn handle_token(&mut self, content: &str) -> String;
}

impl<F> TokenHandler for F
where
    F: FnMut(&str) -> String,
{
    fn handle_token(&mut self, content: &str) -> String {
        self(content)
    }
}
