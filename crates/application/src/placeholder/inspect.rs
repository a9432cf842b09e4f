//! Placeholder inspection without resolution.

use stencil_domain::DelimiterPair;

use crate::token_scanner::TokenScanner;

/// Returns the content of every `${...}` placeholder in `text`, in order.
///
/// Escaped markers are honored and unterminated placeholders are skipped,
/// exactly as during substitution.
///
/// # Examples
///
/// ```
/// use stencil_application::find_placeholders;
///
/// let names = find_placeholders("${a} \\${b} ${c:1} ${d");
/// assert_eq!(names, vec!["a", "c:1"]);
/// ```
#[must_use]
pub fn find_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    TokenScanner::new(DelimiterPair::placeholder(), |content: &str| {
        found.push(content.to_string());
        String::new()
    })
    .parse(text);
    found
}
