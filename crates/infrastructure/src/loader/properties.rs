//! `.properties` file parsing.

use std::collections::HashMap;

use java_properties::PropertiesIter;

use super::FormatError;

/// Parses Java-style `.properties` content.
///
/// Follows `java.util.Properties` line rules (comments, `=`/`:`/whitespace
/// separators, backslash continuations, `\uXXXX` escapes), except that the
/// text is already UTF-8 rather than ISO-8859-1. Later duplicates override
/// earlier ones.
///
/// # Errors
///
/// Returns [`FormatError::Properties`] for malformed content, such as a bad
/// `\u` escape.
///
/// # Examples
///
/// ```
/// use stencil_infrastructure::parse_properties;
///
/// let props = parse_properties("# db\ndb.url = jdbc:h2:mem\\:test\n").unwrap();
/// assert_eq!(props["db.url"], "jdbc:h2:mem:test");
/// ```
pub fn parse_properties(content: &str) -> Result<HashMap<String, String>, FormatError> {
    let mut properties = HashMap::new();
    PropertiesIter::new_with_encoding(content.as_bytes(), encoding_rs::UTF_8).read_into(
        |key, value| {
            properties.insert(key, value);
        },
    )?;
    Ok(properties)
}
