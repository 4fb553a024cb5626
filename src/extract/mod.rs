//! Superficial tag-value extraction from XML response bodies.
//!
//! Matching is textual, not structural. The extractor takes the first
//! `<tag>...</tag>` pair with a non-greedy capture and returns the raw
//! text between them. It does not parse the XML tree and is deliberately
//! blind to nesting, attributes on the tag, namespace prefixes, CDATA
//! sections, and self-closing tags. Test expectations in harness suites
//! are written against exactly this lenient behavior, so these limitations
//! are part of the contract.

use regex::Regex;

/// Return the inner text of the first `<tag_name>...</tag_name>` pair, or
/// `None` when no such pair occurs.
///
/// `tag_name` is a bare element local name; a tag carrying attributes or a
/// namespace prefix in the document will not match. Malformed XML never
/// raises, since no structural validation is performed.
pub fn extract(xml_text: &str, tag_name: &str) -> Option<String> {
    let pattern = format!("(?s)<{0}>(.*?)</{0}>", regex::escape(tag_name));
    // The tag name is escaped, so the pattern always compiles
    let re = Regex::new(&pattern).ok()?;
    re.captures(xml_text).map(|caps| caps[1].to_string())
}
