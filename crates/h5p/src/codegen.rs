//! String and JSON emission helpers for H5P documents.

use h5quiz_core::{BlankTemplate, TemplateSegment};
use serde::Serialize;

/// Renders a parsed blank template back into H5P's `*answer*` syntax.
///
/// Rendering walks the template's segments, so literal text that looks like
/// a `{k}` placeholder is emitted unchanged. A blank reference with no
/// matching answer is dropped.
///
/// # Examples
///
/// ```
/// use h5quiz_core::BlankTemplate;
/// use h5quiz_h5p::codegen::blanks_to_h5p_syntax;
///
/// let mut template = BlankTemplate::default();
/// template.push_text("The ");
/// template.push_blank("cat");
/// template.push_text(" sat on the ");
/// template.push_blank("mat");
/// assert_eq!(blanks_to_h5p_syntax(&template), "The *cat* sat on the *mat*");
/// ```
pub fn blanks_to_h5p_syntax(template: &BlankTemplate) -> String {
    let mut out = String::with_capacity(template.template.len() + 2 * template.blanks.len());
    for segment in &template.segments {
        match segment {
            TemplateSegment::Text(text) => out.push_str(text),
            TemplateSegment::Blank(number) => {
                let blank = number
                    .checked_sub(1)
                    .and_then(|index| template.blanks.get(index));
                if let Some(blank) = blank {
                    out.push('*');
                    out.push_str(&blank.expected_text);
                    out.push('*');
                }
            }
        }
    }
    out
}

/// Wraps the control file introduction in the paragraph markup the
/// question set intro page expects.
///
/// # Examples
///
/// ```
/// use h5quiz_h5p::codegen::introduction_html;
///
/// assert_eq!(introduction_html("Welcome"), "<p>Welcome<br>\n&nbsp;</p>\n");
/// ```
pub fn introduction_html(text: &str) -> String {
    format!("<p>{text}<br>\n&nbsp;</p>\n")
}

/// Serializes a document without whitespace, newline-terminated.
pub fn to_minified_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string(value)?;
    json.push('\n');
    Ok(json)
}

/// Serializes a document with two-space indentation.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
