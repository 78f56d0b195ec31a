//! Fill-in-the-blanks template parsing.
//!
//! A blank line interleaves literal text with `*answer*` pairs:
//!
//! ```text
//! The *cat* sat on the *mat*
//! ```
//!
//! becomes the template `The {1} sat on the {2}` with blanks `cat`, `mat`.

use crate::model::BlankTemplate;

/// Character that opens and closes a blank.
pub const BLANK_DELIMITER: char = '*';

/// How to treat a line whose last `*` has no closing partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankPolicy {
    /// Reject the line.
    #[default]
    Strict,
    /// Keep the dangling `*` and the text after it as literal template text.
    Lenient,
}

/// Unpaired `*` found on a blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpairedDelimiter {
    /// Total number of `*` on the line.
    pub markers: usize,
    /// 1-based character column of the dangling `*`.
    pub column: usize,
}

/// Result of parsing one blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankLine {
    /// Parsed template and blanks.
    pub template: BlankTemplate,
    /// Set when the lenient policy kept an unpaired `*` as text.
    pub dangling: Option<UnpairedDelimiter>,
}

/// Parse a blank line into a template and its blank answers.
///
/// Returns `Ok(None)` for an empty line. Under [`BlankPolicy::Strict`] an odd
/// number of `*` is an error.
pub fn parse_blank_template(
    line: &str,
    policy: BlankPolicy,
) -> Result<Option<BlankLine>, UnpairedDelimiter> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split(BLANK_DELIMITER).collect();
    let markers = parts.len() - 1;
    let dangling = if markers % 2 == 1 {
        let unpaired = UnpairedDelimiter {
            markers,
            column: last_delimiter_column(line),
        };
        match policy {
            BlankPolicy::Strict => return Err(unpaired),
            BlankPolicy::Lenient => Some(unpaired),
        }
    } else {
        None
    };

    let last = parts.len() - 1;
    let mut template = BlankTemplate::default();

    for (i, part) in parts.iter().enumerate() {
        let mut text = *part;
        if i == 0 {
            text = text.trim_start();
        }
        if i == last {
            text = text.trim_end();
        }
        if dangling.is_some() && i == last {
            template.push_text(&format!("{BLANK_DELIMITER}{text}"));
        } else if i % 2 == 0 {
            template.push_text(text);
        } else {
            template.push_blank(part.trim());
        }
    }

    Ok(Some(BlankLine { template, dangling }))
}

fn last_delimiter_column(line: &str) -> usize {
    line.rfind(BLANK_DELIMITER)
        .map(|index| line[..index].chars().count() + 1)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemplateSegment;

    fn parse(line: &str) -> BlankTemplate {
        parse_blank_template(line, BlankPolicy::Strict)
            .expect("line should parse")
            .expect("line should not be empty")
            .template
    }

    fn expected(template: &BlankTemplate) -> Vec<&str> {
        template
            .blanks
            .iter()
            .map(|b| b.expected_text.as_str())
            .collect()
    }

    #[test]
    fn two_blanks() {
        let parsed = parse("The *cat* sat on the *mat*");
        assert_eq!(parsed.template, "The {1} sat on the {2}");
        assert_eq!(expected(&parsed), ["cat", "mat"]);
    }

    #[test]
    fn blank_contents_are_trimmed() {
        let parsed = parse("Water boils at * 100 * degrees");
        assert_eq!(parsed.template, "Water boils at {1} degrees");
        assert_eq!(expected(&parsed), ["100"]);
    }

    #[test]
    fn line_without_blanks_is_a_plain_template() {
        let parsed = parse("Complete the sentences below");
        assert_eq!(parsed.template, "Complete the sentences below");
        assert!(parsed.blanks.is_empty());
    }

    #[test]
    fn leading_blank() {
        let parsed = parse("*Paris* is the capital");
        assert_eq!(parsed.template, "{1} is the capital");
        assert_eq!(expected(&parsed), ["Paris"]);
    }

    #[test]
    fn literal_braces_stay_text() {
        let parsed = parse("Set {1} contains *x*");
        assert_eq!(parsed.template, "Set {1} contains {1}");
        assert_eq!(
            parsed.segments,
            [
                TemplateSegment::Text("Set {1} contains ".into()),
                TemplateSegment::Blank(1),
            ]
        );
    }

    #[test]
    fn edge_whitespace_is_trimmed_from_segments() {
        let parsed = parse("  *a* and *b*  ");
        assert_eq!(parsed.template, "{1} and {2}");
        assert_eq!(
            parsed.segments,
            [
                TemplateSegment::Blank(1),
                TemplateSegment::Text(" and ".into()),
                TemplateSegment::Blank(2),
            ]
        );
    }

    #[test]
    fn empty_line_is_noop() {
        assert_eq!(parse_blank_template("", BlankPolicy::Strict), Ok(None));
        assert_eq!(parse_blank_template("   ", BlankPolicy::Lenient), Ok(None));
    }

    #[test]
    fn strict_policy_rejects_unpaired_delimiter() {
        let err = parse_blank_template("a *b* c *d", BlankPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            UnpairedDelimiter {
                markers: 3,
                column: 9
            }
        );
    }

    #[test]
    fn lenient_policy_keeps_dangling_text() {
        let line = parse_blank_template("a *b* c *d", BlankPolicy::Lenient)
            .unwrap()
            .unwrap();
        assert_eq!(line.template.template, "a {1} c *d");
        assert_eq!(expected(&line.template), ["b"]);
        assert_eq!(line.dangling.map(|d| d.markers), Some(3));
    }

    #[test]
    fn column_counts_characters_not_bytes() {
        let err = parse_blank_template("é *x", BlankPolicy::Strict).unwrap_err();
        assert_eq!(err.column, 3);
    }
}
