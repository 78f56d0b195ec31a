//! Answer-line parsing for multiple-choice and true/false blocks.
//!
//! An answer line looks like:
//!
//! ```text
//! *Paris TIP:capital of France YSEL:Correct! NSEL:Try again
//! ```
//!
//! A leading `*` marks the correct option. The optional annotations may
//! appear in any order; each one extends up to the next annotation that
//! starts after it, or to the end of the line.

use std::ops::Range;

use crate::model::Answer;

/// Marker that marks an answer line as the correct option.
pub const CORRECT_MARKER: char = '*';

/// Inline annotations recognized on an answer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationMarker {
    /// `TIP:` hint text.
    Tip,
    /// `YSEL:` feedback when the option is chosen.
    ChosenFeedback,
    /// `NSEL:` feedback when the option is not chosen.
    NotChosenFeedback,
}

impl AnnotationMarker {
    /// Search table. Order breaks ties between markers found at the same index.
    pub const ALL: [AnnotationMarker; 3] = [
        AnnotationMarker::Tip,
        AnnotationMarker::ChosenFeedback,
        AnnotationMarker::NotChosenFeedback,
    ];

    /// Literal token as written in the source line.
    pub const fn token(self) -> &'static str {
        match self {
            AnnotationMarker::Tip => "TIP:",
            AnnotationMarker::ChosenFeedback => "YSEL:",
            AnnotationMarker::NotChosenFeedback => "NSEL:",
        }
    }
}

/// Resolved position of one annotation inside an answer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpan {
    /// Which annotation this is.
    pub marker: AnnotationMarker,
    /// Byte index where the token starts.
    pub token_start: usize,
    /// Byte range of the annotation body (untrimmed).
    pub body: Range<usize>,
}

/// Locate the first occurrence of each annotation token and resolve body spans.
///
/// The result is ordered by position in the line. Tokens that do not occur
/// are absent.
pub fn marker_spans(content: &str) -> Vec<MarkerSpan> {
    let mut found: Vec<(AnnotationMarker, usize)> = AnnotationMarker::ALL
        .iter()
        .filter_map(|&marker| content.find(marker.token()).map(|index| (marker, index)))
        .collect();
    // Stable sort keeps table order for equal indices.
    found.sort_by_key(|&(_, index)| index);

    found
        .iter()
        .enumerate()
        .map(|(i, &(marker, token_start))| {
            let body_start = token_start + marker.token().len();
            let body_end = found[i + 1..]
                .iter()
                .map(|&(_, index)| index)
                .find(|&index| index > token_start)
                .unwrap_or(content.len())
                .max(body_start);
            MarkerSpan {
                marker,
                token_start,
                body: body_start..body_end,
            }
        })
        .collect()
}

/// Parse one answer line into an [`Answer`].
///
/// Absent annotations produce empty strings.
pub fn parse_answer_line(line: &str) -> Answer {
    let (correct, content) = match line.strip_prefix(CORRECT_MARKER) {
        Some(rest) => (true, rest.trim()),
        None => (false, line.trim()),
    };

    let spans = marker_spans(content);
    let text_end = spans
        .first()
        .map(|span| span.token_start)
        .unwrap_or(content.len());

    let mut answer = Answer {
        text: content[..text_end].trim().to_string(),
        correct,
        ..Answer::default()
    };

    for span in spans {
        let body = content[span.body].trim().to_string();
        match span.marker {
            AnnotationMarker::Tip => answer.tip = body,
            AnnotationMarker::ChosenFeedback => answer.chosen_feedback = body,
            AnnotationMarker::NotChosenFeedback => answer.not_chosen_feedback = body,
        }
    }

    answer
}
