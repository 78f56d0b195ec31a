//! Question-block dispatcher.
//!
//! A line-by-line state machine: block-start markers (`MCQ:`, `TF:`, `FIB:`)
//! open a new block and seal the previous one, every other non-empty line is
//! routed to the parser matching the active block's variant. The in-flight
//! block travels inside [`BlockState`], so each step is a pure function of
//! its inputs.

use crate::answer::parse_answer_line;
use crate::blanks::parse_blank_template;
use crate::error::{LineError, ParseWarning, SourceLocation};
use crate::model::QuestionBlock;
use crate::parse::ParseOptions;

/// Block-start markers recognized at the beginning of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMarker {
    /// `MCQ:` multiple-choice question.
    MultipleChoice,
    /// `TF:` true/false question.
    TrueFalse,
    /// `FIB:` fill-in-the-blanks question.
    FillInBlanks,
}

impl BlockMarker {
    /// All markers, in detection order.
    pub const ALL: [BlockMarker; 3] = [
        BlockMarker::MultipleChoice,
        BlockMarker::TrueFalse,
        BlockMarker::FillInBlanks,
    ];

    /// Literal token as written in the source line.
    pub const fn token(self) -> &'static str {
        match self {
            BlockMarker::MultipleChoice => "MCQ:",
            BlockMarker::TrueFalse => "TF:",
            BlockMarker::FillInBlanks => "FIB:",
        }
    }

    /// Detect a block-start marker at the start of `line`.
    ///
    /// Returns the marker and the trimmed remainder after it.
    pub fn detect(line: &str) -> Option<(BlockMarker, &str)> {
        Self::ALL.iter().find_map(|&marker| {
            line.strip_prefix(marker.token())
                .map(|rest| (marker, rest.trim()))
        })
    }

    fn open_block(self, remainder: &str) -> QuestionBlock {
        match self {
            BlockMarker::MultipleChoice | BlockMarker::TrueFalse => {
                QuestionBlock::multiple_choice(remainder)
            }
            BlockMarker::FillInBlanks => QuestionBlock::fill_in_blanks(remainder),
        }
    }
}

/// Dispatcher phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockPhase {
    /// No block has been opened yet.
    #[default]
    NoActiveBlock,
    /// Inside an `MCQ:` or `TF:` block; lines are answers.
    InMultipleChoiceOrTrueFalse,
    /// Inside a `FIB:` block; lines are blank templates.
    InFillInBlanks,
}

/// Dispatcher state carried from one line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockState {
    /// The block currently being built, if any.
    pub active: Option<QuestionBlock>,
}

impl BlockState {
    /// Current phase, derived from the active block's variant.
    pub fn phase(&self) -> BlockPhase {
        match &self.active {
            None => BlockPhase::NoActiveBlock,
            Some(QuestionBlock::MultipleChoiceOrTrueFalse { .. }) => {
                BlockPhase::InMultipleChoiceOrTrueFalse
            }
            Some(QuestionBlock::FillInBlanks { .. }) => BlockPhase::InFillInBlanks,
        }
    }

    /// End of input: hand back the block still open, if any.
    pub fn finish(self) -> Option<QuestionBlock> {
        self.active
    }
}

/// Outcome of processing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// State to carry into the next line.
    pub next_state: BlockState,
    /// Block sealed by this line (only when a new block started).
    pub sealed: Option<QuestionBlock>,
    /// Line-level error; the line contributed nothing to the block.
    pub error: Option<LineError>,
    /// Non-fatal warning raised while parsing the line.
    pub warning: Option<ParseWarning>,
}

impl LineOutcome {
    fn unchanged(state: BlockState) -> Self {
        Self {
            next_state: state,
            sealed: None,
            error: None,
            warning: None,
        }
    }
}

/// Advance the dispatcher by one line.
///
/// `line_number` is 1-based and only used for diagnostics.
pub fn advance_block_state(
    line: &str,
    line_number: usize,
    state: BlockState,
    options: &ParseOptions,
) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::unchanged(state);
    }

    if let Some((marker, remainder)) = BlockMarker::detect(line) {
        log::debug!(
            "line {}: {} opens a new block",
            line_number,
            marker.token()
        );
        let sealed = state.finish();
        let mut block = marker.open_block(remainder);
        let mut outcome = LineOutcome::unchanged(BlockState::default());
        if marker == BlockMarker::FillInBlanks {
            let after = &line[marker.token().len()..];
            let offset = marker.token().len() + (after.len() - after.trim_start().len());
            let column_offset = line[..offset].chars().count();
            (outcome.error, outcome.warning) =
                append_blank_line(&mut block, line, remainder, line_number, column_offset, options);
        }
        outcome.next_state = BlockState {
            active: Some(block),
        };
        outcome.sealed = sealed;
        return outcome;
    }

    let mut state = state;
    let mut error = None;
    let mut warning = None;
    match state.active.as_mut() {
        None => error = Some(LineError::answer_outside_block(line, line_number)),
        Some(QuestionBlock::MultipleChoiceOrTrueFalse { answers, .. }) => {
            answers.push(parse_answer_line(line));
        }
        Some(block) => {
            (error, warning) = append_blank_line(block, line, line, line_number, 0, options);
        }
    }

    LineOutcome {
        next_state: state,
        sealed: None,
        error,
        warning,
    }
}

/// Parse `text` as a blank template and append it to a fill-in-the-blanks block.
fn append_blank_line(
    block: &mut QuestionBlock,
    line: &str,
    text: &str,
    line_number: usize,
    column_offset: usize,
    options: &ParseOptions,
) -> (Option<LineError>, Option<ParseWarning>) {
    let QuestionBlock::FillInBlanks { questions, .. } = block else {
        return (None, None);
    };

    match parse_blank_template(text, options.blank_policy) {
        Ok(None) => (None, None),
        Ok(Some(parsed)) => {
            questions.push(parsed.template);
            let warning = parsed.dangling.map(|dangling| {
                log::warn!(
                    "line {}: unpaired '*' kept as literal text",
                    line_number
                );
                ParseWarning::DanglingBlankMarker {
                    location: SourceLocation::new(line_number, column_offset + dangling.column),
                    line: line.to_string(),
                }
            });
            (None, warning)
        }
        Err(unpaired) => (
            Some(LineError::odd_blank_count(
                line,
                unpaired.markers,
                line_number,
                column_offset + unpaired.column,
            )),
            None,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blanks::BlankPolicy;
    use crate::error::LineErrorKind;
    use crate::model::{Answer, BlankTemplate};

    fn strict() -> ParseOptions {
        ParseOptions::strict()
    }

    #[test]
    fn detects_block_markers() {
        assert_eq!(
            BlockMarker::detect("MCQ: Pick one"),
            Some((BlockMarker::MultipleChoice, "Pick one"))
        );
        assert_eq!(
            BlockMarker::detect("TF:The sky is blue"),
            Some((BlockMarker::TrueFalse, "The sky is blue"))
        );
        assert_eq!(
            BlockMarker::detect("FIB:"),
            Some((BlockMarker::FillInBlanks, ""))
        );
        assert_eq!(BlockMarker::detect("mcq: lower case"), None);
        assert_eq!(BlockMarker::detect("*MCQ: not a marker"), None);
    }

    #[test]
    fn marker_opens_block_and_enters_phase() {
        let outcome = advance_block_state("MCQ:Pick one", 1, BlockState::default(), &strict());
        assert_eq!(
            outcome.next_state.phase(),
            BlockPhase::InMultipleChoiceOrTrueFalse
        );
        assert!(outcome.sealed.is_none());
        assert!(outcome.error.is_none());

        let outcome = advance_block_state("FIB:Intro", 1, BlockState::default(), &strict());
        assert_eq!(outcome.next_state.phase(), BlockPhase::InFillInBlanks);
    }

    #[test]
    fn answer_lines_append_to_active_block() {
        let state = advance_block_state("TF:Rust is fast", 1, BlockState::default(), &strict())
            .next_state;
        let state = advance_block_state("*True", 2, state, &strict()).next_state;
        let state = advance_block_state("False", 3, state, &strict()).next_state;

        assert_eq!(
            state.finish(),
            Some(QuestionBlock::MultipleChoiceOrTrueFalse {
                prompt_text: "Rust is fast".into(),
                answers: vec![
                    Answer {
                        text: "True".into(),
                        correct: true,
                        ..Answer::default()
                    },
                    Answer {
                        text: "False".into(),
                        ..Answer::default()
                    },
                ],
            })
        );
    }

    #[test]
    fn new_marker_seals_previous_block() {
        let state = advance_block_state("MCQ:First", 1, BlockState::default(), &strict())
            .next_state;
        let outcome = advance_block_state("FIB:The *cat*", 2, state, &strict());

        assert_eq!(outcome.sealed, Some(QuestionBlock::multiple_choice("First")));
        assert_eq!(
            outcome.next_state.finish(),
            Some(QuestionBlock::FillInBlanks {
                template_text: "The *cat*".into(),
                questions: vec![{
                    let mut template = BlankTemplate::default();
                    template.push_text("The ");
                    template.push_blank("cat");
                    template
                }],
            })
        );
    }

    #[test]
    fn blank_lines_are_skipped_in_every_phase() {
        let outcome = advance_block_state("   ", 1, BlockState::default(), &strict());
        assert_eq!(outcome, LineOutcome::unchanged(BlockState::default()));

        let state = advance_block_state("FIB:", 1, BlockState::default(), &strict()).next_state;
        let outcome = advance_block_state("", 2, state.clone(), &strict());
        assert_eq!(outcome.next_state, state);
    }

    #[test]
    fn answer_without_block_is_an_error() {
        let outcome = advance_block_state("*Orphan", 4, BlockState::default(), &strict());
        let error = outcome.error.expect("orphan line must be reported");
        assert_eq!(error.kind, LineErrorKind::AnswerOutsideBlock);
        assert_eq!(error.location.line, 4);
        assert_eq!(error.line, "*Orphan");
        assert_eq!(outcome.next_state.phase(), BlockPhase::NoActiveBlock);
    }

    #[test]
    fn fib_marker_line_error_points_into_original_line() {
        let outcome = advance_block_state("FIB: a *b", 7, BlockState::default(), &strict());
        let error = outcome.error.expect("odd count must be reported");
        assert_eq!(error.kind, LineErrorKind::OddBlankCount { markers: 1 });
        assert_eq!(error.location.column, 8);
        // The block still opens so later lines keep their context.
        assert_eq!(outcome.next_state.phase(), BlockPhase::InFillInBlanks);
    }

    #[test]
    fn lenient_policy_warns_instead_of_failing() {
        let options = ParseOptions {
            blank_policy: BlankPolicy::Lenient,
        };
        let state = advance_block_state("FIB:", 1, BlockState::default(), &options).next_state;
        let outcome = advance_block_state("x *y", 2, state, &options);
        assert!(outcome.error.is_none());
        let warning = outcome.warning.expect("dangling marker should warn");
        assert_eq!(warning.location(), &SourceLocation::new(2, 3));
    }
}
