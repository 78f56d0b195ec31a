//! Question-file parsing: drives the dispatcher over every line and
//! aggregates sealed blocks into a question set.

use crate::blanks::BlankPolicy;
use crate::dispatch::{BlockState, LineOutcome, advance_block_state};
use crate::error::{ParseDiagnostics, ParseErrors, QuizError};
use crate::model::{QuestionBlock, QuestionSet};

/// Parser options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treatment of unpaired `*` on fill-in-the-blanks lines.
    pub blank_policy: BlankPolicy,
}

impl ParseOptions {
    /// Reject unpaired blank delimiters (the default).
    pub const fn strict() -> Self {
        Self {
            blank_policy: BlankPolicy::Strict,
        }
    }

    /// Keep unpaired blank delimiters as literal text and warn.
    pub const fn lenient() -> Self {
        Self {
            blank_policy: BlankPolicy::Lenient,
        }
    }
}

/// Successfully parsed question file.
#[derive(Debug, Clone, Default)]
pub struct ParsedQuestions {
    /// Sealed blocks in source order.
    pub questions: QuestionSet,
    /// Non-fatal diagnostics.
    pub diagnostics: ParseDiagnostics,
}

/// Collects sealed blocks, warnings and errors while lines are dispatched.
#[derive(Debug, Default)]
pub struct QuestionAggregator {
    options: ParseOptions,
    state: BlockState,
    questions: QuestionSet,
    diagnostics: ParseDiagnostics,
    errors: ParseErrors,
    line_number: usize,
}

impl QuestionAggregator {
    /// Create an aggregator with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Feed the next line of the question file.
    pub fn push_line(&mut self, line: &str) {
        self.line_number += 1;
        let state = std::mem::take(&mut self.state);
        let LineOutcome {
            next_state,
            sealed,
            error,
            warning,
        } = advance_block_state(line, self.line_number, state, &self.options);

        if let Some(block) = sealed {
            self.seal(block);
        }
        if let Some(warning) = warning {
            self.diagnostics.add_warning(warning);
        }
        if let Some(error) = error {
            self.errors.push(error);
        }
        self.state = next_state;
    }

    /// Number of blocks sealed so far.
    pub fn sealed_count(&self) -> usize {
        self.questions.len()
    }

    /// Flush the open block and return the question set, or every line
    /// error collected along the way.
    pub fn finish(mut self) -> Result<ParsedQuestions, ParseErrors> {
        if let Some(block) = std::mem::take(&mut self.state).finish() {
            self.seal(block);
        }
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        Ok(ParsedQuestions {
            questions: self.questions,
            diagnostics: self.diagnostics,
        })
    }

    fn seal(&mut self, block: QuestionBlock) {
        log::debug!(
            "sealed question {} ({})",
            self.questions.len() + 1,
            match block {
                QuestionBlock::MultipleChoiceOrTrueFalse { .. } => "multiple choice",
                QuestionBlock::FillInBlanks { .. } => "fill in the blanks",
            }
        );
        self.questions.push(block);
    }
}

/// Parse a whole question file.
pub fn parse_question_set(input: &str, options: &ParseOptions) -> Result<ParsedQuestions, QuizError> {
    parse_question_lines(input.lines(), options)
}

/// Parse an already split sequence of lines.
pub fn parse_question_lines<'a, I>(lines: I, options: &ParseOptions) -> Result<ParsedQuestions, QuizError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut aggregator = QuestionAggregator::new(*options);
    for line in lines {
        aggregator.push_line(line);
    }
    Ok(aggregator.finish()?)
}
