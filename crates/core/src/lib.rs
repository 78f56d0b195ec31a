#![deny(missing_docs)]
//! h5quiz core: quiz notation parsing, control files, and diagnostics.

/// Answer-line parsing for multiple-choice blocks.
pub mod answer;
/// Fill-in-the-blanks template parsing.
pub mod blanks;
/// Control file reader.
pub mod control;
/// Line-by-line question-block state machine.
pub mod dispatch;
/// Core error and diagnostic types.
pub mod error;
/// Question-set data model.
pub mod model;
/// Whole-file parsing and block aggregation.
pub mod parse;

pub use answer::{AnnotationMarker, MarkerSpan, marker_spans, parse_answer_line};
pub use blanks::{BlankLine, BlankPolicy, UnpairedDelimiter, parse_blank_template};
pub use control::{ControlError, ControlParams, parse_control};
pub use dispatch::{BlockMarker, BlockPhase, BlockState, LineOutcome, advance_block_state};
pub use error::{
    LineError, LineErrorKind, ParseDiagnostics, ParseErrors, ParseWarning, QuizError,
    SourceLocation,
};
pub use model::{
    Answer, BlankAnswer, BlankTemplate, QuestionBlock, QuestionSet, TemplateSegment,
};
pub use parse::{
    ParseOptions, ParsedQuestions, QuestionAggregator, parse_question_lines, parse_question_set,
};
