#![deny(missing_docs)]
//! Node.js bindings that surface h5quiz's Rust implementation.

use napi_derive::napi;

/// Batch processing types.
pub mod batch;
/// The stateful compiler and its configuration.
pub mod compiler;
/// NAPI-exposed data structures.
pub mod types;
pub use batch::*;
pub use compiler::QuizCompiler;
pub use types::*;

use compiler::{InternalQuizConfig, parse_batch_with, parse_with, render_with};

/// Parses a question file into question blocks.
///
/// Line errors are returned in `errors` instead of being thrown, so callers
/// can show every rejected line at once.
#[napi(js_name = "parseQuestions")]
pub fn parse_questions(
    source: String,
    config: Option<QuizConfig>,
) -> napi::Result<ParseQuestionsResult> {
    Ok(parse_with(&source, &InternalQuizConfig::new(config)))
}

/// Renders `h5p.json` and `content.json` for a control file and a question file.
#[napi(js_name = "renderContent")]
pub fn render_content(
    control_source: String,
    question_source: String,
    config: Option<QuizConfig>,
) -> napi::Result<RenderContentResult> {
    render_with(
        &control_source,
        &question_source,
        &InternalQuizConfig::new(config),
    )
}

/// Parses multiple question files in parallel using Rayon.
///
/// Every file is parsed with `options.config`. Results keep the input order.
#[napi(js_name = "parseQuestionsBatch")]
pub fn parse_questions_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    let config = InternalQuizConfig::new(options.as_ref().and_then(|o| o.config.clone()));
    Ok(parse_batch_with(inputs, options, &config))
}
