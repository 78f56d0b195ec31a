//! The stateful quiz compiler and its configuration.

use crate::batch::{BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchStats};
use crate::types::*;
use h5quiz_core::{
    LineErrorKind, ParseOptions, ParseWarning, QuizError, parse_control, parse_question_set,
};
use h5quiz_h5p::codegen::to_minified_json;
use h5quiz_h5p::{PackageContents, RenderOptions};
use napi::bindgen_prelude::*;
use napi_derive::napi;
use rayon::prelude::*;
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub(crate) struct InternalQuizConfig {
    pub(crate) parse: ParseOptions,
    pub(crate) render: RenderOptions,
}

impl InternalQuizConfig {
    pub(crate) fn new(config: Option<QuizConfig>) -> Self {
        let cfg = config.unwrap_or_default();
        let parse = if cfg.lenient_blanks.unwrap_or(false) {
            ParseOptions::lenient()
        } else {
            ParseOptions::strict()
        };
        let mut render = RenderOptions::default();
        if let Some(text) = cfg.blanks_task_text {
            render.blanks_task_text = text;
        }
        Self { parse, render }
    }
}

/// Stateful compiler exposed to Node callers.
#[napi]
pub struct QuizCompiler {
    pub(crate) config: InternalQuizConfig,
}

#[napi]
impl QuizCompiler {
    /// Creates a compiler that can be reused across files.
    #[napi(constructor)]
    pub fn new(config: Option<QuizConfig>) -> Self {
        Self {
            config: InternalQuizConfig::new(config),
        }
    }

    /// Parses a question file.
    #[napi(js_name = "parse")]
    pub fn parse(&self, source: String) -> ParseQuestionsResult {
        parse_with(&source, &self.config)
    }

    /// Renders `h5p.json` and `content.json` from a control file and a question file.
    #[napi(js_name = "render")]
    pub fn render(&self, control: String, source: String) -> Result<RenderContentResult> {
        render_with(&control, &source, &self.config)
    }

    /// Parses many question files in parallel.
    ///
    /// `options.config` overrides this compiler's configuration when present.
    #[napi(js_name = "parseBatch")]
    pub fn parse_batch(
        &self,
        inputs: Vec<BatchInput>,
        options: Option<BatchOptions>,
    ) -> BatchProcessingResult {
        match options.as_ref().and_then(|o| o.config.clone()) {
            Some(config) => {
                parse_batch_with(inputs, options, &InternalQuizConfig::new(Some(config)))
            }
            None => parse_batch_with(inputs, options, &self.config),
        }
    }
}

fn line_diagnostic(kind: &str, line: usize, column: usize, message: String) -> LineDiagnostic {
    LineDiagnostic {
        kind: kind.to_string(),
        line: line as u32,
        column: column as u32,
        message,
    }
}

fn warning_diagnostic(warning: &ParseWarning) -> LineDiagnostic {
    let location = warning.location();
    let kind = match warning {
        ParseWarning::DanglingBlankMarker { .. } => "dangling_blank_marker",
    };
    line_diagnostic(kind, location.line, location.column, warning.to_string())
}

fn serialization_failure(err: serde_json::Error) -> ParseQuestionsResult {
    ParseQuestionsResult {
        questions: JsonValue::Array(Vec::new()),
        warnings: Vec::new(),
        errors: vec![line_diagnostic(
            "serialization",
            0,
            0,
            format!("Serialization error: {}", err),
        )],
    }
}

pub(crate) fn parse_with(source: &str, config: &InternalQuizConfig) -> ParseQuestionsResult {
    match parse_question_set(source, &config.parse) {
        Ok(parsed) => match serde_json::to_value(&parsed.questions) {
            Ok(questions) => ParseQuestionsResult {
                questions,
                warnings: parsed
                    .diagnostics
                    .warnings
                    .iter()
                    .map(warning_diagnostic)
                    .collect(),
                errors: Vec::new(),
            },
            Err(err) => serialization_failure(err),
        },
        Err(QuizError::Parse(errors)) => ParseQuestionsResult {
            questions: JsonValue::Array(Vec::new()),
            warnings: Vec::new(),
            errors: errors
                .iter()
                .map(|error| {
                    let kind = match error.kind {
                        LineErrorKind::AnswerOutsideBlock => "answer_outside_block",
                        LineErrorKind::OddBlankCount { .. } => "odd_blank_count",
                    };
                    line_diagnostic(
                        kind,
                        error.location.line,
                        error.location.column,
                        error.to_string(),
                    )
                })
                .collect(),
        },
        Err(other) => ParseQuestionsResult {
            questions: JsonValue::Array(Vec::new()),
            warnings: Vec::new(),
            errors: vec![line_diagnostic("error", 0, 0, other.to_string())],
        },
    }
}

pub(crate) fn render_with(
    control: &str,
    source: &str,
    config: &InternalQuizConfig,
) -> Result<RenderContentResult> {
    let control = parse_control(control)
        .map_err(|e| Error::from_reason(format!("Control file error: {}", e)))?;
    let parsed = parse_question_set(source, &config.parse)
        .map_err(|e| Error::from_reason(e.to_string()))?;
    let contents = PackageContents::render(&control, &parsed.questions, &config.render)
        .map_err(|e| Error::from_reason(format!("Render error: {}", e)))?;

    let to_json_error =
        |e: serde_json::Error| Error::from_reason(format!("Serialization error: {}", e));
    Ok(RenderContentResult {
        manifest_json: to_minified_json(&contents.manifest).map_err(to_json_error)?,
        content_json: to_minified_json(&contents.content).map_err(to_json_error)?,
        package_name: control.package_name(),
        question_count: parsed.questions.len() as u32,
    })
}

pub(crate) fn parse_batch_with(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
    config: &InternalQuizConfig,
) -> BatchProcessingResult {
    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);

    // Configure thread pool if max_threads is specified
    let pool = opts.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    });

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let result = parse_with(&input.source, config);
        if result.errors.is_empty() {
            succeeded.fetch_add(1, Ordering::Relaxed);
            BatchResult {
                id: input.id,
                result: Some(result),
                error: None,
            }
        } else {
            failed.fetch_add(1, Ordering::Relaxed);
            let message = result
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            BatchResult {
                id: input.id,
                result: None,
                error: Some(message),
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error; sequential so the cut-off point is deterministic.
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let had_error = result.error.is_some();
            results.push(result);
            if had_error {
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    }
}
