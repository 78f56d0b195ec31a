//! NAPI-exposed data structures.

use napi_derive::napi;
use serde_json::Value as JsonValue;

/// Options shared by the parse and render entry points.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    /// Keep unpaired `*` in blank lines as text instead of failing. Defaults to false.
    pub lenient_blanks: Option<bool>,
    /// Task description for fill-in-the-blanks questions.
    pub blanks_task_text: Option<String>,
}

/// Question-file line that failed to parse.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct LineDiagnostic {
    /// Diagnostic kind (e.g., "answer_outside_block").
    pub kind: String,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    /// Human-readable message.
    pub message: String,
}

/// Parsed question set plus diagnostics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ParseQuestionsResult {
    /// Question blocks (serialized model). Empty when `errors` is not.
    pub questions: JsonValue,
    /// Non-fatal warnings.
    pub warnings: Vec<LineDiagnostic>,
    /// Line errors; a non-empty list means the file was rejected.
    pub errors: Vec<LineDiagnostic>,
}

/// Rendered H5P documents.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct RenderContentResult {
    /// Minified `h5p.json`.
    pub manifest_json: String,
    /// Minified `content/content.json`.
    pub content_json: String,
    /// Archive file name from `NAME_H5P`.
    pub package_name: String,
    /// Number of rendered questions.
    pub question_count: u32,
}
