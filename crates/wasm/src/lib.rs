use h5quiz_core::{
    LineErrorKind, ParseOptions, ParseWarning, QuestionSet, QuizError, parse_control,
    parse_question_set,
};
use h5quiz_h5p::codegen::to_minified_json;
use h5quiz_h5p::{PackageContents, RenderOptions};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Quiz Config
// ============================================================================

/// Configuration accepted by the WASM parse/render functions.
/// Mirrors the NAPI `QuizConfig` for parity.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmQuizConfig {
    #[serde(default, alias = "lenientBlanks")]
    pub lenient_blanks: Option<bool>,
    #[serde(default, alias = "blanksTaskText")]
    pub blanks_task_text: Option<String>,
}

fn parse_config(config: JsValue) -> WasmQuizConfig {
    if config.is_undefined() || config.is_null() {
        return WasmQuizConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn build_parse_options(cfg: &WasmQuizConfig) -> ParseOptions {
    if cfg.lenient_blanks.unwrap_or(false) {
        ParseOptions::lenient()
    } else {
        ParseOptions::strict()
    }
}

fn build_render_options(cfg: &WasmQuizConfig) -> RenderOptions {
    let mut options = RenderOptions::default();
    if let Some(text) = &cfg.blanks_task_text {
        options.blanks_task_text = text.clone();
    }
    options
}

// ============================================================================
// Result Types
// ============================================================================

/// A rejected line or a warning, located in the question file.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Diagnostic kind (e.g., "odd_blank_count").
    pub kind: &'static str,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
    /// Human-readable message.
    pub message: String,
}

/// Result of parsing a question file.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// Question blocks in file order. Empty when `errors` is not.
    pub questions: QuestionSet,
    /// Non-fatal warnings.
    pub warnings: Vec<Diagnostic>,
    /// Line errors.
    pub errors: Vec<Diagnostic>,
}

/// Rendered H5P documents.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// Minified `h5p.json`.
    pub manifest_json: String,
    /// Minified `content/content.json`.
    pub content_json: String,
    /// Archive file name.
    pub package_name: String,
}

fn warning_diagnostic(warning: &ParseWarning) -> Diagnostic {
    let location = warning.location();
    Diagnostic {
        kind: match warning {
            ParseWarning::DanglingBlankMarker { .. } => "dangling_blank_marker",
        },
        line: location.line,
        column: location.column,
        message: warning.to_string(),
    }
}

// ============================================================================
// Parse API
// ============================================================================

/// Parses a question file into question blocks.
///
/// Rejected lines are reported in `errors`; only a serialization failure throws.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { parse_questions } from './h5quiz_wasm';
///
/// const result = parse_questions("FIB:The *cat* sat", { lenientBlanks: false });
/// // result.questions[0].questions[0].template === "The {1} sat"
/// ```
#[wasm_bindgen]
pub fn parse_questions(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let cfg = parse_config(config);
    let result = match parse_question_set(source, &build_parse_options(&cfg)) {
        Ok(parsed) => ParseResult {
            questions: parsed.questions,
            warnings: parsed
                .diagnostics
                .warnings
                .iter()
                .map(warning_diagnostic)
                .collect(),
            errors: Vec::new(),
        },
        Err(QuizError::Parse(errors)) => ParseResult {
            questions: Vec::new(),
            warnings: Vec::new(),
            errors: errors
                .iter()
                .map(|error| Diagnostic {
                    kind: match error.kind {
                        LineErrorKind::AnswerOutsideBlock => "answer_outside_block",
                        LineErrorKind::OddBlankCount { .. } => "odd_blank_count",
                    },
                    line: error.location.line,
                    column: error.location.column,
                    message: error.to_string(),
                })
                .collect(),
        },
        Err(other) => return Err(JsError::new(&other.to_string())),
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Render API
// ============================================================================

/// Renders `h5p.json` and `content.json` from a control file and a question file.
///
/// Throws on control-file errors and on any rejected question line.
#[wasm_bindgen]
pub fn render_content(control: &str, source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let cfg = parse_config(config);
    let control =
        parse_control(control).map_err(|e| JsError::new(&format!("Control file error: {}", e)))?;
    let parsed = parse_question_set(source, &build_parse_options(&cfg))
        .map_err(|e| JsError::new(&e.to_string()))?;
    let contents = PackageContents::render(&control, &parsed.questions, &build_render_options(&cfg))
        .map_err(|e| JsError::new(&format!("Render error: {}", e)))?;

    let result = RenderResult {
        manifest_json: to_minified_json(&contents.manifest)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))?,
        content_json: to_minified_json(&contents.content)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))?,
        package_name: control.package_name(),
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
