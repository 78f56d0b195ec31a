//! Batch processing types for parallel parsing.

use crate::types::{ParseQuestionsResult, QuizConfig};
use napi_derive::napi;

/// Input for batch processing - represents a single question file.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// File identifier (typically the file path).
    pub id: String,
    /// Question-file source text.
    pub source: String,
}

/// Result for a single file in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// File identifier matching the input.
    pub id: String,
    /// Parse result (present on success).
    pub result: Option<ParseQuestionsResult>,
    /// Error summary (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of files processed.
    pub total: u32,
    /// Number of files parsed without errors.
    pub succeeded: u32,
    /// Number of rejected files.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
    /// Parser configuration to use for all files.
    pub config: Option<QuizConfig>,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results for each input file.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}
