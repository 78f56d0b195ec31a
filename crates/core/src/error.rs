use thiserror::Error;

use crate::control::ControlError;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Optional file path
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Create a source location with file information
    pub fn with_file(file: String, line: usize, column: usize) -> Self {
        Self {
            file: Some(file),
            line,
            column,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:{}:{}", file, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// What went wrong on a single question-file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineErrorKind {
    /// An answer or blank line appeared before any `MCQ:`/`TF:`/`FIB:` marker.
    AnswerOutsideBlock,
    /// A fill-in-the-blanks line has an unpaired `*`.
    OddBlankCount {
        /// Number of `*` characters found on the line.
        markers: usize,
    },
}

/// A line that could not be parsed, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// Error kind.
    pub kind: LineErrorKind,
    /// Where the error occurred.
    pub location: SourceLocation,
    /// The offending line, as read (trimmed).
    pub line: String,
}

impl LineError {
    /// Create an `AnswerOutsideBlock` error for a line.
    pub fn answer_outside_block(line: impl Into<String>, line_number: usize) -> Self {
        Self {
            kind: LineErrorKind::AnswerOutsideBlock,
            location: SourceLocation::new(line_number, 1),
            line: line.into(),
        }
    }

    /// Create an `OddBlankCount` error pointing at the dangling `*`.
    pub fn odd_blank_count(
        line: impl Into<String>,
        markers: usize,
        line_number: usize,
        column: usize,
    ) -> Self {
        Self {
            kind: LineErrorKind::OddBlankCount { markers },
            location: SourceLocation::new(line_number, column),
            line: line.into(),
        }
    }
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LineErrorKind::AnswerOutsideBlock => write!(
                f,
                "{}: answer line outside of any question block: '{}'",
                self.location, self.line
            ),
            LineErrorKind::OddBlankCount { markers } => write!(
                f,
                "{}: unterminated blank ({} '*' markers, expected an even count): '{}'",
                self.location, markers, self.line
            ),
        }
    }
}

impl std::error::Error for LineError {}

/// Every line error collected during one parse, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseErrors {
    errors: Vec<LineError>,
}

impl ParseErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line error.
    pub fn push(&mut self, error: LineError) {
        self.errors.push(error);
    }

    /// Attach a file path to every collected location.
    pub fn with_file(mut self, file: &str) -> Self {
        for error in &mut self.errors {
            error.location.file = Some(file.to_string());
        }
        self
    }

    /// Number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no error was collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the collected errors in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a LineError;
    type IntoIter = std::slice::Iter<'a, LineError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error(s) in question file", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

/// Errors that can occur while reading quiz sources.
#[derive(Debug, Error)]
pub enum QuizError {
    /// IO error while reading an input file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// UTF-8 encoding error.
    #[error("Encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),
    /// One or more question-file lines could not be parsed.
    #[error("{0}")]
    Parse(ParseErrors),
    /// The control file is malformed.
    #[error(transparent)]
    Control(#[from] ControlError),
}

impl From<ParseErrors> for QuizError {
    fn from(errors: ParseErrors) -> Self {
        Self::Parse(errors)
    }
}

/// Non-fatal warnings that don't prevent building the question set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// Unpaired `*` kept as literal text under the lenient blank policy
    DanglingBlankMarker {
        /// Location of the dangling `*`
        location: SourceLocation,
        /// The line it was found on
        line: String,
    },
}

impl ParseWarning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            ParseWarning::DanglingBlankMarker { location, .. } => location,
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::DanglingBlankMarker { location, line } => {
                write!(f, "{}: unpaired '*' kept as text: '{}'", location, line)
            }
        }
    }
}

/// Collection of parse diagnostics
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// List of non-fatal warnings
    pub warnings: Vec<ParseWarning>,
}

impl ParseDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the diagnostics collection
    pub fn add_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display_includes_file_when_present() {
        assert_eq!(SourceLocation::new(3, 1).to_string(), "3:1");
        assert_eq!(
            SourceLocation::with_file("quiz.txt".into(), 3, 7).to_string(),
            "quiz.txt:3:7"
        );
    }

    #[test]
    fn parse_errors_list_every_line() {
        let mut errors = ParseErrors::new();
        errors.push(LineError::answer_outside_block("*A", 1));
        errors.push(LineError::odd_blank_count("a *b", 1, 4, 3));
        let errors = errors.with_file("q.txt");

        let message = QuizError::from(errors).to_string();
        assert!(message.starts_with("2 error(s) in question file"));
        assert!(message.contains("q.txt:1:1: answer line outside of any question block: '*A'"));
        assert!(message.contains("q.txt:4:3: unterminated blank (1 '*' markers"));
    }
}
