//! Parsed question-set data model.

use serde::{Deserialize, Serialize};

/// One answer option of a multiple-choice or true/false question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Answer text shown to the learner.
    pub text: String,
    /// Whether the source line was marked correct with a leading `*`.
    pub correct: bool,
    /// Hint shown before answering (`TIP:`).
    pub tip: String,
    /// Feedback when this option is selected (`YSEL:`).
    pub chosen_feedback: String,
    /// Feedback when this option is not selected (`NSEL:`).
    pub not_chosen_feedback: String,
}

/// Expected text for a single blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlankAnswer {
    /// The answer the learner must type.
    pub expected_text: String,
}

impl BlankAnswer {
    /// Create a blank answer.
    pub fn new(expected_text: impl Into<String>) -> Self {
        Self {
            expected_text: expected_text.into(),
        }
    }
}

/// A piece of a fill-in-the-blanks sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateSegment {
    /// Literal text, kept verbatim even when it looks like a placeholder.
    Text(String),
    /// The blank with this 1-based number.
    Blank(usize),
}

/// One fill-in-the-blanks sentence: a template with `{k}` placeholders and
/// the blanks that fill them, in placeholder order.
///
/// `segments` is the authoritative structure; `template` is its display form
/// and cannot tell a placeholder from literal `{k}` text. Build values with
/// [`BlankTemplate::push_text`] and [`BlankTemplate::push_blank`] so the
/// three fields stay in step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlankTemplate {
    /// Sentence with `{1}`, `{2}`, ... in place of each blank.
    pub template: String,
    /// Blank answers, ordered by first appearance.
    pub blanks: Vec<BlankAnswer>,
    /// Literal text and blank references in source order.
    #[serde(default)]
    pub segments: Vec<TemplateSegment>,
}

impl BlankTemplate {
    /// Append literal text. Empty text is ignored.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.template.push_str(text);
        match self.segments.last_mut() {
            Some(TemplateSegment::Text(last)) => last.push_str(text),
            _ => self.segments.push(TemplateSegment::Text(text.to_string())),
        }
    }

    /// Append a blank and its `{k}` placeholder.
    pub fn push_blank(&mut self, expected_text: impl Into<String>) {
        self.blanks.push(BlankAnswer::new(expected_text));
        let number = self.blanks.len();
        self.template.push('{');
        self.template.push_str(&number.to_string());
        self.template.push('}');
        self.segments.push(TemplateSegment::Blank(number));
    }
}

/// A question unit opened by a block-start marker.
///
/// The variant is chosen by the marker and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QuestionBlock {
    /// `MCQ:` or `TF:` block.
    #[serde(rename_all = "camelCase")]
    MultipleChoiceOrTrueFalse {
        /// Question prompt.
        prompt_text: String,
        /// Answer options in source order.
        answers: Vec<Answer>,
    },
    /// `FIB:` block.
    #[serde(rename_all = "camelCase")]
    FillInBlanks {
        /// Raw text after the `FIB:` marker.
        template_text: String,
        /// Parsed sentences, starting with the marker line's own template.
        questions: Vec<BlankTemplate>,
    },
}

impl QuestionBlock {
    /// Open an empty multiple-choice/true-false block.
    pub fn multiple_choice(prompt_text: impl Into<String>) -> Self {
        Self::MultipleChoiceOrTrueFalse {
            prompt_text: prompt_text.into(),
            answers: Vec::new(),
        }
    }

    /// Open an empty fill-in-the-blanks block.
    pub fn fill_in_blanks(template_text: impl Into<String>) -> Self {
        Self::FillInBlanks {
            template_text: template_text.into(),
            questions: Vec::new(),
        }
    }

    /// Prompt or template text the block was opened with.
    pub fn prompt(&self) -> &str {
        match self {
            Self::MultipleChoiceOrTrueFalse { prompt_text, .. } => prompt_text,
            Self::FillInBlanks { template_text, .. } => template_text,
        }
    }

    /// All blank answers of a fill-in-the-blanks block, in encounter order.
    /// Empty for multiple-choice blocks.
    pub fn blanks(&self) -> impl Iterator<Item = &BlankAnswer> + '_ {
        let questions: &[BlankTemplate] = match self {
            Self::FillInBlanks { questions, .. } => questions,
            Self::MultipleChoiceOrTrueFalse { .. } => &[],
        };
        questions.iter().flat_map(|q| q.blanks.iter())
    }
}

/// Ordered sequence of sealed question blocks.
pub type QuestionSet = Vec<QuestionBlock>;
