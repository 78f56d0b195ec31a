//! Serde types for the two JSON documents inside an H5P package.

use serde::{Deserialize, Serialize};

/// `h5p.json`: package-level metadata read by the H5P host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Package title.
    pub title: String,
    /// Content language (`und` when unspecified).
    pub language: String,
    /// Machine name of the main library.
    pub main_library: String,
    /// Supported embed types.
    pub embed_types: Vec<String>,
    /// Package authors.
    pub authors: Vec<Author>,
    /// Content license.
    pub license: String,
    /// Default UI language.
    pub default_language: String,
    /// Libraries the host must load before the content.
    pub preloaded_dependencies: Vec<LibraryDependency>,
}

/// One author entry of the manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Role, usually `Author`.
    pub role: String,
}

/// A library reference by machine name and version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryDependency {
    /// Library machine name (e.g. `H5P.MultiChoice`).
    pub machine_name: String,
    /// Major version.
    pub major_version: String,
    /// Minor version.
    pub minor_version: String,
}

/// `content/content.json` for an `H5P.QuestionSet`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSetContent {
    /// Intro page settings.
    pub intro_page: IntroPage,
    /// Progress indicator style.
    pub progress_type: String,
    /// Score needed to pass, in percent.
    pub pass_percentage: u32,
    /// Prevent learners from going back.
    pub disable_backwards_navigation: bool,
    /// Shuffle question order.
    pub random_questions: bool,
    /// Result page settings.
    pub end_game: EndGame,
    /// Behaviour overrides for sub-content.
    #[serde(rename = "override")]
    pub behaviour_override: BehaviourOverride,
    /// UI strings.
    pub texts: Texts,
    /// Number of questions drawn per attempt.
    pub pool_size: u32,
    /// The questions.
    pub questions: Vec<SubContent>,
}

/// Intro page shown before the first question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntroPage {
    /// Whether the intro page is shown.
    pub show_intro_page: bool,
    /// Label of the start button.
    pub start_button_text: String,
    /// Intro title.
    pub title: String,
    /// Intro HTML.
    pub introduction: String,
}

/// Result page configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct EndGame {
    pub show_result_page: bool,
    pub show_solution_button: bool,
    pub show_retry_button: bool,
    pub no_result_message: String,
    pub message: String,
    pub score_bar_label: String,
    pub overall_feedback: Vec<FeedbackRange>,
    pub solution_button_text: String,
    pub retry_button_text: String,
    pub finish_button_text: String,
    pub submit_button_text: String,
    pub show_animations: bool,
    pub skippable: bool,
    pub skip_button_text: String,
}

/// Score range for overall feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRange {
    /// Lower bound, in percent.
    pub from: u32,
    /// Upper bound, in percent.
    pub to: u32,
}

/// Overrides applied to every question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BehaviourOverride {
    /// Show the "check" button.
    pub check_button: bool,
}

/// Question set UI strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Texts {
    pub prev_button: String,
    pub next_button: String,
    pub finish_button: String,
    pub submit_button: String,
    pub textual_progress: String,
    pub jump_to_question: String,
    pub question_label: String,
    pub read_speaker_progress: String,
    pub unanswered_text: String,
    pub answered_text: String,
    pub current_question_text: String,
    pub navigation_label: String,
}

/// One embedded question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubContent {
    /// Library with version, e.g. `H5P.MultiChoice 1.16`.
    pub library: String,
    /// Library-specific parameters.
    pub params: SubContentParams,
    /// Unique id of this sub-content.
    pub sub_content_id: String,
    /// Editor metadata.
    pub metadata: SubContentMetadata,
}

/// Parameters of a sub-content, shaped by its library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SubContentParams {
    /// `H5P.MultiChoice` parameters.
    MultiChoice(MultiChoiceParams),
    /// `H5P.Blanks` parameters.
    Blanks(BlanksParams),
}

/// `H5P.MultiChoice` parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiChoiceParams {
    /// Question prompt.
    pub question: String,
    /// Answer options.
    pub answers: Vec<MultiChoiceAnswer>,
}

/// One `H5P.MultiChoice` option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MultiChoiceAnswer {
    /// Option text.
    pub text: String,
    /// Whether the option is correct.
    pub correct: bool,
    /// Hint and feedback strings.
    pub tips_and_feedback: TipsAndFeedback,
}

/// Hint and feedback of a multiple-choice option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TipsAndFeedback {
    /// Hint.
    pub tip: String,
    /// Feedback when selected.
    pub chosen_feedback: String,
    /// Feedback when not selected.
    pub not_chosen_feedback: String,
}

/// `H5P.Blanks` parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlanksParams {
    /// Task description.
    pub text: String,
    /// Sentences in H5P's `*answer*` syntax.
    pub questions: Vec<String>,
}

/// Editor metadata of a sub-content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubContentMetadata {
    /// Human-readable content type.
    pub content_type: String,
    /// License code (`U` = undisclosed).
    pub license: String,
    /// Editor title.
    pub title: String,
}

impl PackageManifest {
    /// Find a preloaded dependency by machine name.
    pub fn dependency(&self, machine_name: &str) -> Option<&LibraryDependency> {
        self.preloaded_dependencies
            .iter()
            .find(|d| d.machine_name == machine_name)
    }
}
