//! Fixed values of the H5P question set documents.
//!
//! The library versions match the bundled `h5p-mcq-616_libs` directory; the
//! UI strings are the English defaults of `H5P.QuestionSet`.

use once_cell::sync::Lazy;

use super::types::{BehaviourOverride, EndGame, FeedbackRange, LibraryDependency, Texts};

/// Main library of every generated package.
pub const MAIN_LIBRARY: &str = "H5P.QuestionSet";
/// Library string of multiple-choice and true/false questions.
pub const MULTI_CHOICE_LIBRARY: &str = "H5P.MultiChoice 1.16";
/// Library string of fill-in-the-blanks questions.
pub const BLANKS_LIBRARY: &str = "H5P.Blanks 1.14";
/// Default task description of a fill-in-the-blanks question.
pub const DEFAULT_BLANKS_TASK_TEXT: &str = "Fill in the blanks";

/// Libraries preloaded by the host, in manifest order.
pub static PRELOADED_DEPENDENCIES: Lazy<Vec<LibraryDependency>> = Lazy::new(|| {
    [
        ("H5P.Image", "1", "1"),
        ("H5P.MultiChoice", "1", "16"),
        ("H5P.Blanks", "1", "14"),
        ("H5P.TextUtilities", "1", "3"),
        ("FontAwesome", "4", "5"),
        ("H5P.JoubelUI", "1", "3"),
        ("H5P.Transition", "1", "0"),
        ("H5P.FontIcons", "1", "0"),
        ("H5P.Question", "1", "5"),
        ("H5P.DragQuestion", "1", "14"),
        ("jQuery.ui", "1", "10"),
        ("H5P.QuestionSet", "1", "20"),
        ("H5P.Video", "1", "6"),
        ("H5P.MathDisplay", "1", "0"),
    ]
    .into_iter()
    .map(|(name, major, minor)| LibraryDependency {
        machine_name: name.to_string(),
        major_version: major.to_string(),
        minor_version: minor.to_string(),
    })
    .collect()
});

/// Result page with solution and retry buttons and one 0-100 feedback range.
pub fn default_end_game() -> EndGame {
    EndGame {
        show_result_page: true,
        show_solution_button: true,
        show_retry_button: true,
        no_result_message: "Finished".to_string(),
        message: "Your result:".to_string(),
        score_bar_label: "You got @finals out of @totals points".to_string(),
        overall_feedback: vec![FeedbackRange { from: 0, to: 100 }],
        solution_button_text: "Show solution".to_string(),
        retry_button_text: "Retry".to_string(),
        finish_button_text: "Finish".to_string(),
        submit_button_text: "Submit".to_string(),
        show_animations: false,
        skippable: false,
        skip_button_text: "Skip video".to_string(),
    }
}

/// Default UI strings.
pub fn default_texts() -> Texts {
    Texts {
        prev_button: "Previous question".to_string(),
        next_button: "Next question".to_string(),
        finish_button: "Finish".to_string(),
        submit_button: "Submit".to_string(),
        textual_progress: "Question: @current of @total questions".to_string(),
        jump_to_question: "Question %d of %total".to_string(),
        question_label: "Question".to_string(),
        read_speaker_progress: "Question @current of @total".to_string(),
        unanswered_text: "Unanswered".to_string(),
        answered_text: "Answered".to_string(),
        current_question_text: "Current question".to_string(),
        navigation_label: "Questions".to_string(),
    }
}

/// Always show the check button.
pub fn default_override() -> BehaviourOverride {
    BehaviourOverride { check_button: true }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependencies_cover_question_libraries() {
        let names: Vec<_> = PRELOADED_DEPENDENCIES
            .iter()
            .map(|d| d.machine_name.as_str())
            .collect();
        assert_eq!(names.len(), 14);
        assert!(names.contains(&"H5P.MultiChoice"));
        assert!(names.contains(&"H5P.Blanks"));
        assert!(names.contains(&MAIN_LIBRARY));
    }

    #[test]
    fn sub_content_libraries_match_dependency_versions() {
        for library in [MULTI_CHOICE_LIBRARY, BLANKS_LIBRARY] {
            let (name, version) = library.split_once(' ').unwrap();
            let dep = PRELOADED_DEPENDENCIES
                .iter()
                .find(|d| d.machine_name == name)
                .unwrap();
            assert_eq!(format!("{}.{}", dep.major_version, dep.minor_version), version);
        }
    }
}
