//! Renders a parsed question set into the H5P manifest and content documents.

use h5quiz_core::{ControlParams, QuestionBlock};

use crate::H5pError;
use crate::codegen::{blanks_to_h5p_syntax, introduction_html};
use crate::schema::defaults::{
    BLANKS_LIBRARY, DEFAULT_BLANKS_TASK_TEXT, MAIN_LIBRARY, MULTI_CHOICE_LIBRARY,
    PRELOADED_DEPENDENCIES, default_end_game, default_override, default_texts,
};
use crate::schema::{
    Author, BlanksParams, IntroPage, MultiChoiceAnswer, MultiChoiceParams, PackageManifest,
    QuestionSetContent, SubContent, SubContentMetadata, SubContentParams, TipsAndFeedback,
};

/// Source of `subContentId` values.
pub trait SubContentIds {
    /// Produce the id for the next sub-content.
    fn next_id(&self) -> String;
}

impl<F> SubContentIds for F
where
    F: Fn() -> String,
{
    fn next_id(&self) -> String {
        (self)()
    }
}

/// Fresh random (v4) sub-content id.
pub fn random_sub_content_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Content rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Task description shown above fill-in-the-blanks sentences.
    pub blanks_task_text: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            blanks_task_text: DEFAULT_BLANKS_TASK_TEXT.to_string(),
        }
    }
}

/// Build `h5p.json` from the control parameters.
pub fn build_manifest(control: &ControlParams) -> PackageManifest {
    PackageManifest {
        title: control.title().to_string(),
        language: "und".to_string(),
        main_library: MAIN_LIBRARY.to_string(),
        embed_types: vec!["div".to_string()],
        authors: vec![Author {
            name: control.author().to_string(),
            role: "Author".to_string(),
        }],
        license: control.license().to_string(),
        default_language: "en".to_string(),
        preloaded_dependencies: PRELOADED_DEPENDENCIES.clone(),
    }
}

/// Build `content.json` with random sub-content ids.
pub fn build_content(
    control: &ControlParams,
    questions: &[QuestionBlock],
    options: &RenderOptions,
) -> Result<QuestionSetContent, H5pError> {
    build_content_with_ids(control, questions, options, &random_sub_content_id)
}

/// Build `content.json`, drawing sub-content ids from `ids`.
pub fn build_content_with_ids(
    control: &ControlParams,
    questions: &[QuestionBlock],
    options: &RenderOptions,
    ids: &dyn SubContentIds,
) -> Result<QuestionSetContent, H5pError> {
    let pool_size = control.pool_size()?;
    if pool_size as usize > questions.len() {
        log::warn!(
            "POOL_SIZE {} is larger than the {} parsed questions",
            pool_size,
            questions.len()
        );
    }

    Ok(QuestionSetContent {
        intro_page: IntroPage {
            show_intro_page: true,
            start_button_text: "Start Quiz".to_string(),
            title: control.title().to_string(),
            introduction: introduction_html(control.introduction()),
        },
        progress_type: "dots".to_string(),
        pass_percentage: control.pass_percentage()?,
        disable_backwards_navigation: control.disable_backwards_navigation(),
        random_questions: control.random_questions(),
        end_game: default_end_game(),
        behaviour_override: default_override(),
        texts: default_texts(),
        pool_size,
        questions: questions
            .iter()
            .map(|block| render_question(block, options, ids))
            .collect(),
    })
}

/// Render one question block as H5P sub-content.
pub fn render_question(
    block: &QuestionBlock,
    options: &RenderOptions,
    ids: &dyn SubContentIds,
) -> SubContent {
    match block {
        QuestionBlock::MultipleChoiceOrTrueFalse {
            prompt_text,
            answers,
        } => SubContent {
            library: MULTI_CHOICE_LIBRARY.to_string(),
            params: SubContentParams::MultiChoice(MultiChoiceParams {
                question: prompt_text.clone(),
                answers: answers
                    .iter()
                    .map(|answer| MultiChoiceAnswer {
                        text: answer.text.clone(),
                        correct: answer.correct,
                        tips_and_feedback: TipsAndFeedback {
                            tip: answer.tip.clone(),
                            chosen_feedback: answer.chosen_feedback.clone(),
                            not_chosen_feedback: answer.not_chosen_feedback.clone(),
                        },
                    })
                    .collect(),
            }),
            sub_content_id: ids.next_id(),
            metadata: metadata("Multiple Choice"),
        },
        QuestionBlock::FillInBlanks { questions, .. } => SubContent {
            library: BLANKS_LIBRARY.to_string(),
            params: SubContentParams::Blanks(BlanksParams {
                text: options.blanks_task_text.clone(),
                questions: questions.iter().map(blanks_to_h5p_syntax).collect(),
            }),
            sub_content_id: ids.next_id(),
            metadata: metadata("Fill in the Blanks"),
        },
    }
}

fn metadata(content_type: &str) -> SubContentMetadata {
    SubContentMetadata {
        content_type: content_type.to_string(),
        license: "U".to_string(),
        title: format!("Untitled {content_type}"),
    }
}
