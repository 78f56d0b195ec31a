//! H5P document schema and its fixed defaults.

/// Fixed library versions and UI strings.
pub mod defaults;
/// Serde types for `h5p.json` and `content.json`.
pub mod types;

pub use types::{
    Author, BehaviourOverride, BlanksParams, EndGame, FeedbackRange, IntroPage,
    LibraryDependency, MultiChoiceAnswer, MultiChoiceParams, PackageManifest,
    QuestionSetContent, SubContent, SubContentMetadata, SubContentParams, Texts, TipsAndFeedback,
};
