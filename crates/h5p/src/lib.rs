#![deny(missing_docs)]
//! h5quiz H5P engine: document schema, rendering, JSON emission, and packaging.

/// JSON and string emission helpers.
pub mod codegen;
/// Rendering and packaging errors.
pub mod error;
/// `.h5p` archive creation.
pub mod package;
/// Question set to H5P document rendering.
pub mod render;
/// H5P document types and defaults.
pub mod schema;

pub use error::H5pError;
pub use package::{
    DEFAULT_LIBRARIES_DIR, PackageContents, PackageOptions, PackageSummary, create_package,
    write_package,
};
pub use render::{
    RenderOptions, SubContentIds, build_content, build_content_with_ids, build_manifest,
    random_sub_content_id, render_question,
};
pub use schema::{PackageManifest, QuestionSetContent, SubContent, SubContentParams};
