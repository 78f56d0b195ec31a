//! `.h5p` archive creation.
//!
//! A package is a zip file holding the bundled H5P libraries at their
//! relative paths, `h5p.json` at the root and `content/content.json`.

use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

use h5quiz_core::{ControlParams, QuestionBlock};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::H5pError;
use crate::codegen::{to_minified_json, to_pretty_json};
use crate::render::{RenderOptions, build_content, build_manifest};
use crate::schema::{PackageManifest, QuestionSetContent};

/// Library directory shipped next to the tool.
pub const DEFAULT_LIBRARIES_DIR: &str = "h5p-mcq-616_libs";
/// Archive path of the manifest.
pub const MANIFEST_ENTRY: &str = "h5p.json";
/// Archive path of the content document.
pub const CONTENT_ENTRY: &str = "content/content.json";
/// Archive path of the pretty-printed manifest copy.
pub const PRETTY_MANIFEST_ENTRY: &str = "h5p-pr.json";
/// Archive path of the pretty-printed content copy.
pub const PRETTY_CONTENT_ENTRY: &str = "content/content-pr.json";

/// Packaging options.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Directory whose files are copied into the archive.
    pub libraries_dir: PathBuf,
    /// Also store indented copies of the JSON documents.
    pub pretty_copies: bool,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            libraries_dir: PathBuf::from(DEFAULT_LIBRARIES_DIR),
            pretty_copies: false,
        }
    }
}

/// The generated documents of one package.
#[derive(Debug, Clone)]
pub struct PackageContents {
    /// `h5p.json`.
    pub manifest: PackageManifest,
    /// `content/content.json`.
    pub content: QuestionSetContent,
}

impl PackageContents {
    /// Render both documents from control parameters and parsed questions.
    pub fn render(
        control: &ControlParams,
        questions: &[QuestionBlock],
        options: &RenderOptions,
    ) -> Result<Self, H5pError> {
        Ok(Self {
            manifest: build_manifest(control),
            content: build_content(control, questions, options)?,
        })
    }
}

/// What was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// Archive path.
    pub path: PathBuf,
    /// Number of files stored.
    pub entries: usize,
}

/// Create an `.h5p` archive at `output`.
///
/// A partially written archive is removed when writing fails.
pub fn create_package(
    output: &Path,
    contents: &PackageContents,
    options: &PackageOptions,
) -> Result<PackageSummary, H5pError> {
    let file = File::create(output)?;
    let entries = match write_package(file, contents, options) {
        Ok((_, entries)) => entries,
        Err(err) => {
            if let Err(remove_err) = std::fs::remove_file(output) {
                log::warn!(
                    "could not remove incomplete {}: {}",
                    output.display(),
                    remove_err
                );
            }
            return Err(err);
        }
    };
    log::info!("wrote {} ({} entries)", output.display(), entries);
    Ok(PackageSummary {
        path: output.to_path_buf(),
        entries,
    })
}

/// Write a package to any seekable writer, returning the writer and the
/// number of stored files.
pub fn write_package<W: Write + Seek>(
    writer: W,
    contents: &PackageContents,
    options: &PackageOptions,
) -> Result<(W, usize), H5pError> {
    if !options.libraries_dir.is_dir() {
        return Err(H5pError::MissingLibraries(options.libraries_dir.clone()));
    }

    let mut zip = ZipWriter::new(writer);
    let file_options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    let mut entries = 0;

    for (name, path) in library_files(&options.libraries_dir)? {
        let mut bytes = Vec::new();
        File::open(&path)?.read_to_end(&mut bytes)?;
        zip.start_file(name.as_str(), file_options)?;
        zip.write_all(&bytes)?;
        log::debug!("added {}", name);
        entries += 1;
    }

    let mut documents = vec![
        (MANIFEST_ENTRY, to_minified_json(&contents.manifest)?),
        (CONTENT_ENTRY, to_minified_json(&contents.content)?),
    ];
    if options.pretty_copies {
        documents.push((PRETTY_MANIFEST_ENTRY, to_pretty_json(&contents.manifest)?));
        documents.push((PRETTY_CONTENT_ENTRY, to_pretty_json(&contents.content)?));
    }
    for (name, json) in documents {
        zip.start_file(name, file_options)?;
        zip.write_all(json.as_bytes())?;
        log::debug!("added {}", name);
        entries += 1;
    }

    let writer = zip.finish()?;
    Ok((writer, entries))
}

/// Files under the library directory as (archive name, path), sorted by name.
/// Entries that would collide with generated documents are skipped.
fn library_files(root: &Path) -> Result<Vec<(String, PathBuf)>, H5pError> {
    let generated = [
        MANIFEST_ENTRY,
        CONTENT_ENTRY,
        PRETTY_MANIFEST_ENTRY,
        PRETTY_CONTENT_ENTRY,
    ];
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if generated.contains(&name.as_str()) {
            log::warn!("skipping {} from the library directory", name);
            continue;
        }
        files.push((name, entry.into_path()));
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn contents() -> PackageContents {
        PackageContents::render(
            &ControlParams::default(),
            &[QuestionBlock::multiple_choice("Q")],
            &RenderOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn missing_library_directory_is_an_error() {
        let options = PackageOptions {
            libraries_dir: PathBuf::from("/definitely/not/here"),
            pretty_copies: false,
        };
        let err = write_package(Cursor::new(Vec::new()), &contents(), &options).unwrap_err();
        assert!(matches!(err, H5pError::MissingLibraries(_)), "{err:?}");
    }

    #[test]
    fn failed_package_leaves_no_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("quiz.h5p");
        let options = PackageOptions {
            libraries_dir: dir.path().join("missing-libs"),
            pretty_copies: false,
        };

        let err = create_package(&output, &contents(), &options).unwrap_err();
        assert!(matches!(err, H5pError::MissingLibraries(_)), "{err:?}");
        assert!(!output.exists());
    }

    #[test]
    fn library_files_use_forward_slashes_and_skip_generated_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("H5P.Blanks-1.14/js")).unwrap();
        fs::write(dir.path().join("H5P.Blanks-1.14/js/blanks.js"), "x").unwrap();
        fs::write(dir.path().join("h5p.json"), "{}").unwrap();

        let files = library_files(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["H5P.Blanks-1.14/js/blanks.js"]);
    }

    #[test]
    fn pretty_copies_add_two_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("library.json"), "{}").unwrap();
        let mut options = PackageOptions {
            libraries_dir: dir.path().to_path_buf(),
            pretty_copies: false,
        };

        let (_, plain) = write_package(Cursor::new(Vec::new()), &contents(), &options).unwrap();
        options.pretty_copies = true;
        let (_, pretty) = write_package(Cursor::new(Vec::new()), &contents(), &options).unwrap();
        assert_eq!(plain, 3);
        assert_eq!(pretty, 5);
    }
}
