//! Command-line interface for h5quiz.
//! Turns a control file and a plain-text question file into an `.h5p` question set.
//!
//! Usage:
//!   h5quiz `<control>` `<questions>` [--libs `<dir>`] [--output `<file>`]
//!   h5quiz `<control>` `<questions>` --json      - Print content.json instead of packaging

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use h5quiz_core::{ParseOptions, QuizError, parse_control, parse_question_set};
use h5quiz_h5p::codegen::to_pretty_json;
use h5quiz_h5p::{
    DEFAULT_LIBRARIES_DIR, H5pError, PackageContents, PackageOptions, RenderOptions,
    create_package,
};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "h5quiz", version, about = "Build H5P question sets from plain-text quizzes")]
struct Cli {
    /// Control file with quiz metadata (`KEY: value` lines)
    control: PathBuf,
    /// Question file with MCQ:/TF:/FIB: blocks
    questions: PathBuf,
    /// Directory with the H5P libraries to bundle
    #[arg(long, short = 'l', default_value = DEFAULT_LIBRARIES_DIR)]
    libs: PathBuf,
    /// Output archive (defaults to NAME_H5P from the control file)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    /// Also store indented copies of h5p.json and content.json
    #[arg(long)]
    pretty_copies: bool,
    /// Keep unpaired '*' in blank lines as text instead of failing
    #[arg(long)]
    lenient_blanks: bool,
    /// Task description for fill-in-the-blanks questions
    #[arg(long)]
    blanks_text: Option<String>,
    /// Print content.json to stdout instead of writing a package
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    H5p(#[from] H5pError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let control = parse_control(&read_file(&cli.control)?).map_err(QuizError::from)?;
    log::info!("control parameters:");
    for (key, value) in control.iter() {
        log::info!("  {}: {}", key, value);
    }

    let options = if cli.lenient_blanks {
        ParseOptions::lenient()
    } else {
        ParseOptions::strict()
    };
    let source = read_file(&cli.questions)?;
    let parsed = parse_question_set(&source, &options).map_err(|err| match err {
        QuizError::Parse(errors) => {
            QuizError::Parse(errors.with_file(&cli.questions.display().to_string()))
        }
        other => other,
    })?;
    for warning in &parsed.diagnostics.warnings {
        log::warn!("{}: {}", cli.questions.display(), warning);
    }
    log::info!("parsed {} questions", parsed.questions.len());

    let mut render_options = RenderOptions::default();
    if let Some(text) = &cli.blanks_text {
        render_options.blanks_task_text = text.clone();
    }
    let contents = PackageContents::render(&control, &parsed.questions, &render_options)?;

    if cli.json {
        println!("{}", to_pretty_json(&contents.content)?);
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(control.package_name()));
    let summary = create_package(
        &output,
        &contents,
        &PackageOptions {
            libraries_dir: cli.libs.clone(),
            pretty_copies: cli.pretty_copies,
        },
    )?;
    log::info!("created {}", summary.path.display());
    Ok(())
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
