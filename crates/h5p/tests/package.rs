use std::fs::{self, File};
use std::io::Read;

use h5quiz_core::{ParseOptions, parse_control, parse_question_set};
use h5quiz_h5p::{
    PackageContents, PackageOptions, QuestionSetContent, RenderOptions, SubContentParams,
    create_package,
};

const CONTROL: &str = r#"TITLE: "European capitals"
AUTHOR: "Ada Lovelace"
INTRODUCTION: "Ten quick questions."
POOL_SIZE: 3
NAME_H5P: capitals.h5p
"#;

const QUESTIONS: &str = "\
MCQ: What is the capital of France?
*Paris TIP:Think of the Eiffel tower YSEL:Correct! NSEL:It is Paris
Lyon YSEL:No, Lyon is the third largest city
Marseille

TF: Berlin is the capital of Germany.
*True
False NSEL:It is.

FIB: The capital of *Italy* is *Rome*.
Madrid is the capital of *Spain*.
";

fn read_entry(archive: &mut zip::ZipArchive<File>, name: &str) -> String {
    let mut text = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("{name} missing: {e}"))
        .read_to_string(&mut text)
        .unwrap();
    text
}

#[test]
fn builds_complete_package() {
    let libs = tempfile::tempdir().unwrap();
    fs::create_dir_all(libs.path().join("H5P.MultiChoice-1.16")).unwrap();
    fs::write(libs.path().join("H5P.MultiChoice-1.16/library.json"), "{}").unwrap();
    fs::write(libs.path().join("readme.txt"), "libraries").unwrap();

    let control = parse_control(CONTROL).unwrap();
    let parsed = parse_question_set(QUESTIONS, &ParseOptions::default()).unwrap();
    let contents =
        PackageContents::render(&control, &parsed.questions, &RenderOptions::default()).unwrap();

    let out = tempfile::tempdir().unwrap();
    let path = out.path().join(control.package_name());
    let summary = create_package(
        &path,
        &contents,
        &PackageOptions {
            libraries_dir: libs.path().to_path_buf(),
            pretty_copies: true,
        },
    )
    .unwrap();
    assert_eq!(summary.entries, 6);
    assert!(path.ends_with("capitals.h5p"));

    let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(
        names,
        [
            "H5P.MultiChoice-1.16/library.json",
            "content/content-pr.json",
            "content/content.json",
            "h5p-pr.json",
            "h5p.json",
            "readme.txt",
        ]
    );

    let manifest = read_entry(&mut archive, "h5p.json");
    assert!(manifest.ends_with("}\n"));
    assert_eq!(manifest.lines().count(), 1);
    assert!(manifest.contains("\"title\":\"European capitals\""));

    let content: QuestionSetContent =
        serde_json::from_str(&read_entry(&mut archive, "content/content.json")).unwrap();
    assert_eq!(content.pool_size, 3);
    assert_eq!(content.intro_page.introduction, "<p>Ten quick questions.<br>\n&nbsp;</p>\n");
    assert_eq!(content.questions.len(), 3);

    let SubContentParams::MultiChoice(first) = &content.questions[0].params else {
        panic!("first question should be multiple choice");
    };
    assert_eq!(first.question, "What is the capital of France?");
    assert_eq!(first.answers.len(), 3);
    assert!(first.answers[0].correct);
    assert_eq!(first.answers[0].tips_and_feedback.tip, "Think of the Eiffel tower");
    assert_eq!(
        first.answers[1].tips_and_feedback.chosen_feedback,
        "No, Lyon is the third largest city"
    );

    let SubContentParams::Blanks(blanks) = &content.questions[2].params else {
        panic!("third question should be fill in the blanks");
    };
    assert_eq!(
        blanks.questions,
        [
            "The capital of *Italy* is *Rome*.",
            "Madrid is the capital of *Spain*."
        ]
    );
}
