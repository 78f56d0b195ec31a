use h5quiz_core::QuestionBlock;
use h5quiz_wasm::{parse_questions, render_content};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
struct ParseResult {
    questions: Vec<QuestionBlock>,
    warnings: Vec<Diagnostic>,
    errors: Vec<Diagnostic>,
}

#[derive(Deserialize, Debug)]
struct Diagnostic {
    kind: String,
    line: usize,
    column: usize,
}

#[derive(Deserialize, Debug)]
struct RenderResult {
    manifest_json: String,
    content_json: String,
    package_name: String,
}

fn lenient_config() -> JsValue {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"lenientBlanks".into(), &JsValue::TRUE)
        .expect("set lenientBlanks");
    config.into()
}

fn parse(source: &str, config: JsValue) -> ParseResult {
    let value = parse_questions(source, config).expect("parse should succeed");
    serde_wasm_bindgen::from_value(value).expect("deserialize result")
}

#[wasm_bindgen_test]
fn parse_multiple_choice_block() {
    let result = parse(
        "MCQ:Capital of France?\n*Paris TIP:city of light\nLyon",
        JsValue::UNDEFINED,
    );

    assert!(result.errors.is_empty());
    assert_eq!(result.questions.len(), 1);
    match &result.questions[0] {
        QuestionBlock::MultipleChoiceOrTrueFalse {
            prompt_text,
            answers,
        } => {
            assert_eq!(prompt_text, "Capital of France?");
            assert_eq!(answers.len(), 2);
            assert!(answers[0].correct);
            assert_eq!(answers[0].text, "Paris");
            assert_eq!(answers[0].tip, "city of light");
            assert!(!answers[1].correct);
        }
        other => panic!("unexpected block: {other:?}"),
    }
}

#[wasm_bindgen_test]
fn parse_fill_in_blanks_prompt() {
    let result = parse("FIB:The *cat* sat", JsValue::NULL);

    let QuestionBlock::FillInBlanks { questions, .. } = &result.questions[0] else {
        panic!("expected a fill-in-blanks block");
    };
    assert_eq!(questions[0].template, "The {1} sat");
    assert_eq!(questions[0].blanks[0].expected_text, "cat");
    assert_eq!(questions[0].segments.len(), 3);
}

#[wasm_bindgen_test]
fn parse_reports_orphan_answer() {
    let result = parse("\n*Orphan", JsValue::UNDEFINED);

    assert!(result.questions.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, "answer_outside_block");
    assert_eq!(result.errors[0].line, 2);
    assert_eq!(result.errors[0].column, 1);
}

#[wasm_bindgen_test]
fn lenient_config_downgrades_odd_blank_count() {
    let strict = parse("FIB:\nThe *cat sat", JsValue::UNDEFINED);
    assert_eq!(strict.errors[0].kind, "odd_blank_count");

    let lenient = parse("FIB:\nThe *cat sat", lenient_config());
    assert!(lenient.errors.is_empty());
    assert_eq!(lenient.warnings[0].kind, "dangling_blank_marker");
}

#[wasm_bindgen_test]
fn render_content_uses_control_values() {
    let value = render_content(
        "TITLE: \"Quiz\"\nNAME_H5P: quiz",
        "TF:Water is wet\n*True\nFalse",
        JsValue::UNDEFINED,
    )
    .expect("render should succeed");
    let result: RenderResult = serde_wasm_bindgen::from_value(value).expect("deserialize result");

    assert_eq!(result.package_name, "quiz.h5p");
    assert!(result.manifest_json.contains("\"title\":\"Quiz\""));
    assert!(result.content_json.contains("H5P.MultiChoice 1.16"));
}

#[wasm_bindgen_test]
fn render_content_rejects_orphan_answer() {
    let result = render_content("", "*Orphan", JsValue::UNDEFINED);
    assert!(result.is_err());
}
