use std::fs;
use std::path::{Path, PathBuf};

use hbs_context::error::ContextError;
use hbs_context::sample::pools::{CITIES, COLORS, COUNTRIES, FIRST_NAMES, LAST_NAMES};
use hbs_context::sample::SampleValues;
use hbs_context::scope::scan;
use hbs_context::{
    default_output_path, execute_generation, generate, generate_context, generate_context_with,
    plan_directory, plan_generation, to_json, DirectoryOptions, GenerateOptions,
};
use serde_json::{json, Value};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

/// Copy a fixture template into a fresh temp dir so outputs land there.
fn staged_template(name: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let file_name = Path::new(name).file_name().unwrap();
    let dest = dir.path().join(file_name);
    fs::copy(fixture_path(name), &dest).unwrap();
    (dir, dest)
}

fn copy_dir(src: &Path, dest: &Path) {
    for entry in walkdir::WalkDir::new(src).min_depth(1) {
        let entry = entry.unwrap();
        let target = dest.join(entry.path().strip_prefix(src).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

fn single_options(template: PathBuf) -> GenerateOptions {
    GenerateOptions {
        template,
        output: None,
        suffix: ".json".to_string(),
        overwrite: false,
        seed: Some(42),
    }
}

#[test]
fn test_review_template_shape() {
    let tree = generate_context_with(
        &read_fixture("templates/review.hbs"),
        &mut SampleValues::seeded(1),
    )
    .unwrap();
    let value = Value::Object(tree);

    assert_eq!(value["title"], json!(""));
    assert_eq!(value["isConfirmed"], json!(false));
    assert_eq!(value["signature"], json!(""));
    assert!(FIRST_NAMES.contains(&value["author"]["name"].as_str().unwrap()));

    let reviewers = value["reviewers"].as_array().unwrap();
    assert_eq!(reviewers.len(), 1);
    let reviewer = &reviewers[0];
    assert!(FIRST_NAMES.contains(&reviewer["firstName"].as_str().unwrap()));
    assert!(LAST_NAMES.contains(&reviewer["lastName"].as_str().unwrap()));
    assert!(reviewer["email"].as_str().unwrap().contains('@'));
    assert_eq!(reviewer["age"], json!(10));
    assert_eq!(reviewer["orange"], json!(""));
    assert_eq!(reviewer["deepArray"], json!([{ "banana": "" }]));

    let others = value["otherthings"].as_array().unwrap();
    assert_eq!(others.len(), 1);
    assert!(others[0]["firstName"].is_string());

    // partials and the layout block contribute nothing
    assert!(value.get("header").is_none());
    assert!(value.get("Partials").is_none());
    assert_eq!(value.as_object().unwrap().len(), 6);
}

#[test]
fn test_newsletter_template_shape() {
    let tree = generate_context_with(
        &read_fixture("templates/newsletter.handlebars"),
        &mut SampleValues::seeded(2),
    )
    .unwrap();
    let value = Value::Object(tree);

    assert_eq!(value["issue"]["title"], json!(""));
    assert!(FIRST_NAMES.contains(&value["firstName"].as_str().unwrap()));
    assert!(LAST_NAMES.contains(&value["lastName"].as_str().unwrap()));
    assert_eq!(value["unsubscribeLink"], json!(""));
    assert!(CITIES.contains(&value["company"]["city"].as_str().unwrap()));
    assert!(COUNTRIES.contains(&value["company"]["country"].as_str().unwrap()));
    assert!(value.get("hasUnread").is_none());

    let article = &value["someObject"]["articles"][0];
    assert!(COLORS.contains(&article["accentColor"].as_str().unwrap()));
    assert_eq!(article["headline"], json!(""));
    assert_eq!(article["readingTimeNumber"], json!(10));
    assert_eq!(article["tags"], json!([{ "label": "" }]));
}

#[test]
fn test_unclosed_fixture_fails() {
    let result = generate_context(&read_fixture("broken/unclosed.hbs"));
    match result.unwrap_err() {
        ContextError::UnterminatedScope { path, line, .. } => {
            assert_eq!(path, "items");
            assert_eq!(line, 2);
        }
        other => panic!("expected UnterminatedScope error, got: {other:?}"),
    }
}

#[test]
fn test_same_seed_same_json() {
    let template = read_fixture("templates/review.hbs");
    let a = generate_context_with(&template, &mut SampleValues::seeded(9)).unwrap();
    let b = generate_context_with(&template, &mut SampleValues::seeded(9)).unwrap();
    assert_eq!(to_json(&a).unwrap(), to_json(&b).unwrap());
}

#[test]
fn test_to_json_uses_two_space_indent_and_template_order() {
    let tree = generate_context_with(
        "{{zeta}}{{#each items}}{{label}}{{/each}}{{alpha}}",
        &mut SampleValues::seeded(0),
    )
    .unwrap();
    let json = to_json(&tree).unwrap();
    assert_eq!(
        json,
        "{\n  \"zeta\": \"\",\n  \"alpha\": \"\",\n  \"items\": [\n    {\n      \"label\": \"\"\n    }\n  ]\n}"
    );
}

#[test]
fn test_scan_root_body_excludes_each_blocks() {
    let root = scan(&read_fixture("templates/review.hbs")).unwrap();
    assert!(!root.body.contains("each"));
    assert!(!root.body.contains("{{firstName}}"));
    assert!(root.body.contains("{{signature}}"));
    assert_eq!(root.children.len(), 2);
}

#[test]
fn test_default_output_path_appends_suffix() {
    assert_eq!(
        default_output_path(Path::new("mail/welcome.hbs"), ".json"),
        PathBuf::from("mail/welcome.hbs.json")
    );
}

#[test]
fn test_generate_writes_context_next_to_template() {
    let (_dir, template) = staged_template("templates/review.hbs");

    let written = generate(&single_options(template.clone())).unwrap();

    assert_eq!(written, default_output_path(&template, ".json"));
    let content = fs::read_to_string(&written).unwrap();
    let value: Value = serde_json::from_str(&content).unwrap();
    assert!(value["reviewers"].is_array());
    assert!(content.starts_with("{\n  \""));
}

#[test]
fn test_generate_refuses_existing_output() {
    let (_dir, template) = staged_template("templates/review.hbs");
    let existing = default_output_path(&template, ".json");
    fs::write(&existing, "{ \"keep\": true }").unwrap();

    let result = plan_generation(&single_options(template));
    assert!(matches!(
        result.unwrap_err(),
        ContextError::OutputExists { ref path } if path == &existing
    ));
    assert_eq!(fs::read_to_string(&existing).unwrap(), "{ \"keep\": true }");
}

#[test]
fn test_generate_overwrites_when_requested() {
    let (_dir, template) = staged_template("templates/review.hbs");
    let existing = default_output_path(&template, ".json");
    fs::write(&existing, "{}").unwrap();

    let mut options = single_options(template);
    options.overwrite = true;
    generate(&options).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&existing).unwrap()).unwrap();
    assert!(value.get("title").is_some());
}

#[test]
fn test_explicit_output_creates_parent_dirs() {
    let (dir, template) = staged_template("templates/newsletter.handlebars");
    let output = dir.path().join("contexts/nested/newsletter.json");

    let mut options = single_options(template);
    options.output = Some(output.clone());
    let plan = plan_generation(&options).unwrap();
    assert!(!output.exists(), "planning must not write");

    execute_generation(&plan).unwrap();
    assert!(output.exists());
}

#[test]
fn test_missing_template_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = plan_generation(&single_options(dir.path().join("missing.hbs")));
    assert!(matches!(result.unwrap_err(), ContextError::Io { .. }));
}

#[test]
fn test_plan_directory_skips_existing_contexts() {
    let dir = tempfile::tempdir().unwrap();
    copy_dir(&fixture_path("templates"), dir.path());
    fs::write(dir.path().join("review.hbs.json"), "{}").unwrap();

    let options = DirectoryOptions {
        dir: dir.path().to_path_buf(),
        include: vec!["**/*.hbs".to_string(), "**/*.handlebars".to_string()],
        exclude: vec!["partials/**".to_string()],
        suffix: ".json".to_string(),
        overwrite: false,
        seed: Some(3),
    };
    let plan = plan_directory(&options).unwrap();

    let planned: Vec<_> = plan.plans.iter().map(|p| p.template.clone()).collect();
    assert_eq!(planned, [dir.path().join("newsletter.handlebars")]);
    assert_eq!(plan.skipped, [dir.path().join("review.hbs")]);
}

#[test]
fn test_plan_directory_aborts_on_broken_template() {
    let dir = tempfile::tempdir().unwrap();
    copy_dir(&fixture_path("broken"), dir.path());

    let options = DirectoryOptions {
        dir: dir.path().to_path_buf(),
        include: vec!["**/*.hbs".to_string()],
        exclude: Vec::new(),
        suffix: ".json".to_string(),
        overwrite: false,
        seed: None,
    };
    let result = plan_directory(&options);
    assert!(matches!(
        result.unwrap_err(),
        ContextError::UnterminatedScope { .. }
    ));
}

#[test]
fn test_plan_directory_aborts_on_broken_template_with_existing_context() {
    let dir = tempfile::tempdir().unwrap();
    copy_dir(&fixture_path("broken"), dir.path());
    fs::write(dir.path().join("unclosed.hbs.json"), "{}").unwrap();

    let options = DirectoryOptions {
        dir: dir.path().to_path_buf(),
        include: vec!["**/*.hbs".to_string()],
        exclude: Vec::new(),
        suffix: ".json".to_string(),
        overwrite: false,
        seed: None,
    };
    let result = plan_directory(&options);
    assert!(matches!(
        result.unwrap_err(),
        ContextError::UnterminatedScope { .. }
    ));
    assert_eq!(
        fs::read_to_string(dir.path().join("unclosed.hbs.json")).unwrap(),
        "{}"
    );
}
