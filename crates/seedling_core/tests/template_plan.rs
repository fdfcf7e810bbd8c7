use seedling_core::template::plan::FileCondition;
use seedling_core::{GenerationPlan, PostGenTask, PythonVersion, TemplateAnswers, TemplateError};

fn answers_json(extra: &str) -> String {
    format!(
        r#"{{
            "project_name": "Inventory Tracker",
            "author_name": "Ada",
            "author_email": "ada@example.com"{extra}
        }}"#
    )
}

#[test]
fn defaults_and_derived_values() {
    let answers = TemplateAnswers::from_json_str(&answers_json("")).unwrap();

    assert_eq!(answers.package_name(), "inventory_tracker");
    assert_eq!(answers.cli_name(), "inventory-tracker");
    assert_eq!(answers.entry_point(), "inventory_tracker.cli:app");
    assert_eq!(answers.python_version, PythonVersion::V3_12);
    assert!(answers.include_examples);
    assert!(answers.include_ci);
    assert!(answers.include_scripts);
}

#[test]
fn explicit_package_name_wins() {
    let answers = TemplateAnswers::from_json_str(&answers_json(
        r#", "package_name": "stock", "python_version": "3.13""#,
    ))
    .unwrap();

    let plan = GenerationPlan::from_answers(&answers);
    assert_eq!(plan.package_name, "stock");
    assert_eq!(plan.cli_name, "stock");
    assert_eq!(plan.python_version, "3.13");
    assert!(plan
        .included_paths()
        .any(|path| path == "src/stock/services/item_service.py"));
}

#[test]
fn toggles_exclude_file_groups() {
    let answers = TemplateAnswers::from_json_str(&answers_json(
        r#", "include_examples": false, "include_ci": false, "include_scripts": false"#,
    ))
    .unwrap();
    let plan = GenerationPlan::from_answers(&answers);

    for file in &plan.files {
        assert_eq!(
            file.included,
            file.condition == FileCondition::Always,
            "unexpected decision for {}",
            file.path
        );
    }
    assert!(plan
        .included_paths()
        .any(|path| path == "src/inventory_tracker/cli.py"));
    assert!(!plan.included_paths().any(|path| path.starts_with(".github/")));
    assert!(!plan.included_paths().any(|path| path.starts_with("scripts/")));
    assert!(!plan.included_paths().any(|path| path == "tests/fakes.py"));
}

#[test]
fn protected_files_and_task_order() {
    let answers = TemplateAnswers::from_json_str(&answers_json("")).unwrap();
    let plan = GenerationPlan::from_answers(&answers);

    assert!(plan.is_protected("README.md"));
    assert!(plan.is_protected("docs/adr/0001-functional-core.md"));
    assert!(!plan.is_protected("pyproject.toml"));
    assert!(!plan.is_protected("not/in/template.txt"));

    assert_eq!(
        plan.tasks,
        vec![
            PostGenTask::InstallDependencies,
            PostGenTask::InitRepository,
            PostGenTask::InitialCommit,
        ]
    );
    assert_eq!(PostGenTask::InitRepository.argv(), &["git", "init"]);
}

#[test]
fn invalid_answers_are_rejected() {
    let err = TemplateAnswers::from_json_str(&answers_json(r#", "package_name": "9lives""#))
        .unwrap_err();
    assert!(matches!(
        err,
        TemplateError::InvalidAnswer {
            field: "package_name",
            ..
        }
    ));

    let err = TemplateAnswers::from_json_str(
        r#"{"project_name": "x", "author_name": "a", "author_email": "nope"}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TemplateError::InvalidAnswer {
            field: "author_email",
            ..
        }
    ));

    let err = TemplateAnswers::from_json_str(&answers_json(r#", "python_version": "2.7""#))
        .unwrap_err();
    assert!(matches!(err, TemplateError::Parse(_)));
}

#[test]
fn answers_file_is_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(&path, answers_json("")).unwrap();

    let answers = TemplateAnswers::from_json_file(&path).unwrap();
    assert_eq!(answers.project_name, "Inventory Tracker");

    let missing = TemplateAnswers::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, TemplateError::Io { .. }));
}
