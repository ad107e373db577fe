use std::collections::HashMap;

use cartograph_core::error::CoreError;
use cartograph_core::models::message::{Message, Role};
use cartograph_core::models::prompt::{PromptTemplate, TaskKind};
use cartograph_core::prompts::PromptStore;

const PROMPTS: &str = r#"{
    "dbml_explanation": {
        "system_message": "You document databases.",
        "user_template": "Explain this table:\n{{ dbml_input }}"
    },
    "sql_to_dbml": {
        "system_message": "You convert SQL to DBML.",
        "user_template": "Convert:\n{{ sql_input }}"
    }
}"#;

#[test]
fn conversation_is_system_then_user() {
    let store = PromptStore::from_json(PROMPTS).unwrap();
    let messages = store
        .conversation(TaskKind::DbmlExplanation, "Table users { id int }")
        .unwrap();

    assert_eq!(
        messages,
        vec![
            Message::system("You document databases."),
            Message::user("Explain this table:\nTable users { id int }"),
        ]
    );
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
}

#[test]
fn input_is_substituted_verbatim() {
    let store = PromptStore::from_json(PROMPTS).unwrap();
    let sql = "CREATE TABLE t (a int); -- {{ not a tag }} <b>&</b>";
    let rendered = store.render_user(TaskKind::SqlToDbml, sql).unwrap();
    assert_eq!(rendered, format!("Convert:\n{sql}"));
}

#[test]
fn missing_task_is_rejected() {
    let json = r#"{
        "dbml_explanation": {
            "system_message": "s",
            "user_template": "{{ dbml_input }}"
        }
    }"#;
    let err = PromptStore::from_json(json).unwrap_err();
    assert!(matches!(err, CoreError::MissingTemplate(ref t) if t == "sql_to_dbml"));
}

#[test]
fn template_without_placeholder_is_rejected() {
    let json = r#"{
        "dbml_explanation": {
            "system_message": "s",
            "user_template": "Explain {{ sql_input }}"
        },
        "sql_to_dbml": {
            "system_message": "s",
            "user_template": "{{ sql_input }}"
        }
    }"#;
    let err = PromptStore::from_json(json).unwrap_err();
    match err {
        CoreError::MissingPlaceholder { task, placeholder } => {
            assert_eq!(task, "dbml_explanation");
            assert_eq!(placeholder, "dbml_input");
        }
        other => panic!("expected MissingPlaceholder, got {other:?}"),
    }
}

#[test]
fn template_with_no_variables_is_rejected() {
    let json = r#"{
        "dbml_explanation": { "system_message": "s", "user_template": "{{ dbml_input }}" },
        "sql_to_dbml": { "system_message": "s", "user_template": "Convert nothing" }
    }"#;
    let err = PromptStore::from_json(json).unwrap_err();
    assert!(
        matches!(err, CoreError::MissingPlaceholder { ref task, .. } if task == "sql_to_dbml"),
        "got {err:?}"
    );
}

#[test]
fn unparseable_template_is_rejected() {
    let json = r#"{
        "dbml_explanation": { "system_message": "s", "user_template": "{{ dbml_input" },
        "sql_to_dbml": { "system_message": "s", "user_template": "{{ sql_input }}" }
    }"#;
    let err = PromptStore::from_json(json).unwrap_err();
    match err {
        // The parser's position report is carried, not just the wrapper.
        CoreError::TemplateParse(message) => assert!(message.contains("-->"), "{message}"),
        other => panic!("expected TemplateParse, got {other:?}"),
    }
}

#[test]
fn unknown_tasks_are_ignored() {
    let json = r#"{
        "dbml_explanation": { "system_message": "s", "user_template": "{{ dbml_input }}" },
        "sql_to_dbml": { "system_message": "s", "user_template": "{{ sql_input }}" },
        "summarize": { "system_message": "s", "user_template": "{{ text }}" }
    }"#;
    assert!(PromptStore::from_json(json).is_ok());
}

#[test]
fn store_can_be_built_in_memory() {
    let templates = HashMap::from([
        (
            TaskKind::DbmlExplanation,
            PromptTemplate {
                system_message: "sys-a".to_string(),
                user_template: "A {{ dbml_input }}".to_string(),
            },
        ),
        (
            TaskKind::SqlToDbml,
            PromptTemplate {
                system_message: "sys-b".to_string(),
                user_template: "B {{ sql_input }}".to_string(),
            },
        ),
    ]);
    let store = PromptStore::from_templates(templates).unwrap();
    assert_eq!(store.get(TaskKind::SqlToDbml).system_message, "sys-b");
    assert_eq!(store.render_user(TaskKind::DbmlExplanation, "x").unwrap(), "A x");
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompts.json");
    std::fs::write(&path, PROMPTS).unwrap();

    let store = PromptStore::load(&path).unwrap();
    assert_eq!(store.get(TaskKind::DbmlExplanation).system_message, "You document databases.");

    let missing = PromptStore::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, CoreError::Io { .. }));
}

#[test]
fn shipped_prompt_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../prompts.json");
    let store = PromptStore::load(&path).unwrap();
    for task in TaskKind::ALL {
        let rendered = store.render_user(task, "INPUT-MARKER").unwrap();
        assert!(rendered.contains("INPUT-MARKER"), "{task}");
    }
}
