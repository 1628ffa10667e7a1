use std::fs;
use std::path::{Path, PathBuf};

use bsongen::{
    config::Config,
    error::ErrorKind,
    grammar::{definitions, Flavor},
    GrammarGenerator,
};

fn test_data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data").join(name)
}

fn template(name: &str) -> String {
    fs::read_to_string(test_data(&format!("templates/{}", name))).unwrap()
}

#[test]
fn test_document_template() {
    let generator = GrammarGenerator::builder().build();
    let grammar = generator.generate(&template("mql.g4.tmpl")).unwrap();

    assert!(grammar.starts_with("grammar mql;\n\n\nfind:\n    TYPE_DOCUMENT name=cstring int32\n"));
    assert!(grammar.contains("\n    |   field\n"));
    assert!(grammar.contains("\nfind_filter: TYPE_DOCUMENT F I L T E R NUL_BYTE document filter_document;\n"));
    assert!(grammar.contains(
        "\nfind_limit: TYPE_INT32 L I M I T NUL_BYTE int32 | TYPE_INT64 L I M I T NUL_BYTE int64 | TYPE_DOUBLE L I M I T NUL_BYTE double;\n"
    ));
    assert!(grammar.contains("\nfind_collection: TYPE_STRING F I N D NUL_BYTE string;\n"));
    assert!(grammar.contains("\nfilter_document:\n    int32\n"));
    assert!(grammar.contains("(TYPE_DECIMAL128 DOLLAR E Q NUL_BYTE decimal128 | "));
    assert!(grammar.contains("\n;\n// fields\nfield:\n"));
    assert!(grammar.ends_with(definitions(Flavor::Document)));
    assert!(!grammar.contains("{{"));
}

#[test]
fn test_legacy_template() {
    let generator = GrammarGenerator::builder().flavor(Flavor::Legacy).build();
    let grammar = generator.generate(&template("legacy.g4.tmpl")).unwrap();

    assert!(grammar.contains("\n    TYPE_DOCUMENT name=cstring int32\n"));
    assert!(grammar.contains("TYPE_DOCUMENT P I P E L I N E NUL_BYTE document int32 stage* NUL_BYTE"));
    assert!(grammar.contains("\n    TYPE_DOCUMENT DOLLAR M A T C H NUL_BYTE int32 any_field_any* NUL_BYTE\n"));
    assert!(grammar.contains("TYPE_INT64 N NUL_BYTE int64"));
    assert!(grammar.contains(
        "skip: (TYPE_DECIMAL128 S K I P NUL_BYTE decimal128 | TYPE_DOUBLE S K I P NUL_BYTE double | TYPE_INT32 S K I P NUL_BYTE int32 | TYPE_INT64 S K I P NUL_BYTE int64);"
    ));
    assert!(grammar.ends_with(&format!("{}\n", definitions(Flavor::Legacy))));
}

#[test]
fn test_flavors_do_not_mix() {
    let generator = GrammarGenerator::builder().build();
    let err = generator.generate(&template("legacy.g4.tmpl")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedPlaceholder);

    let generator = GrammarGenerator::builder().flavor(Flavor::Legacy).build();
    let err = generator.generate(&template("mql.g4.tmpl")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedPlaceholder);
}

#[test]
fn test_deterministic() {
    let input = template("mql.g4.tmpl");
    let first = GrammarGenerator::builder().build().generate(&input).unwrap();
    let second = GrammarGenerator::builder().build().generate(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("mql.g4");

    let generator = GrammarGenerator::builder().build();
    generator.generate_file(test_data("templates/mql.g4.tmpl"), &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, generator.generate(&template("mql.g4.tmpl")).unwrap());
}

#[test]
fn test_bad_name_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("mql.g4");

    let err = GrammarGenerator::builder()
        .build()
        .generate_file(test_data("templates/bad-name.g4.tmpl"), &output)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnsupportedNameCharacter);
    assert!(err.to_string().contains("unsupported character '_'"));
    assert!(!output.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_failed_run_keeps_old_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("mql.g4");
    fs::write(&output, "previous").unwrap();

    let err = GrammarGenerator::builder()
        .build()
        .generate_file(test_data("templates/bad-name.g4.tmpl"), &output)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnsupportedNameCharacter);
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_io_failures() {
    let dir = tempfile::tempdir().unwrap();
    let generator = GrammarGenerator::builder().build();

    let err = generator.generate_file(dir.path().join("missing.tmpl"), dir.path().join("out.g4")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IOFailure);
    assert!(err.to_string().starts_with("could not load template"));

    let err = generator
        .generate_file(test_data("templates/mql.g4.tmpl"), dir.path().join("no-such-dir").join("out.g4"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IOFailure);
    assert!(err.to_string().starts_with("could not write grammar"));
}

#[test]
fn test_config_file() {
    let config = Config::from_json(test_data("config.json")).unwrap();
    assert_eq!(config.flavor, Flavor::Legacy);

    let grammar = config.builder().build().generate(&template("legacy.g4.tmpl")).unwrap();
    assert!(grammar.contains("any_field_any"));
}
