use std::{fs, path::PathBuf};

use tempfile::tempdir;

use quire::QuireError;
use quire_cli::{Args, run};

/// Collects all .xml files from a directory
fn collect_xml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("xml")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

fn args(input: impl Into<String>) -> Args {
    Args {
        input: input.into(),
        object: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demos() {
    // Demos are at workspace root, relative to workspace not the crate
    let demos_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos");
    let demos = collect_xml_files(demos_path);

    assert!(!demos.is_empty(), "No demos found in demos/");

    let failed: Vec<_> = demos
        .iter()
        .filter_map(|path| {
            run(&args(path.to_string_lossy()))
                .err()
                .map(|err| format!("{}: {err}", path.display()))
        })
        .collect();

    assert!(failed.is_empty(), "Failed demos:\n{}", failed.join("\n"));
}

#[test]
fn e2e_object_mode() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("frame.xml");
    fs::write(&input, "<textframe><p>Boxed text</p></textframe>").expect("Failed to write input");

    let mut args = args(input.to_string_lossy());
    args.object = true;

    run(&args).expect("Failed to read object");
}

#[test]
fn e2e_recovered_errors_still_succeed() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("sloppy.xml");
    fs::write(
        &input,
        concat!(
            "<document><sections><section>",
            r#"<p Format.Alignment="Diagonal">Text</p>"#,
            "</section></sections></document>",
        ),
    )
    .expect("Failed to write input");

    run(&args(input.to_string_lossy())).expect("Recovered errors should not fail the run");
}

#[test]
fn e2e_strict_config_fails_on_errors() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("sloppy.xml");
    fs::write(
        &input,
        concat!(
            "<document><sections><section>",
            r#"<p Format.KeepTogether="maybe">Text</p>"#,
            "</section></sections></document>",
        ),
    )
    .expect("Failed to write input");
    let config = dir.path().join("config.toml");
    fs::write(&config, "[diagnostics]\nfail_on = \"error\"\n").expect("Failed to write config");

    let mut args = args(input.to_string_lossy());
    args.config = Some(config.to_string_lossy().to_string());

    assert!(matches!(run(&args), Err(QuireError::Parse { .. })));
}

#[test]
fn e2e_fatal_markup_fails() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("truncated.xml");
    fs::write(&input, "<document><sections><section>").expect("Failed to write input");

    assert!(matches!(
        run(&args(input.to_string_lossy())),
        Err(QuireError::Parse { .. })
    ));
}

#[test]
fn e2e_missing_input_fails() {
    let dir = tempdir().expect("Failed to create temp directory");
    let input = dir.path().join("absent.xml");

    assert!(matches!(
        run(&args(input.to_string_lossy())),
        Err(QuireError::Io(_))
    ));
}
