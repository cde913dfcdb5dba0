//! End-to-end integration tests for Tagweave.
//!
//! These tests exercise the full pipeline from a catalog directory and a
//! prompt file on disk through an editing session, and drive the `tagweave`
//! binary the way a user would.

use std::path::Path;
use std::process::{Command, Output};

use tagweave_catalog::TagLibrary;
use tagweave_core::TagCatalog;
use tagweave_selection::Placement;
use tagweave_session::{EditSession, FileHost, SessionOptions};

// ── Fixtures ─────────────────────────────────────────────────────────────

const QUALITY_YAML: &str = "\
- name: Masterpiece
  alias: [masterpiece]
- name: Best quality
  alias: [best_quality]
";

const EXPRESSION_YAML: &str = "\
name: Expressions
content:
  smile:
    name: Smile
    alias: [smiling]
";

/// Lay out a small catalog: `people/expression.yaml` and `quality.yaml`.
fn write_catalog(root: &Path) {
    std::fs::create_dir_all(root.join("people")).unwrap();
    std::fs::create_dir_all(root.join("empty")).unwrap();
    std::fs::write(root.join("people/expression.yaml"), EXPRESSION_YAML).unwrap();
    std::fs::write(root.join("quality.yaml"), QUALITY_YAML).unwrap();
    std::fs::write(root.join("notes.txt"), "not a tag file").unwrap();
}

fn tagweave(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tagweave"))
        .args(args)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("TAGWEAVE_DATA_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tagweave binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ── Library pipeline ─────────────────────────────────────────────────────

#[test]
fn e2e_catalog_to_committed_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    write_catalog(&data);
    let prompt = dir.path().join("prompt.txt");
    std::fs::write(&prompt, "best_quality, (smile, extra):1.1, masterpiece").unwrap();

    let mut library = TagLibrary::open(&data).unwrap();
    assert_eq!(
        library.tree().files(),
        vec!["people/expression.yaml", "quality.yaml"]
    );
    let index = library.index();
    assert_eq!(index.display_name("smiling").as_deref(), Some("Smile"));

    let mut session = EditSession::open(Box::new(FileHost::new(&prompt)), Box::new(index))
        .unwrap()
        .with_options(SessionOptions {
            sort_on_commit: true,
        });
    assert!(session.like("smiling"));
    session.commit().unwrap();

    assert_eq!(
        std::fs::read_to_string(&prompt).unwrap(),
        "smile:1.10, smiling, masterpiece, best_quality, extra:1.10"
    );
}

#[test]
fn e2e_reopen_preserves_edits() {
    let dir = tempfile::tempdir().unwrap();
    let prompt = dir.path().join("prompt.txt");

    let catalog = || Box::new(tagweave_core::EmptyCatalog) as Box<dyn TagCatalog>;

    let mut first = EditSession::open(Box::new(FileHost::new(&prompt)), catalog()).unwrap();
    first.add("a");
    first.add("b");
    first.add("c");
    first.adjust_weight("b", true);
    first.reorder("c", &Placement::Before("a".into()));
    first.commit().unwrap();

    let second = EditSession::open(Box::new(FileHost::new(&prompt)), catalog()).unwrap();
    assert_eq!(second.preview(), "c, a, b:1.05");
    assert_eq!(second.store().get("b").unwrap().weight, 1.05);
}

// ── Binary ───────────────────────────────────────────────────────────────

#[test]
fn e2e_cli_format_flattens_groups() {
    let home = tempfile::tempdir().unwrap();
    let output = tagweave(home.path(), &["format", "(a,b):2, a"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "a, b:2.00");
}

#[test]
fn e2e_cli_parse_json() {
    let home = tempfile::tempdir().unwrap();
    let output = tagweave(home.path(), &["parse", "--json", "x:1.5, (y):0.5"]);
    assert!(output.status.success());

    let tags: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(tags[0]["name"], "x");
    assert_eq!(tags[0]["weight"], 1.5);
    assert_eq!(tags[1]["name"], "y");
    assert_eq!(tags[1]["weight"], 0.5);
}

#[test]
fn e2e_cli_edit_writes_file_with_labels() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data");
    write_catalog(&data);
    let prompt = home.path().join("prompt.txt");
    std::fs::write(&prompt, "smile:1.2").unwrap();

    let output = tagweave(
        home.path(),
        &[
            "--data-dir",
            data.to_str().unwrap(),
            "edit",
            "--file",
            prompt.to_str().unwrap(),
            "--add",
            "masterpiece",
            "--move",
            "masterpiece:before:smile",
        ],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("masterpiece - Masterpiece ×1.000"));
    assert_eq!(
        std::fs::read_to_string(&prompt).unwrap(),
        "masterpiece, smile:1.20"
    );
}

#[test]
fn e2e_cli_edit_dry_run_leaves_file_alone() {
    let home = tempfile::tempdir().unwrap();
    let prompt = home.path().join("prompt.txt");
    std::fs::write(&prompt, "a").unwrap();

    let output = tagweave(
        home.path(),
        &["edit", "--file", prompt.to_str().unwrap(), "--add", "b", "--dry-run"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("a, b"));
    assert_eq!(std::fs::read_to_string(&prompt).unwrap(), "a");
}

#[test]
fn e2e_cli_dry_run_shows_sorted_commit_order() {
    let home = tempfile::tempdir().unwrap();
    write_catalog(&home.path().join(".tagweave/data"));
    std::fs::write(
        home.path().join(".tagweave/config.toml"),
        "[editor]\nsort_on_commit = true\n",
    )
    .unwrap();
    let prompt = home.path().join("prompt.txt");
    std::fs::write(&prompt, "extra, masterpiece, smile").unwrap();

    let output = tagweave(
        home.path(),
        &["edit", "--file", prompt.to_str().unwrap(), "--dry-run"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let out = stdout(&output);
    assert!(out.lines().any(|line| line == "smile, masterpiece, extra"));
    let smile = out.find("   smile ×1.000").unwrap();
    let masterpiece = out.find("   masterpiece ×1.000").unwrap();
    assert!(smile < masterpiece);
    assert_eq!(
        std::fs::read_to_string(&prompt).unwrap(),
        "extra, masterpiece, smile"
    );
}

#[test]
fn e2e_cli_catalog_tags_with_search() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data");
    write_catalog(&data);

    let output = tagweave(
        home.path(),
        &[
            "--data-dir",
            data.to_str().unwrap(),
            "catalog",
            "tags",
            "quality.yaml",
            "--search",
            "BEST",
        ],
    );
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Best quality"));
    assert!(!out.contains("Masterpiece"));
}

#[test]
fn e2e_cli_catalog_rejects_escaping_path() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data");
    write_catalog(&data);

    let output = tagweave(
        home.path(),
        &["--data-dir", data.to_str().unwrap(), "catalog", "tags", "../secret.yaml"],
    );
    assert!(!output.status.success());
}

#[test]
fn e2e_cli_catalog_tree_uses_default_data_dir() {
    let home = tempfile::tempdir().unwrap();
    write_catalog(&home.path().join(".tagweave/data"));

    let output = tagweave(home.path(), &["catalog", "tree", "--json"]);
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(tree["people"]["type"], "directory");
    assert_eq!(tree["quality.yaml"]["path"], "quality.yaml");
    assert!(tree.get("empty").is_none());
    assert!(tree.get("notes.txt").is_none());
}

#[test]
fn e2e_cli_config_rejects_bad_precision() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".tagweave");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[editor]\nlabel_precision = 99\n",
    )
    .unwrap();

    let output = tagweave(home.path(), &["config", "validate"]);
    assert!(!output.status.success());
}
