#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn logcascade_cmd(dir: &Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("logcascade").unwrap();
	cmd.current_dir(dir)
		.env("LOGCASCADE_NO_USER_CONFIG", "1")
		.env_remove("RUST_LOG");
	cmd
}

fn write_config(dir: &Path, content: &str) {
	fs::write(dir.join(".logcascade.toml"), content).unwrap();
}

const PROJECT_CONFIG: &str = r#"
root = true

[templates]
start = "Begin {label}"
finish = "End {label}"
"function.start" = "Calling {label}({arguments})"
"finish.ERROR" = "Failed {label}"
"#;

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	logcascade_cmd(temp_dir.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("cascading start/finish log templates"));
}

#[test]
fn test_version_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	logcascade_cmd(temp_dir.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("logcascade"));
}

#[test]
fn test_no_args_shows_help() {
	let temp_dir = tempfile::tempdir().unwrap();
	logcascade_cmd(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// --init tests
// ============================================================================

#[test]
fn test_init_creates_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".logcascade.toml");

	logcascade_cmd(temp_dir.path())
		.arg("--init")
		.assert()
		.success()
		.stdout(predicate::str::contains("Created .logcascade.toml"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("root = true"));
	assert!(content.contains("[templates]"));
}

#[test]
fn test_init_fails_if_exists() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), "# existing");

	logcascade_cmd(temp_dir.path())
		.arg("--init")
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites_and_resolves() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), "# existing");

	logcascade_cmd(temp_dir.path())
		.args(["--init", "--force"])
		.assert()
		.success();

	logcascade_cmd(temp_dir.path())
		.args(["resolve", "context.start.INFO"])
		.assert()
		.success()
		.stdout("Start {label}\n");
}

// ============================================================================
// Resolution tests
// ============================================================================

#[test]
fn test_resolve_builtin_defaults() {
	let temp_dir = tempfile::tempdir().unwrap();

	logcascade_cmd(temp_dir.path())
		.args(["resolve", "function.finish.WARNING"])
		.assert()
		.success()
		.stdout("Finish {label}\n");
}

#[test]
fn test_resolve_uses_project_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), PROJECT_CONFIG);

	logcascade_cmd(temp_dir.path())
		.args(["resolve", "function.start.DEBUG"])
		.assert()
		.success()
		.stdout("Calling {label}({arguments})\n");

	logcascade_cmd(temp_dir.path())
		.args(["resolve", "context.finish.ERROR"])
		.assert()
		.success()
		.stdout("Failed {label}\n");
}

#[test]
fn test_resolve_from_nested_directory() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), PROJECT_CONFIG);
	let nested = temp_dir.path().join("src").join("deep");
	fs::create_dir_all(&nested).unwrap();

	logcascade_cmd(&nested)
		.args(["resolve", "context.start"])
		.assert()
		.success()
		.stdout("Begin {label}\n");
}

#[test]
fn test_resolve_unknown_key_fails() {
	let temp_dir = tempfile::tempdir().unwrap();

	logcascade_cmd(temp_dir.path())
		.args(["resolve", "thread.start"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("not a known key"))
		.stderr(predicate::str::contains("function.start.DEBUG"));
}

#[test]
fn test_explain_reports_source() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), PROJECT_CONFIG);

	logcascade_cmd(temp_dir.path())
		.args(["explain", "function.start.ERROR"])
		.assert()
		.success()
		.stdout(predicate::str::contains("from: function.start"))
		.stdout(predicate::str::contains(
			"via:  function.start.ERROR -> start.ERROR -> function.start",
		));
}

#[test]
fn test_explain_missing_key() {
	let temp_dir = tempfile::tempdir().unwrap();

	logcascade_cmd(temp_dir.path())
		.args(["explain", "thread.start"])
		.assert()
		.failure()
		.stdout(predicate::str::contains("has no template"));
}

#[test]
fn test_path_prints_cascade() {
	let temp_dir = tempfile::tempdir().unwrap();

	logcascade_cmd(temp_dir.path())
		.args(["path", "context.start.WARNING"])
		.assert()
		.success()
		.stdout("context.start.WARNING -> start.WARNING -> context.start -> start\n");
}

#[test]
fn test_render_substitutes_fields() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), PROJECT_CONFIG);

	logcascade_cmd(temp_dir.path())
		.args([
			"render",
			"function.start.INFO",
			"--label",
			"divide",
			"--arguments",
			"1, 0",
		])
		.assert()
		.success()
		.stdout("Calling divide(1, 0)\n");
}

#[test]
fn test_render_unknown_placeholder_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(
		temp_dir.path(),
		"root = true\n[templates]\nstart = \"Start {name}\"\nfinish = \"F\"\n",
	);

	logcascade_cmd(temp_dir.path())
		.args(["render", "start", "--label", "x"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Unknown placeholder"));
}

#[test]
fn test_keys_lists_namespace() {
	let temp_dir = tempfile::tempdir().unwrap();

	let output = logcascade_cmd(temp_dir.path())
		.arg("keys")
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	let stdout = String::from_utf8(output).unwrap();

	assert_eq!(stdout.lines().count(), 36);
	assert!(stdout.lines().any(|line| line == "context.finish.CRITICAL"));
}

// ============================================================================
// config subcommand tests
// ============================================================================

#[test]
fn test_config_validate_no_config() {
	let temp_dir = tempfile::tempdir().unwrap();

	logcascade_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success()
		.stdout(predicate::str::contains("No configuration files found"));
}

#[test]
fn test_config_validate_valid_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), PROJECT_CONFIG);

	logcascade_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success()
		.stdout(predicate::str::contains("valid"))
		.stdout(predicate::str::contains("4 templates"));
}

#[test]
fn test_config_validate_invalid_toml() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), "invalid toml [[[");

	logcascade_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_validate_missing_root_template() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), "root = true\n[templates]\nstart = \"S\"\n");

	logcascade_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("\"finish\" must be in configuration"));
}

#[test]
fn test_config_validate_warns_on_unrecognized_key() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(
		temp_dir.path(),
		"root = true\n[templates]\nstart = \"S\"\nfinish = \"F\"\n\"BAD-KEY\" = \"x\"\n",
	);

	logcascade_cmd(temp_dir.path())
		.args(["config", "validate"])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"warning: unrecognized template key: BAD-KEY",
		))
		.stderr(predicate::str::contains("BAD-KEY"));
}

#[test]
fn test_config_show_displays_sources() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path(), PROJECT_CONFIG);

	logcascade_cmd(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("function.start = \"Calling {label}({arguments})\""))
		.stdout(predicate::str::contains(".logcascade.toml"));
}

#[test]
fn test_config_show_builtin_defaults() {
	let temp_dir = tempfile::tempdir().unwrap();

	logcascade_cmd(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Using built-in templates"))
		.stdout(predicate::str::contains("start = \"Start {label}\"  # built-in"));
}
