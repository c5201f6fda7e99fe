//! Integration tests for the `ideforge` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config and environment.
fn ideforge(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("ideforge");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("IDEFORGE_GENERATE__POLICY")
        .env_remove("IDEFORGE_PROJECT__DEFAULT_SCRIPT");
    cmd
}

/// `<tmp>/burger` with one source and one header at the root.
fn burger() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("burger");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("burger.cpp"), "int main() { return 0; }\n").unwrap();
    fs::write(root.join("burger.h"), "#pragma once\n").unwrap();
    (tmp, root)
}

#[test]
fn help_lists_subcommands() {
    let tmp = TempDir::new().unwrap();
    ideforge(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    ideforge(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn scriptless_vs2010_names_project_after_directory() {
    let (tmp, root) = burger();

    ideforge(tmp.path())
        .args(["generate", "--vs2010", "-C"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("burgerv10win.sln"));

    assert!(root.join("burgerv10win.sln").is_file());
    let project = fs::read_to_string(root.join("burgerv10win.vcxproj")).unwrap();
    assert!(project.contains("burger.cpp"));
    assert!(project.contains("burger.h"));
    assert!(!root.join("burgerv10win.vcxproj.filters").exists());
}

#[test]
fn generation_is_deterministic() {
    let (tmp, root) = burger();

    let run = || {
        ideforge(tmp.path())
            .args(["generate", "--xcode4", "-C"])
            .arg(&root)
            .assert()
            .success();
    };

    run();
    let first = fs::read(root.join("burgerxc4osx.xcodeproj/project.pbxproj")).unwrap();
    run();
    let second = fs::read(root.join("burgerxc4osx.xcodeproj/project.pbxproj")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn default_script_drives_targets_in_order() {
    let (tmp, root) = burger();
    fs::write(
        root.join("projects.json"),
        r#"[{"projectname":"alpha","kind":"library"},"vs2008",{"platform":"macosx"},"xcode3"]"#,
    )
    .unwrap();

    ideforge(tmp.path())
        .args(["generate", "-C"])
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("alphavc9win.sln").is_file());
    assert!(root.join("alphavc9win.vcproj").is_file());
    let pbx = fs::read_to_string(root.join("alphaxc3osx.xcodeproj/project.pbxproj")).unwrap();
    assert!(pbx.contains("burger.cpp"));
    assert!(pbx.contains("libalphaxc3osx.a"));
}

#[test]
fn explicit_scripts_share_settings() {
    let (tmp, root) = burger();
    fs::write(root.join("base.json"), r#"[{"projectname":"shared"}]"#).unwrap();
    fs::write(root.join("targets.json"), r#"["vs2005"]"#).unwrap();

    ideforge(tmp.path())
        .args(["generate", "-f", "base.json", "-f", "targets.json", "-C"])
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("sharedvc8win.vcproj").is_file());
}

#[test]
fn unsupported_target_is_skipped_not_fatal() {
    let (tmp, root) = burger();

    ideforge(tmp.path())
        .args(["generate", "--codeblocks", "--vs2010", "-C"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("codeblocks: skipped"))
        .stdout(predicate::str::contains("1 generated, 1 skipped, 0 failed"));

    assert!(root.join("burgerv10win.sln").is_file());
}

#[test]
fn unrecognized_script_item_is_reported() {
    let (tmp, root) = burger();
    fs::write(root.join("projects.json"), r#"["eclipse", "vs2010"]"#).unwrap();

    ideforge(tmp.path())
        .args(["generate", "-C"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized script item 'eclipse'"));
}

#[test]
fn json_report() {
    let (tmp, root) = burger();

    let out = ideforge(tmp.path())
        .args(["--output-format", "json", "generate", "--vs2010", "-C"])
        .arg(&root)
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["generated"][0]["ide"], "vs2010");
    assert_eq!(report["generated"][0]["project"], "burger");
    assert!(report["failed"].as_array().unwrap().is_empty());
}

#[test]
fn config_file_changes_default_script() {
    let (tmp, root) = burger();
    fs::write(root.join("build.json"), r#"[{"projectname":"custom"},"vs2010"]"#).unwrap();
    let config = tmp.path().join("ideforge.toml");
    fs::write(&config, "[project]\ndefault_script = \"build.json\"\n").unwrap();

    ideforge(tmp.path())
        .arg("--config")
        .arg(&config)
        .args(["generate", "-C"])
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("customv10win.sln").is_file());
}

// ── inspect ───────────────────────────────────────────────────────────────────

#[test]
fn inspect_json_lists_files_and_mode() {
    let (tmp, root) = burger();

    let out = ideforge(tmp.path())
        .args(["inspect", "--format", "json", "--mode", "truncated", "-C"])
        .arg(&root)
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["mode"], "truncated-content-hash");
    let paths: Vec<&str> = value["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["burger.cpp", "burger.h"]);
    assert_eq!(value["files"][0]["identifier"].as_str().unwrap().len(), 24);
}

#[test]
fn inspect_writes_nothing() {
    let (tmp, root) = burger();

    ideforge(tmp.path())
        .args(["inspect", "-C"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project burger"))
        .stdout(predicate::str::contains("burger.cpp"));

    assert_eq!(fs::read_dir(&root).unwrap().count(), 2);
}

// ── list / config / init / completions ───────────────────────────────────────

#[test]
fn list_targets_shows_support() {
    let tmp = TempDir::new().unwrap();
    ideforge(tmp.path())
        .args(["list", "targets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vs2010"))
        .stdout(predicate::str::contains("not supported yet"));
}

#[test]
fn list_platforms() {
    let tmp = TempDir::new().unwrap();
    ideforge(tmp.path())
        .args(["list", "platforms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("macosx"))
        .stdout(predicate::str::contains("Win32"));
}

#[test]
fn config_get_reads_environment() {
    let tmp = TempDir::new().unwrap();
    ideforge(tmp.path())
        .args(["config", "get", "generate.policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("continue-on-error"));

    ideforge(tmp.path())
        .env("IDEFORGE_GENERATE__POLICY", "fail-fast")
        .args(["config", "get", "generate.policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fail-fast"));
}

#[test]
fn config_path_honours_flag() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("custom.toml");
    fs::write(&path, "").unwrap();

    ideforge(tmp.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn init_writes_once_without_force() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("conf").join("ideforge.toml");

    ideforge(tmp.path())
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("default_script"));

    ideforge(tmp.path())
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn completions_bash() {
    let tmp = TempDir::new().unwrap();
    ideforge(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ideforge"));
}
