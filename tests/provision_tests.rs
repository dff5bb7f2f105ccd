//! End-to-end provisioning through the nativedeps binary

mod common;

use common::{TestProject, json_path, registrations};
use predicates::prelude::*;

const MARIADB_CONFIG: &str = "\
module_dir: Plugins/MySQL/Source/MySQL
packages:
  - name: MariaDB
    plugin_dir: plugin
";

fn mariadb_windows_project() -> TestProject {
    let project = TestProject::new();
    project.write_config(MARIADB_CONFIG);
    project.write_file("Plugins/MySQL/ThirdParty/MariaDB/libraries/Windows/a.dll", "a");
    project.write_file("Plugins/MySQL/ThirdParty/MariaDB/libraries/Windows/b.dll", "b");
    project.write_file("Plugins/MySQL/ThirdParty/MariaDB/libraries/Windows/c.lib", "c");
    project.write_file(
        "Plugins/MySQL/ThirdParty/MariaDB/libraries/Windows/plugin/p.lib",
        "p",
    );
    project
}

#[test]
fn test_provision_windows() {
    let project = mariadb_windows_project();
    let root = project.root();
    let libraries = root.join("Plugins/MySQL/ThirdParty/MariaDB/libraries/Windows");
    let output = root.join("Binaries/Win64");

    let assert = project.provision_cmd("Win64").assert().success();
    let json = registrations(&assert.get_output().stdout);

    assert_eq!(
        json["link_libraries"],
        serde_json::json!([
            json_path(&libraries.join("c.lib")),
            json_path(&libraries.join("plugin").join("p.lib")),
        ])
    );
    let staged = serde_json::json!([
        json_path(&output.join("a.dll")),
        json_path(&output.join("b.dll")),
    ]);
    assert_eq!(json["runtime_dependencies"], staged);
    assert_eq!(json["delay_load"], staged);
    assert_eq!(
        json["library_search_paths"],
        serde_json::json!([json_path(&libraries)])
    );

    assert_eq!(project.list_dir("Binaries/Win64"), vec!["a.dll", "b.dll"]);
    assert_eq!(project.read_file("Binaries/Win64/a.dll"), "a");
}

#[test]
fn test_provision_linux_arm64_scenario() {
    let project = TestProject::new();
    project.write_config(MARIADB_CONFIG);
    project.write_file(
        "Plugins/MySQL/ThirdParty/MariaDB/libraries/Linux/arm64/libdrv.so",
        "drv",
    );
    project.write_file(
        "Plugins/MySQL/ThirdParty/MariaDB/libraries/Linux/arm64/plugin/libext.a",
        "ext",
    );
    let root = project.root();
    let libraries = root.join("Plugins/MySQL/ThirdParty/MariaDB/libraries/Linux/arm64");
    let staged = json_path(&root.join("Binaries/LinuxArm64/libdrv.so"));

    let assert = project.provision_cmd("LinuxArm64").assert().success();
    let json = registrations(&assert.get_output().stdout);

    assert_eq!(
        json["link_libraries"],
        serde_json::json!([
            json_path(&libraries.join("libdrv.so")),
            json_path(&libraries.join("plugin").join("libext.a")),
        ])
    );
    assert_eq!(json["runtime_dependencies"], serde_json::json!([staged]));
    assert_eq!(json["delay_load"], serde_json::json!([staged]));
    assert_eq!(project.list_dir("Binaries/LinuxArm64"), vec!["libdrv.so"]);
}

#[test]
fn test_provision_unsupported_platform_is_a_no_op() {
    let project = mariadb_windows_project();

    let assert = project
        .provision_cmd("Mac")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped"));
    let json = registrations(&assert.get_output().stdout);

    assert_eq!(json["link_libraries"], serde_json::json!([]));
    assert_eq!(json["runtime_dependencies"], serde_json::json!([]));
    assert!(!project.file_exists("Binaries"));
}

#[test]
fn test_provision_missing_package_succeeds_empty() {
    let project = TestProject::new();
    project.write_config(MARIADB_CONFIG);

    let assert = project.provision_cmd("Linux").assert().success();
    let json = registrations(&assert.get_output().stdout);

    assert_eq!(json["link_libraries"], serde_json::json!([]));
    assert_eq!(json["delay_load"], serde_json::json!([]));
    assert!(!project.file_exists("Binaries"));
}

#[test]
fn test_provision_rerun_keeps_staged_files() {
    let project = mariadb_windows_project();
    project.provision_cmd("Win64").assert().success();

    project.write_file(
        "Plugins/MySQL/ThirdParty/MariaDB/libraries/Windows/a.dll",
        "rebuilt",
    );
    project
        .provision_cmd("Win64")
        .assert()
        .success()
        .stderr(predicate::str::contains("0 staged, 2 already present"));

    assert_eq!(project.read_file("Binaries/Win64/a.dll"), "a");
}

#[test]
fn test_provision_dry_run_writes_nothing() {
    let project = mariadb_windows_project();

    let assert = project
        .provision_cmd("Win64")
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run"))
        .stderr(predicate::str::contains("2 would be staged"))
        .stderr(predicate::str::contains("already present").not());
    let json = registrations(&assert.get_output().stdout);

    assert_eq!(json["runtime_dependencies"].as_array().map(Vec::len), Some(2));
    assert!(!project.file_exists("Binaries"));
}

#[test]
fn test_provision_writes_output_file() {
    let project = mariadb_windows_project();

    project
        .provision_cmd("Win64")
        .args(["--output", "build/native.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: serde_json::Value =
        serde_json::from_str(&project.read_file("build/native.json")).unwrap();
    assert_eq!(json["delay_load"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_provision_recursive_package_and_runtime_files() {
    let project = TestProject::new();
    project.write_config(
        "\
packages:
  - name: PostgreSQL
    path: Plugins/PostgreSQL/ThirdParty
    search: recursive
runtime_dependencies:
  - $(ProjectDir)/Content/Database/TestDB.db
",
    );
    project.write_file(
        "Plugins/PostgreSQL/ThirdParty/libraries/Windows/bin/libpq.dll",
        "",
    );
    project.write_file(
        "Plugins/PostgreSQL/ThirdParty/libraries/Windows/lib/libpq.lib",
        "",
    );
    let root = project.root();

    let assert = project.provision_cmd("Win64").assert().success();
    let json = registrations(&assert.get_output().stdout);

    assert_eq!(
        json["runtime_dependencies"],
        serde_json::json!([
            json_path(&root.join("Binaries/Win64/libpq.dll")),
            json_path(&root.join("Content/Database/TestDB.db")),
        ])
    );
    assert_eq!(
        json["delay_load"],
        serde_json::json!([json_path(&root.join("Binaries/Win64/libpq.dll"))])
    );
    assert_eq!(project.list_dir("Binaries/Win64"), vec!["libpq.dll"]);
}

#[test]
fn test_provision_platform_from_environment() {
    let project = mariadb_windows_project();

    project
        .cmd()
        .arg("provision")
        .env("NATIVEDEPS_PLATFORM", "Win64")
        .assert()
        .success();

    assert_eq!(project.list_dir("Binaries/Win64"), vec!["a.dll", "b.dll"]);
}

#[test]
fn test_provision_missing_config_fails() {
    let project = TestProject::new();

    project
        .provision_cmd("Win64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_provision_invalid_config_fails() {
    let project = TestProject::new();
    project.write_config("packages:\n  - name: A\n  - name: A\n");

    project
        .provision_cmd("Win64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate package 'A'"));
}

#[cfg(unix)]
#[test]
fn test_provision_staging_failure_aborts() {
    let project = mariadb_windows_project();
    project.write_file("Binaries", "a file where the directory should be");

    project
        .provision_cmd("Win64")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create output directory"));
}
