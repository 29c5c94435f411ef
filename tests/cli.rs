use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tokio::runtime::Runtime;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn penguinui(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("penguinui").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn install(dir: &Path, name: &str, json: &str) {
    let packages = dir.join("penguinui");
    fs::create_dir_all(&packages).unwrap();
    fs::write(packages.join(format!("{name}.json")), json).unwrap();
}

/// Starts a mock server answering every GET with `status` and `body`.
fn mock_descriptor(rt: &Runtime, status: u16, body: &str) -> MockServer {
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server),
    );
    server
}

#[test]
fn build_prints_expanded_css_to_stdout() {
    let tmp = tempfile::tempdir().unwrap();
    install(
        tmp.path(),
        "example",
        r#"{"name": "example", "styles": {"opacity": "0.5"}}"#,
    );
    fs::write(
        tmp.path().join("app.css"),
        "@package example as fade;\n.card { @use fade; }",
    )
    .unwrap();

    penguinui(tmp.path())
        .args(["build", "app.css"])
        .assert()
        .success()
        .stdout(".card {\n    opacity: 0.5;\n}\n");
}

#[test]
fn build_reads_packages_from_custom_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let vendor = tmp.path().join("vendor");
    fs::create_dir_all(&vendor).unwrap();
    fs::write(
        vendor.join("pad.json"),
        r#"{"name": "pad", "styles": {"padding": "2px"}}"#,
    )
    .unwrap();
    fs::write(tmp.path().join("app.css"), ".x { @use pad; }").unwrap();

    penguinui(tmp.path())
        .args(["b", "app.css", "--packages", "vendor", "--out", "dist/app.css"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("dist/app.css")).unwrap(),
        ".x {\n    padding: 2px;\n}\n"
    );
}

#[test]
fn build_reports_unknown_packages_without_failing() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("app.css"), ".g { @use ghost; }").unwrap();

    penguinui(tmp.path())
        .args(["build", "app.css"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/* penguinui: unknown package 'ghost' in @use */",
        ))
        .stderr(predicate::str::contains("Unknown package in @use: 'ghost'."));
}

#[test]
fn build_fails_on_missing_input() {
    let tmp = tempfile::tempdir().unwrap();

    penguinui(tmp.path())
        .args(["build", "missing.css"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to process stylesheet"));
}

#[test]
fn list_without_directory_warns() {
    let tmp = tempfile::tempdir().unwrap();

    penguinui(tmp.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "No penguinui directory (nothing installed)",
        ));
}

#[test]
fn list_shows_installed_packages() {
    let tmp = tempfile::tempdir().unwrap();
    install(tmp.path(), "button", r#"{"name": "button", "styles": {}}"#);

    penguinui(tmp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("button").and(predicate::str::contains("kb")));
}

#[test]
fn piped_list_output_is_uncolored() {
    let tmp = tempfile::tempdir().unwrap();
    install(tmp.path(), "button", r#"{"name": "button", "styles": {}}"#);

    penguinui(tmp.path())
        .env_remove("FORCE_COLOR")
        .arg("list")
        .assert()
        .success()
        .stdout("button\t0.0kb\n")
        .stderr(predicate::str::contains("\x1b").not());
}

#[test]
fn remove_refuses_paths_outside_the_packages_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let project = tmp.path().join("proj");
    fs::create_dir_all(project.join("penguinui")).unwrap();
    fs::write(tmp.path().join("x.json"), "{}").unwrap();

    penguinui(&project)
        .args(["rm", "../x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid package name '../x'"));

    assert!(tmp.path().join("x.json").exists());
}

#[test]
fn remove_deletes_package_and_rejects_unknown_names() {
    let tmp = tempfile::tempdir().unwrap();
    install(tmp.path(), "button", r#"{"name": "button", "styles": {}}"#);

    penguinui(tmp.path())
        .args(["rm", "button"])
        .assert()
        .success();
    assert!(!tmp.path().join("penguinui/button.json").exists());

    penguinui(tmp.path())
        .args(["remove", "button"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package 'button' not found"));
}

#[test]
fn generate_writes_descriptors_per_class() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("styles")).unwrap();
    fs::write(
        tmp.path().join("styles/ui.css"),
        ".btn { padding: 4px; }\n.card { border: 0; }",
    )
    .unwrap();

    penguinui(tmp.path())
        .args(["generate", "styles"])
        .assert()
        .success();

    assert!(tmp.path().join("multiout/btn.json").is_file());
    assert!(tmp.path().join("multiout/card.json").is_file());
}

#[test]
fn generate_without_css_fails() {
    let tmp = tempfile::tempdir().unwrap();

    penguinui(tmp.path())
        .args(["gen", ".", "--out", "out"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No CSS files found."));
}

#[test]
fn generate_without_class_rules_exits_with_code_3() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("plain.css"), "p { color: red; }").unwrap();

    penguinui(tmp.path())
        .args(["generate", "plain.css"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "No class rules with declarations found in any CSS file.",
        ));

    assert!(!tmp.path().join("multiout").exists());
}

#[test]
fn add_saves_downloaded_descriptor() {
    let tmp = tempfile::tempdir().unwrap();
    let rt = Runtime::new().unwrap();
    let server = mock_descriptor(
        &rt,
        200,
        r#"{"name": "badge", "styles": {"display": "inline"}}"#,
    );
    let url = format!("{}/badge.json", server.uri());

    penguinui(tmp.path())
        .env("NO_PROXY", "127.0.0.1")
        .args(["add", &url])
        .assert()
        .success();

    let saved = fs::read_to_string(tmp.path().join("penguinui/badge.json")).unwrap();
    assert!(saved.contains("\"display\": \"inline\""));
}

#[test]
fn add_rejects_http_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let rt = Runtime::new().unwrap();
    let server = mock_descriptor(&rt, 404, "{}");
    let url = format!("{}/badge.json", server.uri());

    penguinui(tmp.path())
        .env("NO_PROXY", "127.0.0.1")
        .args(["add", &url])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 404"));

    assert!(!tmp.path().join("penguinui").exists());
}

#[test]
fn help_lists_commands() {
    let tmp = tempfile::tempdir().unwrap();

    penguinui(tmp.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate").and(predicate::str::contains("remove")));
}
