/// End-to-end tests for the CLI against a file-based Maven 2 repository
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use test_utilities::fixtures::*;

/// Command isolated from the default repository and from any config file
fn fetcher(fixture: &RepositoryFixture, workdir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("maven-fetcher");
    cmd.current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .args([
            "--no-default-repository",
            "-r",
            fixture.repository_value("fixture").as_str(),
            "-l",
            fixture.local_dir().to_str().unwrap(),
        ]);
    cmd
}

fn published_fixture() -> RepositoryFixture {
    let fixture = RepositoryFixture::new();
    fixture
        .publish("org.example:app:1.0", &[compile("org.example:core:1.0")])
        .publish("org.example:core:1.0", &[]);
    fixture
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("maven-fetcher").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("maven-fetcher")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("maven-fetcher")
            .args(["g:a:1.0", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: No coordinates given
    #[test]
    fn test_exit_code_missing_coordinates() {
        cargo_bin_cmd!("maven-fetcher").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("maven-fetcher")
            .args(["g:a:1.0", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - malformed coordinates
    #[test]
    fn test_exit_code_malformed_coordinates() {
        let fixture = RepositoryFixture::new();
        let workdir = TempDir::new().unwrap();

        fetcher(&fixture, &workdir)
            .arg("junit")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Malformed coordinates 'junit'"));
    }

    /// Exit code 3: Application error - invalid repository value
    #[test]
    fn test_exit_code_invalid_repository() {
        let workdir = TempDir::new().unwrap();

        cargo_bin_cmd!("maven-fetcher")
            .current_dir(workdir.path())
            .args(["g:a:1.0", "-r", "mock:file://repository"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Invalid value for property 'remoteRepositories' : Invalid repository value 'mock:file://repository'",
            ));
    }

    /// Exit code 1: fetch completed with errors
    #[test]
    fn test_exit_code_fetch_errors() {
        let fixture = RepositoryFixture::new();
        let workdir = TempDir::new().unwrap();

        fetcher(&fixture, &workdir)
            .arg("a:b:1.0")
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Could not fetch artifact b-1.0.jar"));
    }
}

#[test]
fn test_e2e_text_tree() {
    let fixture = published_fixture();
    let workdir = TempDir::new().unwrap();

    let output = fetcher(&fixture, &workdir)
        .arg("org.example:app:1.0")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("org.example:app:1.0  ("));
    assert!(stdout.contains("+- org.example:core:1.0  ("));
    assert!(!stdout.contains("Errors:"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using the following repositories:"));
    assert!(stderr.contains("- fixture ["));
    assert!(fixture.local_jar("org.example:core:1.0").is_file());
}

#[test]
fn test_e2e_json_output_file() {
    let fixture = published_fixture();
    let workdir = TempDir::new().unwrap();
    let report = workdir.path().join("report.json");

    fetcher(&fixture, &workdir)
        .args(["org.example:app:1.0", "-f", "json", "-o", report.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Report written to"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(report).unwrap()).unwrap();
    assert_eq!(json["tool"]["name"], "maven-fetcher");
    assert_eq!(json["hasErrors"], false);
    assert_eq!(json["artifacts"].as_array().unwrap().len(), 2);
    assert_eq!(json["roots"][0]["coordinates"], "org.example:app:1.0");
}

#[test]
fn test_e2e_scope_and_exclusion_options() {
    let fixture = RepositoryFixture::new();
    fixture
        .publish(
            "g:app:1.0",
            &[compile("g:a:1.0"), scoped("g:rt:1.0", "runtime"), compile("g:skip:1.0")],
        )
        .publish("g:a:1.0", &[])
        .publish("g:rt:1.0", &[])
        .publish("g:skip:1.0", &[]);
    let workdir = TempDir::new().unwrap();

    let output = fetcher(&fixture, &workdir)
        .args(["g:app:1.0", "-s", "compile", "-s", "runtime", "-e", "g:skip"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("+- g:a:1.0"));
    assert!(stdout.contains("+- g:rt:1.0"));
    assert!(!stdout.contains("g:skip:1.0"));
}

#[test]
fn test_e2e_latest_version() {
    let fixture = RepositoryFixture::new();
    fixture
        .publish_versions("g:lib", &["1.0", "2.0"])
        .publish("g:lib:2.0", &[]);
    let workdir = TempDir::new().unwrap();

    fetcher(&fixture, &workdir)
        .arg("g:lib")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("g:lib:2.0  ("));
}

#[test]
fn test_e2e_repository_from_property() {
    let fixture = published_fixture();
    let workdir = TempDir::new().unwrap();

    cargo_bin_cmd!("maven-fetcher")
        .current_dir(workdir.path())
        .args([
            "org.example:core:1.0",
            "-D",
            "useDefaultRemoteRepository=false",
            "-D",
            format!("remoteRepositories={}", fixture.repository_value("fixture")).as_str(),
            "-D",
            format!("localRepository={}", fixture.local_dir().display()).as_str(),
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("org.example:core:1.0"));
}
