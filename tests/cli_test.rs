use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn oktad(home: &Path, cwd: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("oktad");
    cmd.env("HOME", home).env_remove("RUST_LOG").current_dir(cwd);
    cmd
}

fn dirs() -> (TempDir, TempDir) {
    (tempfile::tempdir().unwrap(), tempfile::tempdir().unwrap())
}

#[test]
fn config_prints_values_from_cwd() {
    let (home, cwd) = dirs();
    fs::write(
        cwd.path().join(".okta"),
        "[okta]\nbaseUrl = https://acme.okta.com\nappUrl = https://acme.okta.com/home/aws/1\n",
    )
    .unwrap();

    oktad(home.path(), cwd.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"baseUrl\": \"https://acme.okta.com\""))
        .stdout(predicate::str::contains("\"appUrl\": \"https://acme.okta.com/home/aws/1\""));
}

#[test]
fn config_prefers_explicit_path() {
    let (home, cwd) = dirs();
    fs::write(cwd.path().join(".okta"), "[okta]\nbaseUrl = cwd\nappUrl = cwd\n").unwrap();
    let explicit = home.path().join("custom.ini");
    fs::write(&explicit, "[okta]\nbaseUrl = explicit\nappUrl = explicit\n").unwrap();

    oktad(home.path(), cwd.path())
        .args(["config", "--config"])
        .arg(&explicit)
        .assert()
        .success()
        .stdout(predicate::str::contains("explicit"))
        .stdout(predicate::str::contains("cwd").not());
}

#[test]
fn config_falls_back_to_home() {
    let (home, cwd) = dirs();
    fs::create_dir_all(home.path().join(".okta-aws")).unwrap();
    fs::write(
        home.path().join(".okta-aws").join("config"),
        "[okta]\nbaseUrl = home-base\nappUrl = home-app\n",
    )
    .unwrap();

    oktad(home.path(), cwd.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("home-base"));
}

#[test]
fn config_missing_everywhere_fails() {
    let (home, cwd) = dirs();

    oktad(home.path(), cwd.path())
        .args(["config", "--config", "does-not-exist.ini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad configuration file!"));
}

#[test]
fn config_missing_key_fails() {
    let (home, cwd) = dirs();
    fs::write(cwd.path().join(".okta"), "[okta]\nbaseUrl = https://acme\n").unwrap();

    oktad(home.path(), cwd.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("appUrl"));
}

#[test]
fn verbose_traces_resolution_steps() {
    let (home, cwd) = dirs();
    fs::write(cwd.path().join(".okta"), "[okta]\nbaseUrl = a\nappUrl = b\n").unwrap();

    oktad(home.path(), cwd.path())
        .args(["-v", "config"])
        .assert()
        .success()
        .stderr(predicate::str::contains("trying to load from CWD"));
}

#[test]
fn role_arn_prints_arn() {
    let (home, cwd) = dirs();
    fs::create_dir_all(home.path().join(".aws")).unwrap();
    fs::write(
        home.path().join(".aws").join("config"),
        "[profileA]\nrole_arn = arn:aws:iam::123:role/X\n",
    )
    .unwrap();

    oktad(home.path(), cwd.path())
        .args(["role-arn", "profileA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arn:aws:iam::123:role/X"));
}

#[test]
fn role_arn_missing_key_succeeds_with_notice() {
    let (home, cwd) = dirs();
    fs::create_dir_all(home.path().join(".aws")).unwrap();
    fs::write(home.path().join(".aws").join("config"), "[profileB]\nregion = eu-west-1\n").unwrap();

    oktad(home.path(), cwd.path())
        .args(["role-arn", "profileB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has no role_arn"));
}

#[test]
fn role_arn_unknown_profile_fails() {
    let (home, cwd) = dirs();
    fs::create_dir_all(home.path().join(".aws")).unwrap();
    fs::write(home.path().join(".aws").join("config"), "[profileA]\nrole_arn = x\n").unwrap();

    oktad(home.path(), cwd.path())
        .args(["role-arn", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("aws profile 'nope' not found"));
}

#[test]
fn role_arn_without_aws_config_fails() {
    let (home, cwd) = dirs();

    oktad(home.path(), cwd.path())
        .args(["role-arn", "profileA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed file"));
}
