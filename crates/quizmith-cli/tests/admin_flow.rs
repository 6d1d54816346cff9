//! End-to-end admin lifecycle: init, login, seed, export, import, reload.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizmith(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizmith").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

fn login(dir: &TempDir) {
    quizmith(dir)
        .arg("login")
        .arg("--username")
        .arg("admin")
        .arg("--password")
        .arg("@Dmin")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin"));
}

#[test]
fn admin_lifecycle() {
    let dir = TempDir::new().unwrap();

    quizmith(&dir).arg("init").assert().success();
    login(&dir);

    // Seed from the starter JSON config.
    quizmith(&dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 5 question(s)"));

    // Seeding again is a no-op: the store is populated.
    quizmith(&dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed skipped"));

    // The override store now supersedes the JSON config.
    quizmith(&dir)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 question(s) active"));

    // Export, wipe the data file, and import back.
    quizmith(&dir)
        .arg("export")
        .arg("--output")
        .arg("backup.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 question(s)"));

    let backup = std::fs::read_to_string(dir.path().join("backup.json")).unwrap();
    assert!(backup.contains("\"createdAt\""));

    quizmith(&dir)
        .arg("import")
        .arg("--input")
        .arg("backup.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 5 question(s)"));

    // A malformed payload is rejected and the store survives.
    std::fs::write(dir.path().join("garbage.json"), "not an array at all").unwrap();
    quizmith(&dir)
        .arg("import")
        .arg("--input")
        .arg("garbage.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("store left unchanged"));

    quizmith(&dir)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 question(s) active"));

    // Destructive reload needs --force, then replaces the store.
    quizmith(&dir)
        .arg("reload")
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced store with 5 question(s)"));

    // After logout the admin surface is closed again.
    quizmith(&dir).arg("logout").assert().success();
    quizmith(&dir)
        .arg("seed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authenticated"));
}

#[test]
fn store_survives_between_invocations() {
    let dir = TempDir::new().unwrap();

    quizmith(&dir).arg("init").assert().success();
    login(&dir);
    quizmith(&dir).arg("seed").assert().success();

    // Remove the JSON config: questions must now come from the store alone.
    std::fs::remove_file(dir.path().join("quiz-data.json")).unwrap();

    quizmith(&dir)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 question(s) active"))
        .stdout(predicate::str::contains("Work Environment"));
}
