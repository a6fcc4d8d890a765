//! End-to-end tests for the spanglish binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn spanglish() -> Command {
    let mut cmd = Command::cargo_bin("spanglish").unwrap();
    cmd.env_remove("SPANGLISH_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn classifies_spanish_argument() {
    spanglish()
        .arg("La programación es una habilidad muy importante en el mundo tecnológico actual.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Idioma: 🇪🇸 Español"))
        .stdout(predicate::str::contains("Confianza: 81%"));
}

#[test]
fn joins_multiple_arguments() {
    spanglish()
        .args(["Hello,", "my", "name", "is", "Peter", "and", "I", "want", "to", "travel"])
        .args(["to", "Europe", "to", "learn", "about", "different", "cultures."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Idioma: 🇺🇸 Inglés"));
}

#[test]
fn mixed_text_shows_distribution() {
    spanglish()
        .arg("Hi amigo, ¿how are you doing today? I hope todo está bien.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mixto/Spanglish"))
        .stdout(predicate::str::contains("Español: 49%"))
        .stdout(predicate::str::contains("Inglés: 51%"));
}

#[test]
fn short_text_reports_reason() {
    spanglish()
        .arg("Hola")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indeterminado"))
        .stdout(predicate::str::contains("Razón: text too short for analysis"));
}

#[test]
fn classifies_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("es.txt");
    fs::write(
        &path,
        "Los niños están jugando en el jardín con sus amigos.\nMañana será otro día.\n",
    )
    .unwrap();

    spanglish()
        .arg("-f")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Idioma: 🇪🇸 Español"));
}

#[test]
fn missing_file_fails_without_a_result() {
    spanglish()
        .args(["--file", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read `/nonexistent/input.txt`"))
        .stdout(predicate::str::contains("Resultado").not());
}

#[test]
fn invalid_utf8_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"El ni\xf1o est\xe1 en la casa con su madre.").unwrap();

    spanglish()
        .arg("-f")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn json_output() {
    let output = spanglish()
        .args(["--format", "json", "I am going to the store to buy some bread."])
        .output()
        .unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["language"], "english");
    assert_eq!(v["details"]["stop_words"]["english_count"], 4);
}

#[test]
fn interactive_session_until_salir() {
    spanglish()
        .write_stdin("Hola\nThe children are playing in the garden with their friends.\n  Salir \nel gato y el perro\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modo Interactivo"))
        .stdout(predicate::str::contains("Texto > "))
        .stdout(predicate::str::contains("Idioma: Indeterminado"))
        .stdout(predicate::str::contains("Idioma: 🇺🇸 Inglés"))
        .stdout(predicate::str::contains("Idioma: 🇪🇸 Español").not());
}

#[test]
fn interactive_session_ends_at_eof() {
    spanglish()
        .write_stdin("el gato y el perro están en la casa\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Idioma: 🇪🇸 Español"));
}

#[test]
fn config_file_raises_threshold() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("strict.toml");
    fs::write(&config, "threshold = 85.0\n").unwrap();

    spanglish()
        .arg("--config")
        .arg(&config)
        .arg("La programación es una habilidad muy importante en el mundo tecnológico actual.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mixto/Spanglish"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "threshold = 20.0\n").unwrap();

    spanglish()
        .arg("-c")
        .arg(&config)
        .arg("hello there my friend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn help_lists_modes() {
    spanglish()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("salir"));
}
