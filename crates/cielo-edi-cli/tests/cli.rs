use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Blank line of `width` columns with `fields` written at 1-indexed columns.
fn line(tag: char, width: usize, fields: &[(usize, &str)]) -> String {
    let mut chars = vec![' '; width];
    chars[0] = tag;
    for (start, value) in fields {
        for (i, c) in value.chars().enumerate() {
            chars[start - 1 + i] = c;
        }
    }
    chars.into_iter().collect()
}

fn extract() -> String {
    let header = line(
        '0',
        250,
        &[
            (2, "1234567890"),
            (12, "20241218"),
            (20, "20241201"),
            (28, "20241231"),
            (36, "0000001"),
            (43, "CIELO"),
            (48, "04"),
            (71, "015"),
        ],
    );
    let receivable = line(
        'D',
        400,
        &[
            (2, "1234567890"),
            (54, "001"),
            (72, "+"),
            (73, "0000000100000"),
            (86, "-"),
            (87, "0000000002500"),
            (100, "+"),
            (101, "0000000097500"),
        ],
    );
    let unknown = line('X', 40, &[]);
    [header, receivable, unknown].join("\n")
}

fn write_extract(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("CIELO04_20241218.txt");
    fs::write(&path, extract()).unwrap();
    path
}

/// The binary with its default config directory moved under `home`.
fn cielo_edi(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cielo-edi").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd
}

#[test]
fn info_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_extract(&dir);

    cielo_edi(dir.path())
        .arg("info")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("RESUMO DO PROCESSAMENTO"))
        .stdout(predicate::str::contains("Liquidação/Pagamento (04)"))
        .stdout(predicate::str::contains("URs Agenda: 1"))
        .stdout(predicate::str::contains("R$ 1000.00"))
        .stdout(predicate::str::contains("Linhas não processadas: 1"));
}

#[test]
fn process_writes_json_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_extract(&dir);

    cielo_edi(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(input.with_extension("json")).unwrap()).unwrap();
    assert_eq!(json["file_kind"], "04");
    assert_eq!(json["statistics"]["net_amount_total"], "975.00");
    assert_eq!(json["scheduled_receivables"][0]["brand_description"], "Visa");
    assert_eq!(json["unparsed_lines"][0]["record_type"], "X");
}

#[test]
fn process_writes_csv_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_extract(&dir);

    cielo_edi(dir.path())
        .args(["process", "-f", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("CIELO04_20241218_ur_agenda.csv"));

    let csv_dir = dir.path().join("CIELO04_20241218_csv");
    assert!(csv_dir.join("CIELO04_20241218_ur_agenda.csv").exists());
    assert!(!csv_dir.join("CIELO04_20241218_detalhes.csv").exists());
}

#[test]
fn stream_emits_one_json_object_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_extract(&dir);

    let output = cielo_edi(dir.path())
        .arg("stream")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let objects: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0]["record_type"], "0");
    assert_eq!(objects[1]["record_type"], "D");
    assert_eq!(objects[1]["gross_amount"], "1000.00");
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    cielo_edi(dir.path())
        .arg("process")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("edi.json");

    cielo_edi(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "export.json_indent", "0"])
        .assert()
        .success();

    cielo_edi(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "export.json_indent"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn process_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_extract(&dir);
    let config = dir.path().join("edi.json");
    fs::write(&config, r#"{"export": {"json_indent": 0}}"#).unwrap();

    cielo_edi(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(&input)
        .assert()
        .success();

    let json = fs::read_to_string(input.with_extension("json")).unwrap();
    assert!(!json.contains('\n'));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_extract(&dir);

    cielo_edi(dir.path())
        .arg("--config")
        .arg(dir.path().join("absent.json"))
        .arg("info")
        .arg(&input)
        .assert()
        .failure();
}
