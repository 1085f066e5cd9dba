//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("scribo")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_generate_file_input() {
    cmd()
        .args(["generate", "Honey Bees", "--input", &get_fixture_path("honeybees.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## **Introduction**"))
        .stdout(predicate::str::contains("## **Understanding Honey Bees**"))
        .stdout(predicate::str::contains("## **Conclusion**"));
}

#[test]
fn test_cli_generate_stdin_input() {
    let source = std::fs::read_to_string(get_fixture_path("short.txt")).unwrap();
    cmd()
        .args(["generate", "Tides", "--input", "-", "--min-words", "10", "--max-words", "100"])
        .write_stdin(source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tides are the rise and fall"));
}

#[test]
fn test_cli_generate_word_budget() {
    let output = cmd()
        .args([
            "generate",
            "Honey Bees",
            "-i",
            &get_fixture_path("honeybees.txt"),
            "--min-words",
            "200",
            "--max-words",
            "300",
            "-f",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["topic"], "Honey Bees");
    assert!(json["word_count"].as_u64().unwrap() < 400);
    assert!(json["seo"]["keywords"].is_array());
}

#[test]
fn test_cli_generate_text_format() {
    cmd()
        .args(["generate", "Tides", "-i", &get_fixture_path("short.txt"), "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Introduction\n------------"))
        .stdout(predicate::str::contains("##").not());
}

#[test]
fn test_cli_generate_frontmatter() {
    cmd()
        .args(["generate", "Tides", "-i", &get_fixture_path("short.txt"), "--frontmatter"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("+++"))
        .stdout(predicate::str::contains("topic = \"Tides\""));
}

#[test]
fn test_cli_generate_short_source_warns() {
    cmd()
        .args(["generate", "Tides", "-i", &get_fixture_path("short.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("shorter than 1000 words"));
}

#[test]
fn test_cli_generate_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("article.md");

    cmd()
        .args(["generate", "Tides", "-i", &get_fixture_path("short.txt")])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Output written to"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("## **Conclusion**"));
}

#[test]
fn test_cli_generate_invalid_budget() {
    cmd()
        .args([
            "generate",
            "Tides",
            "-i",
            &get_fixture_path("short.txt"),
            "--min-words",
            "500",
            "--max-words",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid word budget"));
}

#[test]
fn test_cli_generate_invalid_format() {
    cmd()
        .args(["generate", "Tides", "-i", &get_fixture_path("short.txt"), "-f", "html"])
        .assert()
        .failure();
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .args(["analyze", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_analyze() {
    cmd()
        .args(["analyze", &get_fixture_path("simple.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("-1.8"))
        .stdout(predicate::str::contains("Sentences:  2"));
}

#[test]
fn test_cli_analyze_json() {
    cmd()
        .args(["analyze", "-f", "json", &get_fixture_path("simple.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"syllables\": 10"));
}

#[test]
fn test_cli_seo() {
    cmd()
        .args(["seo", &get_fixture_path("short.txt"), "--title", "Tides"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:        Tides"))
        .stdout(predicate::str::contains("moon"));
}

#[test]
fn test_cli_social() {
    cmd()
        .args(["social", &get_fixture_path("short.txt"), "--topic", "ocean tides"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#OceanTides"));
}

#[test]
fn test_cli_social_json() {
    let output = cmd()
        .args(["social", "-", "--topic", "Tides", "-f", "json", "--max-chars", "60"])
        .write_stdin("Tides follow the moon. They rise twice a day.")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["hashtags"][0], "#Tides");
    assert!(json["caption"].as_str().unwrap().chars().count() <= 60);
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", "analyze", &get_fixture_path("simple.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Scribo"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scribo"));
}

#[test]
fn test_completions_offer_kebab_case_flags() {
    let generated = std::fs::read_to_string(concat!(env!("OUT_DIR"), "/completions/scribo.bash")).unwrap();
    let runtime = cmd().args(["completions", "bash"]).output().unwrap();
    let runtime = String::from_utf8(runtime.stdout).unwrap();

    for script in [&generated, &runtime] {
        for flag in ["--min-words", "--max-words", "--user-agent", "--max-chars"] {
            assert!(script.contains(flag), "missing {flag}");
        }
        for flag in ["--min_words", "--max_words", "--user_agent", "--max_chars"] {
            assert!(!script.contains(flag), "unexpected {flag}");
        }
    }
}

#[test]
fn test_cli_missing_subcommand() {
    cmd().assert().failure();
}
