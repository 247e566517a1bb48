/// End-to-end tests for the CLI
use std::io::Write;

fn graph_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

mod exit_code_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;

    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("deptrace").arg("--help").assert().code(0);
    }

    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("deptrace").arg("--version").assert().code(0);
    }

    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("deptrace")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/cycle.txt", "-p", "a"])
            .args(["--format", "svg"])
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_missing_source() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "/nonexistent/deptrace.txt", "-p", "a"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Source unavailable"));
    }

    #[test]
    fn test_exit_code_negative_depth() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/cycle.txt", "-p", "a", "-d", "-1"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn test_exit_code_empty_package() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/cycle.txt", "-p", ""])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}

mod analyze_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;

    #[test]
    fn test_tree_output_with_cycle_warning() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/cycle.txt", "-p", "a", "-d", "5"])
            .assert()
            .success()
            .stdout("a\n└── b\n    └── c\n")
            .stderr(predicate::str::contains("cycle detected: a -> b -> c -> a"));
    }

    #[test]
    fn test_edge_output() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/cycle.txt", "-p", "a"])
            .args(["--format", "edges"])
            .assert()
            .success()
            .stdout("a -> b\nb -> c\n");
    }

    #[test]
    fn test_filter_and_depth() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/webapp.txt", "-p", "my-app"])
            .args(["-d", "1", "-f", "jest", "--format", "edges"])
            .assert()
            .success()
            .stdout("my-app -> react\nmy-app -> react-dom\nmy-app -> lodash\n");
    }

    #[test]
    fn test_tree_and_edges_agree_on_cross_edge() {
        let file = graph_file("a: b c\nb: c\n");

        cargo_bin_cmd!("deptrace")
            .arg("analyze")
            .arg("-i")
            .arg(file.path())
            .args(["-p", "a"])
            .assert()
            .success()
            .stdout("a\n├── b\n│   └── c\n└── c\n");

        cargo_bin_cmd!("deptrace")
            .arg("analyze")
            .arg("-i")
            .arg(file.path())
            .args(["-p", "a", "--format", "edges"])
            .assert()
            .success()
            .stdout("a -> b\na -> c\nb -> c\n");
    }

    #[test]
    fn test_strict_depth_mode() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/webapp.txt", "-p", "my-app"])
            .args(["-d", "1", "--depth-mode", "strict"])
            .assert()
            .success()
            .stdout("my-app\n");
    }

    #[test]
    fn test_root_not_found_is_not_fatal() {
        cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/webapp.txt", "-p", "vue"])
            .args(["--format", "edges"])
            .assert()
            .success()
            .stdout("# no dependency edges\n")
            .stderr(predicate::str::contains("not found"));
    }

    #[test]
    fn test_json_output() {
        let output = cargo_bin_cmd!("deptrace")
            .args(["analyze", "-i", "tests/fixtures/webapp.txt", "-p", "react"])
            .args(["--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["root"], "react");
        assert_eq!(parsed["summary"]["visited"], 3);
        assert_eq!(parsed["nodes"][2]["name"], "js-tokens");
        assert_eq!(parsed["nodes"][2]["depth"], 2);
    }

    #[test]
    fn test_output_file() {
        let file = graph_file("a: b c\n");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("edges.txt");

        cargo_bin_cmd!("deptrace")
            .arg("analyze")
            .arg("-i")
            .arg(file.path())
            .args(["-p", "a", "--format", "edges", "-o"])
            .arg(&out)
            .assert()
            .success()
            .stdout("");

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "a -> b\na -> c\n");
    }
}

mod cycles_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;

    #[test]
    fn test_cycles_found() {
        cargo_bin_cmd!("deptrace")
            .args(["cycles", "-i", "tests/fixtures/cycle.txt"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 1 cycle(s)"))
            .stdout(predicate::str::contains("a, b, c"));
    }

    #[test]
    fn test_no_cycles() {
        let file = graph_file("a: b\nb: c\n");
        cargo_bin_cmd!("deptrace")
            .arg("cycles")
            .arg("-i")
            .arg(file.path())
            .assert()
            .success()
            .stdout("No cycles found in 2 packages\n");
    }
}
