//! Integration tests for restamp

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::time::{Duration, UNIX_EPOCH};
    use tempfile::TempDir;

    fn restamp() -> Command {
        let mut cmd = cargo_bin_cmd!("restamp");
        for var in [
            "RESTAMP_DIR",
            "RESTAMP_TOUCH_TIME",
            "RESTAMP_STORE_FILE",
            "RESTAMP_CACHE_INCLUDE_FILE",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    #[test]
    fn help_displays() {
        restamp()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Recursive Timestamp Rewriter"));
    }

    #[test]
    fn version_displays() {
        restamp()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("restamp"));
    }

    #[test]
    fn missing_root_argument_fails() {
        restamp().assert().failure();
    }

    #[test]
    fn nonexistent_root_fails() {
        let dir = TempDir::new().unwrap();
        restamp()
            .arg(dir.path().join("missing"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Path not found"));
    }

    #[test]
    fn file_as_root_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        restamp()
            .arg(&file)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not a directory"));
    }

    #[test]
    fn explicit_timestamp_is_applied_to_every_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();

        restamp()
            .arg(dir.path())
            .args(["--touch-time", "2023-05-01T12:30:00Z"])
            .assert()
            .success()
            .stdout(predicate::str::contains("entries touched"));

        let expected = UNIX_EPOCH + Duration::from_secs(1682944200);
        for name in ["a.txt", "b.txt"] {
            let mtime = fs::metadata(dir.path().join(name))
                .unwrap()
                .modified()
                .unwrap();
            assert_eq!(mtime, expected, "wrong mtime for {}", name);
        }
    }

    #[test]
    fn unparsable_timestamp_fails_before_touching() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        let before = fs::metadata(dir.path().join("a.txt"))
            .unwrap()
            .modified()
            .unwrap();

        restamp()
            .arg(dir.path())
            .args(["--touch-time", "not-a-time"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not-a-time"));

        let after = fs::metadata(dir.path().join("a.txt"))
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(before, after, "file was modified despite fatal parse error");
    }

    #[test]
    fn store_file_is_created_and_reused() {
        let state = TempDir::new().unwrap();
        let store = state.path().join(".touch_time");
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        restamp()
            .arg(dir.path())
            .arg("--store-file")
            .arg(&store)
            .assert()
            .success();

        let stored = fs::read_to_string(&store).unwrap();
        let first_mtime = fs::metadata(dir.path().join("a.txt"))
            .unwrap()
            .modified()
            .unwrap();

        restamp()
            .arg(dir.path())
            .arg("--store-file")
            .arg(&store)
            .assert()
            .success()
            .stdout(predicate::str::contains("stored value"));

        assert_eq!(fs::read_to_string(&store).unwrap(), stored);
        let second_mtime = fs::metadata(dir.path().join("a.txt"))
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(first_mtime, second_mtime);
    }

    #[test]
    fn fresh_store_registers_in_cache_include_file() {
        let state = TempDir::new().unwrap();
        let store = state.path().join(".touch_time");
        let include = state.path().join("cache_includes");
        let dir = TempDir::new().unwrap();

        restamp()
            .arg(dir.path())
            .arg("--store-file")
            .arg(&store)
            .arg("--cache-include-file")
            .arg(&include)
            .assert()
            .success();

        let content = fs::read_to_string(&include).unwrap();
        assert!(content.contains(&store.display().to_string()));
    }

    #[test]
    fn environment_variables_configure_the_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        restamp()
            .env("RESTAMP_DIR", dir.path())
            .env("RESTAMP_TOUCH_TIME", "2023-05-01T12:30:00Z")
            .assert()
            .success();

        let expected = UNIX_EPOCH + Duration::from_secs(1682944200);
        let mtime = fs::metadata(dir.path().join("a.txt"))
            .unwrap()
            .modified()
            .unwrap();
        assert_eq!(mtime, expected);
    }
}
