mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::{Matcher, Server};
    use predicates::str::contains;

    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "wayscan";

    fn cdx_body(urls: &[&str]) -> String {
        let mut rows = vec![r#"["original"]"#.to_string()];
        rows.extend(urls.iter().map(|u| format!(r#"["{u}"]"#)));
        format!("[{}]", rows.join(","))
    }

    #[test]
    fn test_output__when_no_target_provided() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert().failure().stderr(contains(
            "error: the following required arguments were not provided:\n  <TARGET>",
        ));
        Ok(())
    }

    #[test]
    fn test_output__when_target_has_scheme() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.args(["https://example.com", "--no-config", "-q"]);

        cmd.assert().failure().stderr(contains("Invalid target"));
        Ok(())
    }

    #[test]
    fn test_output__when_cdx_returns_urls() -> TestResult {
        let mut server = Server::new();
        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("url".into(), "a-test.com/*".into()))
            .with_status(200)
            .with_body(cdx_body(&[
                "http://a-test.com/x?id=1",
                "http://a-test.com/y.json",
                "http://a-test.com/z?go=http://evil",
            ]))
            .create();
        let outdir = tempfile::tempdir()?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.args([
            "a-test.com",
            "--no-config",
            "--cdx-api",
            &server.url(),
            "-o",
            outdir.path().to_str().unwrap(),
        ]);

        cmd.assert()
            .success()
            .stdout(contains("Collected 3 unique URLs"))
            .stdout(contains("Done. All category files produced"));

        let json = std::fs::read_to_string(outdir.path().join("a-test.com_json.txt"))?;
        assert_eq!(json, "http://a-test.com/y.json\n");
        let xss = std::fs::read_to_string(outdir.path().join("a-test.com_xss.txt"))?;
        assert_eq!(xss, "http://a-test.com/x?id=1\n");
        let redirect =
            std::fs::read_to_string(outdir.path().join("a-test.com_openredirect.txt"))?;
        assert_eq!(redirect, "http://a-test.com/z?go=http://evil\n");
        let all = std::fs::read_to_string(outdir.path().join("a-test.com_all_urls.txt"))?;
        assert_eq!(all.lines().count(), 3);
        Ok(())
    }

    #[test]
    fn test_output__when_cdx_is_empty() -> TestResult {
        let mut server = Server::new();
        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create();
        let outdir = tempfile::tempdir()?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.args([
            "a-test.com",
            "--no-config",
            "--cdx-api",
            &server.url(),
            "-o",
            outdir.path().to_str().unwrap(),
        ]);

        cmd.assert()
            .failure()
            .stderr(contains("No URLs collected"));
        // The failed phase must not leave partial output behind
        assert!(!outdir.path().join("a-test.com_all_urls.txt").exists());
        Ok(())
    }

    #[test]
    fn test_output__when_cdx_is_unreachable() -> TestResult {
        let outdir = tempfile::tempdir()?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.args([
            "a-test.com",
            "--no-config",
            "--cdx-api",
            "http://127.0.0.1:1",
            "-t",
            "2",
            "-o",
            outdir.path().to_str().unwrap(),
            "-q",
        ]);

        cmd.assert()
            .failure()
            .stderr(contains("CDX request failed"));
        Ok(())
    }

    #[test]
    fn test_output__alive_phase_writes_matching_urls() -> TestResult {
        let mut server = Server::new();
        let alive_url = format!("{}/alive", server.url());
        let dead_url = format!("{}/dead", server.url());

        let _cdx = server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("url".into(), "a-test.com/*".into()))
            .with_status(200)
            .with_body(cdx_body(&[&alive_url, &dead_url]))
            .create();
        let _alive = server.mock("HEAD", "/alive").with_status(200).create();
        let _dead = server.mock("HEAD", "/dead").with_status(404).create();
        let outdir = tempfile::tempdir()?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.args([
            "a-test.com",
            "--no-config",
            "--alive",
            "--cdx-api",
            &server.url(),
            "-o",
            outdir.path().to_str().unwrap(),
            "-q",
        ]);

        cmd.assert().success();

        let alive = std::fs::read_to_string(outdir.path().join("a-test.com_alive200.txt"))?;
        assert_eq!(alive, format!("{alive_url}\n"));
        Ok(())
    }

    #[test]
    fn test_output__quiet_mode_suppresses_banner_and_summary() -> TestResult {
        let mut server = Server::new();
        let _m = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(cdx_body(&["http://a-test.com/x"]))
            .create();
        let outdir = tempfile::tempdir()?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.args([
            "a-test.com",
            "--no-config",
            "--cdx-api",
            &server.url(),
            "-o",
            outdir.path().to_str().unwrap(),
            "-q",
        ]);

        let assert = cmd.assert().success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
        assert!(stdout.is_empty(), "quiet mode printed: {stdout}");

        // Output files are still produced
        assert!(outdir.path().join("a-test.com_all_urls.txt").exists());
        Ok(())
    }
}
