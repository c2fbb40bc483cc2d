use super::stub_server::StubMediaServer;
use assert_cmd::prelude::CommandCargoExt;
use media_bench_report::report::ThumbnailBenchmarkReport;
use std::path::Path;
use std::process::Command;

const ABC: &[u8] = b"\x89PNG abc";

async fn run_bench_and_wait_for_finish(args: Vec<String>) -> bool {
    tokio::task::spawn_blocking(move || {
        let mut command = Command::cargo_bin("media-bench").unwrap();
        command.args(&args);
        command.status().unwrap().success()
    })
    .await
    .unwrap()
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_then_validating_load_should_report_no_corruption() {
    let server = StubMediaServer::start(&[("server/abc", ABC)]).await;
    let root = tempfile::tempdir().unwrap();
    let thumbnails = root.path().join("thumbnails.json");
    std::fs::write(&thumbnails, r#"{"mxc://server/abc": 3}"#).unwrap();
    let expected_dir = root.path().join("expected_thumbnails");
    let reports_dir = root.path().join("reports");

    assert!(
        run_bench_and_wait_for_finish(vec![
            "generate".to_owned(),
            "--target".to_owned(),
            server.url.clone(),
            "--thumbnails".to_owned(),
            path_arg(&thumbnails),
            "--expected-dir".to_owned(),
            path_arg(&expected_dir),
        ])
        .await
    );
    assert_eq!(std::fs::read(expected_dir.join("server_abc.png")).unwrap(), ABC);

    assert!(
        run_bench_and_wait_for_finish(vec![
            "load".to_owned(),
            "--validate".to_owned(),
            "--target".to_owned(),
            server.url.clone(),
            "--thumbnails".to_owned(),
            path_arg(&thumbnails),
            "--expected-dir".to_owned(),
            path_arg(&expected_dir),
            "--reports-dir".to_owned(),
            path_arg(&reports_dir),
        ])
        .await
    );

    let report_path = std::fs::read_dir(&reports_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let report: ThumbnailBenchmarkReport =
        serde_json::from_str(&std::fs::read_to_string(report_path).unwrap()).unwrap();
    assert_eq!(report.corrupted, Some(0));
    assert_eq!(report.count, 3);
    assert_eq!(report.failed, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_should_exit_with_error_when_thumbnails_file_is_missing() {
    let root = tempfile::tempdir().unwrap();

    assert!(
        !run_bench_and_wait_for_finish(vec![
            "generate".to_owned(),
            "--thumbnails".to_owned(),
            path_arg(&root.path().join("missing.json")),
            "--expected-dir".to_owned(),
            path_arg(&root.path().join("expected")),
        ])
        .await
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn binary_should_print_help() {
    assert!(run_bench_and_wait_for_finish(vec!["--help".to_owned()]).await);
    assert!(run_bench_and_wait_for_finish(vec!["load".to_owned(), "--help".to_owned()]).await);
}
