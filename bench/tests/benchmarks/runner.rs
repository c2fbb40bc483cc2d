use super::stub_server::StubMediaServer;
use clap::Parser;
use media_bench::args::common::MediaBenchArgs;
use media_bench::error::BenchError;
use media_bench::runner::BenchmarkRunner;
use media_bench_report::report::ThumbnailBenchmarkReport;

const ABC: &[u8] = b"\x89PNG abc";

#[tokio::test]
async fn runner_should_load_plan_from_thumbnails_file_and_target_server() {
    let server = StubMediaServer::start(&[("server/abc", ABC)]).await;
    let root = tempfile::tempdir().unwrap();
    let thumbnails = root.path().join("thumbnails.json");
    std::fs::write(&thumbnails, r#"{"mxc://server/abc": 2}"#).unwrap();
    let reports_dir = root.path().join("reports");
    let args = MediaBenchArgs::parse_from([
        "media-bench",
        "load",
        "--target",
        server.url.as_str(),
        "--thumbnails",
        thumbnails.to_str().unwrap(),
        "--reports-dir",
        reports_dir.to_str().unwrap(),
    ]);

    BenchmarkRunner::new(args).run().await.unwrap();

    assert_eq!(server.requests(), 2);
    let report_path = std::fs::read_dir(&reports_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let report: ThumbnailBenchmarkReport =
        serde_json::from_str(&std::fs::read_to_string(report_path).unwrap()).unwrap();
    assert_eq!(report.count, 2);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
async fn runner_should_reject_invalid_target() {
    let root = tempfile::tempdir().unwrap();
    let thumbnails = root.path().join("thumbnails.json");
    std::fs::write(&thumbnails, r#"{"server/abc": 1}"#).unwrap();
    let args = MediaBenchArgs::parse_from([
        "media-bench",
        "load",
        "--target",
        "not a url",
        "--thumbnails",
        thumbnails.to_str().unwrap(),
    ]);

    let result = BenchmarkRunner::new(args).run().await;

    assert!(matches!(result, Err(BenchError::CannotParseUrl(target)) if target == "not a url"));
}
