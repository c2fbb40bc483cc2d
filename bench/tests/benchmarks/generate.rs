use super::stub_server::StubMediaServer;
use media_bench::args::thumbnail::{ThumbnailMethod, ThumbnailParams};
use media_bench::benchmarks::benchmark::Benchmarkable;
use media_bench::benchmarks::generate_benchmark::GenerateBenchmark;
use media_bench::client::MediaClient;
use media_bench::error::BenchError;
use media_bench::thumbnails::ThumbnailPlan;

const ABC: &[u8] = b"\x89PNG abc";
const DEF: &[u8] = b"\x89PNG def";

#[tokio::test]
async fn generate_should_store_one_reference_per_identifier() {
    let server = StubMediaServer::start(&[("server/abc", ABC), ("server/def", DEF)]).await;
    let root = tempfile::tempdir().unwrap();
    let expected_dir = root.path().join("expected_thumbnails");
    let params = ThumbnailParams {
        width: 320,
        height: 240,
        method: ThumbnailMethod::Scale,
        animated: true,
    };
    let benchmark = GenerateBenchmark::new(
        MediaClient::new(&server.url).unwrap(),
        ThumbnailPlan::from_json(r#"{"server/abc": 5, "mxc://server/def": 1}"#).unwrap(),
        params,
        expected_dir.clone(),
    );

    benchmark.run().await.unwrap();

    assert_eq!(
        std::fs::read(expected_dir.join("server_abc.png")).unwrap(),
        ABC
    );
    assert_eq!(
        std::fs::read(expected_dir.join("server_def.png")).unwrap(),
        DEF
    );
    assert_eq!(server.requests(), 2);
    for query in server.queries() {
        assert_eq!(query.get("width").map(String::as_str), Some("320"));
        assert_eq!(query.get("height").map(String::as_str), Some("240"));
        assert_eq!(query.get("method").map(String::as_str), Some("scale"));
        assert_eq!(query.get("animated").map(String::as_str), Some("true"));
    }
}

#[tokio::test]
async fn generate_should_fail_when_any_download_fails() {
    let server = StubMediaServer::start(&[("server/abc", ABC)]).await;
    let expected_dir = tempfile::tempdir().unwrap();
    let benchmark = GenerateBenchmark::new(
        MediaClient::new(&server.url).unwrap(),
        ThumbnailPlan::from_json(r#"{"server/abc": 1, "server/missing": 1}"#).unwrap(),
        ThumbnailParams::default(),
        expected_dir.path().to_path_buf(),
    );

    let result = benchmark.run().await;

    assert!(matches!(
        result,
        Err(BenchError::GenerationFailed {
            failed: 1,
            total: 2
        })
    ));
    assert!(expected_dir.path().join("server_abc.png").exists());
    assert!(!expected_dir.path().join("server_missing.png").exists());
}
