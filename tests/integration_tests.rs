use httpmock::prelude::*;
use scholar_etl::adapters::http::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use scholar_etl::core::extractor::DEFAULT_LINK_BASE;
use scholar_etl::{
    CliConfig, EtlEngine, LocalStorage, ProfileExtractor, ProfileOutcome, ScholarPipeline,
    TomlConfig,
};
use tempfile::TempDir;

const PROFILE_HTML: &str = include_str!("fixtures/scholar_profile.html");

fn cli_config(profiles: Vec<String>, output_path: &str, compress: bool) -> CliConfig {
    CliConfig {
        profiles,
        config: None,
        output_path: output_path.to_string(),
        output_formats: vec!["json".to_string(), "csv".to_string()],
        compress,
        timeout_secs: DEFAULT_TIMEOUT_SECONDS,
        user_agent: DEFAULT_USER_AGENT.to_string(),
        link_base: DEFAULT_LINK_BASE.to_string(),
        verbose: false,
        monitor: false,
    }
}

#[test]
fn test_fixture_profile_extraction() {
    let record = ProfileExtractor::default().extract(PROFILE_HTML.as_bytes());

    assert_eq!(record.name, "Ada Lovelace");
    assert_eq!(record.total_citations, 2048);
    assert_eq!(record.h_index, "21");
    assert_eq!(record.i10_index, "33");

    let years: Vec<&str> = record.yearly_citations.keys().map(String::as_str).collect();
    assert_eq!(years, vec!["2020", "2021", "2022", "2023", "2024"]);
    assert_eq!(record.yearly_citations["2020"], 120);
    assert_eq!(record.yearly_citations["2024"], 480);

    assert_eq!(record.papers.len(), 3);
    assert_eq!(record.papers[0].title, "Notes on the Analytical Engine");
    assert_eq!(
        record.papers[0].link,
        "https://scholar.google.com/citations?view_op=view_citation&hl=en&user=ada&citation_for_view=ada:note_g"
    );
    assert_eq!(record.papers[0].citations, "1500");
    assert_eq!(record.papers[0].year, "1843");

    // 沒有引用數的論文
    assert_eq!(record.papers[1].citations, "0");

    // 沒有標題的論文
    assert_eq!(record.papers[2].title, "No Title");
    assert_eq!(record.papers[2].link, "#");
    assert_eq!(record.papers[2].citations, "12");
    assert_eq!(record.papers[2].year, "Unknown Year");
}

#[tokio::test]
async fn test_end_to_end_scrape_with_partial_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let ok_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/citations")
            .query_param("user", "ada")
            .header("user-agent", DEFAULT_USER_AGENT);
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(PROFILE_HTML);
    });
    let blocked_mock = server.mock(|when, then| {
        when.method(GET).path("/citations").query_param("user", "blocked");
        then.status(503);
    });

    let config = cli_config(
        vec![
            server.url("/citations?user=ada&hl=en"),
            server.url("/citations?user=blocked&hl=en"),
        ],
        &output_path,
        false,
    );

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ScholarPipeline::new(storage, config).unwrap();
    let engine = EtlEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_ok());
    ok_mock.assert();
    blocked_mock.assert();

    let json_path = std::path::Path::new(&output_path).join("profiles.json");
    let results: Vec<ProfileOutcome> =
        serde_json::from_slice(&std::fs::read(&json_path).unwrap()).unwrap();

    assert_eq!(results.len(), 2);
    let profile = results[0].as_profile().unwrap();
    assert_eq!(profile.name, "Ada Lovelace");
    assert_eq!(profile.papers.len(), 3);
    match &results[1] {
        ProfileOutcome::Error(record) => {
            assert_eq!(record.error, "Failed to retrieve data. Status code: 503")
        }
        other => panic!("expected error record, got {:?}", other),
    }

    let csv_content =
        std::fs::read_to_string(std::path::Path::new(&output_path).join("papers.csv")).unwrap();
    let csv_lines: Vec<&str> = csv_content.lines().collect();
    assert_eq!(csv_lines.len(), 4); // Header + 3 papers
    assert!(csv_lines[1].starts_with("Ada Lovelace,Notes on the Analytical Engine,"));
}

#[tokio::test]
async fn test_end_to_end_unreachable_sources_do_not_abort_batch() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let ok_mock = server.mock(|when, then| {
        when.method(GET).path("/citations");
        then.status(200).body(PROFILE_HTML);
    });

    let config = cli_config(
        vec![
            "http://127.0.0.1:1/citations?user=nobody".to_string(),
            server.url("/citations?user=ada"),
        ],
        &output_path,
        false,
    );

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ScholarPipeline::new(storage, config).unwrap();
    let result = EtlEngine::new(pipeline).run().await;

    assert!(result.is_ok());
    ok_mock.assert_hits(1);

    let json = std::fs::read(std::path::Path::new(&output_path).join("profiles.json")).unwrap();
    let results: Vec<ProfileOutcome> = serde_json::from_slice(&json).unwrap();
    assert!(results[0].is_error());
    assert_eq!(results[1].as_profile().unwrap().name, "Ada Lovelace");
}

#[tokio::test]
async fn test_end_to_end_compressed_output_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/citations");
        then.status(200).body(PROFILE_HTML);
    });

    let toml_content = format!(
        r#"
[source]
profiles = ["{}"]
timeout_seconds = 5
link_base = "https://scholar.google.co.in"

[load]
output_path = "{}"
output_formats = ["json", "csv"]

[load.compression]
enabled = true
"#,
        server.url("/citations?user=ada"),
        output_path.replace('\\', "/")
    );
    let config = TomlConfig::from_toml_str(&toml_content).unwrap();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ScholarPipeline::new(storage, config).unwrap();
    let engine = EtlEngine::new_with_monitoring(pipeline, true);

    let output_file_path = engine.run().await.unwrap();
    page_mock.assert();
    assert!(output_file_path.ends_with("scholar_output.zip"));

    let zip_data = std::fs::read(std::path::Path::new(&output_path).join("scholar_output.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 2);

    let mut json_file = archive.by_name("profiles.json").unwrap();
    let mut json_content = String::new();
    std::io::Read::read_to_string(&mut json_file, &mut json_content).unwrap();

    let results: Vec<serde_json::Value> = serde_json::from_str(&json_content).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0]["Papers"][0]["link"]
        .as_str()
        .unwrap()
        .starts_with("https://scholar.google.co.in/citations?"));
}
