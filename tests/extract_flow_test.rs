use httpmock::prelude::*;
use tempfile::TempDir;
use voter_extract::domain::model::{ReplacementRule, UploadMetadata};
use voter_extract::{ExtractEngine, ExtractError, LocalStorage, UploadClient};

fn metadata() -> UploadMetadata {
    UploadMetadata {
        district: "ব্রাহ্মণবাড়িয়া".to_string(),
        upazila: "সরাইল".to_string(),
        r#union: "অরুয়াইল".to_string(),
        ward_number: "3".to_string(),
        voter_area: "".to_string(),
        voter_area_code: "".to_string(),
    }
}

fn write_pdf(dir: &TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, b"%PDF-1.4 fake voter list").unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_end_to_end_extract_replace_export() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out");
    let pdf_path = write_pdf(&temp_dir, "list.pdf");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/upload");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "job_id": "42",
                "status": "completed",
                "total_voters": 2,
                "data": [
                    {"name": "Foo Bar", "voter_id": "111"},
                    {"name": "Baz"}
                ]
            }));
    });

    let storage = LocalStorage::new(output_path.to_str().unwrap().to_string());
    let api = UploadClient::new(server.url("/api/upload"));
    let mut engine = ExtractEngine::new(api, storage);

    engine.submit(&pdf_path, &metadata()).await.unwrap();
    api_mock.assert();

    engine.apply_rules(&[ReplacementRule::new("Foo Bar", "Foo-Bar")]);

    let name = engine.export().await.unwrap().unwrap();
    assert_eq!(name, "voters-42.json");

    let saved = std::fs::read_to_string(output_path.join("voters-42.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(records[0]["name"], "Foo-Bar");
    assert_eq!(records[0]["voter_id"], "111");
    assert_eq!(records[1]["name"], "Baz");

    // The artifact is the record array, not the envelope.
    assert!(records.is_array());
    assert!(!saved.contains("total_voters"));
}

#[tokio::test]
async fn test_non_pdf_file_sends_no_request() {
    let temp_dir = TempDir::new().unwrap();
    let txt_path = temp_dir.path().join("notes.txt");
    std::fs::write(&txt_path, b"plain text").unwrap();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/upload");
        then.status(200);
    });

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let api = UploadClient::new(server.url("/api/upload"));
    let mut engine = ExtractEngine::new(api, storage);

    let err = engine
        .submit(txt_path.to_str().unwrap(), &metadata())
        .await
        .unwrap_err();

    assert!(matches!(err, ExtractError::ValidationError { .. }));
    api_mock.assert_hits(0);
    assert_eq!(
        engine.session().error(),
        Some("Please upload a valid PDF file.")
    );
    assert!(engine.session().original().is_none());
}

#[tokio::test]
async fn test_service_error_detail_is_surfaced() {
    let temp_dir = TempDir::new().unwrap();
    let pdf_path = write_pdf(&temp_dir, "list.pdf");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/upload");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"detail": "PDF engine crashed on page 3"}));
    });

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let api = UploadClient::new(server.url("/api/upload"));
    let mut engine = ExtractEngine::new(api, storage);

    engine.submit(&pdf_path, &metadata()).await.unwrap_err();

    api_mock.assert();
    assert_eq!(
        engine.session().error(),
        Some("PDF engine crashed on page 3")
    );
    assert!(engine.session().original().is_none());
    assert!(!engine.session().is_loading());
}

#[tokio::test]
async fn test_service_error_without_detail_uses_generic_message() {
    let temp_dir = TempDir::new().unwrap();
    let pdf_path = write_pdf(&temp_dir, "list.pdf");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/upload");
        then.status(502).body("bad gateway");
    });

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let api = UploadClient::new(server.url("/api/upload"));
    let mut engine = ExtractEngine::new(api, storage);

    engine.submit(&pdf_path, &metadata()).await.unwrap_err();

    api_mock.assert();
    assert_eq!(
        engine.session().error(),
        Some("An error occurred during processing.")
    );
}

#[tokio::test]
async fn test_resubmission_replaces_previous_result() {
    let temp_dir = TempDir::new().unwrap();
    let pdf_path = write_pdf(&temp_dir, "list.pdf");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/upload");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "job_id": "second",
                "status": "completed",
                "total_voters": 1,
                "data": [{"name": "নতুন"}]
            }));
    });

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let api = UploadClient::new(server.url("/api/upload"));
    let mut engine = ExtractEngine::new(api, storage);

    engine.submit(&pdf_path, &metadata()).await.unwrap();
    engine.submit(&pdf_path, &metadata()).await.unwrap();

    api_mock.assert_hits(2);
    assert_eq!(engine.session().original().unwrap().job_id, "second");
    assert!(engine.session().processed().is_none());
}

#[tokio::test]
async fn test_replace_flow_over_saved_result() {
    let temp_dir = TempDir::new().unwrap();

    let envelope = serde_json::json!({
        "job_id": "42",
        "status": "completed",
        "total_voters": 2,
        "data": [{"name": "a.b"}, {"name": "XX"}]
    });

    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    // Endpoint is never contacted in the replace flow.
    let api = UploadClient::new("http://localhost:1/api/upload");
    let mut engine = ExtractEngine::new(api, storage);

    engine.load_result(serde_json::from_value(envelope).unwrap());
    engine.apply_rules(&[
        ReplacementRule::new(".", "-"),
        ReplacementRule::new("X", "Y"),
    ]);

    let active = engine.session().active().unwrap();
    assert_eq!(active.data[0].name.as_deref(), Some("a-b"));
    assert_eq!(active.data[1].name.as_deref(), Some("YY"));
    assert_eq!(active.total_voters, 2);

    let name = engine.export().await.unwrap().unwrap();
    assert!(temp_dir.path().join(&name).exists());
}
