// Integration tests for the HTTP client against a mock server

use anyhow::Result;
use base64::Engine;
use plaud_bulk_export::config::ApiConfig;
use plaud_bulk_export::{
    ArtifactFormat, ArtifactSource, FetchError, PlaudClient, RecordingDirectory, SessionProvider,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..ApiConfig::default()
    }
}

async fn authenticated_client(server: &MockServer) -> Result<PlaudClient> {
    Mock::given(method("POST"))
        .and(path("/auth/access-token"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "token_type": "bearer"
        })))
        .mount(server)
        .await;

    let mut client = PlaudClient::new(api(server))?;
    let token = client.authenticate("alice", "secret").await?;
    assert_eq!(token, "tok-123");

    Ok(client)
}

#[tokio::test]
async fn test_authenticate_stores_token() -> Result<()> {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await?;

    assert!(client.is_authenticated());

    Ok(())
}

#[tokio::test]
async fn test_authenticate_rejected() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/access-token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mut client = PlaudClient::new(api(&server))?;
    let result = client.authenticate("alice", "wrong").await;

    assert!(result.is_err());
    assert!(!client.is_authenticated());

    Ok(())
}

#[tokio::test]
async fn test_authenticate_without_token_fails() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": -1 })))
        .mount(&server)
        .await;

    let mut client = PlaudClient::new(api(&server))?;

    assert!(client.authenticate("alice", "secret").await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_calls_before_authentication_fail() -> Result<()> {
    let server = MockServer::start().await;
    let client = PlaudClient::new(api(&server))?;

    assert!(client.list_recordings().await.is_err());
    assert!(matches!(
        client.fetch_audio("r1").await,
        Err(FetchError::Transport(_))
    ));

    Ok(())
}

#[tokio::test]
async fn test_list_recordings_and_tags() -> Result<()> {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await?;

    Mock::given(method("GET"))
        .and(path("/file/simple/web"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data_file_list": [
                {
                    "id": "r1",
                    "filename": "Weekly sync",
                    "start_time": 1709283600000i64,
                    "filetag_id_list": ["t1"],
                    "duration": 1800000
                },
                { "id": "r2", "filename": "Untagged", "start_time": 1709400000000i64 }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/filetag/"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data_filetag_list": [{ "id": "t1", "name": "Work", "icon": "briefcase" }]
        })))
        .mount(&server)
        .await;

    let recordings = client.list_recordings().await?;
    assert_eq!(recordings.len(), 2);
    assert_eq!(recordings[0].name, "Weekly sync");
    assert_eq!(recordings[0].first_tag(), Some("t1"));
    assert!(recordings[1].tag_ids.is_empty());

    let tags = client.list_tags().await?;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Work");

    Ok(())
}

#[tokio::test]
async fn test_fetch_audio_encodes_raw_bytes() -> Result<()> {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await?;
    let audio = vec![0x49u8, 0x44, 0x33, 0x04, 0x00, 0xff];

    Mock::given(method("GET"))
        .and(path("/file/download/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
        .mount(&server)
        .await;

    let encoded = client.fetch_audio("r1").await?;
    let decoded = base64::engine::general_purpose::STANDARD.decode(encoded)?;

    assert_eq!(decoded, audio);

    Ok(())
}

#[tokio::test]
async fn test_fetch_transcript_and_summary() -> Result<()> {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await?;

    Mock::given(method("POST"))
        .and(path("/file/export/transcript"))
        .and(body_json(json!({ "file_id": "r1", "format": "srt" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": "MQo=" })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/file/export/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": "" })))
        .mount(&server)
        .await;

    assert_eq!(client.fetch_transcript("r1", ArtifactFormat::Srt).await?, "MQo=");
    assert!(matches!(
        client.fetch_summary("r1", ArtifactFormat::Pdf).await,
        Err(FetchError::Empty)
    ));

    Ok(())
}

#[tokio::test]
async fn test_server_error_is_transport_failure() -> Result<()> {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await?;

    Mock::given(method("POST"))
        .and(path("/file/export/transcript"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    match client.fetch_transcript("r1", ArtifactFormat::Pdf).await {
        Err(FetchError::Transport(e)) => assert!(e.to_string().contains("502")),
        other => panic!("expected transport error, got {:?}", other),
    }

    Ok(())
}
