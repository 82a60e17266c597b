//! Tests for DriveClient with mocked HTTP responses.

use drive_ls::error::DriveError;
use drive_ls::{list_all_files, DriveClient, ListQuery};
use mockito::Matcher;
use serde_json::json;

fn query(max_files: u64) -> ListQuery {
    ListQuery {
        query: "trashed = false".to_string(),
        sort_order: "name".to_string(),
        max_files,
    }
}

mod fetch_page {
    use super::*;

    #[tokio::test]
    async fn single_page_listing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/files")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "trashed = false".into()),
                Matcher::UrlEncoded("orderBy".into(), "name".into()),
                Matcher::UrlEncoded("pageSize".into(), "30".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "files": [
                        {"id": "f1", "name": "a.txt", "mimeType": "text/plain", "size": "100"},
                        {"id": "f2", "name": "b.txt", "mimeType": "text/plain", "size": "200"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = DriveClient::with_base_url("token", server.url());
        let files = list_all_files(&client, &query(30)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].id, "f1");
        assert_eq!(files[1].size, Some(200));
    }

    #[tokio::test]
    async fn follows_page_tokens_across_pages() {
        let mut server = mockito::Server::new_async().await;

        let first = server
            .mock("GET", "/files")
            .match_query(Matcher::UrlEncoded("pageSize".into(), "1000".into()))
            .with_status(200)
            .with_body(
                json!({
                    "files": [{"id": "f1", "name": "a.txt"}],
                    "nextPageToken": "page2"
                })
                .to_string(),
            )
            .create_async()
            .await;

        // Registered later, so it wins whenever the token is present
        let second = server
            .mock("GET", "/files")
            .match_query(Matcher::UrlEncoded("pageToken".into(), "page2".into()))
            .with_status(200)
            .with_body(json!({"files": [{"id": "f2", "name": "b.txt"}]}).to_string())
            .create_async()
            .await;

        let client = DriveClient::with_base_url("token", server.url());
        let files = list_all_files(&client, &query(0)).await.unwrap();

        first.assert_async().await;
        second.assert_async().await;
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].id, "f2");
    }

    #[tokio::test]
    async fn requests_capped_page_size_for_large_max() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/files")
            .match_query(Matcher::UrlEncoded("pageSize".into(), "1000".into()))
            .with_status(200)
            .with_body(json!({"files": []}).to_string())
            .create_async()
            .await;

        let client = DriveClient::with_base_url("token", server.url());
        list_all_files(&client, &query(50_000)).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn api_error_is_mapped_with_status_and_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/files")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(
                json!({"error": {"code": 403, "message": "The user does not have permission"}})
                    .to_string(),
            )
            .create_async()
            .await;

        let client = DriveClient::with_base_url("token", server.url());
        let err = list_all_files(&client, &query(0)).await.unwrap_err();

        match err {
            DriveError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "The user does not have permission");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_passed_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/files")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let client = DriveClient::with_base_url("token", server.url());
        let err = list_all_files(&client, &query(0)).await.unwrap_err();

        match err {
            DriveError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

mod get_file {
    use super::*;

    #[tokio::test]
    async fn returns_record_metadata() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/files/folder1")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                json!({
                    "id": "folder1",
                    "name": "projects",
                    "mimeType": "application/vnd.google-apps.folder",
                    "parents": ["root"]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = DriveClient::with_base_url("token", server.url());
        let record = client.get_file("folder1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(record.name, "projects");
        assert!(record.is_dir());
        assert_eq!(record.parents, vec!["root".to_string()]);
    }

    #[tokio::test]
    async fn missing_file_maps_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/files/nope")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(json!({"error": {"code": 404, "message": "File not found: nope"}}).to_string())
            .create_async()
            .await;

        let client = DriveClient::with_base_url("token", server.url());
        let err = client.get_file("nope").await.unwrap_err();

        match err {
            DriveError::Api { status, .. } => assert_eq!(status, 404),
            other => panic!("unexpected error: {other}"),
        }
    }
}
