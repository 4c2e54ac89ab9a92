// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use google_cloud_storage_v1::client::Storage;
use google_cloud_storage_v1::credentials::StaticTokenCredentials;
use google_cloud_storage_v1::model::{Bucket, Kind, Projection};
use httptest::{Expectation, Server, matchers::*, responders::*};

type Result = anyhow::Result<()>;

async fn create_test_client(server: &Server) -> anyhow::Result<Storage> {
    Ok(Storage::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(StaticTokenCredentials::new("test-token"))
        .build()
        .await?)
}

fn bucket_body(id: &str, project_id: &str) -> serde_json::Value {
    serde_json::json!({
        "kind": "storage#bucket",
        "id": id,
        "selfLink": format!("https://www.googleapis.com/storage/v1beta1/b/{id}"),
        "projectId": project_id,
        "timeCreated": "2013-03-06T16:49:41.263Z",
        "location": "US"
    })
}

fn not_found_body() -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": 404,
            "message": "Not Found",
            "errors": [
                {"domain": "global", "reason": "notFound", "message": "Not Found"}
            ]
        }
    })
}

#[tokio::test]
async fn get_bucket() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b/test-bucket-1"),
            request::query(url_decoded(contains(("alt", "json")))),
            request::query(url_decoded(contains(("prettyPrint", "false")))),
            request::headers(contains(("authorization", "Bearer test-token"))),
            request::headers(contains((
                "user-agent",
                concat!("google-cloud-storage-v1/", env!("CARGO_PKG_VERSION"))
            ))),
        ])
        .respond_with(json_encoded(bucket_body("test-bucket-1", "477990493411"))),
    );

    let client = create_test_client(&server).await?;
    let bucket = client.get_bucket("test-bucket-1").send().await?;
    let bucket = bucket.expect("bucket should exist");
    assert_eq!(bucket.kind, Kind::Bucket);
    assert_eq!(bucket.id.as_deref(), Some("test-bucket-1"));
    assert_eq!(bucket.project_id.as_deref(), Some("477990493411"));
    assert_eq!(bucket.location.as_deref(), Some("US"));
    Ok(())
}

#[tokio::test]
async fn get_bucket_with_projection() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b/test-bucket-1"),
            request::query(url_decoded(contains(("projection", "full")))),
        ])
        .respond_with(json_encoded(bucket_body("test-bucket-1", "477990493411"))),
    );

    let client = create_test_client(&server).await?;
    let bucket = client
        .get_bucket("test-bucket-1")
        .set_projection(Projection::Full)
        .send()
        .await?;
    assert!(bucket.is_some());
    Ok(())
}

#[tokio::test]
async fn get_bucket_not_found() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/storage/v1/b/no-such-bucket",
        ))
        .respond_with(status_code(404).body(not_found_body().to_string())),
    );

    let client = create_test_client(&server).await?;
    let bucket = client.get_bucket("no-such-bucket").send().await?;
    assert!(bucket.is_none());
    Ok(())
}

#[tokio::test]
async fn get_bucket_encodes_name() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/storage/v1/b/odd%20name",
        ))
        .respond_with(json_encoded(bucket_body("odd name", "477990493411"))),
    );

    let client = create_test_client(&server).await?;
    let bucket = client.get_bucket("odd name").send().await?;
    assert!(bucket.is_some());
    Ok(())
}

#[tokio::test]
async fn insert_bucket() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/storage/v1/b"),
            request::query(url_decoded(contains(("alt", "json")))),
            request::headers(contains(("authorization", "Bearer test-token"))),
            request::body(json_decoded(eq(serde_json::json!({
                "kind": "storage#bucket",
                "id": "test-bucket-1",
                "projectId": "477990493411"
            })))),
        ])
        .respond_with(json_encoded(bucket_body("test-bucket-1", "477990493411"))),
    );

    let client = create_test_client(&server).await?;
    let bucket = client
        .insert_bucket(
            Bucket::new()
                .set_id("test-bucket-1")
                .set_project_id("477990493411"),
        )
        .send()
        .await?;
    assert_eq!(bucket.id.as_deref(), Some("test-bucket-1"));
    assert!(bucket.time_created.is_some());
    Ok(())
}

#[tokio::test]
async fn insert_bucket_error() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("POST", "/storage/v1/b"))
            .respond_with(status_code(409).body(
                serde_json::json!({
                    "error": {"code": 409, "message": "You already own this bucket."}
                })
                .to_string(),
            )),
    );

    let client = create_test_client(&server).await?;
    let err = client
        .insert_bucket(Bucket::new().set_id("test-bucket-1"))
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.http_status_code(), Some(409));
    let status = err.status().expect("a service error");
    assert_eq!(status.message, "You already own this bucket.");
    Ok(())
}

#[tokio::test]
async fn delete_bucket() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("DELETE", "/storage/v1/b/test-bucket-1"),
            request::headers(contains(("authorization", "Bearer test-token"))),
        ])
        .respond_with(status_code(204)),
    );

    let client = create_test_client(&server).await?;
    client.delete_bucket("test-bucket-1").send().await?;
    Ok(())
}

#[tokio::test]
async fn delete_bucket_not_found_is_ok() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "DELETE",
            "/storage/v1/b/no-such-bucket",
        ))
        .respond_with(status_code(404).body(not_found_body().to_string())),
    );

    let client = create_test_client(&server).await?;
    client.delete_bucket("no-such-bucket").send().await?;
    Ok(())
}

#[tokio::test]
async fn delete_bucket_forbidden() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "DELETE",
            "/storage/v1/b/test-bucket-1",
        ))
        .respond_with(status_code(403).body(
            serde_json::json!({
                "error": {"code": 403, "message": "Forbidden"}
            })
            .to_string(),
        )),
    );

    let client = create_test_client(&server).await?;
    let err = client
        .delete_bucket("test-bucket-1")
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.http_status_code(), Some(403));
    assert!(err.is_service(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn list_buckets() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b"),
            request::query(url_decoded(contains(("projectId", "477990493411")))),
            request::query(url_decoded(contains(("maxResults", "10")))),
            request::query(url_decoded(contains(("projection", "no_acl")))),
            request::headers(contains(("authorization", "Bearer test-token"))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "kind": "storage#buckets",
            "items": [
                bucket_body("test-bucket-1", "477990493411"),
                bucket_body("test-bucket-2", "477990493411"),
            ]
        }))),
    );

    let client = create_test_client(&server).await?;
    let page = client
        .list_buckets("477990493411")
        .set_max_results(10)
        .set_projection(Projection::NoAcl)
        .send()
        .await?;
    assert_eq!(page.kind, Kind::Buckets);
    assert_eq!(page.next_page_token, None);
    let ids = page
        .items
        .iter()
        .map(|b| b.id.clone().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["test-bucket-1", "test-bucket-2"]);
    Ok(())
}

#[tokio::test]
async fn list_buckets_not_found_is_empty() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b"),
            request::query(url_decoded(contains(("projectId", "no-such-project")))),
        ])
        .respond_with(status_code(404).body(not_found_body().to_string())),
    );

    let client = create_test_client(&server).await?;
    let page = client.list_buckets("no-such-project").send().await?;
    assert!(page.items.is_empty());
    assert_eq!(page.next_page_token, None);
    Ok(())
}

#[tokio::test]
async fn list_buckets_by_page() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b"),
            request::query(url_decoded(contains(("projectId", "477990493411")))),
            request::query(url_decoded(not(contains(key("pageToken"))))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "kind": "storage#buckets",
            "nextPageToken": "page-2",
            "items": [
                bucket_body("test-bucket-1", "477990493411"),
                bucket_body("test-bucket-2", "477990493411"),
            ]
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b"),
            request::query(url_decoded(contains(("projectId", "477990493411")))),
            request::query(url_decoded(contains(("pageToken", "page-2")))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "kind": "storage#buckets",
            "items": [bucket_body("test-bucket-3", "477990493411")]
        }))),
    );

    let client = create_test_client(&server).await?;
    let mut pages = vec![];
    let mut paginator = client.list_buckets("477990493411").by_page();
    while let Some(page) = paginator.next().await.transpose()? {
        pages.push(page);
    }
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].items.len(), 2);
    assert_eq!(pages[1].items.len(), 1);
    Ok(())
}

#[tokio::test]
async fn list_buckets_by_item() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b"),
            request::query(url_decoded(not(contains(key("pageToken"))))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "kind": "storage#buckets",
            "nextPageToken": "page-2",
            "items": [
                bucket_body("test-bucket-1", "477990493411"),
                bucket_body("test-bucket-2", "477990493411"),
            ]
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b"),
            request::query(url_decoded(contains(("pageToken", "page-2")))),
        ])
        .respond_with(json_encoded(serde_json::json!({
            "kind": "storage#buckets",
            "items": [bucket_body("test-bucket-3", "477990493411")]
        }))),
    );

    let client = create_test_client(&server).await?;
    let mut ids = vec![];
    let mut items = client.list_buckets("477990493411").by_item();
    while let Some(bucket) = items.next().await.transpose()? {
        ids.push(bucket.id.unwrap_or_default());
    }
    assert_eq!(ids, vec!["test-bucket-1", "test-bucket-2", "test-bucket-3"]);
    Ok(())
}

#[tokio::test]
async fn anonymous_requests_have_no_authorization() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/storage/v1/b/test-bucket-1"),
            request::headers(not(contains(key("authorization")))),
        ])
        .respond_with(json_encoded(bucket_body("test-bucket-1", "477990493411"))),
    );

    let client = Storage::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .build()
        .await?;
    let bucket = client.get_bucket("test-bucket-1").send().await?;
    assert!(bucket.is_some());
    Ok(())
}

#[tokio::test]
async fn transport_error_carries_payload() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/storage/v1/b/test-bucket-1",
        ))
        .respond_with(status_code(503).body("upstream unavailable")),
    );

    let client = create_test_client(&server).await?;
    let err = client.get_bucket("test-bucket-1").send().await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
    assert_eq!(err.http_status_code(), Some(503));
    let payload = err.http_payload().expect("a payload");
    assert_eq!(payload.as_ref(), b"upstream unavailable");
    Ok(())
}
