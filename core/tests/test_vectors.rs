//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected envelope or an expected error. Comparing parsed
//! JSON (not raw strings) avoids false negatives from field ordering.

use albums_core::{
    Album, AlbumInput, AlbumsApi, AlbumsQuery, ApiError, HttpMethod, HttpRequest, HttpResponse,
    ResponseItemDto, ResponsePageDto,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, expected["path"].as_str().unwrap(), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected
        .get("headers")
        .and_then(Value::as_array)
        .map(|headers| {
            headers
                .iter()
                .map(|h| {
                    let pair = h.as_array().unwrap();
                    (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
                })
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(body) => {
            let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&sent, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
{
    match case.get("expected_error") {
        Some(expected) => {
            let err = result.unwrap_err();
            if let Some(status) = expected.get("status") {
                assert_eq!(err.status(), Some(status.as_u64().unwrap() as u16), "{name}: status");
            } else {
                assert!(matches!(err, ApiError::Deserialization(_)), "{name}: expected decode error");
            }
        }
        None => {
            let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

fn input_id(case: &Value) -> Uuid {
    case["input_id"].as_str().unwrap().parse().unwrap()
}

#[test]
fn read_test_vectors() {
    let api = AlbumsApi::new();
    for case in load(include_str!("../../test-vectors/read.json")) {
        let name = case["name"].as_str().unwrap();
        let query: AlbumsQuery = serde_json::from_value(case["input"].clone()).unwrap();

        let req = api.build_read_albums(&query).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = api.parse_read_albums(simulated(&case));
        check_outcome::<ResponsePageDto<Album>>(name, &case, result);
    }
}

#[test]
fn readitem_test_vectors() {
    let api = AlbumsApi::new();
    for case in load(include_str!("../../test-vectors/readitem.json")) {
        let name = case["name"].as_str().unwrap();
        let flat = case["input_flat"].as_bool().unwrap();

        let req = api.build_read_album(input_id(&case), flat).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = api.parse_read_album(simulated(&case));
        check_outcome::<ResponseItemDto<Album>>(name, &case, result);
    }
}

#[test]
fn delete_test_vectors() {
    let api = AlbumsApi::new();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();

        let req = api.build_delete_album(input_id(&case));
        check_request(name, &req, &case["expected_request"]);

        let result = api.parse_delete_album(simulated(&case));
        check_outcome::<ResponseItemDto<Album>>(name, &case, result);
    }
}

#[test]
fn update_test_vectors() {
    let api = AlbumsApi::new();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: AlbumInput = serde_json::from_value(case["input"].clone()).unwrap();

        let req = api.build_update_album(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = api.parse_update_album(simulated(&case));
        check_outcome::<ResponseItemDto<Album>>(name, &case, result);
    }
}

#[test]
fn create_test_vectors() {
    let api = AlbumsApi::new();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: AlbumInput = serde_json::from_value(case["input"].clone()).unwrap();

        let req = api.build_create_album(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = api.parse_create_album(simulated(&case));
        check_outcome::<ResponseItemDto<Album>>(name, &case, result);
    }
}
