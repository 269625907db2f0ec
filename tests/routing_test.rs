//! Request routing tests against a mock server.
//!
//! Every operation must hit `base_url + fixed_suffix` (plus the verbatim
//! path parameter where one applies) with the expected verb.

mod support;

use serde::Serialize;
use serde_json::json;

const EMPTY_LIST: &str = r#"{"object":"list","data":[]}"#;
const OK_OBJECT: &str = r#"{"object":"ok"}"#;

#[test]
fn model_endpoints_route_to_fixed_suffixes() {
    let mut server = support::start();
    let client = support::client_for(&server);

    let list = support::json_mock(&mut server, "GET", "/models", 200, EMPTY_LIST);
    let retrieve = support::json_mock(&mut server, "GET", "/models/gpt-4", 200, OK_OBJECT);

    client.models().list().expect("list models");
    client.models().retrieve("gpt-4").expect("retrieve model");

    list.assert();
    retrieve.assert();
}

#[test]
fn completion_edit_embedding_and_moderation_posts() {
    let mut server = support::start();
    let client = support::client_for(&server);

    let completions = support::json_mock(&mut server, "POST", "/completions", 200, OK_OBJECT);
    let edits = support::json_mock(&mut server, "POST", "/edits", 200, OK_OBJECT);
    let embeddings = support::json_mock(&mut server, "POST", "/embeddings", 200, OK_OBJECT);
    let moderations = support::json_mock(&mut server, "POST", "/moderations", 200, OK_OBJECT);

    client
        .completions()
        .create(&json!({"model": "gpt-3.5-turbo-instruct", "prompt": "hi"}))
        .expect("create completion");
    client
        .edits()
        .create(&json!({"model": "text-davinci-edit-001", "input": "hte", "instruction": "fix"}))
        .expect("create edit");
    client
        .embeddings()
        .create(&json!({"model": "text-embedding-ada-002", "input": "hi"}))
        .expect("create embedding");
    client
        .moderations()
        .create(&json!({"input": "hello"}))
        .expect("create moderation");

    completions.assert();
    edits.assert();
    embeddings.assert();
    moderations.assert();
}

#[test]
fn image_endpoints_route_to_fixed_suffixes() {
    let mut server = support::start();
    let client = support::client_for(&server);

    let generations =
        support::json_mock(&mut server, "POST", "/images/generations", 200, OK_OBJECT);
    let edits = support::json_mock(&mut server, "POST", "/images/edits", 200, OK_OBJECT);
    let variations =
        support::json_mock(&mut server, "POST", "/images/variations", 200, OK_OBJECT);

    let body = json!({"prompt": "a cat", "n": 1, "size": "256x256"});
    client.images().create(&body).expect("generate image");
    client.images().edit(&body).expect("edit image");
    client.images().variation(&body).expect("image variation");

    generations.assert();
    edits.assert();
    variations.assert();
}

#[test]
fn file_endpoints_route_path_parameters_verbatim() {
    let mut server = support::start();
    let client = support::client_for(&server);

    let list = support::json_mock(&mut server, "GET", "/files", 200, EMPTY_LIST);
    let upload = support::json_mock(&mut server, "POST", "/files", 200, OK_OBJECT);
    let retrieve = support::json_mock(&mut server, "GET", "/files/file-123", 200, OK_OBJECT);
    let content =
        support::json_mock(&mut server, "GET", "/files/file-123/content", 200, OK_OBJECT);

    client.files().list().expect("list files");
    client
        .files()
        .upload(&json!({"purpose": "fine-tune", "file": "data.jsonl"}))
        .expect("upload file");
    client.files().retrieve("file-123").expect("retrieve file");
    client.files().content("file-123").expect("file content");

    list.assert();
    upload.assert();
    retrieve.assert();
    content.assert();
}

#[test]
fn fine_tune_endpoints_route_to_fixed_suffixes() {
    let mut server = support::start();
    let client = support::client_for(&server);

    let create = support::json_mock(&mut server, "POST", "/fine-tunes", 200, OK_OBJECT);
    let list = support::json_mock(&mut server, "GET", "/fine-tunes", 200, EMPTY_LIST);
    let retrieve = support::json_mock(&mut server, "GET", "/fine-tunes/ft-1", 200, OK_OBJECT);
    let content =
        support::json_mock(&mut server, "GET", "/fine-tunes/ft-1/content", 200, OK_OBJECT);
    let cancel = support::json_mock(&mut server, "GET", "/fine-tunes/ft-1/cancel", 200, OK_OBJECT);
    let events = support::json_mock(&mut server, "GET", "/fine-tunes/ft-1/events", 200, EMPTY_LIST);

    client
        .fine_tunes()
        .create(&json!({"training_file": "file-123"}))
        .expect("create fine-tune");
    client.fine_tunes().list().expect("list fine-tunes");
    client.fine_tunes().retrieve("ft-1").expect("retrieve fine-tune");
    client.fine_tunes().content("ft-1").expect("fine-tune content");
    client.fine_tunes().cancel("ft-1").expect("cancel fine-tune");
    client.fine_tunes().events("ft-1").expect("fine-tune events");

    create.assert();
    list.assert();
    retrieve.assert();
    cancel.assert();
    content.assert();
    events.assert();
}

#[test]
fn typed_request_bodies_serialize_through_the_generic_post() {
    #[derive(Serialize)]
    struct CompletionRequest<'a> {
        model: &'a str,
        prompt: &'a str,
        max_tokens: u32,
    }

    let mut server = support::start();
    let client = support::client_for(&server);

    let mock = server
        .mock("POST", "/completions")
        .match_body(mockito::Matcher::Json(json!({
            "model": "gpt-3.5-turbo-instruct",
            "prompt": "Say this is a test",
            "max_tokens": 7,
        })))
        .with_status(200)
        .with_body(OK_OBJECT)
        .create();

    client
        .completions()
        .create(&CompletionRequest {
            model: "gpt-3.5-turbo-instruct",
            prompt: "Say this is a test",
            max_tokens: 7,
        })
        .expect("typed completion request");

    mock.assert();
}

#[test]
fn base_url_override_applies_to_requests_issued_afterwards() {
    let mut server = support::start();
    let mut client = support::client_for(&server);

    // Point at a path-prefixed base; suffixes are appended verbatim.
    client.set_base_url(format!("{}/v1/", server.url()));

    let mock = support::json_mock(&mut server, "GET", "/v1/models", 200, EMPTY_LIST);
    client.models().list().expect("list models under /v1/");
    mock.assert();
}
