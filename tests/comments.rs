use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use board_backend::board::service::BoardService;
use board_backend::comment::service::CommentService;
use board_backend::router::index::routes;
use board_backend::store::MemoryStore;
use serde_json::{Value, json};
use std::sync::Arc;

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(BoardService::new($store.clone())))
                .app_data(web::Data::new(CommentService::new($store.clone())))
                .configure(routes),
        )
        .await
    };
}

fn comment_json(content: &str) -> Value {
    json!({
        "content": content,
        "nickname": "commenter",
        "password": "1234",
    })
}

async fn create_board<S>(app: &S) -> u64
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::post()
        .uri("/boards")
        .set_json(json!({
            "title": "host board",
            "content": "content",
            "nickname": "tester",
            "password": "1234",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;
    body["data"]["id"].as_u64().unwrap()
}

#[actix_web::test]
async fn comment_lifecycle() {
    let store = Arc::new(MemoryStore::new());
    let app = app!(store);
    let board_id = create_board(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/boards/{}/comments", board_id))
        .set_json(comment_json("first!"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let comment_id = body["data"]["id"].as_u64().unwrap();
    assert!(body["data"].get("password").is_none());

    // the board detail embeds it
    let req = test::TestRequest::get()
        .uri(&format!("/boards/{}", board_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["comments"][0]["content"], json!("first!"));

    // and the comment list endpoint returns it
    let req = test::TestRequest::get()
        .uri(&format!("/boards/{}/comments", board_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["data"][0]["id"], json!(comment_id));
    assert_eq!(body["data"][0]["boardId"], json!(board_id));
}

#[actix_web::test]
async fn comment_on_missing_board_is_404() {
    let store = Arc::new(MemoryStore::new());
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/boards/777/comments")
        .set_json(comment_json("lost"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn overlong_comment_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let app = app!(store);
    let board_id = create_board(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/boards/{}/comments", board_id))
        .set_json(comment_json(&"x".repeat(201)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));
}

#[actix_web::test]
async fn update_comment_is_password_gated() {
    let store = Arc::new(MemoryStore::new());
    let app = app!(store);
    let board_id = create_board(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/boards/{}/comments", board_id))
        .set_json(comment_json("original"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let comment_id = body["data"]["id"].as_u64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/boards/{}/comments/{}", board_id, comment_id))
        .set_json(json!({
            "content": "edited",
            "nickname": "commenter",
            "password": "0000",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::put()
        .uri(&format!("/boards/{}/comments/{}", board_id, comment_id))
        .set_json(json!({
            "content": "edited",
            "nickname": "commenter",
            "password": "1234",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["content"], json!("edited"));
    assert!(body["data"]["updatedAt"].is_string());
}

#[actix_web::test]
async fn delete_comment_takes_password_as_text_body() {
    let store = Arc::new(MemoryStore::new());
    let app = app!(store);
    let board_id = create_board(&app).await;

    let req = test::TestRequest::post()
        .uri(&format!("/boards/{}/comments", board_id))
        .set_json(comment_json("to be removed"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let comment_id = body["data"]["id"].as_u64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/boards/{}/comments/{}", board_id, comment_id))
        .insert_header(("content-type", "text/plain"))
        .set_payload("9999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::delete()
        .uri(&format!("/boards/{}/comments/{}", board_id, comment_id))
        .insert_header(("content-type", "text/plain"))
        .set_payload("1234")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/boards/{}/comments", board_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], json!(0));

    // a second delete cannot find the comment anymore
    let req = test::TestRequest::delete()
        .uri(&format!("/boards/{}/comments/{}", board_id, comment_id))
        .insert_header(("content-type", "text/plain"))
        .set_payload("1234")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
