use actix_web::{App, HttpServer, web};
use board_backend::board::service::BoardService;
use board_backend::client::model::{BoardPayload, CommentPayload};
use board_backend::client::{BoardClient, ClientError};
use board_backend::comment::service::CommentService;
use board_backend::router::index::routes;
use board_backend::store::MemoryStore;
use reqwest::StatusCode;
use std::sync::Arc;

/// Bind the real server on an ephemeral port and return a client for it.
fn start_server() -> std::io::Result<BoardClient> {
    let store = Arc::new(MemoryStore::new());
    let board_service = web::Data::new(BoardService::new(store.clone()));
    let comment_service = web::Data::new(CommentService::new(store.clone()));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(board_service.clone())
            .app_data(comment_service.clone())
            .configure(routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    Ok(BoardClient::new(format!("http://{}", addr)))
}

fn board_payload(title: &str, password: &str) -> BoardPayload {
    BoardPayload {
        title: title.into(),
        content: "client test content".into(),
        nickname: "tester".into(),
        password: password.into(),
    }
}

#[actix_web::test]
async fn full_round_trip_through_the_client() -> Result<(), Box<dyn std::error::Error>> {
    let client = start_server()?;

    let board = client.create(&board_payload("from the client", "1234")).await?;
    assert_eq!(board.title, "from the client");

    let page = client.list(1, 10).await?;
    assert_eq!(page.count, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.data[0].id, board.id);

    let comment = client
        .add_comment(
            board.id,
            &CommentPayload {
                content: "nice post".into(),
                nickname: "commenter".into(),
                password: "4321".into(),
            },
        )
        .await?;
    assert_eq!(comment.board_id, board.id);

    let detail = client.get(board.id).await?;
    assert_eq!(detail.board.id, board.id);
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].content, "nice post");

    let updated = client
        .update(board.id, &board_payload("edited title", "1234"))
        .await?;
    assert_eq!(updated.title, "edited title");
    assert!(updated.updated_at.is_some());

    client.delete_comment(board.id, comment.id, "4321").await?;
    let detail = client.get(board.id).await?;
    assert!(detail.comments.is_empty());

    client.delete(board.id, "1234").await?;
    let page = client.list(1, 10).await?;
    assert_eq!(page.count, 0);

    Ok(())
}

#[actix_web::test]
async fn api_errors_carry_status_and_message() -> Result<(), Box<dyn std::error::Error>> {
    let client = start_server()?;

    let board = client.create(&board_payload("guarded", "1234")).await?;

    let err = client.delete(board.id, "0000").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(message.contains("Password does not match"));
        }
        other => panic!("expected an API error, got: {}", other),
    }

    let err = client.get(9999).await.unwrap_err();
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
        other => panic!("expected an API error, got: {}", other),
    }

    // validation failures are surfaced the same way
    let err = client
        .create(&board_payload("bad password", "12ab"))
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(message.contains("4 digits"));
        }
        other => panic!("expected an API error, got: {}", other),
    }

    Ok(())
}
