//! Tests of the HTTP client, against a mocked backend

use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;

use month_planner::client::Client;
use month_planner::memory::MemoryGateway;
use month_planner::traits::SyncGateway;
use month_planner::{Hour, Session, SyncError, Task, TaskId};

const TASKS_BODY: &str = r#"[
    {"id": 1709596800000, "text": "Buy milk", "hour": "9", "completed": false, "date": "2024-03-05"},
    {"id": 1709596800001, "text": "Call Mom", "hour": 18, "completed": true, "date": "2024-03-07"},
    {"id": 1709596800002, "text": "   ", "hour": 3, "completed": false, "date": "2024-03-07"},
    {"id": 1709596800003, "text": "Too late", "hour": "25", "completed": false, "date": "2024-03-07"},
    {"id": "not a number", "text": "Malformed", "hour": 1, "completed": false, "date": "2024-03-07"}
]"#;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_fetch_all() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/tasks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TASKS_BODY)
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    let tasks = client.fetch_all().await.unwrap();
    mock.assert_async().await;

    // Invalid records are skipped
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id(), TaskId::from(1709596800000));
    assert_eq!(tasks[0].text(), "Buy milk");
    assert_eq!(tasks[0].hour(), Hour::new(9).unwrap());
    assert_eq!(tasks[0].date(), ymd(2024, 3, 5));
    assert_eq!(tasks[1].completed(), true);
    assert_eq!(tasks[1].hour(), Hour::new(18).unwrap());
}

#[tokio::test]
async fn test_fetch_all_server_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut server = mockito::Server::new_async().await;
    let _mock = server.mock("GET", "/tasks")
        .with_status(500)
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    let res = client.fetch_all().await;
    assert!(matches!(res, Err(SyncError::Status(status)) if status.as_u16() == 500));

    // A session keeps going
    let mut session = Session::new(client, ymd(2024, 3, 5));
    assert_eq!(session.load_initial().await, false);
    assert!(session.store().is_empty());
}

#[tokio::test]
async fn test_persist() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/task")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "id": 1709596800000i64,
            "text": "Buy milk",
            "hour": "9",
            "completed": false,
        })))
        .with_status(201)
        .with_body("this body is ignored")
        .create_async()
        .await;

    let client = Client::new(server.url()).unwrap();
    let task = Task::new(TaskId::from(1709596800000), "Buy milk".to_string(), Hour::new(9).unwrap(), ymd(2024, 3, 5)).unwrap();
    client.persist(&task).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_persist_through_a_session() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut server = mockito::Server::new_async().await;
    let get_mock = server.mock("GET", "/tasks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    let post_mock = server.mock("POST", "/task")
        .with_status(503)
        .create_async()
        .await;

    let mut session = Session::new(Client::new(server.url()).unwrap(), ymd(2024, 3, 5));
    assert!(session.load_initial().await);

    let (task, pending) = session.add_task("Buy milk".to_string(), Hour::new(9).unwrap(), ymd(2024, 3, 5)).unwrap();
    assert!(matches!(pending.outcome().await, Err(SyncError::Status(_))));
    get_mock.assert_async().await;
    post_mock.assert_async().await;

    // The optimistic write stays
    assert_eq!(session.store().get(task.id()), Some(&task));
    assert_eq!(session.view().counters().total(), 1);
}

#[tokio::test]
async fn test_client_and_memory_gateway_send_the_same_records() {
    let task = Task::new(TaskId::from(42), "Buy milk".to_string(), Hour::new(9).unwrap(), ymd(2024, 3, 5)).unwrap();

    let memory = MemoryGateway::new();
    memory.persist(&task).await.unwrap();
    let record = serde_json::to_value(&memory.records()[0]).unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/task")
        .match_body(Matcher::PartialJson(json!({
            "id": record["id"],
            "text": record["text"],
            "hour": record["hour"],
            "completed": record["completed"],
        })))
        .with_status(200)
        .create_async()
        .await;
    Client::new(server.url()).unwrap().persist(&task).await.unwrap();
    mock.assert_async().await;
}
