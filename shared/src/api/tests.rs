use crate::client::{ApiClient, MemoryTokenStore};
use crate::protocol::HttpMethod;
use crate::request::MockHttpClient;
use crate::*;
use serde_json::json;

const BASE: &str = "http://api.test";

fn client() -> ApiClient<MockHttpClient, MemoryTokenStore> {
    ApiClient::new(BASE, MockHttpClient::new(), MemoryTokenStore::with_token("T1"))
}

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

fn session_json(status: &str) -> serde_json::Value {
    json!({
        "id": "s1",
        "title": "Review",
        "description": "ch1-3",
        "notes": null,
        "topics": [],
        "plan": { "id": "p1", "title": "Calculus" },
        "started_at": "2024-10-01T09:00:00",
        "ended_at": null,
        "last_pause_time": null,
        "total_pause_time": 0,
        "status": status
    })
}

// =========================================================
// 学期 / 课程 / 作业
// =========================================================

#[tokio::test]
async fn test_term_crud_endpoints() {
    let api = client();
    let term = json!({ "id": "t1", "name": "Fall", "user_id": "u1", "start_date": "2024-09-01", "end_date": "2024-12-15" });
    api.http()
        .mock_response(HttpMethod::Get, &url("/terms"), 200, json!([term]));
    api.http()
        .mock_response(HttpMethod::Put, &url("/terms/t1"), 200, term.clone());

    let terms = api.list_terms().await.unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].name, "Fall");

    let req = TermRequest {
        name: "Fall".into(),
        start_date: "2024-09-01".into(),
        end_date: "2024-12-15".into(),
    };
    api.update_term("t1", req).await.unwrap();
    let sent = api.http().last_request();
    assert_eq!(sent.method, HttpMethod::Put);
    assert_eq!(sent.body_json()["name"], "Fall");
}

#[tokio::test]
async fn test_course_delete_targets_single_id() {
    let api = client();
    api.http()
        .mock_empty(HttpMethod::Delete, &url("/courses/c1"), 204);

    api.delete_course("c1").await.unwrap();

    let sent = api.http().last_request();
    assert_eq!(sent.url, url("/courses/c1"));
    assert_eq!(sent.body, None);
}

#[tokio::test]
async fn test_assignment_create_sends_type_field() {
    let api = client();
    api.http().mock_response(
        HttpMethod::Post,
        &url("/assignments"),
        201,
        json!({
            "id": "a1", "title": "Project 1", "description": "Build it",
            "due_at": "2024-11-01T23:59:00", "type": "project",
            "course_id": "c1", "score": null, "created_at": "2024-10-01T00:00:00"
        }),
    );

    let created = api
        .create_assignment(&AssignmentRequest {
            title: "Project 1".into(),
            description: "Build it".into(),
            due_at: "2024-11-01T23:59:00".into(),
            kind: AssignmentType::Project,
            course_id: "c1".into(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, "a1");
    assert_eq!(created.score, None);
    assert_eq!(api.http().last_request().body_json()["type"], "project");
}

// =========================================================
// 学习计划
// =========================================================

#[tokio::test]
async fn test_manual_and_ai_plans_use_distinct_endpoints() {
    let api = client();
    let plan = json!({ "id": "p1", "title": "Calculus", "course_id": "c1", "topics": [], "created_at": "2024-10-01" });
    api.http()
        .mock_response(HttpMethod::Post, &url("/plans/"), 201, plan.clone());
    api.http()
        .mock_response(HttpMethod::Post, &url("/plans/ai-generate/"), 201, plan);

    api.create_plan(&StudyPlanManualRequest {
        title: "Calculus".into(),
        description: "Midterm prep".into(),
        course_id: "c1".into(),
        topics: vec![TopicDraft {
            title: "Limits".into(),
            description: "epsilon-delta".into(),
        }],
    })
    .await
    .unwrap();
    let manual = api.http().last_request();
    assert_eq!(manual.url, url("/plans/"));
    assert_eq!(manual.body_json()["topics"][0]["title"], "Limits");

    api.generate_plan(&StudyPlanAiRequest {
        prompt: "Two weeks of calculus".into(),
        course_id: "c1".into(),
    })
    .await
    .unwrap();
    let ai = api.http().last_request();
    assert_eq!(ai.url, url("/plans/ai-generate/"));
    assert_eq!(
        ai.body_json(),
        json!({ "prompt": "Two weeks of calculus", "course_id": "c1" })
    );
}

#[tokio::test]
async fn test_delete_plan_keeps_trailing_slash() {
    let api = client();
    api.http()
        .mock_empty(HttpMethod::Delete, &url("/plans/p1/"), 204);
    api.delete_plan("p1").await.unwrap();
    assert_eq!(api.http().last_request().url, url("/plans/p1/"));
}

// =========================================================
// 学习会话
// =========================================================

#[tokio::test]
async fn test_start_session_returns_active_session() {
    let api = client();
    api.http().mock_response(
        HttpMethod::Post,
        &url("/sessions/start"),
        200,
        session_json("active"),
    );

    let session = api
        .start_session(&StudySessionRequest {
            title: "Review".into(),
            description: "ch1-3".into(),
            plan_id: "p1".into(),
        })
        .await
        .unwrap();

    assert_eq!(session.status, SessionStatus::Active);
    assert_eq!(
        api.http().last_request().body_json(),
        json!({ "title": "Review", "description": "ch1-3", "plan_id": "p1" })
    );
}

#[tokio::test]
async fn test_current_session_absent_is_none() {
    let api = client();
    // 未 mock 的地址返回 404
    assert_eq!(api.current_session("p1").await.unwrap(), None);

    api.http()
        .mock_response(HttpMethod::Get, &url("/sessions/current/p2"), 200, json!(null));
    assert_eq!(api.current_session("p2").await.unwrap(), None);
}

#[tokio::test]
async fn test_current_session_server_error_propagates() {
    let api = client();
    api.http().mock_response(
        HttpMethod::Get,
        &url("/sessions/current/p1"),
        500,
        json!({ "detail": "boom" }),
    );
    assert!(api.current_session("p1").await.is_err());
}

#[tokio::test]
async fn test_session_actions_are_addressed_by_plan() {
    let api = client();
    api.http()
        .mock_response(HttpMethod::Post, &url("/sessions/pause/p1"), 200, session_json("paused"));
    api.http()
        .mock_response(HttpMethod::Post, &url("/sessions/unpause/p1"), 200, session_json("active"));
    api.http()
        .mock_response(HttpMethod::Post, &url("/sessions/end/p1"), 200, session_json("completed"));

    assert_eq!(api.pause_session("p1").await.unwrap().status, SessionStatus::Paused);
    assert_eq!(api.unpause_session("p1").await.unwrap().status, SessionStatus::Active);
    assert_eq!(api.end_session("p1").await.unwrap().status, SessionStatus::Completed);

    let methods: Vec<HttpMethod> = api.http().requests.borrow().iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![HttpMethod::Post; 3]);
}

#[tokio::test]
async fn test_update_session_is_patch_by_plan() {
    let api = client();
    api.http().mock_response(
        HttpMethod::Patch,
        &url("/sessions/by-plan/p1"),
        200,
        session_json("active"),
    );

    api.update_session(
        "p1",
        StudySessionUpdateRequest {
            notes: "derivatives done".into(),
            topics: vec!["t1".into(), "t2".into()],
        },
    )
    .await
    .unwrap();

    let sent = api.http().last_request();
    assert_eq!(sent.method, HttpMethod::Patch);
    assert_eq!(
        sent.body_json(),
        json!({ "notes": "derivatives done", "topics": ["t1", "t2"] })
    );
}

#[tokio::test]
async fn test_history_endpoints() {
    let api = client();
    api.http().mock_response(
        HttpMethod::Get,
        &url("/sessions/history/p1"),
        200,
        json!([session_json("completed")]),
    );
    api.http()
        .mock_response(HttpMethod::Get, &url("/sessions/"), 200, json!([]));

    assert_eq!(api.session_history("p1").await.unwrap().len(), 1);
    assert!(api.user_sessions().await.unwrap().is_empty());
}

// =========================================================
// 仪表盘
// =========================================================

#[tokio::test]
async fn test_dashboard_aggregates() {
    let api = client();
    api.http().mock_response(
        HttpMethod::Get,
        &url("/dashboard/study_time_by_course/"),
        200,
        json!([{ "course": "Calculus", "time": 5400 }]),
    );
    api.http().mock_response(
        HttpMethod::Get,
        &url("/dashboard/streaks/"),
        200,
        json!({ "streaks": [true, false, true, true, false, false, true] }),
    );

    let time = api.study_time_by_course().await.unwrap();
    assert_eq!(time[0].time, 5400.0);
    let streaks = api.streaks().await.unwrap();
    assert_eq!(streaks.streaks.len(), 7);
}
