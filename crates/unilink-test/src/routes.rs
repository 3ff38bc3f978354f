//! Route handlers imitating the platform API.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::fixtures::{self, MOCK_PASSWORD_REJECTED, MOCK_SLOW_DELAY};

type Reply = (StatusCode, Json<Value>);

pub(crate) fn router() -> Router {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/me", get(me))
        .route("/internships", get(list_internships).post(create))
        .route("/internships/{id}", get(get_internship))
        .route("/internships/{id}/apply", post(apply_internship))
        .route("/projects", get(list_projects).post(create))
        .route("/projects/{id}", get(get_project))
        .route("/projects/{id}/join", post(join_project))
        .route("/forum/posts", get(list_posts).post(create))
        .route("/forum/posts/{id}", get(get_post))
        .route("/forum/posts/{id}/comments", post(comment_post))
        .route("/chatbot/message", post(chatbot_message))
        .route("/portfolio", post(create))
        .route("/portfolio/templates", get(list_templates))
        .route("/portfolio/{id}", get(get_portfolio).put(update_portfolio))
        .route("/portfolio/{id}/share-link", get(share_link))
        .route("/slow", get(slow));

    Router::new().nest("/api", api)
}

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn failure(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "message": message })))
}

fn field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name).and_then(Value::as_str).unwrap_or_default()
}

fn find(items: Vec<Value>, id: &str) -> Option<Value> {
    items.into_iter().find(|item| field(item, "_id") == id)
}

/// Echoes a JSON object back with a freshly generated `_id`.
fn with_id(body: Value) -> Value {
    let mut fields = match body {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    fields.insert("_id".into(), Value::String(Uuid::new_v4().to_string()));
    Value::Object(fields)
}

async fn login(Json(body): Json<Value>) -> Reply {
    if field(&body, "password") == MOCK_PASSWORD_REJECTED {
        return failure(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }

    let email = field(&body, "email");
    let mut user = fixtures::user();
    user["email"] = Value::String(email.to_owned());
    ok(json!({ "token": format!("token-{email}"), "user": user }))
}

async fn register(Json(body): Json<Value>) -> Reply {
    let email = field(&body, "email");
    if email.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "Email is required");
    }

    let user = json!({
        "_id": Uuid::new_v4().to_string(),
        "name": field(&body, "name"),
        "email": email,
        "role": body.get("role").cloned().unwrap_or(Value::Null),
    });
    (
        StatusCode::CREATED,
        Json(json!({ "token": format!("token-{email}"), "user": user })),
    )
}

async fn me(headers: HeaderMap) -> Reply {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        None => failure(StatusCode::UNAUTHORIZED, "No token, authorization denied"),
        Some("Bearer expired") => failure(StatusCode::UNAUTHORIZED, "Token is not valid"),
        Some(_) => ok(fixtures::user()),
    }
}

async fn create(Json(body): Json<Value>) -> Reply {
    (StatusCode::CREATED, Json(with_id(body)))
}

async fn list_internships(Query(params): Query<HashMap<String, String>>) -> Reply {
    let search = params.get("search").map(|s| s.to_lowercase());
    let kind = params.get("type");

    let items: Vec<Value> = fixtures::internships()
        .into_iter()
        .filter(|item| {
            search
                .as_ref()
                .is_none_or(|s| field(item, "title").to_lowercase().contains(s))
        })
        .filter(|item| kind.is_none_or(|k| field(item, "type") == k))
        .collect();

    ok(Value::Array(items))
}

async fn get_internship(Path(id): Path<String>) -> Reply {
    match find(fixtures::internships(), &id) {
        Some(item) => ok(item),
        None => failure(StatusCode::NOT_FOUND, "Internship not found"),
    }
}

async fn apply_internship(Path(id): Path<String>, Json(body): Json<Value>) -> Reply {
    if find(fixtures::internships(), &id).is_none() {
        return failure(StatusCode::NOT_FOUND, "Internship not found");
    }

    let receipt = json!({
        "_id": Uuid::new_v4().to_string(),
        "internshipId": id,
        "status": "pending",
        "coverLetter": body.get("coverLetter").cloned().unwrap_or(Value::Null),
        "appliedAt": "2024-06-01T12:00:00Z",
    });
    (StatusCode::CREATED, Json(receipt))
}

async fn list_projects() -> Reply {
    ok(Value::Array(fixtures::projects()))
}

async fn get_project(Path(id): Path<String>) -> Reply {
    match find(fixtures::projects(), &id) {
        Some(item) => ok(item),
        None => failure(StatusCode::NOT_FOUND, "Project not found"),
    }
}

async fn join_project(Path(id): Path<String>) -> Reply {
    let Some(mut project) = find(fixtures::projects(), &id) else {
        return failure(StatusCode::NOT_FOUND, "Project not found");
    };

    if let Some(Value::Array(members)) = project.get_mut("members") {
        members.push(Value::String("u-1".into()));
    }
    ok(project)
}

async fn list_posts(Query(params): Query<HashMap<String, String>>) -> Reply {
    let category = params.get("category");
    let items: Vec<Value> = fixtures::posts()
        .into_iter()
        .filter(|item| category.is_none_or(|c| field(item, "category") == c))
        .collect();

    ok(Value::Array(items))
}

async fn get_post(Path(id): Path<String>) -> Reply {
    match find(fixtures::posts(), &id) {
        Some(item) => ok(item),
        None => failure(StatusCode::NOT_FOUND, "Post not found"),
    }
}

async fn comment_post(Path(id): Path<String>, Json(body): Json<Value>) -> Reply {
    if find(fixtures::posts(), &id).is_none() {
        return failure(StatusCode::NOT_FOUND, "Post not found");
    }

    let comment = json!({
        "_id": Uuid::new_v4().to_string(),
        "author": "Ada Lovelace",
        "content": field(&body, "content"),
    });
    (StatusCode::CREATED, Json(comment))
}

async fn chatbot_message(Json(body): Json<Value>) -> Reply {
    let message = field(&body, "message");
    if message == "fail" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "model unavailable" })),
        );
    }

    ok(json!({ "reply": format!("You said: {message}"), "conversationId": "conv-1" }))
}

async fn get_portfolio(Path(id): Path<String>) -> Reply {
    let portfolio = fixtures::portfolio();
    if field(&portfolio, "_id") == id {
        ok(portfolio)
    } else {
        failure(StatusCode::NOT_FOUND, "Portfolio not found")
    }
}

async fn update_portfolio(Path(id): Path<String>, Json(body): Json<Value>) -> Reply {
    let mut portfolio = fixtures::portfolio();
    if field(&portfolio, "_id") != id {
        return failure(StatusCode::NOT_FOUND, "Portfolio not found");
    }

    if let (Value::Object(target), Value::Object(changes)) = (&mut portfolio, body) {
        target.extend(changes);
    }
    ok(portfolio)
}

async fn share_link(Path(id): Path<String>) -> Reply {
    ok(json!({ "url": format!("https://unilink.dev/p/{id}") }))
}

async fn list_templates() -> Reply {
    ok(Value::Array(fixtures::templates()))
}

async fn slow() -> Reply {
    tokio::time::sleep(MOCK_SLOW_DELAY).await;
    ok(Value::Array(Vec::new()))
}
