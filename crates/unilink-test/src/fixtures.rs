//! Seed data served by the mock backend.

use std::time::Duration;

use serde_json::{Value, json};

/// Password the mock backend always rejects with `401`.
pub const MOCK_PASSWORD_REJECTED: &str = "wrong-password";

/// How long `GET /api/slow` takes to answer.
pub const MOCK_SLOW_DELAY: Duration = Duration::from_secs(5);

pub(crate) fn user() -> Value {
    json!({
        "_id": "u-1",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "role": "student",
        "title": "Computer Science Student",
        "skills": ["Rust", "Mathematics"]
    })
}

pub(crate) fn internships() -> Vec<Value> {
    vec![
        json!({
            "_id": "i-1",
            "title": "Backend Engineering Intern",
            "company": "Acme Systems",
            "location": "Remote",
            "type": "full-time",
            "stipend": "$2,000/month",
            "duration": "3 months",
            "skills": ["Rust", "PostgreSQL"],
            "createdAt": "2024-03-01T09:00:00Z"
        }),
        json!({
            "_id": "i-2",
            "title": "Product Design Intern",
            "company": "Northwind",
            "location": "Berlin",
            "type": "part-time",
            "skills": ["Figma"]
        }),
    ]
}

pub(crate) fn projects() -> Vec<Value> {
    vec![
        json!({
            "_id": "p-1",
            "title": "Campus Marketplace",
            "description": "Buy and sell textbooks between students",
            "techStack": ["Rust", "React"],
            "owner": "u-2",
            "members": ["u-2"],
            "status": "open"
        }),
        json!({
            "_id": "p-2",
            "title": "Study Buddy Matcher",
            "techStack": ["Python"],
            "owner": "u-3",
            "members": ["u-3", "u-4"],
            "status": "in-progress"
        }),
    ]
}

pub(crate) fn posts() -> Vec<Value> {
    vec![
        json!({
            "_id": "f-1",
            "title": "How do you prepare for system design interviews?",
            "content": "Looking for resources.",
            "author": "Grace Hopper",
            "category": "career",
            "tags": ["interviews"],
            "comments": [
                { "_id": "c-1", "author": "Alan Turing", "content": "Start with the classics." }
            ],
            "createdAt": "2024-04-02T10:30:00Z"
        }),
        json!({
            "_id": "f-2",
            "title": "Show and tell: my first Rust crate",
            "content": "Feedback welcome!",
            "author": "Ada Lovelace",
            "category": "projects",
            "tags": ["rust"]
        }),
    ]
}

pub(crate) fn portfolio() -> Value {
    json!({
        "_id": "pf-1",
        "title": "Ada's Portfolio",
        "templateId": "t-minimal",
        "theme": "light",
        "isPublic": false,
        "sections": [
            { "type": "about", "title": "About", "content": "Analyst and programmer." }
        ],
        "updatedAt": "2024-05-05T08:00:00Z"
    })
}

pub(crate) fn templates() -> Vec<Value> {
    vec![
        json!({ "_id": "t-minimal", "name": "Minimal", "description": "Clean single column" }),
        json!({ "_id": "t-grid", "name": "Grid", "previewUrl": "https://cdn.example.com/grid.png" }),
    ]
}
