use anyhow::Context;
use serde_json::json;
use unilink_core::types::{LoginRequest, RegisterRequest};

use super::{App, Output};

pub(super) async fn login(app: &App, email: String, password: String) -> anyhow::Result<Output> {
    let session = app
        .services
        .auth
        .login(&LoginRequest { email, password })
        .await
        .context("login failed")?;
    Output::json(&session.user)
}

pub(super) async fn register(
    app: &App,
    name: String,
    email: String,
    password: String,
    role: Option<String>,
) -> anyhow::Result<Output> {
    let request = RegisterRequest {
        name,
        email,
        password,
        role,
    };
    let session = app
        .services
        .auth
        .register(&request)
        .await
        .context("registration failed")?;
    Output::json(&session.user)
}

pub(super) fn logout(app: &App) -> anyhow::Result<Output> {
    app.services.auth.logout().context("failed to clear token")?;
    Ok(Output::Json(json!({ "loggedOut": true })))
}

pub(super) async fn me(app: &App) -> anyhow::Result<Output> {
    let user = app
        .services
        .auth
        .fetch_profile()
        .await
        .context("failed to fetch profile")?;
    Output::json(&user)
}
