//! HTTP route handlers.
//!
//! Every handler re-reads the file store; there is no cached state to
//! invalidate. Hard failures become [`ServerError`] responses, while soft
//! scan problems (stray files, unreadable entries) are logged and the page
//! still renders.

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use hibi_core::pagination::{paginate, parse_page_param};
use hibi_core::sidebar::build_sidebar;
use hibi_core::{Entry, EntryDate, QueryError};
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth;
use crate::error::ServerError;
use crate::state::AppState;
use crate::templates;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditQuery {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryForm {
    date: String,
    title: String,
    content: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    date: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    password: String,
}

pub async fn root() -> Redirect {
    Redirect::to("/blog")
}

pub async fn blog_index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ServerError> {
    let result = state.store().read_summaries()?;
    warn_on_query_errors(&result.errors);

    let side_list = build_sidebar(&result.entries);
    let page = paginate(&result.entries, parse_page_param(query.page.as_deref()));
    Ok(Html(templates::blog_index(&page, &side_list)))
}

pub async fn blog_entry(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Html<String>, ServerError> {
    let date = parse_date(&date)?;
    let entry = state.store().read_entry(date, false)?;

    let result = state.store().read_summaries()?;
    warn_on_query_errors(&result.errors);
    let side_list = build_sidebar(&result.entries);
    Ok(Html(templates::blog_entry(&entry, &side_list)))
}

pub async fn admin_index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    if !auth::is_admin(&state, &headers) {
        return Ok(Redirect::to("/admin/login").into_response());
    }

    let result = state.store().read_summaries()?;
    warn_on_query_errors(&result.errors);
    let has_todays_entry = state.store().has_entry(EntryDate::today());
    Ok(Html(templates::admin_index(&result.entries, has_todays_entry)).into_response())
}

pub async fn admin_edit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EditQuery>,
) -> Result<Response, ServerError> {
    if !auth::is_admin(&state, &headers) {
        return Ok(Redirect::to("/admin/login").into_response());
    }

    let (entry, page_title) = match query.date.as_deref() {
        Some(raw) => {
            let date = parse_date(raw)?;
            let entry = state.store().read_entry(date, false)?;
            let page_title = format!("Edit entry ({})", date.hyphenated());
            (entry, page_title)
        }
        None => (
            Entry {
                date: EntryDate::today(),
                title: String::new(),
                content: String::new(),
            },
            "New entry".to_string(),
        ),
    };
    Ok(Html(templates::edit_form(&entry, &page_title)).into_response())
}

pub async fn admin_post_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<EntryForm>,
) -> Result<Response, ServerError> {
    if !auth::is_admin(&state, &headers) {
        return Ok(Redirect::to("/admin/login").into_response());
    }

    let date = parse_date(&form.date)?;
    let path = state
        .store()
        .write_entry(date, form.title.trim(), &form.content)?;
    info!(%date, path = %path.display(), "saved entry");
    Ok(Redirect::to("/admin").into_response())
}

pub async fn admin_delete_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<DeleteForm>,
) -> Result<Response, ServerError> {
    if !auth::is_admin(&state, &headers) {
        return Ok(Redirect::to("/admin/login").into_response());
    }

    let date = parse_date(&form.date)?;
    state.store().delete_entry(date)?;
    info!(%date, "deleted entry");
    Ok(Redirect::to("/admin").into_response())
}

pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let unset = state.credentials().load()?.is_none();
    Ok(Html(templates::login_page(unset, false)))
}

pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ServerError> {
    let Some(cred) = state.credentials().load()? else {
        return Ok(Html(templates::login_page(true, false)).into_response());
    };

    if cred.matches(&form.password) {
        let cookie = auth::login_cookie(&cred.digest_hex());
        Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/admin")).into_response())
    } else {
        warn!("failed admin login attempt");
        Ok(Html(templates::login_page(false, true)).into_response())
    }
}

pub async fn logout() -> Response {
    (
        [(header::SET_COOKIE, auth::logout_cookie())],
        Redirect::to("/blog"),
    )
        .into_response()
}

fn parse_date(raw: &str) -> Result<EntryDate, ServerError> {
    EntryDate::parse(raw).map_err(|err| ServerError::BadRequest(err.to_string()))
}

fn warn_on_query_errors(errors: &[QueryError]) {
    for error in errors {
        match error {
            QueryError::InvalidName { path, error } => {
                warn!(path = %path.display(), %error, "skipped stray file in entries directory");
            }
            QueryError::FileError { path, error } => {
                warn!(path = %path.display(), %error, "failed to read entry");
            }
        }
    }
}
