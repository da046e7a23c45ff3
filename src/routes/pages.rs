use axum::{http::StatusCode, response::Html};

use crate::{errors::Result, views};

pub async fn home() -> Result<Html<String>> {
    views::pages::home()
}

pub async fn about() -> Result<Html<String>> {
    views::pages::about()
}

pub async fn not_found() -> Result<(StatusCode, Html<String>)> {
    Ok((StatusCode::NOT_FOUND, views::pages::page_not_found()?))
}
