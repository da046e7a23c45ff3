use axum::{http::StatusCode, response::IntoResponse};
use surrealdb::Error as SError;

use thiserror::Error;
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("SurrealDb Error: {0}")]
    SurrealError(#[from] SError),

    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization Error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Config Error: {0}")]
    ConfigError(#[from] figment::Error),

    #[error("Template Error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Validator Error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Form Rejection Error: {0}")]
    AxumFormRejection(#[from] axum::extract::rejection::FormRejection),

    #[error("Json Rejection Error: {0}")]
    AxumJsonRejection(#[from] axum::extract::rejection::JsonRejection),

    #[error("Not Found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let internal = || {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Error".to_string(),
            )
        };
        let (status, message) = match self {
            Error::SurrealError(error) => {
                error!("Surreal Error:{:#?}", error);
                internal()
            }
            Error::IoError(error) => {
                error!("Io Error:{:#?}", error);
                internal()
            }
            Error::SerdeJsonError(error) => {
                error!("Serialization Error:{:#?}", error);
                internal()
            }
            Error::ConfigError(error) => {
                error!("Config Error:{:#?}", error);
                internal()
            }
            Error::TemplateError(error) => {
                error!("Template Error:{:#?}", error);
                internal()
            }
            Error::ValidationError(error) => {
                let message = format!("Input validation error: [{}]", error).replace('\n', ", ");
                (StatusCode::BAD_REQUEST, message)
            }
            Error::AxumFormRejection(error) => (StatusCode::BAD_REQUEST, error.to_string()),
            Error::AxumJsonRejection(error) => (StatusCode::BAD_REQUEST, error.to_string()),
            Error::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };
        (status, message).into_response()
    }
}
