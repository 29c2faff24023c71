use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use store::StoreError;
use thiserror::Error;

use crate::{
    layout::{PageMeta, SITE_NAME, notice, page},
    member::render_not_found,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error.")]
    Configuration,

    #[error("Error loading {subject}: {source}")]
    Query {
        subject: &'static str,
        source: StoreError,
    },

    #[error("Not found")]
    NotFound,
}

impl AppError {
    pub fn members(source: StoreError) -> Self {
        AppError::Query {
            subject: "members",
            source,
        }
    }

    pub fn member(source: StoreError) -> Self {
        AppError::Query {
            subject: "member",
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Query { .. } => StatusCode::BAD_GATEWAY,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        let body = match self {
            AppError::NotFound => render_not_found(),
            _ => page(&PageMeta::titled(SITE_NAME), &notice("error", &self.to_string())),
        };

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let query = AppError::members(StoreError::Status {
            status: 503,
            message: "unavailable".to_string(),
        });

        assert_eq!(
            AppError::Configuration.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(query.into_response().status(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_query_message_names_the_page() {
        let unavailable = || StoreError::Status {
            status: 503,
            message: "unavailable".to_string(),
        };

        assert_eq!(
            AppError::members(unavailable()).to_string(),
            "Error loading members: Store responded with 503: unavailable"
        );
        assert_eq!(
            AppError::member(unavailable()).to_string(),
            "Error loading member: Store responded with 503: unavailable"
        );
    }
}
