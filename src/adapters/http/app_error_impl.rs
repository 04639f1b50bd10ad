use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{adapters::http::views, application::app_error::AppError};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Html(views::message_page(&msg))).into_response()
            }
            // Flow-level outcomes are normally rendered by their handlers;
            // reaching here means a handler chose not to recover.
            AppError::DuplicateEmail
            | AppError::InvalidCredentials
            | AppError::NotVerified
            | AppError::TokenNotFoundOrExpired => (
                StatusCode::BAD_REQUEST,
                Html(views::message_page(&self.to_string())),
            )
                .into_response(),
            AppError::Database(_) | AppError::Delivery(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::message_page(
                    "Something went wrong. Please try again later.",
                )),
            )
                .into_response(),
        }
    }
}
