//! JSON registration endpoint.
//!
//! Unlike form binding, a JSON body is converted as a whole: if any field has
//! the wrong type the request is rejected before validation runs.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use itemservice_items::ItemSaveForm;

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ItemSaveForm>, JsonRejection>,
) -> axum::response::Response {
    let Json(form) = match body {
        Ok(v) => v,
        Err(rejection) => {
            tracing::info!(error = %rejection.body_text(), "unreadable item body");
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "message_not_readable",
                rejection.body_text(),
            );
        }
    };

    let report = services.validate_item_body(&form);
    if report.has_errors() {
        return (
            StatusCode::BAD_REQUEST,
            Json(dto::error_views(&report, services.messages())),
        )
            .into_response();
    }

    (StatusCode::OK, Json(form)).into_response()
}
