//! Form endpoints: list, detail, add form, edit form.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Form, Path},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Json, Router,
};

use itemservice_validation::FormValues;

use crate::app::dto::{self, FormView, VIEW_ADD_FORM, VIEW_EDIT_FORM};
use crate::app::errors;
use crate::app::services::{AppServices, Submission};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/add", get(add_form).post(add_item))
        .route("/:id", get(get_item))
        .route("/:id/edit", get(edit_form).post(edit_item))
}

pub fn item_url(id: impl core::fmt::Display) -> String {
    format!("/validation/items/{id}")
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.items().find_all() {
        Ok(items) => {
            let items: Vec<serde_json::Value> = items.iter().map(dto::item_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.items().find_by_id(id) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_form() -> Json<FormView> {
    Json(FormView::empty(VIEW_ADD_FORM))
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Form(values): Form<HashMap<String, String>>,
) -> axum::response::Response {
    let values = FormValues::from(values);

    match services.add_item(&values) {
        Ok(Submission::Saved(item)) => {
            Redirect::to(&format!("{}?status=true", item_url(item.id_typed()))).into_response()
        }
        Ok(Submission::Invalid { errors, .. }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(FormView::rejected(VIEW_ADD_FORM, &values, &errors, services.messages())),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn edit_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.items().find_by_id(id) {
        Ok(item) => (StatusCode::OK, Json(FormView::for_item(VIEW_EDIT_FORM, &item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn edit_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Form(values): Form<HashMap<String, String>>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let values = FormValues::from(values);

    match services.edit_item(id, &values) {
        Ok(Submission::Saved(item)) => Redirect::to(&item_url(item.id_typed())).into_response(),
        Ok(Submission::Invalid { errors, .. }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(FormView::rejected(VIEW_EDIT_FORM, &values, &errors, services.messages())),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
