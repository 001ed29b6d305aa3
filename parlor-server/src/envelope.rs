use axum::Json;
use axum::http::StatusCode;
use parlor_model::PageMeta;
use serde::Serialize;

/// The generic response envelope wrapped around every payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub meta: Option<PageMeta>,
    pub data: Option<T>,
    pub message: &'static str,
    pub error: Option<String>,
}

/// 200 with a bare payload.
pub fn success<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        meta: None,
        data: Some(data),
        message: "success",
        error: None,
    })
}

/// 200 with pagination metadata.
pub fn success_with_meta<T: Serialize>(meta: PageMeta, data: T) -> Json<Envelope<T>> {
    Json(Envelope {
        meta: Some(meta),
        data: Some(data),
        message: "success",
        error: None,
    })
}

/// 201 for freshly created rows.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, success(data))
}

/// The failure envelope; used by [`crate::errors::AppError`].
pub fn failure(message: String) -> Envelope<()> {
    Envelope {
        meta: None,
        data: None,
        message: "failed",
        error: Some(message),
    }
}
