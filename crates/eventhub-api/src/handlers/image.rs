//! Event image handler — streams static image files.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tokio_util::io::ReaderStream;
use uuid::Uuid;

use eventhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /EventImage/{event_id}/{filename}
pub async fn get_image(
    State(state): State<AppState>,
    Path((event_id, filename)): Path<(Uuid, String)>,
) -> Result<Response, ApiError> {
    let path = state.image_resolver.resolve(event_id, &filename)?;

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|_| AppError::not_found("Image not found"))?;

    let stream = ReaderStream::new(file);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&filename))
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("cover.jpg"), "image/jpeg");
        assert_eq!(content_type_for("cover.JPEG"), "image/jpeg");
        assert_eq!(content_type_for("logo.png"), "image/png");
        assert_eq!(content_type_for("unknown.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
