use crate::domain::NewRoom;
use crate::error::ApiError;
use crate::features::rooms::model::{
    image_url_for, parse_price, ImageUrlStyle, RoomForm, UploadedImage,
};
use crate::io::image_basename;
use crate::AppState;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::http::{header, HeaderMap, StatusCode};
use tracing::{info, warn};

/// Checks what the client sent before any of the form is read.
///
/// A non-multipart body is a 400, and a declared `Content-Length` over the limit is a 413.
/// Bodies without a length are still cut off by `DefaultBodyLimit` while streaming.
pub fn accept_multipart(
    headers: &HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
    max_upload_bytes: usize,
) -> Result<Multipart, ApiError> {
    let multipart = multipart.map_err(|rejection| {
        ApiError::bad_request(format!("Invalid multipart form: {}", rejection.body_text()))
    })?;

    let declared_length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());

    if declared_length.is_some_and(|length| length > max_upload_bytes) {
        return Err(ApiError::payload_too_large(max_upload_bytes));
    }

    Ok(multipart)
}

// keep the cause: a body cut off by the size limit is reported as such
fn multipart_error(e: MultipartError, max_upload_bytes: usize) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::payload_too_large(max_upload_bytes);
    }
    ApiError::bad_request(format!("Invalid multipart form: {}", e.body_text()))
}

/// Drains a multipart room form. Unknown fields are ignored.
pub async fn read_room_form(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> Result<RoomForm, ApiError> {
    let mut form = RoomForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_upload_bytes))?
    {
        let field_name = field.name().map(|n| n.to_string());
        match field_name.as_deref() {
            Some("image") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, max_upload_bytes))?;
                form.image = Some(UploadedImage {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            Some(name @ ("name" | "description" | "price")) => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, max_upload_bytes))?;
                match name {
                    "name" => form.name = value,
                    "description" => form.description = value,
                    _ => form.price = parse_price(&value),
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

// write the image, then insert the row pointing at it
// there is no transaction across the two: if the insert fails the image is removed again
pub async fn create_room_with_image(
    state: &AppState,
    form: RoomForm,
    style: ImageUrlStyle,
) -> Result<String, ApiError> {
    let image = form
        .image
        .ok_or_else(|| ApiError::bad_request("Image file not found"))?;

    if image_basename(&image.filename).is_none() {
        return Err(ApiError::bad_request("Invalid image filename"));
    }

    let stored = state
        .images
        .save(&image.filename, &image.bytes)
        .await
        .map_err(|e| ApiError::internal("Failed to save image", e))?;

    let image_url = image_url_for(style, &state.config.public_base_url, &stored.filename);

    let new_room = NewRoom {
        name: form.name,
        description: form.description,
        image_url: image_url.clone(),
        price: form.price,
    };

    match state.rooms.create_room(&new_room).await {
        Ok(id) => {
            info!("Created room #{}: {}", id, new_room);
            Ok(image_url)
        }
        Err(e) => {
            if let Err(cleanup) = state.images.remove(&stored.filename).await {
                warn!(
                    "Room insert failed and image {} could not be removed: {:#}",
                    stored.filename, cleanup
                );
            }
            Err(ApiError::internal("Failed to save room", e))
        }
    }
}
