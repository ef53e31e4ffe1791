//! Post payload validation, run as an extractor before handler logic.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use blog_core::domain::PostDraft;
use blog_shared::dto::PostPayload;

use super::error::AppError;

/// A request body that passed validation.
///
/// # Example
/// ```ignore
/// async fn create(ValidPost(draft): ValidPost) -> impl Responder { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ValidPost(pub PostDraft);

impl FromRequest for ValidPost {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<PostPayload>::from_request(req, payload);

        Box::pin(async move {
            let body = body
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

            validate_post(body.into_inner())
                .map(ValidPost)
                .map_err(AppError::Validation)
        })
    }
}

/// Check that every field is present and well-formed, collecting all problems.
pub fn validate_post(payload: PostPayload) -> Result<PostDraft, Vec<String>> {
    let mut errors = Vec::new();

    let title = required_text("title", payload.title, &mut errors);
    let image = required_text("image", payload.image, &mut errors);
    let category_id = required_id("category_id", payload.category_id, &mut errors);
    let description = required_text("description", payload.description, &mut errors);
    let content = required_text("content", payload.content, &mut errors);
    let status_id = required_id("status_id", payload.status_id, &mut errors);

    let (
        Some(title),
        Some(image),
        Some(category_id),
        Some(description),
        Some(content),
        Some(status_id),
    ) = (title, image, category_id, description, content, status_id)
    else {
        return Err(errors);
    };

    Ok(PostDraft {
        title,
        image,
        category_id,
        description,
        content,
        status_id,
    })
}

fn required_text(field: &str, value: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    match value {
        None => {
            errors.push(format!("{field} is required"));
            None
        }
        Some(text) if text.trim().is_empty() => {
            errors.push(format!("{field} must not be empty"));
            None
        }
        Some(text) => Some(text),
    }
}

fn required_id(field: &str, value: Option<i64>, errors: &mut Vec<String>) -> Option<i32> {
    let Some(raw) = value else {
        errors.push(format!("{field} is required"));
        return None;
    };

    let id = i32::try_from(raw).ok().filter(|id| *id > 0);
    if id.is_none() {
        errors.push(format!("{field} must be a positive integer"));
    }
    id
}
