use crate::models::{AskRequest, AskResponse};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use gateway_core::error::AppError;

/// `POST /ask`
///
/// Always answers `200` once the body is readable JSON; completion failures
/// are reported inside `response` as `"Error: ..."`. The body is parsed
/// regardless of `Content-Type`.
pub async fn ask(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AskResponse>, AppError> {
    let request = parse_ask_request(&body)?;
    let question = request.question_text();

    tracing::info!(question_len = question.len(), "Answering question");

    let response = state.gateway.answer(&question).await;
    Ok(Json(AskResponse { response }))
}

fn parse_ask_request(body: &[u8]) -> Result<AskRequest, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!(
            "Request body must be a JSON object: {}",
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_bodies_parse() {
        assert_eq!(parse_ask_request(b"{}").unwrap().question_text(), "");
        assert_eq!(
            parse_ask_request(br#"{"question":"Why?"}"#)
                .unwrap()
                .question_text(),
            "Why?"
        );
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        let bodies: [&[u8]; 4] = [b"", b"not json", b"[1, 2]", b"\"question\""];
        for body in bodies {
            assert!(
                matches!(parse_ask_request(body), Err(AppError::BadRequest(_))),
                "accepted {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }
}
