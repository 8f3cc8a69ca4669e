use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{
    dto::{BookingPayload, ErrorResponse, SendMeetingLinkResponse},
    service::{BookingError, BookingNotifier},
};

#[debug_handler]
pub async fn send_meeting_link(
    State(notifier): State<Arc<BookingNotifier>>,
    payload: Result<Json<BookingPayload>, JsonRejection>,
) -> Response {
    // An unreadable body carries none of the required fields.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::warn!("Rejected booking body: {rejection}");
            BookingPayload::default()
        }
    };
    tracing::info!("Received booking request: {:?}", payload);

    match notifier.submit_booking(payload).await {
        Ok(confirmation) => (
            StatusCode::OK,
            Json(SendMeetingLinkResponse {
                message: "Meeting link sent successfully".to_string(),
                meet_link: confirmation.meeting_link,
            }),
        )
            .into_response(),
        Err(BookingError::Validation(e)) => {
            tracing::error!("{e}");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Missing required fields".to_string(),
                    details: None,
                }),
            )
                .into_response()
        }
        Err(BookingError::Dispatch(e)) => {
            tracing::error!("Failed to send meeting link: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to send meeting link".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}

#[debug_handler]
pub async fn health_check() -> Response {
    (StatusCode::OK, "Hello from booking notifier!").into_response()
}
