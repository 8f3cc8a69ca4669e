use serde::{Deserialize, Serialize};

/// Booking form as submitted by the frontend. Every field may be absent here;
/// presence is checked when converting into a `BookingRequest`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPayload {
    pub email: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub service: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMeetingLinkResponse {
    pub message: String,
    #[serde(rename = "meetLink")]
    pub meet_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
