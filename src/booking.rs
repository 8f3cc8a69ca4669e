use crate::dto::BookingPayload;

/// A booking with every required field present and non-empty.
///
/// Values are free-form: dates, times and phone numbers are carried as the
/// client typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub email: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl TryFrom<BookingPayload> for BookingRequest {
    type Error = ValidationError;

    fn try_from(payload: BookingPayload) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();

        let mut require = |field: &'static str, value: Option<String>| match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(field);
                String::new()
            }
        };

        let request = Self {
            email: require("email", payload.email),
            name: require("name", payload.name),
            date: require("date", payload.date),
            time: require("time", payload.time),
            service: require("service", payload.service),
            phone: require("phone", payload.phone),
        };

        if missing.is_empty() {
            Ok(request)
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}
