use crate::{
    booking::{BookingRequest, ValidationError},
    config::{Config, Provider},
    dto::BookingPayload,
    mailer::{MailError, MailSender},
    templates,
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Dispatch(#[from] MailError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub meeting_link: String,
}

/// Validates a booking and emails the client, then the operator.
pub struct BookingNotifier {
    mailer: Arc<dyn MailSender>,
    operator: String,
    provider: Provider,
    meeting_link: String,
}

impl BookingNotifier {
    pub fn new(config: &Config, mailer: Arc<dyn MailSender>) -> Self {
        Self {
            mailer,
            operator: config.sender.clone(),
            provider: config.provider.clone(),
            meeting_link: config.meeting_link.clone(),
        }
    }

    pub async fn submit_booking(
        &self,
        payload: BookingPayload,
    ) -> Result<BookingConfirmation, BookingError> {
        let booking = BookingRequest::try_from(payload)?;

        let client_message = templates::client_confirmation(
            &booking,
            &self.operator,
            &self.provider,
            &self.meeting_link,
        );
        let operator_message =
            templates::operator_notification(&booking, &self.operator, &self.meeting_link);

        tracing::info!("Sending client email to: {}", booking.email);
        self.mailer.send(&client_message).await?;
        tracing::info!("Client email sent successfully");

        tracing::info!("Sending operator notification");
        self.mailer.send(&operator_message).await?;
        tracing::info!("Operator notification sent successfully");

        Ok(BookingConfirmation {
            meeting_link: self.meeting_link.clone(),
        })
    }
}
