//! HTML messages sent for every accepted booking.

use crate::{booking::BookingRequest, config::Provider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Confirmation sent from the operator mailbox to the client.
pub fn client_confirmation(
    booking: &BookingRequest,
    operator: &str,
    provider: &Provider,
    meeting_link: &str,
) -> EmailMessage {
    let contact_phones = if provider.phones.is_empty() {
        String::new()
    } else {
        format!("\n<p>Phone: {}</p>", provider.phones.join(", "))
    };

    let html = format!(
        "\n<h2>Appointment Confirmation</h2>\
         \n<p>Dear {name},</p>\
         \n<p>Your appointment has been scheduled with {provider}.</p>\
         \n<p><strong>Service:</strong> {service}</p>\
         \n<p><strong>Date:</strong> {date}</p>\
         \n<p><strong>Time:</strong> {time}</p>\
         \n<p><strong>Contact No.:</strong> {phone}</p>\
         \n<p><strong>Meeting Link:</strong> <a href=\"{meeting_link}\">Click here to join the meeting</a></p>\
         \n<p><strong>For any queries, please contact:</strong></p>\
         \n<p>{provider}</p>{contact_phones}\
         \n<p>We look forward to seeing you!</p>\n",
        name = booking.name,
        provider = provider.name,
        service = booking.service,
        date = booking.date,
        time = booking.time,
        phone = booking.phone,
    );

    EmailMessage {
        from: operator.to_string(),
        to: booking.email.clone(),
        subject: format!("Your Appointment Details with {}", provider.name),
        html,
    }
}

/// Booking notice the operator sends to itself.
pub fn operator_notification(
    booking: &BookingRequest,
    operator: &str,
    meeting_link: &str,
) -> EmailMessage {
    let html = format!(
        "\n<h2>New Appointment Booking</h2>\
         \n<p>A new appointment has been scheduled.</p>\
         \n<p><strong>Client Name:</strong> {name}</p>\
         \n<p><strong>Client Email:</strong> {email}</p>\
         \n<p><strong>Client Phone:</strong> {phone}</p>\
         \n<p><strong>Service:</strong> {service}</p>\
         \n<p><strong>Date:</strong> {date}</p>\
         \n<p><strong>Time:</strong> {time}</p>\
         \n<p><strong>Meeting Link:</strong> <a href=\"{meeting_link}\">Click here to join the meeting</a></p>\n",
        name = booking.name,
        email = booking.email,
        phone = booking.phone,
        service = booking.service,
        date = booking.date,
        time = booking.time,
    );

    EmailMessage {
        from: operator.to_string(),
        to: operator.to_string(),
        subject: "New Appointment Booking".to_string(),
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPERATOR: &str = "clinic@example.com";
    const LINK: &str = "https://meet.google.com/new";

    fn booking() -> BookingRequest {
        BookingRequest {
            email: "a@b.com".to_string(),
            name: "Jane".to_string(),
            date: "2024-01-01".to_string(),
            time: "10:00".to_string(),
            service: "Consult".to_string(),
            phone: "555-1234".to_string(),
        }
    }

    fn provider(phones: &[&str]) -> Provider {
        Provider {
            name: "Dr. Rao".to_string(),
            phones: phones.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn client_message_goes_from_operator_to_client() {
        let msg = client_confirmation(&booking(), OPERATOR, &provider(&[]), LINK);

        assert_eq!(msg.from, OPERATOR);
        assert_eq!(msg.to, "a@b.com");
        assert_eq!(msg.subject, "Your Appointment Details with Dr. Rao");
    }

    #[test]
    fn client_message_lists_booking_details() {
        let msg = client_confirmation(&booking(), OPERATOR, &provider(&[]), LINK);

        assert!(msg.html.contains("<p>Dear Jane,</p>"));
        assert!(msg.html.contains("<strong>Service:</strong> Consult"));
        assert!(msg.html.contains("<strong>Date:</strong> 2024-01-01"));
        assert!(msg.html.contains("<strong>Time:</strong> 10:00"));
        assert!(msg.html.contains("<strong>Contact No.:</strong> 555-1234"));
        assert!(msg.html.contains(r#"<a href="https://meet.google.com/new">"#));
        assert!(!msg.html.contains("Phone:"));
        assert!(msg.html.contains("<p>Dr. Rao</p>\n<p>We look forward to seeing you!</p>"));
    }

    #[test]
    fn client_message_includes_provider_phones_when_configured() {
        let msg = client_confirmation(
            &booking(),
            OPERATOR,
            &provider(&["555-0100", "555-0101"]),
            LINK,
        );

        assert!(msg.html.contains(
            "<p>Dr. Rao</p>\n<p>Phone: 555-0100, 555-0101</p>\n<p>We look forward"
        ));
        assert!(msg.html.ends_with("<p>We look forward to seeing you!</p>\n"));
    }

    #[test]
    fn operator_message_is_self_addressed() {
        let msg = operator_notification(&booking(), OPERATOR, LINK);

        assert_eq!(msg.from, OPERATOR);
        assert_eq!(msg.to, OPERATOR);
        assert_eq!(msg.subject, "New Appointment Booking");
        assert!(msg.html.contains("<strong>Client Name:</strong> Jane"));
        assert!(msg.html.contains("<strong>Client Email:</strong> a@b.com"));
        assert!(msg.html.contains("<strong>Client Phone:</strong> 555-1234"));
        assert!(msg.html.contains(r#"<a href="https://meet.google.com/new">"#));
    }
}
