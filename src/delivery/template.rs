//! Email rendering for enquiries.

use crate::form::FormSubmission;

/// Subject line for an enquiry email.
pub fn subject(submission: &FormSubmission) -> String {
    format!(
        "Ny henvendelse: {} - {}",
        submission.job_type, submission.name
    )
}

/// HTML body listing every submitted field. Visitor input is escaped.
pub fn html_body(submission: &FormSubmission) -> String {
    let site_visit = if submission.want_site_visit { "Ja" } else { "Nei" };
    let sent = submission.timestamp.format("%d.%m.%Y, %H:%M:%S");

    format!(
        "<h2>Ny henvendelse fra nettsiden</h2>\n\
         <p><strong>Navn:</strong> {name}</p>\n\
         <p><strong>E-post:</strong> {email}</p>\n\
         <p><strong>Telefon:</strong> {phone}</p>\n\
         <p><strong>Adresse:</strong> {address}</p>\n\
         <p><strong>Type jobb:</strong> {job_type}</p>\n\
         <p><strong>Ønsker befaring:</strong> {site_visit}</p>\n\
         <h3>Beskrivelse:</h3>\n\
         <p>{description}</p>\n\
         <hr>\n\
         <p><small>Sendt: {sent}</small></p>\n",
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        phone = escape_html(&submission.phone),
        address = escape_html(submission.address_or_default()),
        job_type = escape_html(&submission.job_type),
        description = escape_html(&submission.description),
    )
}

/// Escape the five characters with special meaning in HTML text and attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn submission() -> FormSubmission {
        FormSubmission {
            name: "Ola <b>Nordmann</b>".to_string(),
            email: "ola@example.no".to_string(),
            phone: "12345678".to_string(),
            address: String::new(),
            job_type: "reparasjon".to_string(),
            description: "Gravemaskin & tilhenger".to_string(),
            want_site_visit: true,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap(),
        }
    }

    #[test]
    fn test_subject() {
        assert_eq!(
            subject(&submission()),
            "Ny henvendelse: reparasjon - Ola <b>Nordmann</b>"
        );
    }

    #[test]
    fn test_html_body_contents() {
        let html = html_body(&submission());
        assert!(html.contains("<p><strong>Navn:</strong> Ola &lt;b&gt;Nordmann&lt;/b&gt;</p>"));
        assert!(html.contains("<strong>Adresse:</strong> Ikke oppgitt"));
        assert!(html.contains("<strong>Ønsker befaring:</strong> Ja"));
        assert!(html.contains("Gravemaskin &amp; tilhenger"));
        assert!(html.contains("Sendt: 05.03.2024, 14:07:09"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'"#), "&lt;a href=&quot;x&quot;&gt;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
