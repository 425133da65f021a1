use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use crate::models::{BookingField, RawBookingForm};
use crate::services::booking::{min_booking_date, submit_and_notify};
use crate::services::confirmation::{acknowledgment, escape_html, render_confirmation};
use crate::state::AppState;

static BOOKING_HTML: &str = include_str!("../web/booking.html");

/// Single-pass `{{key}}` substitution. Unknown keys render empty.
fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                if let Some((_, value)) = vars.iter().find(|(k, _)| *k == key) {
                    out.push_str(value);
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Renders the booking page. `values` repopulates the form; `None` leaves it empty.
pub fn render_booking_page(
    cafe_name: &str,
    min_date: &str,
    values: Option<&RawBookingForm>,
    notice: &str,
    confirmation: &str,
) -> String {
    let value = |field: BookingField| {
        values
            .and_then(|v| v.get(field.as_str()))
            .map(|s| escape_html(s))
            .unwrap_or_default()
    };

    let vars = [
        ("cafe_name", escape_html(cafe_name)),
        ("min_date", min_date.to_string()),
        ("notice", notice.to_string()),
        ("confirmation", confirmation.to_string()),
        ("name", value(BookingField::Name)),
        ("email", value(BookingField::Email)),
        ("phone", value(BookingField::Phone)),
        ("guests", value(BookingField::Guests)),
        ("date", value(BookingField::Date)),
        ("time", value(BookingField::Time)),
        ("message", value(BookingField::Message)),
    ];

    fill_template(BOOKING_HTML, &vars)
}

fn today() -> String {
    min_booking_date(chrono::Local::now().date_naive())
}

// GET /
pub async fn booking_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_booking_page(&state.config.cafe_name, &today(), None, "", ""))
}

// POST /booking
pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RawBookingForm>,
) -> Response {
    let ack = acknowledgment(&state.config.cafe_name);

    match submit_and_notify(&form, Some(state.notifier.as_ref()), &ack).await {
        Ok(view) => {
            let notice = format!("<p class=\"notice success\">{}</p>", escape_html(&ack));
            let page = render_booking_page(
                &state.config.cafe_name,
                &today(),
                None,
                &notice,
                &render_confirmation(&view),
            );
            Html(page).into_response()
        }
        Err(e) => {
            let notice = format!(
                "<p class=\"notice field-error\" data-field=\"{}\">{}</p>",
                e.field(),
                escape_html(&e.user_message())
            );
            let page = render_booking_page(
                &state.config.cafe_name,
                &today(),
                Some(&form),
                &notice,
                "",
            );
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_single_pass() {
        let out = fill_template(
            "<b>{{a}}</b>{{b}}{{missing}}",
            &[("a", "{{b}}".to_string()), ("b", "x".to_string())],
        );
        assert_eq!(out, "<b>{{b}}</b>x");
    }

    #[test]
    fn test_fill_template_unterminated() {
        assert_eq!(fill_template("a {{b", &[]), "a {{b");
    }

    #[test]
    fn test_empty_page_has_min_date() {
        let page = render_booking_page("BontaTea Café", "2026-10-16", None, "", "");
        assert!(page.contains("min=\"2026-10-16\""));
        assert!(page.contains("name=\"name\" value=\"\""));
        assert!(page.contains("Book a Table at BontaTea Café"));
    }

    #[test]
    fn test_page_repopulates_escaped_values() {
        let mut values = RawBookingForm::new();
        values.insert("name".to_string(), "Raj \"R\"".to_string());
        values.insert("message".to_string(), "<b>hi</b>".to_string());
        let page = render_booking_page("Cafe", "2026-10-16", Some(&values), "", "");
        assert!(page.contains("value=\"Raj &quot;R&quot;\""));
        assert!(page.contains("&lt;b&gt;hi&lt;/b&gt;</textarea>"));
    }
}
