use crate::models::ConfirmationView;

pub fn acknowledgment(cafe_name: &str) -> String {
    format!(
        "🎉 Table Booked Successfully at {cafe_name}!\n\n\
         வெற்றிகரமாக முன்பதிவு செய்யப்பட்டது!\n\n\
         Your Tamil dining experience awaits! We'll contact you shortly."
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// HTML fragment summarising an accepted booking.
pub fn render_confirmation(view: &ConfirmationView) -> String {
    let name = escape_html(&view.name);
    let email = escape_html(&view.email);
    let phone = escape_html(&view.phone);
    let formatted_date = escape_html(&view.formatted_date);
    let time = escape_html(&view.time);
    let guests = escape_html(&view.guests);
    let message = escape_html(&view.message);

    format!(
        "<div class=\"confirmation\">\n\
         \x20 <div class=\"confirmation-guest\">\n\
         \x20   <strong>Guest Information:</strong><br>\n\
         \x20   <span>Name: {name}</span><br>\n\
         \x20   <span>Email: {email}</span><br>\n\
         \x20   <span>Phone: {phone}</span>\n\
         \x20 </div>\n\
         \x20 <div class=\"confirmation-reservation\">\n\
         \x20   <strong>Reservation Details:</strong><br>\n\
         \x20   <span>Date: {formatted_date}</span><br>\n\
         \x20   <span>Time: {time}</span><br>\n\
         \x20   <span>Guests: {guests}</span>\n\
         \x20 </div>\n\
         \x20 <div class=\"confirmation-requests\">\n\
         \x20   <strong>Special Requests:</strong><br>\n\
         \x20   <span>{message}</span>\n\
         \x20 </div>\n\
         </div>\n"
    )
}
