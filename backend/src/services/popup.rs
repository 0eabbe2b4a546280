//! Popup bodies shared by both map renderers.

/// Escape text for safe inclusion in popup HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render `(label, value)` pairs as `<b>label:</b> value` lines joined by `<br>`.
pub fn popup_html<L, V>(fields: &[(L, V)]) -> String
where
    L: AsRef<str>,
    V: AsRef<str>,
{
    fields
        .iter()
        .map(|(label, value)| {
            format!(
                "<b>{}:</b> {}",
                escape_html(label.as_ref()),
                escape_html(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("<br>")
}
