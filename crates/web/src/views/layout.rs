use axum::http::StatusCode;

use crate::flash::Flash;

/// Escapes text for interpolation into HTML.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Wraps page content in the shared chrome, with the flash banner when one
/// is pending.
pub fn page(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let banner = flash
        .map(|f| {
            format!(
                r#"<p class="flash flash-{}">{}</p>"#,
                escape(&f.category),
                escape(&f.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<header><h1><a href="/">Enduro Records</a></h1></header>
{banner}
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Landing page.
pub fn index_page(flash: Option<&Flash>) -> String {
    page(
        "Enduro Records",
        flash,
        r#"<ul>
<li><a href="/enduros/">Enduros</a></li>
<li><a href="/enduros/create/">Register a new enduro</a></li>
</ul>"#,
    )
}

/// Error page used by the web error type.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h2>{}</h2>\n<p>{}</p>",
        escape(status.canonical_reason().unwrap_or("Error")),
        escape(message)
    );
    page(&status.as_u16().to_string(), None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape(r#"<b a="1">&'"#),
            "&lt;b a=&quot;1&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn banner_renders_only_with_a_flash() {
        let flash = Flash {
            message: "Saved".into(),
            category: "success".into(),
        };
        assert!(page("t", Some(&flash), "").contains("flash-success"));
        assert!(!page("t", None, "").contains("flash-"));
    }
}
