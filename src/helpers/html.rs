/// Escapes text for use inside HTML element content and quoted attributes.
///
/// `{` is escaped too so user data can never form a `{{PLACEHOLDER}}`.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replaces each `{{KEY}}` in `template` with its value. Values are inserted
/// verbatim; escape them first.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |page, (key, value)| {
        page.replace(&format!("{{{{{}}}}}", key), value)
    })
}

/// `<ul>` of escaped items, or nothing when there are none.
pub fn list(items: &[String], class: &str) -> String {
    if items.is_empty() {
        return String::new();
    }

    let entries: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul class=\"{}\">{}</ul>", escape(class), entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_placeholders() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry' {{BODY}}</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39; &#123;&#123;BODY}}&lt;/a&gt;"
        );
    }

    #[test]
    fn render_fills_every_occurrence() {
        let page = render("<h1>{{TITLE}}</h1><title>{{TITLE}}</title>{{BODY}}", &[("TITLE", "Gold"), ("BODY", "<p>x</p>")]);

        assert_eq!(page, "<h1>Gold</h1><title>Gold</title><p>x</p>");
    }

    #[test]
    fn escaped_values_cannot_inject_placeholders() {
        let page = render("{{A}}|{{B}}", &[("A", escape("{{B}}").as_str()), ("B", "b")]);

        assert_eq!(page, "&#123;&#123;B}}|b");
    }

    #[test]
    fn list_is_empty_without_items() {
        assert_eq!(list(&[], "errors"), "");
        assert_eq!(
            list(&["a < b".to_string()], "errors"),
            "<ul class=\"errors\"><li>a &lt; b</li></ul>"
        );
    }
}
