//! HTML pages.

use axum::response::Html;

use crate::assistant::replies::title_case;
use crate::store::Policies;

pub const LOGIN: &str = include_str!("../../templates/login.html");
pub const REGISTER: &str = include_str!("../../templates/register.html");
const INDEX: &str = include_str!("../../templates/index.html");

pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN)
}

pub async fn register_page() -> Html<&'static str> {
    Html(REGISTER)
}

/// The chat page greeting `name` and listing `policies`.
pub fn render_index(name: &str, policies: &Policies) -> String {
    let items = policies
        .iter()
        .map(|(policy, text)| {
            format!(
                "        <li><strong>{}</strong>: {}</li>",
                escape_html(&title_case(policy)),
                escape_html(text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let name = escape_html(name);

    fill(INDEX, |key| match key {
        "name" => Some(name.as_str()),
        "policies" => Some(items.as_str()),
        _ => None,
    })
}

/// Substitute `{{key}}` placeholders in one left-to-right pass. Substituted
/// text is never rescanned; unknown keys are left as written.
fn fill<'a>(template: &str, value: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after
            .find("}}")
            .and_then(|end| value(&after[..end]).map(|v| (end, v)))
        {
            Some((end, v)) => {
                out.push_str(v);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b onclick="x">Tom & 'Jerry'</b>"#),
            "&lt;b onclick=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_index() {
        let policies = Policies::from_pairs([("it", "Use <strong> passwords.")]);
        let page = render_index("Priya <admin>", &policies);

        assert!(page.contains("Hello, Priya &lt;admin&gt;"));
        assert!(page.contains("<li><strong>It</strong>: Use &lt;strong&gt; passwords.</li>"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_placeholders_in_values_are_not_expanded() {
        let policies = Policies::from_pairs([("leave", "Say {{name}} twice.")]);
        let page = render_index("{{policies}}\nEve", &policies);

        assert!(page.contains("Hello, {{policies}}\nEve</span>"));
        assert_eq!(page.matches("<li>").count(), 1);
        assert!(page.contains("Say {{name}} twice."));
    }

    #[test]
    fn test_fill_leaves_unknown_keys() {
        let out = fill("a {{x}} b {{y}} {{", |key| (key == "x").then_some("1"));
        assert_eq!(out, "a 1 b {{y}} {{");
    }
}
