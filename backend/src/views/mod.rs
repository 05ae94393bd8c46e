//! Server-rendered HTML for every DevConnect page.
//!
//! Pages are plain strings assembled with `format!`. Everything that can come
//! from a user (emails, names, form values) goes through `escape` first.

pub mod dashboards;
pub mod forms;
pub mod pages;

use crate::auth::models::{Role, UserRecord};
use crate::navigation;

pub const BRAND: &str = "DevConnect";

/// Minimal HTML escaping for text and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Full document with navbar.
pub fn page(title: &str, user: Option<&UserRecord>, body: &str) -> String {
    render(title, user, "", body)
}

/// Same as `page`, but the browser moves on to `to` after `after_secs`.
pub fn redirecting_page(
    title: &str,
    user: Option<&UserRecord>,
    body: &str,
    to: &str,
    after_secs: u32,
) -> String {
    let head = format!(
        r#"<meta http-equiv="refresh" content="{}; url={}">"#,
        after_secs,
        escape(to)
    );
    render(title, user, &head, body)
}

fn render(title: &str, user: Option<&UserRecord>, head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {head}
    <title>{title} | {brand}</title>
    <style>
{css}
    </style>
</head>
<body>
{nav}
<main>
{body}
</main>
</body>
</html>"#,
        head = head,
        title = escape(title),
        brand = BRAND,
        css = CSS,
        nav = navbar(user),
        body = body,
    )
}

/// Login/signup choices when signed out, a logout button when signed in.
pub fn navbar(user: Option<&UserRecord>) -> String {
    let session_links = match user {
        None => {
            let mut links = String::new();
            for role in Role::ALL {
                links.push_str(&format!(
                    r#"<a href="{}">Login as {}</a>"#,
                    navigation::login_path(role),
                    role_label(role)
                ));
            }
            for role in Role::ALL {
                links.push_str(&format!(
                    r#"<a class="cta" href="{}">Signup as {}</a>"#,
                    navigation::signup_path(role),
                    role_label(role)
                ));
            }
            links
        }
        Some(user) => format!(
            r#"<a href="{dashboard}">Dashboard</a>
        <span class="who">{name}</span>
        <form method="post" action="/logout" class="inline"><button type="submit">Logout</button></form>"#,
            dashboard = navigation::dashboard_path(user.role),
            name = escape(&user.name),
        ),
    };

    format!(
        r#"<nav>
    <a class="brand" href="/">{brand}</a>
    <div class="links">
        <a href="/">Home</a>
        {session_links}
    </div>
</nav>"#,
        brand = BRAND,
        session_links = session_links,
    )
}

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Developer => "Developer",
        Role::User => "User",
    }
}

const CSS: &str = r#"
* { box-sizing: border-box; }
body { font-family: system-ui, -apple-system, sans-serif; margin: 0; color: #1f2937; background: #f9fafb; }
nav { display: flex; justify-content: space-between; align-items: center; padding: 0 24px; height: 64px; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
nav .brand { font-size: 1.25rem; font-weight: 700; color: #2563eb; text-decoration: none; }
nav .links { display: flex; gap: 16px; align-items: center; }
nav .links a { color: #374151; text-decoration: none; }
nav .links a.cta { background: #2563eb; color: #fff; padding: 6px 10px; border-radius: 6px; }
main { max-width: 1100px; margin: 0 auto; padding: 32px 16px; }
.card { background: #fff; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,.08); padding: 24px; margin-bottom: 24px; }
.card.narrow { max-width: 460px; margin: 0 auto 24px; }
.header-developer { background: #2563eb; color: #fff; }
.header-user { background: #16a34a; color: #fff; }
label { display: block; font-size: .875rem; margin: 12px 0 4px; }
input[type=text], input[type=email], input[type=password], input[type=url] { width: 100%; padding: 10px; border: 1px solid #d1d5db; border-radius: 8px; }
input.invalid { border-color: #ef4444; }
.field-error { color: #dc2626; font-size: .875rem; margin: 4px 0 0; }
.form-error { background: #fee2e2; color: #b91c1c; padding: 12px; border-radius: 6px; }
button { cursor: pointer; padding: 10px 16px; border: 0; border-radius: 8px; background: #2563eb; color: #fff; font-weight: 700; }
form.inline { display: inline; }
form.inline button { background: none; color: #374151; font-weight: 400; padding: 0; }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.stat .value { font-size: 1.75rem; font-weight: 700; }
.badge { padding: 2px 8px; border-radius: 999px; font-size: .75rem; }
.badge.accepted { background: #dcfce7; color: #166534; }
.badge.rejected { background: #fee2e2; color: #991b1b; }
.badge.pending { background: #fef9c3; color: #854d0e; }
.progress { background: #e5e7eb; border-radius: 999px; height: 8px; }
.progress > div { background: #2563eb; height: 8px; border-radius: 999px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("plain@mail.com"), "plain@mail.com");
    }

    #[test]
    fn navbar_follows_the_session() {
        let anonymous = navbar(None);
        assert!(anonymous.contains(r#"href="/developer/login""#));
        assert!(anonymous.contains(r#"href="/user/signup""#));
        assert!(!anonymous.contains("Logout"));

        let user = UserRecord {
            id: 1,
            name: "<b>Eve</b>".to_string(),
            email: "eve@x.io".to_string(),
            role: Role::Developer,
        };
        let signed_in = navbar(Some(&user));
        assert!(signed_in.contains(r#"action="/logout""#));
        assert!(signed_in.contains(r#"href="/developer/dashboard""#));
        assert!(signed_in.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(!signed_in.contains("Signup as"));
    }

    #[test]
    fn redirecting_page_sets_refresh() {
        let html = redirecting_page("Done", None, "<p>ok</p>", "/user/login", 2);
        assert!(html.contains(r#"content="2; url=/user/login""#));
        assert!(html.contains("<title>Done | DevConnect</title>"));
    }
}
