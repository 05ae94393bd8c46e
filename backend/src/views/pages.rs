//! Static pages: landing, role selection and the not-found fallback.

use super::{page, role_label};
use crate::auth::models::{Role, UserRecord};
use crate::navigation;

pub fn landing(user: Option<&UserRecord>) -> String {
    let actions = match user {
        Some(user) => format!(
            r#"<a href="{}"><button type="button">Go to your dashboard</button></a>"#,
            navigation::dashboard_path(user.role)
        ),
        None => r#"<a href="/select-role"><button type="button">Get started</button></a>
        <a href="/login">I already have an account</a>"#
            .to_string(),
    };

    let body = format!(
        r#"<section class="card">
    <h1>Connect with top developers, or find your next project</h1>
    <p>DevConnect brings clients and freelance developers together: post a project, bid on work, and track progress in one place.</p>
    <p>{actions}</p>
</section>
<section class="stats">
    <div class="card stat"><h3>For clients</h3><p>Post projects and review bids from vetted developers.</p></div>
    <div class="card stat"><h3>For developers</h3><p>Find projects that match your stack and grow your portfolio.</p></div>
    <div class="card stat"><h3>Built-in workflow</h3><p>Milestones, messages and payments tracked per project.</p></div>
</section>"#,
        actions = actions
    );
    page("Home", user, &body)
}

pub fn role_selection(user: Option<&UserRecord>) -> String {
    let choice = |role: Role, heading: &str, blurb: &str| {
        format!(
            r#"<a class="card" href="{href}" style="display:block;text-decoration:none;color:inherit">
        <h2>{heading}</h2>
        <p>{blurb}</p>
        <p>Get started &rarr;</p>
    </a>"#,
            href = navigation::signup_path(role),
            heading = heading,
            blurb = blurb,
        )
    };

    let body = format!(
        r#"<h1>Join DevConnect as</h1>
<p>Select your role to get started with DevConnect</p>
<div class="stats" style="grid-template-columns: 1fr 1fr">
    {developer}
    {user}
</div>
<p>Already have an account? <a href="/login">Log in</a></p>"#,
        developer = choice(
            Role::Developer,
            "I'm a Developer",
            "Looking for projects to work on and grow my portfolio"
        ),
        user = choice(Role::User, "I'm a User", "Looking to hire developers for my projects"),
    );
    page("Choose your role", user, &body)
}

pub fn not_found(user: Option<&UserRecord>, path: &str) -> String {
    let body = format!(
        r#"<section class="card narrow">
    <h1>Page not found</h1>
    <p>Nothing lives at <code>{}</code>.</p>
    <p><a href="/">Back to {}</a></p>
</section>"#,
        super::escape(path),
        role_label_or_home(user)
    );
    page("Page not found", user, &body)
}

fn role_label_or_home(user: Option<&UserRecord>) -> String {
    match user {
        Some(user) => format!("home ({} account)", role_label(user.role)),
        None => "home".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_selection_links_both_signups() {
        let html = role_selection(None);
        assert!(html.contains(r#"href="/developer/signup""#));
        assert!(html.contains(r#"href="/user/signup""#));
        assert!(html.contains(r#"href="/login""#));
    }

    #[test]
    fn not_found_escapes_the_path() {
        let html = not_found(None, "/<oops>");
        assert!(html.contains("/&lt;oops&gt;"));
        assert!(html.contains("Page not found"));
    }
}
