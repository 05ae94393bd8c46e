//! Developer and user dashboards.

use super::{escape, page};
use crate::auth::models::UserRecord;
use crate::services::dashboard_data::{DeveloperDashboard, Stat, UserDashboard};

fn stats(stats: &[Stat]) -> String {
    let cards: String = stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="card stat"><p>{}</p><p class="value">{}</p></div>"#,
                escape(stat.title),
                escape(&stat.value)
            )
        })
        .collect();
    format!(r#"<section class="stats">{}</section>"#, cards)
}

fn sidebar(links: &[(&str, &str)]) -> String {
    let items: String = links
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{}">{}</a></li>"#, href, label))
        .collect();
    format!(
        r#"<aside class="card"><ul>{}<li><form method="post" action="/logout" class="inline"><button type="submit">Logout</button></form></li></ul></aside>"#,
        items
    )
}

fn welcome(user: &UserRecord, subtitle: &str) -> String {
    format!(
        r#"<h2>Welcome back, {}!</h2>
<p>{}</p>"#,
        escape(&user.name),
        subtitle
    )
}

pub fn developer(user: &UserRecord, data: &DeveloperDashboard) -> String {
    let projects: String = if data.active_projects.is_empty() {
        r#"<p>No active projects yet.</p>"#.to_string()
    } else {
        data.active_projects
            .iter()
            .map(|project| {
                format!(
                    r#"<div class="card">
        <h4>{name}</h4>
        <p>{status} &middot; {rate} &middot; due {deadline}</p>
        <div class="progress"><div style="width: {progress}%"></div></div>
        <p>{progress}% complete</p>
    </div>"#,
                    name = escape(&project.name),
                    status = escape(&project.status),
                    rate = escape(&project.rate),
                    deadline = escape(&project.deadline),
                    progress = project.progress.min(100),
                )
            })
            .collect()
    };

    let bids: String = data
        .recent_bids
        .iter()
        .map(|bid| {
            format!(
                r#"<li>{project} <strong>{amount}</strong> <span class="badge {badge}">{label}</span></li>"#,
                project = escape(&bid.project),
                amount = escape(&bid.amount),
                badge = bid.status.badge(),
                label = bid.status.label(),
            )
        })
        .collect();

    let activity: String = data
        .recent_activity
        .iter()
        .map(|item| {
            format!(
                r#"<li data-kind="{}">{} <small>{}</small></li>"#,
                escape(&item.kind),
                escape(&item.message),
                escape(&item.time)
            )
        })
        .collect();

    let body = format!(
        r#"{sidebar}
{welcome}
{stats}
<section class="card"><h3>Active Projects</h3>{projects}</section>
<section class="card"><h3>Recent Bids</h3><ul>{bids}</ul></section>
<section class="card"><h3>Recent Activity</h3><ul>{activity}</ul></section>"#,
        sidebar = sidebar(&[
            ("/developer/dashboard", "Projects"),
            ("/developer/profile", "Profile"),
            ("/developer/messages", "Messages"),
        ]),
        welcome = welcome(user, "Here's what's happening with your projects today."),
        stats = stats(&data.stats),
        projects = projects,
        bids = bids,
        activity = activity,
    );
    page("Developer Dashboard", Some(user), &body)
}

pub fn user(user: &UserRecord, data: &UserDashboard) -> String {
    let projects: String = data
        .active_projects
        .iter()
        .map(|project| {
            format!(
                r#"<div class="card">
        <h4>{title}</h4>
        <p>{status} &middot; budget {budget} &middot; due {deadline}</p>
    </div>"#,
                title = escape(&project.title),
                status = escape(&project.status),
                budget = escape(&project.budget),
                deadline = escape(&project.deadline),
            )
        })
        .collect();

    let messages: String = data
        .recent_messages
        .iter()
        .map(|message| {
            format!(
                r#"<li><strong>{}</strong> about {} <small>{}</small></li>"#,
                escape(&message.developer),
                escape(&message.project),
                escape(&message.time)
            )
        })
        .collect();

    let body = format!(
        r#"{sidebar}
{welcome}
{stats}
<section class="card"><h3>Active Projects</h3>{projects}</section>
<section class="card"><h3>Recent Messages</h3><ul>{messages}</ul></section>"#,
        sidebar = sidebar(&[
            ("/user/dashboard", "Projects"),
            ("/user/messages", "Messages"),
            ("/user/profile", "Profile"),
        ]),
        welcome = welcome(user, "Here's what's happening with your projects"),
        stats = stats(&data.stats),
        projects = projects,
        messages = messages,
    );
    page("User Dashboard", Some(user), &body)
}
