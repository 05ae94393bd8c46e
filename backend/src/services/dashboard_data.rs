//! Data shown on the two dashboards.
//!
//! There is no project or billing backend yet, so both dashboards are fed from
//! the fixed sample below. The shapes are what a real aggregation over
//! projects, bids and messages would hand to the views, and what
//! `/api/dashboard` returns as JSON.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BidStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BidStatus::Pending => "Pending",
            BidStatus::Accepted => "Accepted",
            BidStatus::Rejected => "Rejected",
        }
    }

    /// CSS badge class.
    pub fn badge(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accepted => "accepted",
            BidStatus::Rejected => "rejected",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeveloperProject {
    pub id: u32,
    pub name: String,
    pub progress: u8,
    pub deadline: String,
    pub rate: String,
    pub status: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    pub id: u32,
    pub project: String,
    pub amount: String,
    pub status: BidStatus,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub kind: String,
    pub message: String,
    pub time: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientProject {
    pub id: u32,
    pub title: String,
    pub budget: String,
    pub status: String,
    pub deadline: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub developer: String,
    pub project: String,
    pub time: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct DeveloperDashboard {
    pub stats: Vec<Stat>,
    pub active_projects: Vec<DeveloperProject>,
    pub recent_bids: Vec<Bid>,
    pub recent_activity: Vec<Activity>,
}

#[derive(Serialize, Debug, Clone)]
pub struct UserDashboard {
    pub stats: Vec<Stat>,
    pub active_projects: Vec<ClientProject>,
    pub recent_messages: Vec<Message>,
}

pub fn developer_dashboard() -> DeveloperDashboard {
    let active_projects = vec![
        DeveloperProject {
            id: 1,
            name: "E-commerce Website".to_string(),
            progress: 75,
            deadline: "2023-12-15".to_string(),
            rate: "$75/hr".to_string(),
            status: "In Progress".to_string(),
        },
        DeveloperProject {
            id: 2,
            name: "Mobile App Development".to_string(),
            progress: 30,
            deadline: "2024-02-20".to_string(),
            rate: "$90/hr".to_string(),
            status: "Pending".to_string(),
        },
    ];

    let recent_bids = vec![
        Bid {
            id: 1,
            project: "Social Media Platform".to_string(),
            amount: "$5000".to_string(),
            status: BidStatus::Pending,
        },
        Bid {
            id: 2,
            project: "API Integration".to_string(),
            amount: "$2500".to_string(),
            status: BidStatus::Accepted,
        },
    ];

    let recent_activity = vec![
        Activity {
            id: 1,
            kind: "bid-accepted".to_string(),
            message: "John Doe accepted your bid for E-commerce Website".to_string(),
            time: "2 hours ago".to_string(),
        },
        Activity {
            id: 2,
            kind: "milestone-completed".to_string(),
            message: "You completed milestone for Mobile App Development".to_string(),
            time: "1 day ago".to_string(),
        },
    ];

    DeveloperDashboard {
        stats: vec![
            Stat {
                title: "Active Projects",
                value: active_projects.len().to_string(),
            },
            Stat {
                title: "Total Earnings",
                value: "$7,500".to_string(),
            },
            Stat {
                title: "Unread Messages",
                value: "3".to_string(),
            },
        ],
        active_projects,
        recent_bids,
        recent_activity,
    }
}

pub fn user_dashboard() -> UserDashboard {
    let active_projects = vec![
        ClientProject {
            id: 1,
            title: "E-commerce Website".to_string(),
            budget: "$5000".to_string(),
            status: "In Progress".to_string(),
            deadline: "2023-12-15".to_string(),
        },
        ClientProject {
            id: 2,
            title: "Mobile App Development".to_string(),
            budget: "$7500".to_string(),
            status: "Review".to_string(),
            deadline: "2024-01-20".to_string(),
        },
    ];

    let recent_messages = vec![
        Message {
            id: 1,
            developer: "John Smith".to_string(),
            project: "E-commerce Website".to_string(),
            time: "2 hours ago".to_string(),
        },
        Message {
            id: 2,
            developer: "Sarah Johnson".to_string(),
            project: "Mobile App".to_string(),
            time: "1 day ago".to_string(),
        },
    ];

    UserDashboard {
        stats: vec![
            Stat {
                title: "Active Projects",
                value: active_projects.len().to_string(),
            },
            Stat {
                title: "Total Budget",
                value: "$12,500".to_string(),
            },
            Stat {
                title: "Unread Messages",
                value: recent_messages.len().to_string(),
            },
        ],
        active_projects,
        recent_messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_the_lists() {
        let dev = developer_dashboard();
        assert_eq!(dev.stats[0].value, dev.active_projects.len().to_string());

        let user = user_dashboard();
        assert_eq!(user.stats[2].value, user.recent_messages.len().to_string());
    }
}
