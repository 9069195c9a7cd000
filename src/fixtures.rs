//! Seed data rendered by the mocked client and admin dashboards

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};

#[derive(Serialize, EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Client,
    #[default]
    Guest,
}

#[derive(Serialize, EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Strategy,
    Design,
    Development,
    Testing,
    Deployment,
}

#[derive(Serialize, EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadStatus {
    New,
    Qualified,
    Contracted,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<&'static str>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub client_id: &'static str,
    pub title: &'static str,
    pub status: ProjectStatus,
    pub progress: u8,
    pub deadline: &'static str,
    pub description: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub project_type: &'static str,
    pub budget: &'static str,
    pub timeline: &'static str,
    pub status: LeadStatus,
    pub created_at: &'static str,
}

pub const CLIENT: User = User {
    id: "user-1",
    name: "Alex Rivera",
    email: "alex@jetfuel.io",
    role: Role::Client,
    avatar: Some("https://picsum.photos/seed/alex/100/100"),
};

pub const ADMIN: User = User {
    id: "admin-1",
    name: "Sarah Jet",
    email: "sarah@jetfuel.io",
    role: Role::Admin,
    avatar: Some("https://picsum.photos/seed/sarah/100/100"),
};

pub const PROJECTS: [Project; 2] = [
    Project {
        id: "proj-1",
        client_id: "user-1",
        title: "Solaris E-Commerce Rebrand",
        status: ProjectStatus::Development,
        progress: 75,
        deadline: "2024-05-15",
        description: "A complete overhaul of the Solaris luxury watch e-commerce experience.",
    },
    Project {
        id: "proj-2",
        client_id: "user-1",
        title: "Neon Pulse Mobile App",
        status: ProjectStatus::Design,
        progress: 40,
        deadline: "2024-06-20",
        description: "Design phase for the fitness tracking mobile application.",
    },
];

pub const LEADS: [Lead; 2] = [
    Lead {
        id: "lead-1",
        name: "John Doe",
        email: "john@example.com",
        project_type: "Web App",
        budget: "R180,000+",
        timeline: "3 months",
        status: LeadStatus::New,
        created_at: "2024-03-01",
    },
    Lead {
        id: "lead-2",
        name: "Jane Smith",
        email: "jane@startup.io",
        project_type: "UI/UX Design",
        budget: "R35,000 - R80,000",
        timeline: "1 month",
        status: LeadStatus::Qualified,
        created_at: "2024-03-05",
    },
];

pub fn projects_for(client_id: &str) -> Vec<Project> {
    PROJECTS
        .iter()
        .filter(|project| project.client_id == client_id)
        .cloned()
        .collect()
}
