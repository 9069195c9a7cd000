use axum::{Json, extract::Query};
use serde::Deserialize;

use crate::fixtures::{self, Lead, Project, User};

pub async fn user() -> Json<User> {
    Json(fixtures::CLIENT)
}

pub async fn admin() -> Json<User> {
    Json(fixtures::ADMIN)
}

#[derive(Deserialize)]
pub struct ProjectsQuery {
    pub client_id: Option<String>,
}

/// GET /api/fixtures/projects?client_id=user-1
pub async fn projects(Query(query): Query<ProjectsQuery>) -> Json<Vec<Project>> {
    match query.client_id {
        Some(client_id) => Json(fixtures::projects_for(&client_id)),
        None => Json(fixtures::PROJECTS.to_vec()),
    }
}

pub async fn leads() -> Json<Vec<Lead>> {
    Json(fixtures::LEADS.to_vec())
}
