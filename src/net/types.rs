//! JSON DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's snake_case schema so login responses can
//! be persisted and restored without a mapping layer. The camelCase spellings
//! are accepted on input for profiles written by older front ends.
//! Review history arrives with camelCase keys and is renamed per field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Profile of a signed-in user, as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned user identifier.
    pub id: i64,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Backend ids are positive autoincrement values; anything else is not a
    /// usable identity.
    pub fn has_valid_id(&self) -> bool {
        self.id > 0
    }

    /// "First Last", falling back to the email when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }

    /// Single-letter avatar label.
    pub fn initial(&self) -> char {
        self.display_name()
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase())
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/analyze`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub language: String,
    pub code: String,
    /// Attributes the review to a signed-in user so it shows up in history.
    pub user_id: Option<i64>,
}

/// One finding reported by the analyzer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Bug {
    pub id: i64,
    pub line: i64,
    /// `"high"`, `"medium"` or `"low"`.
    pub severity: String,
    pub message: String,
    #[serde(default)]
    pub suggestion: String,
}

/// Response of `POST /api/analyze`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AnalysisResult {
    pub quality_score: i64,
    #[serde(default)]
    pub bugs: Vec<Bug>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Aggregate counters for a user's review history.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewStats {
    pub total_reviews: i64,
    pub bugs_detected: i64,
    pub avg_quality_score: f64,
}

/// Row of the dashboard's recent review list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ReviewSummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub language: String,
}

/// Response of `GET /api/user/{id}/reviews`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserReviews {
    pub stats: ReviewStats,
    pub recent_projects: Vec<ReviewSummary>,
}

/// Response of `GET /api/reviews/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ReviewDetail {
    pub name: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub quality_score: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub bugs: Vec<Bug>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ReviewDetail {
    pub fn title(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "Unnamed Project",
        }
    }
}

/// Rating shown next to a quality score.
pub fn quality_label(score: i64) -> &'static str {
    match score {
        80.. => "Excellent",
        60..=79 => "Good",
        _ => "Needs Improvement",
    }
}
