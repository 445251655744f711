// src/models/account.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::config::ANONYMOUS_NAME;

/// Account role as stored in the `users.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Student,
    Teacher,
    Scientist,
    Journalist,
    Engineer,
    HealthcareProfessional,
    GeneralUser,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Admin,
        Role::Student,
        Role::Teacher,
        Role::Scientist,
        Role::Journalist,
        Role::Engineer,
        Role::HealthcareProfessional,
        Role::GeneralUser,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Scientist => "scientist",
            Role::Journalist => "journalist",
            Role::Engineer => "engineer",
            Role::HealthcareProfessional => "healthcare_professional",
            Role::GeneralUser => "general_user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role string is not part of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

/// Case-sensitive: `"Student"` is not a role.
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,

    #[sqlx(try_from = "String")]
    pub role: Role,

    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Cumulative time spent in the app, in seconds.
    pub time_spent: i64,
}

impl Account {
    /// Username, then first name, then a fixed placeholder.
    pub fn display_name(&self) -> String {
        [self.username.as_deref(), self.first_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
            .to_string()
    }

    pub fn is_learner(&self) -> bool {
        !self.role.is_admin()
    }
}
