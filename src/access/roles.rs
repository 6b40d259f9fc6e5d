//! Account roles.
//!
//! # Roles (cumulative tiers)
//!
//! - `SuperAdmin` - platform operator, satisfies every tier below
//! - `OrganizationAdmin` - manages one organization
//! - `OrganizationCreator` - authors content inside an organization
//! - `OrganizationUser` - read-mostly member

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    OrganizationAdmin,
    OrganizationCreator,
    OrganizationUser,
}

impl Role {
    /// Parse the server's role identifier. Unknown identifiers are `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "SUPER_ADMIN" => Some(Self::SuperAdmin),
            "ORGANIZATION_ADMIN" => Some(Self::OrganizationAdmin),
            "ORGANIZATION_CREATOR" => Some(Self::OrganizationCreator),
            "ORGANIZATION_USER" => Some(Self::OrganizationUser),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::OrganizationAdmin => "ORGANIZATION_ADMIN",
            Self::OrganizationCreator => "ORGANIZATION_CREATOR",
            Self::OrganizationUser => "ORGANIZATION_USER",
        }
    }

    /// Label for display in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super admin",
            Self::OrganizationAdmin => "Organization admin",
            Self::OrganizationCreator => "Organization creator",
            Self::OrganizationUser => "Organization user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
