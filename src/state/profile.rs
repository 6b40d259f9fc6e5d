//! Derived, read-only view of the signed-in account.
//!
//! DESIGN
//! ======
//! [`UserProfile`] is never edited in place; it is recomputed from the raw
//! [`AccountRecord`] whenever a new record arrives. The first organization
//! membership is the active organization context.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::access::Role;
use crate::net::types::{AccountRecord, OrganizationInfo};

/// Active organization for the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizationContext {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub status: Option<String>,
    /// `None` when absent or not a known role identifier.
    pub organization_role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Effective role; `None` when the identifier is unknown.
    pub role: Option<Role>,
    pub organization: Option<OrganizationContext>,
    pub is_super: bool,
    pub is_org_admin: bool,
    pub is_org_creator: bool,
}

impl UserProfile {
    /// "First Last", falling back to the email when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.email.clone() } else { full.to_owned() }
    }
}

/// Project a raw account record into a [`UserProfile`].
///
/// The explicit `role` wins; without one the active organization's
/// `organizationRole` is used. The flags are cumulative tiers: a super admin
/// is also an org admin and an org creator.
pub fn transform_user_data(record: &AccountRecord) -> UserProfile {
    let organization = record.organization_info.first().map(organization_context);
    let organization_role = organization.as_ref().and_then(|o| o.organization_role);

    let explicit = record.role.as_deref().map(str::trim).filter(|r| !r.is_empty());
    let role = match explicit {
        Some(raw) => Role::parse(raw),
        None => organization_role,
    };

    let is_super = role == Some(Role::SuperAdmin);
    let is_org_admin = is_super || organization_role == Some(Role::OrganizationAdmin);
    let is_org_creator = is_org_admin || organization_role == Some(Role::OrganizationCreator);

    UserProfile {
        email: record.email.clone(),
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        role,
        organization,
        is_super,
        is_org_admin,
        is_org_creator,
    }
}

fn organization_context(info: &OrganizationInfo) -> OrganizationContext {
    OrganizationContext {
        id: info.id.clone(),
        name: info.name.clone(),
        logo_url: info.logo_url.clone(),
        status: info.status.clone(),
        organization_role: info.organization_role.as_deref().and_then(Role::parse),
    }
}
