use super::*;

// =============================================================
// Helpers
// =============================================================

fn org(role: Option<&str>) -> OrganizationInfo {
    OrganizationInfo {
        id: "org-1".to_owned(),
        name: "Acme".to_owned(),
        logo_url: Some("https://cdn.test/acme.png".to_owned()),
        status: Some("ACTIVE".to_owned()),
        organization_role: role.map(str::to_owned),
    }
}

fn record(role: Option<&str>, orgs: Vec<OrganizationInfo>) -> AccountRecord {
    AccountRecord {
        id: Some("u-1".to_owned()),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        role: role.map(str::to_owned),
        organization_info: orgs,
    }
}

// =============================================================
// Effective role
// =============================================================

#[test]
fn organization_creator_without_explicit_role() {
    let profile = transform_user_data(&record(None, vec![org(Some("ORGANIZATION_CREATOR"))]));
    assert_eq!(profile.role, Some(Role::OrganizationCreator));
    assert!(profile.is_org_creator);
    assert!(!profile.is_org_admin);
    assert!(!profile.is_super);
}

#[test]
fn super_admin_without_organizations_satisfies_every_tier() {
    let profile = transform_user_data(&record(Some("SUPER_ADMIN"), vec![]));
    assert_eq!(profile.role, Some(Role::SuperAdmin));
    assert!(profile.is_super);
    assert!(profile.is_org_admin);
    assert!(profile.is_org_creator);
    assert_eq!(profile.organization, None);
}

#[test]
fn explicit_role_wins_over_organization_role() {
    let profile = transform_user_data(&record(Some("ORGANIZATION_USER"), vec![org(Some("ORGANIZATION_ADMIN"))]));
    assert_eq!(profile.role, Some(Role::OrganizationUser));
    // Flags follow the organization role, not the explicit one.
    assert!(profile.is_org_admin);
    assert!(profile.is_org_creator);
    assert!(!profile.is_super);
}

#[test]
fn blank_explicit_role_falls_back_to_organization_role() {
    let profile = transform_user_data(&record(Some("  "), vec![org(Some("ORGANIZATION_ADMIN"))]));
    assert_eq!(profile.role, Some(Role::OrganizationAdmin));
}

#[test]
fn unknown_explicit_role_is_none() {
    let profile = transform_user_data(&record(Some("JANITOR"), vec![org(Some("ORGANIZATION_ADMIN"))]));
    assert_eq!(profile.role, None);
    assert!(!profile.is_super);
}

#[test]
fn organization_user_has_no_tier_flags() {
    let profile = transform_user_data(&record(None, vec![org(Some("ORGANIZATION_USER"))]));
    assert_eq!(profile.role, Some(Role::OrganizationUser));
    assert!(!profile.is_org_creator);
    assert!(!profile.is_org_admin);
}

#[test]
fn no_role_anywhere_is_none() {
    let profile = transform_user_data(&record(None, vec![]));
    assert_eq!(profile.role, None);
    assert!(!profile.is_org_creator);
}

// =============================================================
// Organization context
// =============================================================

#[test]
fn first_organization_is_active_context() {
    let mut second = org(Some("ORGANIZATION_USER"));
    second.id = "org-2".to_owned();
    let profile = transform_user_data(&record(None, vec![org(Some("ORGANIZATION_ADMIN")), second]));
    let active = profile.organization.unwrap();
    assert_eq!(active.id, "org-1");
    assert_eq!(active.name, "Acme");
    assert_eq!(active.logo_url.as_deref(), Some("https://cdn.test/acme.png"));
    assert_eq!(active.status.as_deref(), Some("ACTIVE"));
    assert_eq!(active.organization_role, Some(Role::OrganizationAdmin));
}

#[test]
fn transform_is_deterministic() {
    let raw = record(None, vec![org(Some("ORGANIZATION_CREATOR"))]);
    assert_eq!(transform_user_data(&raw), transform_user_data(&raw));
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_joins_names_or_falls_back_to_email() {
    let profile = transform_user_data(&record(None, vec![]));
    assert_eq!(profile.display_name(), "Ada Lovelace");

    let mut raw = record(None, vec![]);
    raw.first_name.clear();
    raw.last_name.clear();
    assert_eq!(transform_user_data(&raw).display_name(), "ada@example.com");
}
