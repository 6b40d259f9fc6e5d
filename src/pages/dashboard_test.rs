use super::*;
use crate::state::profile::OrganizationContext;

fn profile_with_org(status: Option<&str>) -> UserProfile {
    UserProfile {
        email: "a@b.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        role: Some(Role::OrganizationAdmin),
        organization: Some(OrganizationContext {
            id: "org-1".to_owned(),
            name: "Acme".to_owned(),
            logo_url: None,
            status: status.map(str::to_owned),
            organization_role: Some(Role::OrganizationAdmin),
        }),
        is_super: false,
        is_org_admin: true,
        is_org_creator: false,
    }
}

#[test]
fn role_label_names_unknown_roles() {
    assert_eq!(role_label(None), "Unrecognized role");
    assert_eq!(role_label(Some(Role::SuperAdmin)), Role::SuperAdmin.label());
}

#[test]
fn organization_line_includes_status_when_present() {
    assert_eq!(organization_line(&profile_with_org(Some("ACTIVE"))).as_deref(), Some("Acme (ACTIVE)"));
    assert_eq!(organization_line(&profile_with_org(Some(""))).as_deref(), Some("Acme"));
    assert_eq!(organization_line(&profile_with_org(None)).as_deref(), Some("Acme"));
}

#[test]
fn organization_line_is_none_without_organization() {
    let mut profile = profile_with_org(None);
    profile.organization = None;
    assert_eq!(organization_line(&profile), None);
}
