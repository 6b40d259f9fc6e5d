use super::*;

#[test]
fn parse_known_identifiers() {
    assert_eq!(Role::parse("SUPER_ADMIN"), Some(Role::SuperAdmin));
    assert_eq!(Role::parse("ORGANIZATION_ADMIN"), Some(Role::OrganizationAdmin));
    assert_eq!(Role::parse(" ORGANIZATION_CREATOR "), Some(Role::OrganizationCreator));
    assert_eq!(Role::parse("ORGANIZATION_USER"), Some(Role::OrganizationUser));
}

#[test]
fn parse_unknown_identifier_is_none() {
    assert_eq!(Role::parse("super_admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn display_matches_wire_identifier() {
    assert_eq!(Role::OrganizationCreator.to_string(), "ORGANIZATION_CREATOR");
    assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"SUPER_ADMIN\"");
}
