use super::*;

#[test]
fn section_title_uses_route_label() {
    assert_eq!(section_title(PermissionTable::builtin(), "journeys"), "Journeys");
}

#[test]
fn section_title_falls_back_to_id() {
    assert_eq!(section_title(PermissionTable::builtin(), "reports"), "reports");
}
