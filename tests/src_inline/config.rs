use super::*;
use crate::model::ItemKind;

#[test]
fn test_defaults() {
    let config = GridConfig::default();
    assert_eq!(config.user.user, "Current User");
    assert_eq!(config.user.date, "Current Date");
    assert_eq!(config.user.user_type, Channel::Staff);
    assert!(config.kinds.contains(ItemKind::MultipleChoice));
    assert!(!config.kinds.contains(ItemKind::DropDown));
}

#[test]
fn test_user_context_from_host() {
    let ctx = UserContext::from_host(Some("Jo"), Some("9/3/2025"), Some("Self"));
    assert_eq!(ctx.user, "Jo");
    assert_eq!(ctx.date, "9/3/2025");
    assert_eq!(ctx.user_type, Channel::SelfReport);

    let ctx = UserContext::from_host(Some("  "), None, Some("Manager"));
    assert_eq!(ctx, UserContext::default());
}

#[test]
fn test_builder() {
    let kinds = KindSet::new([ItemKind::FreeText]);
    let config = GridConfig::default().with_kinds(kinds.clone());
    assert_eq!(config.kinds, kinds);
}
