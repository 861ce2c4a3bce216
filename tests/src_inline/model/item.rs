use super::*;

#[test]
fn test_kind_labels_round_trip() {
    for kind in ItemKind::all() {
        assert_eq!(ItemKind::from_label(kind.label()), Some(*kind));
    }
    assert_eq!(ItemKind::from_label("Subsummary"), None);
    assert_eq!(ItemKind::from_label("free text"), None);
}

#[test]
fn test_default_kinds_exclude_drop_down() {
    let kinds = KindSet::default();
    assert_eq!(
        kinds.kinds(),
        &[
            ItemKind::MultipleChoice,
            ItemKind::FreeText,
            ItemKind::PersonalReadiness
        ]
    );
    assert!(KindSet::everything().contains(ItemKind::DropDown));
}

#[test]
fn test_kind_set_parse() {
    let kinds: KindSet = " Free Text, Drop Down,,Free Text ".parse().unwrap();
    assert_eq!(kinds.kinds(), &[ItemKind::FreeText, ItemKind::DropDown]);

    let err = "Free Text,Essay".parse::<KindSet>().unwrap_err();
    assert_eq!(err, "unknown item type: Essay");

    assert!("".parse::<KindSet>().unwrap().is_empty());
}

#[test]
fn test_item_id_prefix() {
    assert_eq!(item_id(0), "assessment_0");
    assert_eq!(item_id(12), "assessment_12");
}

#[test]
fn test_kind_serializes_as_wire_label() {
    assert_eq!(
        serde_json::to_string(&ItemKind::PersonalReadiness).unwrap(),
        "\"Personal Readiness\""
    );
}
