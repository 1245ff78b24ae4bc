#[cfg(test)]
mod tests {
    use tree_gedcom::{Annotation, RawNode};

    #[test]
    fn test_tree_node_with_mixed_id_types() {
        let node: RawNode = serde_json::from_str(
            r#"{"id": 7, "profile_id": "p7", "parent_ids": [1, "2"], "partner_ids": "3",
                "image": "a.png", "unknown_field": {"nested": true}}"#,
        )
        .unwrap();

        assert_eq!(node.canonical_key(), Some("p7"));
        assert_eq!(node.internal_id(), Some("7"));
        assert_eq!(node.parent_ids, vec!["1", "2"]);
        assert_eq!(node.partner_ids, vec!["3"]);
        assert_eq!(node.image_reference(), Some("a.png"));
    }

    #[test]
    fn test_node_without_ids_has_no_key() {
        let node: RawNode = serde_json::from_str(r#"{"id": "", "first_name": "X"}"#).unwrap();
        assert_eq!(node.canonical_key(), None);
    }

    #[test]
    fn test_annotation_occurrences() {
        let annotation: Annotation = serde_json::from_str(
            r#"{"tree_node_id": 12, "sex": "M",
                "birth_occurrence": {"year": "1899", "month": "7", "city": "Turku"},
                "death_occurrence": null}"#,
        )
        .unwrap();

        assert_eq!(annotation.declared_key(), Some("12"));
        let birth = annotation.birth_occurrence.unwrap();
        assert_eq!(birth.year, Some(1899));
        assert_eq!(birth.month, Some(7));
        assert_eq!(birth.day, None);
        assert_eq!(birth.city.as_deref(), Some("Turku"));
        assert!(annotation.death_occurrence.is_none());
    }

    #[test]
    fn test_profile_id_is_preferred_key() {
        let annotation: Annotation =
            serde_json::from_str(r#"{"profile_id": "p1", "tree_node_id": "n1"}"#).unwrap();
        assert_eq!(annotation.declared_key(), Some("p1"));

        let blank: Annotation =
            serde_json::from_str(r#"{"profile_id": " ", "tree_node_id": "n1"}"#).unwrap();
        assert_eq!(blank.declared_key(), Some("n1"));
    }
}
