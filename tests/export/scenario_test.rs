#[cfg(test)]
mod tests {
    use crate::utils::{export_text, pointers, record, record_headers};
    use tree_gedcom::{Annotation, Occurrence, RawNode};

    #[test]
    fn test_empty_input_is_framed() {
        let text = export_text(Vec::new(), Vec::new());

        assert!(text.starts_with("0 HEAD\n"));
        assert!(text.ends_with("\n0 TRLR"));
        assert_eq!(text.lines().filter(|l| *l == "0 HEAD").count(), 1);
        assert_eq!(text.lines().filter(|l| *l == "0 TRLR").count(), 1);
        assert!(text.contains("1 CHAR UTF-8\n1 GEDC\n2 VERS 5.5.1\n2 FORM LINEAGE-LINKED"));
    }

    #[test]
    fn test_mutual_partners() {
        let text = export_text(
            vec![
                RawNode::new("1").with_sex("F").with_partners(["2"]),
                RawNode::new("2").with_sex("M").with_partners(["1"]),
            ],
            Vec::new(),
        );

        assert_eq!(record_headers(&text, "FAM"), vec!["0 @F1@ FAM"]);
        let family = record(&text, "0 @F1@ FAM");
        // the husband line is written first, so node 2 gets the first symbol
        assert_eq!(family, vec!["0 @F1@ FAM", "1 HUSB @I1@", "1 WIFE @I2@"]);
        assert!(pointers(&text, "CHIL").is_empty());
        assert_eq!(record(&text, "0 @I1@ INDI")[1], "1 SEX M");
        assert_eq!(record(&text, "0 @I2@ INDI")[1], "1 SEX F");
    }

    #[test]
    fn test_parents_without_partner_link() {
        let text = export_text(
            vec![RawNode::new("child").with_parents(["1", "2"])],
            Vec::new(),
        );

        assert_eq!(record_headers(&text, "FAM").len(), 1);
        assert_eq!(pointers(&text, "CHIL"), vec!["@I3@"]);
        assert_eq!(
            record(&text, "0 @I3@ INDI"),
            vec!["0 @I3@ INDI", "1 FAMC @F1@"]
        );
    }

    #[test]
    fn test_profile_and_internal_ids_merge() {
        let text = export_text(
            vec![
                RawNode::new("n1").with_profile_id("p1").with_name("Ada", "King"),
                RawNode::new("n2").with_profile_id("p2").with_partners(["n1"]),
                RawNode::new("n3").with_parents(["n1", "n2"]),
                RawNode::new("n1").with_profile_id("p1").with_name("Ada", "Lovelace"),
            ],
            Vec::new(),
        );

        // three distinct canonical keys, the repeated node replaces the first
        assert_eq!(record_headers(&text, "INDI").len(), 3);
        assert!(text.contains("1 NAME Ada /Lovelace/"));
        assert!(!text.contains("King"));
        // the partner link and the parent links name the same couple
        assert_eq!(record_headers(&text, "FAM").len(), 1);
        assert_eq!(pointers(&text, "CHIL").len(), 1);
    }

    #[test]
    fn test_later_node_with_same_profile_replaces_earlier() {
        let text = export_text(
            vec![
                RawNode::new("1").with_profile_id("P1").with_name("Old", "Entry"),
                RawNode::new("2").with_partners(["P1"]),
                RawNode::new("3").with_parents(["1", "2"]),
                RawNode::new("4").with_profile_id("P1").with_name("New", "Entry"),
            ],
            Vec::new(),
        );

        assert_eq!(record_headers(&text, "INDI").len(), 3);
        assert_eq!(record_headers(&text, "FAM"), vec!["0 @F1@ FAM"]);
        assert_eq!(pointers(&text, "CHIL"), vec!["@I3@"]);
        assert_eq!(
            record(&text, "0 @I2@ INDI"),
            vec!["0 @I2@ INDI", "1 NAME New /Entry/", "1 FAMS @F1@"]
        );
        assert!(!text.contains("Old"));
    }

    #[test]
    fn test_annotations_take_precedence() {
        let text = export_text(
            vec![
                RawNode::new("n1")
                    .with_profile_id("p1")
                    .with_name("Raw", "Surname")
                    .with_sex("M"),
            ],
            vec![
                Annotation::for_profile("p1")
                    .with_name("Edited", "")
                    .with_sex("female")
                    .with_birth(Occurrence::in_year(1990).with_month(5).with_day(3))
                    .with_death(Occurrence::default()),
            ],
        );

        assert_eq!(
            record(&text, "0 @I1@ INDI"),
            vec![
                "0 @I1@ INDI",
                "1 NAME Edited /Surname/",
                "1 SEX F",
                "1 BIRT",
                "2 DATE 03 MAY 1990",
            ]
        );
    }

    #[test]
    fn test_annotation_by_tree_node_id_follows_alias() {
        let text = export_text(
            vec![RawNode::new("n1").with_profile_id("p1")],
            vec![Annotation::for_tree_node("n1").with_name("Grace", "Hopper")],
        );

        assert!(text.contains("1 NAME Grace /Hopper/"));
    }

    #[test]
    fn test_family_parents_are_never_identical() {
        let text = export_text(
            vec![
                RawNode::new("a").with_partners(["a"]),
                RawNode::new("b").with_parents(["a", "a"]),
            ],
            Vec::new(),
        );

        assert!(record_headers(&text, "FAM").is_empty());
    }

    #[test]
    fn test_child_in_two_families() {
        let text = export_text(
            vec![
                RawNode::new("m").with_sex("M").with_partners(["f1", "f2"]),
                RawNode::new("f1").with_sex("F"),
                RawNode::new("f2").with_sex("F"),
                RawNode::new("c").with_parents(["m", "f1", "f2"]),
            ],
            Vec::new(),
        );

        // both partner families accept c under the superset rule
        assert_eq!(record_headers(&text, "FAM").len(), 2);
        let child = record(&text, "0 @I3@ INDI");
        assert_eq!(child, vec!["0 @I3@ INDI", "1 FAMC @F1@", "1 FAMC @F2@"]);
        let father = record(&text, "0 @I1@ INDI");
        assert_eq!(&father[2..], ["1 FAMS @F1@", "1 FAMS @F2@"]);
    }

    #[test]
    fn test_image_reference() {
        let text = export_text(
            vec![RawNode::new("1").with_image("https://img.example/1.jpg")],
            Vec::new(),
        );

        assert!(text.contains("1 OBJE\n2 FILE https://img.example/1.jpg"));
    }
}
