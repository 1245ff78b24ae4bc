#[cfg(test)]
mod tests {
    use std::fs;

    use crate::utils::write_documents;
    use tree_gedcom::{ExportConfig, ExportError, GedcomExporter, LoadError};

    const TREE: &str = r#"[
        {"id": 101, "profile_id": "p-anna", "first_name": "Anna", "last_name": "Berg",
         "sex": "F", "partner_ids": ["102"], "profile_image_url": "https://img/anna.png"},
        {"id": "102", "first_name": "Olav", "last_name": "Berg", "sex": "M",
         "partner_ids": [101]},
        {"id": "103", "first_name": "Liv", "parent_ids": ["101", "102"]},
        {"first_name": "Nobody"}
    ]"#;

    const ANNOTATIONS: &str = r#"[
        {"profile_id": "p-anna",
         "birth_occurrence": {"year": "1950", "month": 2, "day": 14,
                              "city": "Oslo", "country": "Norway"},
         "residence_occurrence": {"city": "Bergen"}}
    ]"#;

    #[test]
    fn test_export_directory() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_documents(data.path(), TREE, ANNOTATIONS, r#"[{"id": 1}, {"id": 2}]"#);

        let config = ExportConfig::default()
            .with_data_dir(data.path())
            .with_output_path(out.path().join("nested").join("tree.ged"));
        let summary = GedcomExporter::from_config(&config)
            .export(config.output_path())
            .unwrap();

        assert_eq!(summary.individuals, 3);
        assert_eq!(summary.families, 1);
        assert_eq!(summary.dropped_nodes, 1);
        assert_eq!(summary.relatives, 2);
        assert_eq!(summary.to_string(), "Exported 3 individuals and 1 families.");

        let text = fs::read_to_string(config.output_path()).unwrap();
        assert!(text.starts_with("0 HEAD\n1 SOUR TreeGedcom\n"));
        assert!(text.ends_with("0 TRLR"));
        assert!(text.contains("1 HUSB @I1@\n1 WIFE @I2@\n1 CHIL @I3@"));
        assert!(text.contains(
            "1 NAME Anna /Berg/\n1 SEX F\n1 BIRT\n2 DATE 14 FEB 1950\n2 PLAC Oslo, Norway\n\
             1 RESI\n2 PLAC Bergen\n1 OBJE\n2 FILE https://img/anna.png\n1 FAMS @F1@"
        ));
        assert!(text.contains("0 @I3@ INDI\n1 NAME Liv //\n1 FAMC @F1@"));
    }

    #[test]
    fn test_missing_document_is_load_failure() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(data.path().join("tree.json"), "[]").unwrap();
        let output = out.path().join("export.ged");

        let config = ExportConfig::default()
            .with_data_dir(data.path())
            .with_output_path(&output);
        let err = GedcomExporter::from_config(&config)
            .export(&output)
            .unwrap_err();

        assert!(err.is_load_failure());
        assert!(matches!(err, ExportError::Load(LoadError::Io { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_document_is_load_failure() {
        let data = tempfile::tempdir().unwrap();
        write_documents(data.path(), "[{", "[]", "[]");

        let config = ExportConfig::default().with_data_dir(data.path());
        let err = GedcomExporter::from_config(&config).generate().unwrap_err();

        assert!(matches!(err, ExportError::Load(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_unwritable_output_is_write_failure() {
        let data = tempfile::tempdir().unwrap();
        write_documents(data.path(), "[]", "[]", "[]");
        // a regular file where the output directory should be
        let blocker = data.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let config = ExportConfig::default().with_data_dir(data.path());
        let err = GedcomExporter::from_config(&config)
            .export(&blocker.join("export.ged"))
            .unwrap_err();

        assert!(err.is_write_failure());
        assert!(!err.is_load_failure());
    }

    #[test]
    fn test_custom_relatives_file() {
        let data = tempfile::tempdir().unwrap();
        fs::write(data.path().join("tree.json"), "[]").unwrap();
        fs::write(data.path().join("annotations.json"), "[]").unwrap();
        fs::write(data.path().join("relatives_25.json"), "[{}, {}, {}]").unwrap();
        let output = data.path().join("out.ged");

        let config = ExportConfig::default()
            .with_data_dir(data.path())
            .with_relatives_file("relatives_25.json");
        let summary = GedcomExporter::from_config(&config).export(&output).unwrap();

        assert_eq!(summary.relatives, 3);
        assert_eq!(summary.individuals, 0);
    }
}
