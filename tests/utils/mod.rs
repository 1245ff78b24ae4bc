use std::fs;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use tree_gedcom::{Annotation, GedcomExporter, RawDocuments, RawNode};

/// Export in-memory documents and return the rendered GEDCOM text
#[must_use]
pub fn export_text(tree: Vec<RawNode>, annotations: Vec<Annotation>) -> String {
    GedcomExporter::new(RawDocuments::new(tree, annotations))
        .generate()
        .expect("in-memory export cannot fail")
        .to_string()
}

/// Write the three JSON input documents into `dir`
pub fn write_documents(dir: &Path, tree: &str, annotations: &str, relatives: &str) {
    fs::write(dir.join("tree.json"), tree).expect("write tree.json");
    fs::write(dir.join("annotations.json"), annotations).expect("write annotations.json");
    fs::write(dir.join("relatives_10.json"), relatives).expect("write relatives_10.json");
}

/// Lines of the level-0 record whose header line is `header`
#[must_use]
pub fn record<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != header)
        .enumerate()
        .take_while(|(i, line)| *i == 0 || !line.starts_with("0 "))
        .map(|(_, line)| line)
        .collect()
}

/// Header lines of all level-0 records with the given tag
#[must_use]
pub fn record_headers<'a>(text: &'a str, tag: &str) -> Vec<&'a str> {
    let suffix = format!(" {tag}");
    text.lines()
        .filter(|line| line.starts_with("0 @") && line.ends_with(&suffix))
        .collect()
}

/// Symbol values of all lines with the given level-1 tag
#[must_use]
pub fn pointers<'a>(text: &'a str, tag: &str) -> Vec<&'a str> {
    let prefix = format!("1 {tag} ");
    text.lines()
        .filter_map(|line| line.strip_prefix(prefix.as_str()))
        .collect()
}

/// Every symbol defined by a level-0 record
#[must_use]
pub fn defined_symbols(text: &str) -> FxHashSet<&str> {
    text.lines()
        .filter_map(|line| line.strip_prefix("0 "))
        .filter_map(|rest| rest.split_once(' '))
        .map(|(xref, _)| xref)
        .filter(|xref| xref.starts_with('@'))
        .collect()
}

/// HUSB/WIFE member pairs of every family, as sorted symbols
#[must_use]
pub fn family_pairs(text: &str) -> FxHashMap<String, (String, String)> {
    record_headers(text, "FAM")
        .into_iter()
        .map(|header| {
            let lines = record(text, header);
            let husband = pointers(&lines.join("\n"), "HUSB").concat();
            let wife = pointers(&lines.join("\n"), "WIFE").concat();
            let pair = if husband <= wife {
                (husband, wife)
            } else {
                (wife, husband)
            };
            (header.to_string(), pair)
        })
        .collect()
}
