use super::*;
use crate::state::sections::SectionRegistry;

#[test]
fn docs_sections_form_a_valid_registry() {
    let registry = SectionRegistry::new(docs_sections()).unwrap();
    assert_eq!(registry.len(), DOCS_SECTIONS.len());
    assert_eq!(registry.first().id, "introduction");
}

#[test]
fn docs_sections_keep_page_order() {
    let ids = docs_sections().into_iter().map(|s| s.id).collect::<Vec<_>>();
    assert_eq!(
        ids,
        [
            "introduction",
            "key-features",
            "code-example",
            "installation",
            "keyword-mappings",
            "quick-intro",
            "repository-structure",
        ]
    );
}

#[test]
fn keyword_mappings_have_unique_python_keys() {
    let mut keys = KEYWORD_MAPPINGS.iter().map(|(python, _)| *python).collect::<Vec<_>>();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), KEYWORD_MAPPINGS.len());
}
