use studylog_core::model::{Priority, StudyCategory};
use studylog_core::storage::MemoryStore;
use studylog_core::TodoLedger;

const EXAMPLE: &str = "\
- [ ] Learn pipes !!!  #shell
- [x] Read man pages #reading #linux
- [ ] Try systemctl !! MEDIUM
";

#[test]
fn test_import_materializes_parsed_items() {
    let ledger = TodoLedger::new(MemoryStore::new());
    let project = ledger
        .import_markdown("Linux basics", EXAMPLE, Some(StudyCategory::Linux))
        .expect("import should succeed");

    assert_eq!(project.name, "Linux basics");
    assert_eq!(project.study_type, Some(StudyCategory::Linux));
    assert_eq!(
        project.description.as_deref(),
        Some("Imported from markdown (3 tasks)")
    );
    assert_eq!(project.items.len(), 3);

    let first = &project.items[0];
    assert_eq!(first.text, "Learn pipes");
    assert!(!first.completed);
    assert_eq!(first.priority, Priority::High);
    assert_eq!(first.tags, vec!["shell".to_string()]);

    let second = &project.items[1];
    assert_eq!(second.text, "Read man pages");
    assert!(second.completed);
    assert_eq!(second.priority, Priority::Low);
    assert_eq!(
        second.tags,
        vec!["reading".to_string(), "linux".to_string()]
    );

    let third = &project.items[2];
    assert_eq!(third.text, "Try systemctl");
    assert!(!third.completed);
    assert_eq!(third.priority, Priority::Medium);
    assert!(third.tags.is_empty());
}

#[test]
fn test_import_goes_through_standard_item_path() {
    let ledger = TodoLedger::new(MemoryStore::new());
    let project = ledger
        .import_markdown("ids", EXAMPLE, None)
        .expect("import should succeed");

    // Every item got its own id and creation time via add_item, and each add
    // bumped the project timestamp past creation.
    let mut ids: Vec<_> = project.items.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), project.items.len());
    assert!(project.updated_at >= project.created_at);

    // The imported project is the stored head of the collection.
    let stored = ledger.projects().expect("list");
    assert_eq!(stored[0].id, project.id);
    assert_eq!(stored[0].items.len(), 3);
}

#[test]
fn test_import_skips_non_checklist_lines() {
    let input = "\
# Study plan
Just a note, not a task
- [ ] Actual task
random trailing prose
";
    let ledger = TodoLedger::new(MemoryStore::new());
    let project = ledger.import_markdown("notes", input, None).expect("import");

    assert_eq!(project.items.len(), 1);
    assert_eq!(project.items[0].text, "Actual task");
    assert_eq!(
        project.description.as_deref(),
        Some("Imported from markdown (1 tasks)")
    );
}

#[test]
fn test_import_with_no_matches_creates_empty_project() {
    let ledger = TodoLedger::new(MemoryStore::new());
    let project = ledger
        .import_markdown("empty", "nothing here\nat all\n", None)
        .expect("import");

    assert!(project.items.is_empty());
    assert_eq!(
        project.description.as_deref(),
        Some("Imported from markdown (0 tasks)")
    );
}

#[test]
fn test_import_precedence_high_beats_medium() {
    let ledger = TodoLedger::new(MemoryStore::new());
    let project = ledger
        .import_markdown("mixed", "- [ ] Ship release !!! MEDIUM #release", None)
        .expect("import");

    let item = &project.items[0];
    assert_eq!(item.priority, Priority::High);
    assert_eq!(item.text, "Ship release");
    assert_eq!(item.tags, vec!["release".to_string()]);
}
