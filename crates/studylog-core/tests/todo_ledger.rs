use chrono::Utc;
use studylog_core::model::{NewProject, NewTodoItem, Priority, ProjectPatch, StudyCategory};
use studylog_core::storage::MemoryStore;
use studylog_core::TodoLedger;
use uuid::Uuid;

fn ledger() -> TodoLedger<MemoryStore> {
    TodoLedger::new(MemoryStore::new())
}

#[test]
fn test_create_project_prepends_newest_first() {
    let ledger = ledger();
    ledger.create_project(NewProject::new("first")).expect("create");
    ledger.create_project(NewProject::new("second")).expect("create");

    let projects = ledger.projects().expect("list");
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "second");
    assert_eq!(projects[1].name, "first");
}

#[test]
fn test_create_project_sets_timestamps_and_fields() {
    let ledger = ledger();
    let project = ledger
        .create_project(
            NewProject::new("Shell mastery")
                .with_description("pipes and redirection")
                .with_study_type(StudyCategory::Linux),
        )
        .expect("create");

    assert_eq!(project.description.as_deref(), Some("pipes and redirection"));
    assert_eq!(project.study_type, Some(StudyCategory::Linux));
    assert_eq!(project.created_at, project.updated_at);
    assert!(project.items.is_empty());
}

#[test]
fn test_update_project_merges_fields_and_bumps_updated_at() {
    let ledger = ledger();
    let project = ledger
        .create_project(NewProject::new("draft name").with_description("keep me"))
        .expect("create");

    ledger
        .update_project(project.id, ProjectPatch::new().name("final name"))
        .expect("update");

    let updated = &ledger.projects().expect("list")[0];
    assert_eq!(updated.name, "final name");
    // Unset patch fields stay untouched.
    assert_eq!(updated.description.as_deref(), Some("keep me"));
    assert!(updated.updated_at >= project.updated_at);
}

#[test]
fn test_update_unknown_project_is_silent_noop() {
    let ledger = ledger();
    ledger.create_project(NewProject::new("only")).expect("create");

    ledger
        .update_project(Uuid::now_v7(), ProjectPatch::new().name("ghost"))
        .expect("update should not fail");

    assert_eq!(ledger.projects().expect("list")[0].name, "only");
}

#[test]
fn test_delete_project_discards_items() {
    let ledger = ledger();
    let project = ledger.create_project(NewProject::new("doomed")).expect("create");
    ledger
        .add_item(project.id, NewTodoItem::new("task"))
        .expect("add item");

    ledger.delete_project(project.id).expect("delete");
    assert!(ledger.projects().expect("list").is_empty());

    // Items died with the project; adding to the dead id is a no-op.
    let orphan = ledger
        .add_item(project.id, NewTodoItem::new("late"))
        .expect("add should not fail");
    assert!(orphan.is_none());
}

#[test]
fn test_add_item_appends_in_order() {
    let ledger = ledger();
    let project = ledger.create_project(NewProject::new("ordered")).expect("create");

    ledger.add_item(project.id, NewTodoItem::new("one")).expect("add");
    ledger.add_item(project.id, NewTodoItem::new("two")).expect("add");
    ledger.add_item(project.id, NewTodoItem::new("three")).expect("add");

    let stored = &ledger.projects().expect("list")[0];
    let texts: Vec<&str> = stored.items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn test_add_item_returns_created_record() {
    let ledger = ledger();
    let project = ledger.create_project(NewProject::new("p")).expect("create");
    let due = Utc::now();

    let item = ledger
        .add_item(
            project.id,
            NewTodoItem::new("read docs")
                .with_priority(Priority::Medium)
                .with_tags(vec!["reading".to_string()])
                .with_due_date(due),
        )
        .expect("add")
        .expect("project exists");

    assert_eq!(item.text, "read docs");
    assert_eq!(item.priority, Priority::Medium);
    assert_eq!(item.due_date, Some(due));
    assert!(!item.completed);
}

#[test]
fn test_toggle_item_twice_restores_state() {
    let ledger = ledger();
    let project = ledger.create_project(NewProject::new("p")).expect("create");
    let item = ledger
        .add_item(project.id, NewTodoItem::new("flip me"))
        .expect("add")
        .expect("project exists");

    ledger.toggle_item(project.id, item.id).expect("toggle");
    assert!(ledger.projects().expect("list")[0].items[0].completed);

    ledger.toggle_item(project.id, item.id).expect("toggle");
    assert!(!ledger.projects().expect("list")[0].items[0].completed);
}

#[test]
fn test_toggle_item_unknown_ids_are_silent() {
    let ledger = ledger();
    let project = ledger.create_project(NewProject::new("p")).expect("create");
    let item = ledger
        .add_item(project.id, NewTodoItem::new("stay"))
        .expect("add")
        .expect("project exists");

    ledger
        .toggle_item(Uuid::now_v7(), item.id)
        .expect("unknown project should not fail");
    ledger
        .toggle_item(project.id, Uuid::now_v7())
        .expect("unknown item should not fail");

    assert!(!ledger.projects().expect("list")[0].items[0].completed);
}

#[test]
fn test_delete_item_is_terminal() {
    let ledger = ledger();
    let project = ledger.create_project(NewProject::new("p")).expect("create");
    let doomed = ledger
        .add_item(project.id, NewTodoItem::new("doomed"))
        .expect("add")
        .expect("project exists");
    ledger
        .add_item(project.id, NewTodoItem::new("kept"))
        .expect("add");

    ledger.delete_item(project.id, doomed.id).expect("delete");
    let stored = &ledger.projects().expect("list")[0];
    assert_eq!(stored.items.len(), 1);
    assert_eq!(stored.items[0].text, "kept");

    ledger.delete_item(project.id, doomed.id).expect("repeat delete is fine");
    assert_eq!(ledger.projects().expect("list")[0].items.len(), 1);
}

#[test]
fn test_stats_counts_projects_items_and_buckets() {
    let ledger = ledger();
    let linux = ledger
        .create_project(NewProject::new("linux").with_study_type(StudyCategory::Linux))
        .expect("create");
    ledger
        .create_project(NewProject::new("rust").with_study_type(StudyCategory::Programming))
        .expect("create");
    ledger.create_project(NewProject::new("untyped")).expect("create");

    let done = ledger
        .add_item(linux.id, NewTodoItem::new("a"))
        .expect("add")
        .expect("project exists");
    ledger.add_item(linux.id, NewTodoItem::new("b")).expect("add");
    ledger.toggle_item(linux.id, done.id).expect("toggle");

    let stats = ledger.stats().expect("stats");
    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.total_items, 2);
    assert_eq!(stats.completed_items, 1);
    assert_eq!(stats.projects_by_type.linux, 1);
    assert_eq!(stats.projects_by_type.programming, 1);
    assert_eq!(stats.projects_by_type.data_analysis, 0);
    assert_eq!(stats.projects_by_type.general, 1);
    assert_eq!(stats.completion_rate, 50);
}

#[test]
fn test_completion_rate_is_zero_without_items() {
    let ledger = ledger();
    ledger.create_project(NewProject::new("empty")).expect("create");

    let stats = ledger.stats().expect("stats");
    assert_eq!(stats.total_items, 0);
    assert_eq!(stats.completion_rate, 0);
}

#[test]
fn test_completion_rate_rounds() {
    let ledger = ledger();
    let project = ledger.create_project(NewProject::new("p")).expect("create");
    for text in ["a", "b", "c"] {
        ledger.add_item(project.id, NewTodoItem::new(text)).expect("add");
    }
    let first = ledger.projects().expect("list")[0].items[0].id;
    ledger.toggle_item(project.id, first).expect("toggle");

    // 1 of 3 completed -> 33.33 -> 33.
    assert_eq!(ledger.stats().expect("stats").completion_rate, 33);
}
