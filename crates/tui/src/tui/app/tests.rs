use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use super::{App, InputMode};
use crate::config::AppConfig;
use crate::model::{FilterMode, Task, TaskFilter};
use crate::storage::{MemoryStorage, Storage};
use crate::store::{TaskStore, TASKS_KEY};
use crate::theme::{ThemeState, THEME_KEY};

fn app_with_storage(storage: Arc<MemoryStorage>) -> App {
    let config = AppConfig::from_data_dir(PathBuf::from("/tmp/taskpad-tests"));
    let store = TaskStore::open(storage.clone()).expect("open store");
    let theme = ThemeState::load(storage).expect("load theme");
    App::new(config, store, theme, false)
}

fn app() -> (App, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (app_with_storage(storage.clone()), storage)
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn add_task(app: &mut App, text: &str) {
    press(app, KeyCode::Char('a'));
    type_text(app, text);
    press(app, KeyCode::Enter);
}

#[test]
fn adding_tasks_appends_in_order() {
    let (mut app, _) = app();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Walk dog");

    let texts: Vec<&str> = app.store.tasks().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Buy milk", "Walk dog"]);
    assert!(app.store.tasks().iter().all(|t| !t.completed));
    assert_eq!(app.visible.len(), 2);
}

#[test]
fn whitespace_only_add_changes_nothing() {
    let (mut app, storage) = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.store.tasks().is_empty());
    assert_eq!(app.input_mode, InputMode::Add);
    assert!(storage.get(TASKS_KEY).unwrap().is_none());
}

#[test]
fn editing_replaces_text_in_place() {
    let (mut app, _) = app();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Walk dog");

    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.input.as_str(), "Buy milk");

    for _ in 0.."Buy milk".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "Get oat milk");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.tasks()[0].text, "Get oat milk");
    assert_eq!(app.store.tasks()[0].id, 1);
    assert_eq!(app.store.tasks()[1].text, "Walk dog");
    assert!(app.view.editing().is_none());
}

#[test]
fn escape_cancels_an_edit_without_saving() {
    let (mut app, _) = app();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, " and bread");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.store.tasks()[0].text, "Buy milk");
    assert!(app.view.editing().is_none());
    assert!(app.view.draft().is_empty());
}

#[test]
fn toggling_twice_restores_completion() {
    let (mut app, _) = app();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Enter);
    assert!(app.store.tasks()[0].completed);
    press(&mut app, KeyCode::Enter);
    assert!(!app.store.tasks()[0].completed);
}

#[test]
fn deleting_the_edited_task_clears_the_edit_target() {
    let (mut app, _) = app();
    add_task(&mut app, "Buy milk");

    let task = app.store.tasks()[0].clone();
    app.view.begin_edit(&task);
    app.delete_selected().unwrap();

    assert!(app.store.tasks().is_empty());
    assert!(app.view.editing().is_none());
}

#[test]
fn clear_all_requires_confirmation_and_resets_the_view() {
    let (mut app, storage) = app();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Walk dog");

    press(&mut app, KeyCode::Char('C'));
    assert_eq!(app.input_mode, InputMode::ConfirmClear);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert!(app.store.tasks().is_empty());
    assert!(app.view.editing().is_none());
    for mode in [FilterMode::All, FilterMode::Done, FilterMode::Pending] {
        assert!(app.store.filtered(&TaskFilter::for_mode(mode)).is_empty());
    }
    assert_eq!(storage.get(TASKS_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn declining_the_clear_prompt_keeps_the_list() {
    let (mut app, _) = app();
    add_task(&mut app, "Buy milk");

    press(&mut app, KeyCode::Char('C'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.tasks().len(), 1);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn theme_toggle_persists_the_new_value() {
    let (mut app, storage) = app();

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

    press(&mut app, KeyCode::Char('t'));
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn done_tab_shows_only_completed_tasks() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(
            TASKS_KEY,
            r#"[{"id":1,"text":"a","completed":false},{"id":2,"text":"b","completed":true}]"#,
        )
        .unwrap();
    let mut app = app_with_storage(storage);

    press(&mut app, KeyCode::Tab);
    assert_eq!(
        app.visible,
        vec![Task {
            id: 2,
            text: "b".into(),
            completed: true,
        }]
    );
}

#[test]
fn search_narrows_live_and_escape_restores() {
    let (mut app, _) = app();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Walk dog");

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "MILK");
    assert_eq!(app.visible.len(), 1);
    assert_eq!(app.visible[0].text, "Buy milk");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.view.search(), "");
    assert_eq!(app.visible.len(), 2);
}

#[test]
fn committed_search_survives_tab_switches() {
    let (mut app, _) = app();
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Walk dog");

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "dog");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view.filter(), FilterMode::Pending);
    assert_eq!(app.visible.len(), 1);
    assert_eq!(app.visible[0].text, "Walk dog");
}

#[test]
fn deleting_an_unknown_selection_is_a_noop() {
    let (mut app, _) = app();
    press(&mut app, KeyCode::Char('x'));
    assert!(app.store.tasks().is_empty());
}
