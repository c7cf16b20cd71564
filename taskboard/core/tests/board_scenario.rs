use std::cell::RefCell;
use std::rc::Rc;
use taskboard_core::{
    Draggable, FormRules, MemoryTransfer, ProjectDraft, ProjectListView, ProjectStatus,
    ProjectStore,
};

/// A store with both lists subscribed, the way the board mounts them.
struct Board {
    store: ProjectStore,
    active: Rc<RefCell<ProjectListView>>,
    finished: Rc<RefCell<ProjectListView>>,
    notifications: Rc<RefCell<usize>>,
}

fn setup() -> Board {
    let mut store = ProjectStore::new();
    let active = Rc::new(RefCell::new(ProjectListView::new(ProjectStatus::Active)));
    let finished = Rc::new(RefCell::new(ProjectListView::new(ProjectStatus::Finished)));
    let notifications = Rc::new(RefCell::new(0));

    for view in [&active, &finished] {
        let view = Rc::clone(view);
        store.subscribe(move |snapshot| view.borrow_mut().render(snapshot));
    }
    let counter = Rc::clone(&notifications);
    store.subscribe(move |_| *counter.borrow_mut() += 1);

    Board {
        store,
        active,
        finished,
        notifications,
    }
}

fn titles(view: &Rc<RefCell<ProjectListView>>) -> Vec<String> {
    view.borrow()
        .items()
        .iter()
        .map(|item| item.title().to_string())
        .collect()
}

#[test]
fn project_moves_from_active_to_finished_by_drag_and_drop() {
    let mut board = setup();
    let request = ProjectDraft::new("Build roof", "Construct the roof", "3")
        .validate(&FormRules::default())
        .expect("draft should be valid");

    let id = board.store.add(request);

    assert_eq!(titles(&board.active), vec!["Build roof"]);
    assert!(titles(&board.finished).is_empty());
    let original = board.store.get(&id).cloned().unwrap();

    let item = board.active.borrow().items()[0].clone();
    let mut transfer = MemoryTransfer::new();
    item.drag_start(&mut transfer);
    assert!(board.finished.borrow_mut().drag_over(&transfer));
    let request = board
        .finished
        .borrow_mut()
        .receive_drop(&transfer)
        .expect("drop should carry the project id");
    item.drag_end();

    assert!(request.apply(&mut board.store));

    assert!(titles(&board.active).is_empty());
    assert_eq!(titles(&board.finished), vec!["Build roof"]);
    let moved = board.store.get(&id).unwrap();
    assert_eq!(moved.id(), original.id());
    assert_eq!(moved.title(), original.title());
    assert_eq!(moved.description(), original.description());
    assert_eq!(moved.people(), original.people());
    assert_eq!(moved.status(), ProjectStatus::Finished);
}

#[test]
fn lists_show_exactly_their_status() {
    let mut board = setup();
    board.store.add_project("P1".to_string(), "first project".to_string(), 1);
    let p2 = board.store.add_project("P2".to_string(), "second project".to_string(), 2);

    board.store.move_project(&p2, ProjectStatus::Finished);

    assert_eq!(titles(&board.active), vec!["P1"]);
    assert_eq!(titles(&board.finished), vec!["P2"]);
}

#[test]
fn dropping_on_the_same_list_does_not_notify() {
    let mut board = setup();
    board.store.add_project("P1".to_string(), "first project".to_string(), 1);
    let before = *board.notifications.borrow();

    let item = board.active.borrow().items()[0].clone();
    let mut transfer = MemoryTransfer::new();
    item.drag_start(&mut transfer);
    let request = board.active.borrow_mut().receive_drop(&transfer).unwrap();

    assert!(!request.apply(&mut board.store));
    assert_eq!(*board.notifications.borrow(), before);
    assert_eq!(titles(&board.active), vec!["P1"]);
}

#[test]
fn invalid_draft_never_reaches_the_store() {
    let board = setup();

    let result = ProjectDraft::new("", "Construct the roof", "3").validate(&FormRules::default());

    assert!(result.is_err());
    assert!(board.store.is_empty());
    assert_eq!(*board.notifications.borrow(), 0);
}
