use projectboard_core::{ProjectSnapshot, ProjectStatus, ProjectStore};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[test]
fn store_length_tracks_number_of_adds() {
    let mut store = ProjectStore::new();
    for n in 1..=25u32 {
        store.add_project(format!("project {n}"), "some description", n % 8 + 1);
        assert_eq!(store.len(), n as usize);
    }
}

#[test]
fn ids_are_pairwise_distinct() {
    let mut store = ProjectStore::new();
    let returned: Vec<_> = (0..100)
        .map(|_| store.add_project("same title", "same description", 2))
        .collect();

    let stored: HashSet<_> = store.records().iter().map(|record| record.id).collect();
    assert_eq!(stored.len(), 100);
    assert_eq!(
        returned,
        store.records().iter().map(|record| record.id).collect::<Vec<_>>()
    );
}

#[test]
fn listeners_run_in_registration_order() {
    let mut store = ProjectStore::new();
    let calls = Rc::new(RefCell::new(Vec::new()));

    for index in 0..5 {
        let sink = Rc::clone(&calls);
        store.add_listener(move |_| {
            sink.borrow_mut().push(index);
            Ok(())
        });
    }

    store.add_project("Build API", "Design and ship v1", 3);
    assert_eq!(*calls.borrow(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn same_logic_registered_twice_runs_twice() {
    let mut store = ProjectStore::new();
    let calls = Rc::new(RefCell::new(0));

    for _ in 0..2 {
        let counter = Rc::clone(&calls);
        store.add_listener(move |_| {
            *counter.borrow_mut() += 1;
            Ok(())
        });
    }

    store.add_project("Build API", "Design and ship v1", 3);
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn delivered_snapshot_is_not_affected_by_later_adds() {
    let mut store = ProjectStore::new();
    let captured: Rc<RefCell<Vec<ProjectSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&captured);
    store.add_listener(move |snapshot| {
        sink.borrow_mut().push(snapshot.clone());
        Ok(())
    });

    store.add_project("Build API", "Design and ship v1", 3);
    let first = captured.borrow()[0].clone();
    let first_contents = first.to_vec();

    store.add_project("Write docs", "Docs for v1", 1);

    assert_eq!(first.len(), 1);
    assert_eq!(first.to_vec(), first_contents);
    assert_eq!(captured.borrow()[1].len(), 2);
}

#[test]
fn snapshot_contains_full_list_in_creation_order() {
    let mut store = ProjectStore::new();
    let latest: Rc<RefCell<Option<ProjectSnapshot>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&latest);
    store.add_listener(move |snapshot| {
        *sink.borrow_mut() = Some(snapshot.clone());
        Ok(())
    });

    store.add_project("Build API", "Design and ship v1", 3);
    store.add_project("Write docs", "Docs for v1", 1);

    let snapshot = latest.borrow().clone().expect("listener should have run");
    let titles: Vec<&str> = snapshot.iter().map(|record| record.title.as_str()).collect();
    assert_eq!(titles, vec!["Build API", "Write docs"]);
    assert!(snapshot
        .iter()
        .all(|record| record.status == ProjectStatus::Active));
}

#[test]
fn late_listener_only_sees_later_changes() {
    let mut store = ProjectStore::new();
    let l1 = Rc::new(RefCell::new(0));
    let l2 = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&l1);
    store.add_listener(move |_| {
        *counter.borrow_mut() += 1;
        Ok(())
    });
    store.add_project("Build API", "Design and ship v1", 3);

    let counter = Rc::clone(&l2);
    store.add_listener(move |_| {
        *counter.borrow_mut() += 1;
        Ok(())
    });
    store.add_project("Write docs", "Docs for v1", 1);

    assert_eq!(*l1.borrow(), 2);
    assert_eq!(*l2.borrow(), 1);
}

#[test]
fn store_accepts_unvalidated_input() {
    let mut store = ProjectStore::new();
    store.add_project("", "", 0);
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].people_count, 0);
}
