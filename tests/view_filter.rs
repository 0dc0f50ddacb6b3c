use mytodo::todo::{visible, FilterMode, Item, ItemId, ItemStore};
use std::collections::HashSet;

fn ids(items: &[&Item]) -> Vec<ItemId> {
    items.iter().map(|item| item.id()).collect()
}

/// Store with items "0".."n", every index in `done` marked done.
fn store_with(n: usize, done: &[usize]) -> ItemStore {
    let mut store = ItemStore::new();
    let mut created = Vec::new();
    for i in 0..n {
        created.push(store.add(i.to_string()).unwrap().id());
    }
    for &i in done {
        store.set_done(created[i], true);
    }
    store
}

#[test]
fn all_returns_everything_in_order() {
    let store = store_with(4, &[1, 2]);
    let shown = visible(store.all(), FilterMode::All);
    let texts: Vec<_> = shown.iter().map(|item| item.text()).collect();
    assert_eq!(texts, vec!["0", "1", "2", "3"]);
}

#[test]
fn pending_and_done_preserve_relative_order() {
    let store = store_with(5, &[0, 3, 4]);
    let pending: Vec<_> = visible(store.all(), FilterMode::Pending)
        .iter()
        .map(|item| item.text())
        .collect();
    let done: Vec<_> = visible(store.all(), FilterMode::Done)
        .iter()
        .map(|item| item.text())
        .collect();
    assert_eq!(pending, vec!["1", "2"]);
    assert_eq!(done, vec!["0", "3", "4"]);
}

#[test]
fn pending_and_done_partition_all() {
    let cases: [(usize, &[usize]); 5] = [
        (0, &[]),
        (3, &[]),
        (3, &[0, 1, 2]),
        (6, &[1, 4]),
        (7, &[0, 2, 3, 6]),
    ];
    for (n, done) in cases {
        let store = store_with(n, done);
        let all: HashSet<_> = ids(&visible(store.all(), FilterMode::All)).into_iter().collect();
        let pending = ids(&visible(store.all(), FilterMode::Pending));
        let done = ids(&visible(store.all(), FilterMode::Done));

        let pending_set: HashSet<_> = pending.iter().copied().collect();
        let done_set: HashSet<_> = done.iter().copied().collect();
        assert!(pending_set.is_disjoint(&done_set));
        assert_eq!(pending.len() + done.len(), all.len());
        assert_eq!(&pending_set | &done_set, all);
    }
}

#[test]
fn marking_done_moves_item_between_tabs() {
    let mut store = ItemStore::new();
    let id = store.add("Buy milk").unwrap().id();
    store.set_done(id, true);

    assert_eq!(ids(&visible(store.all(), FilterMode::Done)), vec![id]);
    assert!(visible(store.all(), FilterMode::Pending).is_empty());
}

#[test]
fn filtering_does_not_touch_the_store() {
    let store = store_with(3, &[1]);
    let before = store.all().to_vec();
    let _ = visible(store.all(), FilterMode::Done);
    let _ = visible(store.all(), FilterMode::Pending);
    assert_eq!(store.all(), before.as_slice());
}

#[test]
fn tab_titles_match_indexes() {
    let titles: Vec<_> = FilterMode::TABS.iter().map(|mode| mode.title()).collect();
    assert_eq!(titles, vec!["all", "not yet done", "done"]);
    for mode in FilterMode::TABS {
        assert_eq!(FilterMode::from_index(mode.index()), mode);
    }
}
