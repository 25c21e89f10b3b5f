//! Identity-keyed diff between two declarative descriptions.
//!
//! [`diff`] is a pure function: it reads the old snapshot and the new
//! description and returns a [`Changeset`]. The adapter consumes the
//! changeset without knowing how it was derived, so the algorithm can evolve
//! independently of changeset application.

use std::collections::{HashMap, HashSet};

use crate::model::{Position, Section, Snapshot};

use super::changeset::{Changeset, ItemChanges, SectionChanges};

/// Computes the structural changes transforming `old` into `new`.
///
/// Coordinate spaces follow native list-view semantics: deletes address the
/// old space, inserts the new space, moves are (old, new) pairs. Rows inside
/// a deleted section are removed implicitly with it and produce no item
/// deletes; likewise rows inside an inserted section produce no item inserts.
///
/// Moves are minimized per ordering context: among surviving keys, a longest
/// increasing subsequence is kept stationary and only the remainder moves.
/// A swap therefore yields a single move pair.
///
/// # Postconditions
///
/// - `updates` pairs are only emitted for identities present on both sides
///   whose sections also survive; they never overlap `deletes` or `inserts`.
/// - All lists are sorted ascending, moves and updates by (from, to).
pub fn diff(old: &Snapshot, new: &[Section]) -> Changeset {
    let old_secs: HashMap<&str, usize> = old
        .sections()
        .iter()
        .enumerate()
        .map(|(i, s)| (s.key(), i))
        .collect();
    let new_secs: HashMap<&str, usize> = new
        .iter()
        .enumerate()
        .map(|(i, s)| (s.key(), i))
        .collect();

    let mut sections = SectionChanges::default();
    for (i, section) in old.sections().iter().enumerate() {
        if !new_secs.contains_key(section.key()) {
            sections.deletes.push(i);
        }
    }
    for (i, section) in new.iter().enumerate() {
        if !old_secs.contains_key(section.key()) {
            sections.inserts.push(i);
        }
    }

    // Surviving sections, in old order, with their new indices. Whatever is
    // not part of a longest increasing subsequence of the new indices has to
    // move.
    let survivors: Vec<(usize, usize)> = old
        .sections()
        .iter()
        .enumerate()
        .filter_map(|(i, s)| new_secs.get(s.key()).map(|&j| (i, j)))
        .collect();
    let new_order: Vec<usize> = survivors.iter().map(|&(_, j)| j).collect();
    let stable = stationary_indices(&new_order);
    for (k, &(i, j)) in survivors.iter().enumerate() {
        if !stable.contains(&k) {
            sections.moves.push((i, j));
        }
    }

    let deleted_sections: HashSet<usize> = sections.deletes.iter().copied().collect();
    let inserted_sections: HashSet<usize> = sections.inserts.iter().copied().collect();

    // Flatten items on both sides, keyed by identity.
    struct Entry<'a> {
        pos: Position,
        section_key: &'a str,
        item: &'a crate::model::Item,
    }
    let mut old_items: HashMap<&str, Entry<'_>> = HashMap::new();
    for (s, section) in old.sections().iter().enumerate() {
        for (r, item) in section.items().iter().enumerate() {
            old_items.insert(
                item.key(),
                Entry {
                    pos: Position::new(s, r),
                    section_key: section.key(),
                    item,
                },
            );
        }
    }
    let mut new_items: HashMap<&str, Entry<'_>> = HashMap::new();
    for (s, section) in new.iter().enumerate() {
        for (r, item) in section.items().iter().enumerate() {
            new_items.insert(
                item.key(),
                Entry {
                    pos: Position::new(s, r),
                    section_key: section.key(),
                    item,
                },
            );
        }
    }

    let mut items = ItemChanges::default();

    // Disappeared identities: explicit deletes unless their section goes too.
    for (s, section) in old.sections().iter().enumerate() {
        if deleted_sections.contains(&s) {
            continue;
        }
        for (r, item) in section.items().iter().enumerate() {
            if !new_items.contains_key(item.key()) {
                items.deletes.push(Position::new(s, r));
            }
        }
    }

    // Appeared identities: explicit inserts unless their section is new.
    for (s, section) in new.iter().enumerate() {
        if inserted_sections.contains(&s) {
            continue;
        }
        for (r, item) in section.items().iter().enumerate() {
            if !old_items.contains_key(item.key()) {
                items.inserts.push(Position::new(s, r));
            }
        }
    }

    // Surviving identities, visited in old order for determinism.
    for section in old.sections() {
        for item in section.items() {
            let old_e = &old_items[item.key()];
            let Some(new_e) = new_items.get(item.key()) else {
                continue;
            };
            let old_gone = deleted_sections.contains(&old_e.pos.section());
            let new_fresh = inserted_sections.contains(&new_e.pos.section());
            match (old_gone, new_fresh) {
                // Both endpoints are implicit in section changes.
                (true, true) => {}
                // The old row vanishes with its section; only the insert is
                // explicit.
                (true, false) => items.inserts.push(new_e.pos),
                // The new row appears with its section; only the delete is
                // explicit.
                (false, true) => items.deletes.push(old_e.pos),
                (false, false) => {
                    if old_e.section_key != new_e.section_key {
                        items.moves.push((old_e.pos, new_e.pos));
                    }
                    if !old_e
                        .item
                        .model()
                        .is_content_equal(new_e.item.model().as_ref())
                    {
                        items.updates.push((old_e.pos, new_e.pos));
                    }
                }
            }
        }
    }

    // Same-section reorders: per surviving section, keep a longest increasing
    // subsequence of the surviving rows stationary and move the rest.
    for (js, section) in new.iter().enumerate() {
        let Some(&jo) = old_secs.get(section.key()) else {
            continue;
        };
        let pairs: Vec<(usize, usize)> = old.sections()[jo]
            .items()
            .iter()
            .enumerate()
            .filter_map(|(r, item)| {
                new_items
                    .get(item.key())
                    .filter(|e| e.section_key == section.key())
                    .map(|e| (r, e.pos.row()))
            })
            .collect();
        let new_rows: Vec<usize> = pairs.iter().map(|&(_, nr)| nr).collect();
        let stable = stationary_indices(&new_rows);
        for (k, &(or, nr)) in pairs.iter().enumerate() {
            if !stable.contains(&k) {
                items.moves.push((Position::new(jo, or), Position::new(js, nr)));
            }
        }
    }

    sections.deletes.sort_unstable();
    sections.inserts.sort_unstable();
    sections.moves.sort_unstable();
    items.deletes.sort_unstable();
    items.inserts.sort_unstable();
    items.moves.sort_unstable();
    items.updates.sort_unstable();

    let changeset = Changeset { sections, items };
    tracing::trace!(
        target: "rowdeck::diff",
        structural = changeset.structural_len(),
        updates = changeset.items.updates.len(),
        "computed changeset"
    );
    changeset
}

/// Indices of one longest strictly increasing subsequence of `seq`.
///
/// Elements in the returned set keep their relative order across the
/// transition and need no move. O(n²), which is fine at list-view scale.
fn stationary_indices(seq: &[usize]) -> HashSet<usize> {
    let n = seq.len();
    if n == 0 {
        return HashSet::new();
    }
    let mut len = vec![1usize; n];
    let mut prev = vec![usize::MAX; n];
    let mut best = 0;
    for i in 0..n {
        for j in 0..i {
            if seq[j] < seq[i] && len[j] + 1 > len[i] {
                len[i] = len[j] + 1;
                prev[i] = j;
            }
        }
        if len[i] > len[best] {
            best = i;
        }
    }
    let mut out = HashSet::new();
    let mut cur = best;
    loop {
        out.insert(cur);
        if prev[cur] == usize::MAX {
            break;
        }
        cur = prev[cur];
    }
    out
}
