//! Shopping List Store
//!
//! An ordered, in-memory collection of [`ShoppingItem`]s. The store is the
//! only owner and mutator of its items; lookups that miss report `None` or
//! `false` and leave the collection untouched.

use super::models::ShoppingItem;
use crate::error::ReorderError;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Ordered collection of items, insertion order unless explicitly reordered
#[derive(Debug, Default, Clone)]
pub struct ShoppingListStore {
    items: Vec<ShoppingItem>,
}

impl ShoppingListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in their current order.
    pub fn get_all(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        if id.is_empty() {
            return None;
        }
        self.items.iter().position(|item| item.id == id)
    }

    /// Looks up an item by id. An empty id never matches.
    pub fn get_by_id(&self, id: &str) -> Option<&ShoppingItem> {
        self.position(id).map(|idx| &self.items[idx])
    }

    /// Appends a new, unpurchased item with a freshly generated id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        quantity: i32,
        notes: Option<String>,
    ) -> &ShoppingItem {
        let item = ShoppingItem {
            id: self.next_id(),
            name: name.into(),
            quantity,
            notes,
            is_purchased: false,
        };
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Replaces name, quantity and notes of an existing item.
    ///
    /// `id` and `is_purchased` are preserved. Returns `None` without touching
    /// the collection when the id is unknown.
    pub fn update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        quantity: i32,
        notes: Option<String>,
    ) -> Option<&ShoppingItem> {
        let idx = self.position(id)?;
        let item = &mut self.items[idx];
        item.name = name.into();
        item.quantity = quantity;
        item.notes = notes;
        Some(&*item)
    }

    /// Removes an item, keeping the relative order of the rest.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match on name or notes.
    ///
    /// Returns every match in list order. `None` or an empty query returns
    /// the whole list. Case is folded one character at a time, so characters
    /// without a one-to-one case mapping (`İ`, `ß`) only match themselves.
    pub fn search(&self, query: Option<&str>) -> Vec<&ShoppingItem> {
        let needle = match query {
            Some(q) if !q.is_empty() => fold_case(q),
            _ => return self.items.iter().collect(),
        };

        self.items
            .iter()
            .filter(|item| {
                contains_folded(&item.name, &needle)
                    || item
                        .notes
                        .as_deref()
                        .is_some_and(|notes| contains_folded(notes, &needle))
            })
            .collect()
    }

    /// Drops every purchased item and returns how many were removed.
    pub fn clear_purchased(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_purchased);
        before - self.items.len()
    }

    /// Flips the purchased flag. Returns `false` if the id is unknown.
    pub fn toggle_purchased(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.is_purchased = !item.is_purchased;
                true
            }
            None => false,
        }
    }

    /// Rearranges the list to follow `ordered_ids`.
    ///
    /// The ids must be a permutation of the ids currently held: same count,
    /// no repeats, nothing unknown. On any error the order is left as it was.
    /// An empty ordering against an empty list succeeds.
    pub fn reorder<S: AsRef<str>>(&mut self, ordered_ids: &[S]) -> Result<(), ReorderError> {
        if ordered_ids.len() != self.items.len() {
            return Err(ReorderError::LengthMismatch {
                expected: self.items.len(),
                actual: ordered_ids.len(),
            });
        }

        let positions: HashMap<&str, usize> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id.as_str(), idx))
            .collect();

        let mut seen = HashSet::with_capacity(ordered_ids.len());
        let mut order = Vec::with_capacity(ordered_ids.len());
        for id in ordered_ids {
            let id = id.as_ref();
            if !seen.insert(id) {
                return Err(ReorderError::DuplicateId(id.to_string()));
            }
            let idx = positions
                .get(id)
                .ok_or_else(|| ReorderError::UnknownId(id.to_string()))?;
            order.push(*idx);
        }

        // Equal length, no repeats and no unknowns means every slot is taken once.
        let mut slots: Vec<Option<ShoppingItem>> = std::mem::take(&mut self.items)
            .into_iter()
            .map(Some)
            .collect();
        self.items = order
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .collect();
        Ok(())
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

/// Single-character uppercase mapping; multi-character mappings keep the original.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn fold_case(s: &str) -> Vec<char> {
    s.chars().map(fold_char).collect()
}

fn contains_folded(haystack: &str, needle: &[char]) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = fold_case(haystack);
    haystack.windows(needle.len()).any(|window| window == needle)
}
