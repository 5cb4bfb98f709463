// glucoin/core/src/cache.rs

//! Id-keyed local cache for lists the UI re-fetches wholesale.
//!
//! Optimistic updates (ticking a daily task, appending a sent chat message)
//! go through `upsert`; every successful re-fetch then calls `replace_all`,
//! which is the only reconciliation — there is deliberately no fine-grained
//! merging against concurrent server changes.

use std::collections::HashMap;
use std::hash::Hash;

/// Entities the cache can key by id.
pub trait Identifiable {
  type Id: Eq + Hash + Clone;

  fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone)]
pub struct EntityCache<T: Identifiable> {
  entries: HashMap<T::Id, T>,
  /// Insertion order of ids, so lists render stably between refetches.
  order: Vec<T::Id>,
}

impl<T: Identifiable> Default for EntityCache<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Identifiable> EntityCache<T> {
  pub fn new() -> Self {
    Self {
      entries: HashMap::new(),
      order: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  pub fn get(&self, id: &T::Id) -> Option<&T> {
    self.entries.get(id)
  }

  /// Server truth arrived: drop everything local and take the new list as-is.
  pub fn replace_all(&mut self, items: Vec<T>) {
    self.entries.clear();
    self.order.clear();
    for item in items {
      let id = item.id();
      self.order.push(id.clone());
      self.entries.insert(id, item);
    }
  }

  /// Optimistic local write; overwritten by the next `replace_all`.
  pub fn upsert(&mut self, item: T) {
    let id = item.id();
    if self.entries.insert(id.clone(), item).is_none() {
      self.order.push(id);
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.order.iter().filter_map(|id| self.entries.get(id))
  }
}

impl<T: Identifiable + Clone> EntityCache<T> {
  pub fn to_vec(&self) -> Vec<T> {
    self.iter().cloned().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Clone, PartialEq)]
  struct Task {
    id: u32,
    title: String,
    completed: bool,
  }

  impl Identifiable for Task {
    type Id = u32;

    fn id(&self) -> u32 {
      self.id
    }
  }

  fn task(id: u32, title: &str) -> Task {
    Task {
      id,
      title: title.to_string(),
      completed: false,
    }
  }

  #[test]
  fn upsert_then_replace_all_reconciles_wholesale() {
    let mut cache = EntityCache::new();
    cache.replace_all(vec![task(1, "Minum obat"), task(2, "Cek gula darah")]);

    // Optimistic tick.
    let mut ticked = task(1, "Minum obat");
    ticked.completed = true;
    cache.upsert(ticked);
    assert!(cache.get(&1).unwrap().completed);

    // Server refetch says otherwise; the refetch wins wholesale.
    cache.replace_all(vec![task(1, "Minum obat"), task(3, "Jalan pagi")]);
    assert!(!cache.get(&1).unwrap().completed);
    assert!(cache.get(&2).is_none());
    assert_eq!(cache.len(), 2);
  }

  #[test]
  fn iteration_preserves_list_order() {
    let mut cache = EntityCache::new();
    cache.replace_all(vec![task(5, "a"), task(2, "b"), task(9, "c")]);
    let ids: Vec<u32> = cache.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![5, 2, 9]);
  }

  #[test]
  fn upsert_appends_new_entities_at_the_end() {
    let mut cache = EntityCache::new();
    cache.replace_all(vec![task(1, "a")]);
    cache.upsert(task(2, "b"));
    let ids: Vec<u32> = cache.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
  }
}
