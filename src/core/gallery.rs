//! Ordered image list with an optional active entry.
//!
//! [`Gallery`] is generic over the image resource so the ordering and
//! selection rules can be tested natively; the viewer instantiates it with
//! [`ObjectUrl`](crate::models::ObjectUrl).
//!
//! Entries are identified by an [`EntryId`] rather than by their URL, so
//! selecting the same file twice yields two independent entries.

use crate::config::HOTKEY_SLOTS;

/// Stable identity of a gallery entry (survives reordering).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

/// A single image in the gallery.
#[derive(Debug)]
pub struct Entry<R> {
    id: EntryId,
    image: R,
}

impl<R> Entry<R> {
    pub fn image(&self) -> &R {
        &self.image
    }
}

/// Ordered gallery state.
///
/// Invariant: `active`, when set, names an entry present in `entries`.
#[derive(Debug)]
pub struct Gallery<R> {
    entries: Vec<Entry<R>>,
    active: Option<EntryId>,
    next_id: u64,
}

impl<R> Gallery<R> {
    /// Creates an empty gallery with nothing active.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active: None,
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<R>> {
        self.entries.iter()
    }

    /// Entry with the given id, if still present.
    pub fn entry(&self, id: EntryId) -> Option<&Entry<R>> {
        self.iter().find(|e| e.id == id)
    }

    /// Current position of an entry.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.iter().position(|e| e.id == id)
    }

    /// Entry ids in display order.
    pub fn ids(&self) -> Vec<EntryId> {
        self.iter().map(|e| e.id).collect()
    }

    pub fn active_id(&self) -> Option<EntryId> {
        self.active
    }

    /// The entry shown in the preview pane.
    pub fn active(&self) -> Option<&Entry<R>> {
        self.active.and_then(|id| self.entry(id))
    }

    /// Appends images to the end, preserving their order.
    ///
    /// Returns the number of entries added.
    pub fn append<I>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = R>,
    {
        let before = self.entries.len();
        for image in images {
            let id = EntryId(self.next_id);
            self.next_id += 1;
            self.entries.push(Entry { id, image });
        }
        self.entries.len() - before
    }

    /// Removes the entry at `index` and hands its resource back.
    ///
    /// Clears the active selection if it pointed at the removed entry.
    /// Dropping the returned value releases it.
    pub fn remove(&mut self, index: usize) -> Option<R> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        if self.active == Some(entry.id) {
            self.active = None;
        }
        Some(entry.image)
    }

    /// Moves the entry at `from` to `to`; other entries keep their relative order.
    ///
    /// Returns `false` (and changes nothing) when `from == to` or either
    /// index is out of range.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        let len = self.entries.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    /// Makes the entry at `index` active. Returns `false` if there is none.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) => {
                self.active = Some(entry.id);
                true
            }
            None => false,
        }
    }

    /// Makes the entry with `id` active. Returns `false` if it is gone.
    pub fn activate_id(&mut self, id: EntryId) -> bool {
        if self.entry(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Digit hotkey selection: slot `d` (1-based) activates entry `d - 1`.
    pub fn activate_slot(&mut self, slot: usize) -> bool {
        if !(1..=HOTKEY_SLOTS).contains(&slot) {
            return false;
        }
        self.activate(slot - 1)
    }

    /// Drops every entry and clears the selection.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.active = None;
    }
}

impl<R> Default for Gallery<R> {
    fn default() -> Self {
        Self::new()
    }
}
