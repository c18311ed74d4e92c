//! # Collections
//!
//! Most slices hold one or more lists of records fetched from a remote store. Each list
//! tracks its own loading flag and error value, so a failing fetch of one entity kind never
//! masks another. [`Collection`] bundles the three and knows how to reduce the
//! [`Phase`]s of the three list operations:
//!
//! | Operation | Pending | Fulfilled | Rejected |
//! |-----------|---------|-----------|----------|
//! | fetch-all | loading, clear error | replace list | set error, keep list |
//! | add-one   | loading, clear error | append | set error |
//! | edit-one  | loading, clear error | patch record with matching id | set error |

use crate::phase::Phase;

/// Records that can be looked up by a string identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// A partial update that knows how to merge itself into a record.
pub trait Patch<T> {
    fn apply(self, target: &mut T);
}

/// Payload of a successful edit: which record, and what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Edited<P> {
    pub id: String,
    pub patch: P,
}

/// A list of records plus its loading flag and last error.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }

    /// Reduce a fetch-all phase. A failed fetch keeps the stale list.
    pub fn apply_fetch(&mut self, phase: Phase<Vec<T>>) {
        match phase {
            Phase::Pending => self.begin(),
            Phase::Fulfilled(items) => {
                self.loading = false;
                self.items = items;
            }
            Phase::Rejected(message) => self.fail(message),
        }
    }

    /// Reduce an add-one phase.
    pub fn apply_add(&mut self, phase: Phase<T>) {
        match phase {
            Phase::Pending => self.begin(),
            Phase::Fulfilled(item) => {
                self.loading = false;
                self.items.push(item);
            }
            Phase::Rejected(message) => self.fail(message),
        }
    }

    /// Reduce an edit-one phase. The record whose key matches is patched in place;
    /// an unknown id leaves the list as it is.
    pub fn apply_edit<P: Patch<T>>(&mut self, phase: Phase<Edited<P>>) {
        match phase {
            Phase::Pending => self.begin(),
            Phase::Fulfilled(Edited { id, patch }) => {
                self.loading = false;
                if let Some(item) = self.items.iter_mut().find(|item| item.key() == id) {
                    patch.apply(item);
                }
            }
            Phase::Rejected(message) => self.fail(message),
        }
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
