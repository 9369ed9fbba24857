//! Macro snapshot source and subscription handling.
//!
//! The macro list is owned by the macro management subsystem. Consumers
//! register a listener and receive the full snapshot on registration and
//! after every change. Everything here runs on the UI thread; listeners are
//! not `Send`.

use crate::models::{macros::find_duplicate_id, Macro, MacroId};
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Callback receiving macro snapshots.
pub type MacroListener = Box<dyn FnMut(&[Macro])>;

/// Push-based provider of macro snapshots.
pub trait MacroSource {
    /// Registers `listener` and delivers the current snapshot to it.
    ///
    /// The registration lasts until the returned [`Subscription`] is
    /// released or dropped.
    fn subscribe(&self, listener: MacroListener) -> Subscription;
}

/// Handle of an active listener registration.
///
/// Releasing happens at most once: explicitly through
/// [`Subscription::unsubscribe`] or implicitly on drop.
#[must_use = "dropping a Subscription immediately unregisters the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the function that removes the registration.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Returns true while the registration has not been released.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Releases the registration now.
    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

type ListenerId = u64;

#[derive(Default)]
struct StoreInner {
    macros: Vec<Macro>,
    listeners: Vec<(ListenerId, MacroListener)>,
    next_listener_id: ListenerId,
    /// Listeners released while a dispatch was running. Only the outermost
    /// dispatch drains this set.
    released_during_dispatch: HashSet<ListenerId>,
    dispatching: bool,
    /// A change happened that listeners have not seen yet
    pending: bool,
}

/// In-memory macro list that notifies subscribers on every change.
///
/// Cloning yields another handle to the same list.
#[derive(Clone, Default)]
pub struct MacroStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl MacroStore {
    /// Creates a store holding `macros`.
    ///
    /// # Errors
    ///
    /// Returns an error if two macros share an id.
    pub fn new(macros: Vec<Macro>) -> Result<Self> {
        ensure_unique_ids(&macros)?;
        let store = Self::default();
        store.inner.borrow_mut().macros = macros;
        Ok(store)
    }

    /// Copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Macro> {
        self.inner.borrow().macros.clone()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Replaces the whole list and notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if two macros share an id. The list is unchanged in
    /// that case.
    pub fn set_macros(&self, macros: Vec<Macro>) -> Result<()> {
        ensure_unique_ids(&macros)?;
        self.inner.borrow_mut().macros = macros;
        self.notify();
        Ok(())
    }

    /// Appends a macro and notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if a macro with the same id exists.
    pub fn add_macro(&self, new_macro: Macro) -> Result<()> {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.macros.iter().any(|m| m.id == new_macro.id) {
                anyhow::bail!("Macro with id {} already exists", new_macro.id);
            }
            inner.macros.push(new_macro);
        }
        self.notify();
        Ok(())
    }

    /// Removes the macro with `id` and notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if no macro has that id.
    pub fn remove_macro(&self, id: MacroId) -> Result<Macro> {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let pos = inner
                .macros
                .iter()
                .position(|m| m.id == id)
                .context(format!("Macro with id {id} not found"))?;
            inner.macros.remove(pos)
        };
        self.notify();
        Ok(removed)
    }

    /// Renames the macro with `id` and notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if no macro has that id.
    pub fn rename_macro(&self, id: MacroId, name: impl Into<String>) -> Result<()> {
        {
            let mut inner = self.inner.borrow_mut();
            let target = inner
                .macros
                .iter_mut()
                .find(|m| m.id == id)
                .context(format!("Macro with id {id} not found"))?;
            target.name = name.into();
        }
        self.notify();
        Ok(())
    }

    /// Delivers the current snapshot to every listener.
    ///
    /// Listeners are taken out of the store for the duration of the dispatch
    /// so they may subscribe, unsubscribe or mutate the store from inside the
    /// callback. A mutation made during a dispatch only marks the store as
    /// pending; the running dispatch then stops handing out the stale
    /// snapshot and starts over with the latest one. A listener that mutates
    /// the store on every call therefore never settles.
    fn notify(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.pending = true;
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }

        let mut rounds = 0u32;
        loop {
            let (snapshot, mut listeners) = {
                let mut inner = self.inner.borrow_mut();
                if !inner.pending {
                    inner.dispatching = false;
                    break;
                }
                inner.pending = false;
                (inner.macros.clone(), std::mem::take(&mut inner.listeners))
            };
            rounds += 1;

            for (id, listener) in &mut listeners {
                let id = *id;
                if self.inner.borrow().released_during_dispatch.contains(&id) {
                    continue;
                }
                listener(snapshot.as_slice());
                if self.inner.borrow().pending {
                    break;
                }
            }

            let dropped = {
                let mut inner = self.inner.borrow_mut();
                let released = std::mem::take(&mut inner.released_during_dispatch);
                let (dropped, mut kept): (Vec<_>, Vec<_>) = listeners
                    .into_iter()
                    .partition(|(id, _)| released.contains(id));
                // Listeners registered during the dispatch go after the existing ones
                kept.append(&mut inner.listeners);
                inner.listeners = kept;
                debug!(
                    listeners = inner.listeners.len(),
                    macros = snapshot.len(),
                    round = rounds,
                    "Macro snapshot dispatched"
                );
                dropped
            };
            // Released listeners may own subscriptions of their own
            drop(dropped);
        }
    }
}

impl MacroSource for MacroStore {
    fn subscribe(&self, mut listener: MacroListener) -> Subscription {
        let snapshot = self.snapshot();
        listener(snapshot.as_slice());

        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, listener));
            id
        };
        debug!(listener_id = id, "Macro listener registered");

        let weak: Weak<RefCell<StoreInner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let removed = {
                let mut inner = inner.borrow_mut();
                if inner.dispatching {
                    inner.released_during_dispatch.insert(id);
                }
                let position = inner
                    .listeners
                    .iter()
                    .position(|(listener_id, _)| *listener_id == id);
                position.map(|position| inner.listeners.remove(position))
            };
            debug!(listener_id = id, "Macro listener released");
            // Dropped outside the borrow in case the listener owns subscriptions
            drop(removed);
        })
    }
}

impl std::fmt::Debug for MacroStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MacroStore")
            .field("macros", &inner.macros)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

fn ensure_unique_ids(macros: &[Macro]) -> Result<()> {
    if let Some(id) = find_duplicate_id(macros) {
        anyhow::bail!("Duplicate macro id {id} in macro list");
    }
    Ok(())
}
