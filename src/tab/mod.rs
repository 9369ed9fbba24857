//! Macro tab of the key editor popover.
//!
//! `MacroTab` binds the edited key to "play macro". It keeps the macro
//! selector in sync with the macro source, converts between the selection
//! and play-macro key actions, and derives the back link used when jumping
//! to the macro editor.

pub mod component;

pub use component::{Tab, TabEvent};

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::constants::{DEFAULT_KEYMAP_ROUTE, MACRO_PLAYBACK_UNSUPPORTED};
use crate::models::{KeyAction, Keymap, Macro, RemapInfo, SelectedKey};
use crate::services::{
    compose_deep_link, BindingError, BindingMapper, DeepLinkTarget, MacroCatalog, MacroOption,
    MacroSource, Subscription,
};

/// Inputs changed since the last [`MacroTab::apply_changes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PendingChanges {
    keymap: bool,
    selected_key: bool,
}

/// State of the macro tab.
///
/// Holds exactly one subscription to the macro source from construction
/// until [`MacroTab::close`] or drop.
#[derive(Debug)]
pub struct MacroTab {
    catalog: Rc<RefCell<MacroCatalog>>,
    mapper: BindingMapper,
    current_keymap: Option<Keymap>,
    default_key_action: Option<KeyAction>,
    macro_playback_supported: bool,
    remap_info: Option<RemapInfo>,
    selected_key: Option<SelectedKey>,
    pending: PendingChanges,
    deep_link: Option<DeepLinkTarget>,
    keymap_route: String,
    subscription: Option<Subscription>,
}

impl MacroTab {
    /// Creates the tab and subscribes to `source`.
    pub fn new<S: MacroSource + ?Sized>(source: &S) -> Self {
        Self::with_keymap_route(source, DEFAULT_KEYMAP_ROUTE)
    }

    /// Creates the tab with a custom keymap route for back links.
    pub fn with_keymap_route<S: MacroSource + ?Sized>(
        source: &S,
        keymap_route: impl Into<String>,
    ) -> Self {
        let catalog = Rc::new(RefCell::new(MacroCatalog::new()));

        let listener_catalog = Rc::clone(&catalog);
        let subscription = source.subscribe(Box::new(move |macros: &[Macro]| {
            listener_catalog.borrow_mut().refresh(macros);
        }));
        debug!("Macro tab subscribed to macro source");

        Self {
            catalog,
            mapper: BindingMapper::new(),
            current_keymap: None,
            default_key_action: None,
            macro_playback_supported: true,
            remap_info: None,
            selected_key: None,
            pending: PendingChanges::default(),
            deep_link: None,
            keymap_route: keymap_route.into(),
            subscription: Some(subscription),
        }
    }

    /// Sets the keymap the edited key belongs to.
    pub fn set_current_keymap(&mut self, keymap: Keymap) {
        if self.current_keymap.as_ref() != Some(&keymap) {
            self.current_keymap = Some(keymap);
            self.pending.keymap = true;
        }
    }

    /// Sets the location of the edited key.
    pub fn set_selected_key(&mut self, selected_key: SelectedKey) {
        if self.selected_key != Some(selected_key) {
            self.selected_key = Some(selected_key);
            self.pending.selected_key = true;
        }
    }

    /// Sets the key action currently assigned to the edited key.
    ///
    /// It is the source of the selection restored by `apply_changes`. Its
    /// color is inherited by bindings built from now on.
    pub fn set_default_key_action(&mut self, action: Option<KeyAction>) {
        self.mapper.set_default_action(action.as_ref());
        self.default_key_action = action;
    }

    /// Sets the remap scope. Does not by itself refresh the back link.
    pub fn set_remap_info(&mut self, remap_info: Option<RemapInfo>) {
        self.remap_info = remap_info;
    }

    /// Sets whether the firmware can play macros.
    pub fn set_macro_playback_supported(&mut self, supported: bool) {
        self.macro_playback_supported = supported;
    }

    /// Recomputes derived state after inputs changed.
    ///
    /// Restores the selection from the default key action, and rebuilds the
    /// back link if the keymap or the selected key changed. Returns the
    /// validity notification for the popover.
    pub fn apply_changes(&mut self) -> TabEvent {
        if let Some(action) = self.default_key_action.clone() {
            self.from_key_action(&action);
        }

        if self.pending.keymap || self.pending.selected_key {
            self.refresh_deep_link();
        }
        self.pending = PendingChanges::default();

        TabEvent::ValidAction(self.key_action_valid())
    }

    fn refresh_deep_link(&mut self) {
        match (&self.current_keymap, &self.selected_key) {
            (Some(keymap), Some(selected_key)) => {
                let target = compose_deep_link(
                    &self.keymap_route,
                    keymap,
                    selected_key,
                    self.remap_info.as_ref(),
                );
                debug!(url = %target.url(), "Macro editor back link recomputed");
                self.deep_link = Some(target);
            }
            _ => debug!("Back link needs both keymap and selected key"),
        }
    }

    /// Handles a selection in the macro selector.
    pub fn on_change(&mut self, option_id: &str) {
        self.mapper.select_by_option_id(option_id);
    }

    /// Requests creation of a new macro for the edited key.
    #[must_use]
    pub fn assign_new_macro(&self) -> TabEvent {
        TabEvent::AssignNewMacro
    }

    /// Options for the macro selector.
    #[must_use]
    pub fn macro_options(&self) -> Vec<MacroOption> {
        self.catalog.borrow().options().to_vec()
    }

    /// Latest macro snapshot.
    #[must_use]
    pub fn macros(&self) -> Vec<Macro> {
        self.catalog.borrow().macros().to_vec()
    }

    /// Number of macro snapshots received.
    #[must_use]
    pub fn catalog_revision(&self) -> u64 {
        self.catalog.borrow().revision()
    }

    /// Current selection, possibly out of range.
    #[must_use]
    pub const fn selected_index(&self) -> isize {
        self.mapper.selected_index()
    }

    /// Back link to the edited key, once keymap and key are known.
    #[must_use]
    pub const fn deep_link(&self) -> Option<&DeepLinkTarget> {
        self.deep_link.as_ref()
    }

    /// Warning to show when the firmware cannot play macros.
    #[must_use]
    pub const fn playback_warning(&self) -> Option<&'static str> {
        if self.macro_playback_supported {
            None
        } else {
            Some(MACRO_PLAYBACK_UNSUPPORTED)
        }
    }

    /// Returns true while the tab is registered with the macro source.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unregisters from the macro source. Later calls do nothing.
    pub fn close(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            debug!("Macro tab unsubscribed from macro source");
        }
    }
}

impl Tab for MacroTab {
    fn key_action_valid(&self) -> bool {
        self.mapper.is_valid(self.catalog.borrow().macros())
    }

    fn from_key_action(&mut self, action: &KeyAction) -> bool {
        let catalog = self.catalog.borrow();
        self.mapper.rehydrate(action, catalog.macros())
    }

    fn to_key_action(&self) -> Result<KeyAction, BindingError> {
        self.mapper.to_binding(self.catalog.borrow().macros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KeystrokeAction, PlayMacroAction, RgbColor};
    use crate::services::MacroStore;

    fn store() -> MacroStore {
        MacroStore::new(vec![Macro::new(1, "Alpha"), Macro::new(2, "Beta")]).unwrap()
    }

    #[test]
    fn test_new_tab_receives_snapshot() {
        let store = store();
        let tab = MacroTab::new(&store);

        assert!(tab.is_subscribed());
        assert_eq!(store.listener_count(), 1);
        assert_eq!(tab.catalog_revision(), 1);
        assert_eq!(tab.macro_options().len(), 2);
        assert_eq!(tab.selected_index(), 0);
    }

    #[test]
    fn test_apply_changes_rehydrates_and_notifies() {
        let store = store();
        let mut tab = MacroTab::new(&store);

        tab.set_default_key_action(Some(PlayMacroAction::new(2).into()));
        assert_eq!(tab.apply_changes(), TabEvent::ValidAction(true));
        assert_eq!(tab.selected_index(), 1);

        tab.set_default_key_action(Some(PlayMacroAction::new(77).into()));
        assert_eq!(tab.apply_changes(), TabEvent::ValidAction(false));
        assert_eq!(tab.selected_index(), -1);
    }

    #[test]
    fn test_non_macro_default_keeps_selection() {
        let store = store();
        let mut tab = MacroTab::new(&store);
        tab.on_change("1");

        tab.set_default_key_action(Some(KeyAction::Keystroke(KeystrokeAction::default())));
        assert_eq!(tab.apply_changes(), TabEvent::ValidAction(true));
        assert_eq!(tab.selected_index(), 1);
    }

    #[test]
    fn test_binding_inherits_default_color() {
        let store = store();
        let mut tab = MacroTab::new(&store);
        let blue = RgbColor::new(0, 0, 255);

        tab.set_default_key_action(Some(KeyAction::Keystroke(KeystrokeAction {
            scancode: Some(4),
            modifier_mask: 0,
            color: Some(blue),
        })));
        tab.apply_changes();
        tab.on_change("1");

        let action = tab.to_key_action().unwrap();
        assert_eq!(action, PlayMacroAction::new(2).with_color(blue).into());
    }

    #[test]
    fn test_binding_color_follows_last_default_without_apply() {
        let store = store();
        let mut tab = MacroTab::new(&store);
        let red = RgbColor::new(255, 0, 0);
        let green = RgbColor::new(0, 255, 0);

        tab.set_default_key_action(Some(KeyAction::Keystroke(KeystrokeAction {
            scancode: Some(4),
            modifier_mask: 0,
            color: Some(red),
        })));
        assert_eq!(tab.to_key_action().unwrap().color(), Some(red));

        tab.set_default_key_action(Some(PlayMacroAction::new(1).with_color(green).into()));
        assert_eq!(tab.to_key_action().unwrap().color(), Some(green));

        tab.set_default_key_action(None);
        assert_eq!(tab.to_key_action().unwrap().color(), None);
    }

    #[test]
    fn test_deep_link_needs_keymap_and_key() {
        let store = store();
        let mut tab = MacroTab::new(&store);

        tab.set_current_keymap(Keymap::new("QWR", "QWERTY"));
        tab.apply_changes();
        assert!(tab.deep_link().is_none());

        tab.set_selected_key(SelectedKey::new(0, 1, 7));
        tab.apply_changes();
        assert_eq!(
            tab.deep_link().map(DeepLinkTarget::url).as_deref(),
            Some("/keymap/QWR?layer=0&module=1&key=7")
        );
    }

    #[test]
    fn test_playback_warning() {
        let store = store();
        let mut tab = MacroTab::new(&store);
        assert!(tab.playback_warning().is_none());

        tab.set_macro_playback_supported(false);
        assert_eq!(tab.playback_warning(), Some(MACRO_PLAYBACK_UNSUPPORTED));
    }

    #[test]
    fn test_close_releases_subscription_once() {
        let store = store();
        let mut tab = MacroTab::new(&store);

        tab.close();
        assert!(!tab.is_subscribed());
        assert_eq!(store.listener_count(), 0);

        tab.close();
        drop(tab);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let store = store();
        {
            let _tab = MacroTab::new(&store);
            assert_eq!(store.listener_count(), 1);
        }
        assert_eq!(store.listener_count(), 0);
    }
}
