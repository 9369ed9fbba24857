//! Service layer for the binding logic.
//!
//! This module contains the macro catalog, the binding mapper, the deep
//! link composer and the macro snapshot source they are fed from.

pub mod binding_mapper;
pub mod deep_link;
pub mod documents;
pub mod macro_catalog;
pub mod macro_store;

// Re-export commonly used types and functions
pub use binding_mapper::{BindingError, BindingMapper, NO_SELECTION};
pub use deep_link::{compose_deep_link, DeepLinkTarget};
pub use documents::DocumentService;
pub use macro_catalog::{build_macro_options, MacroCatalog, MacroOption};
pub use macro_store::{MacroListener, MacroSource, MacroStore, Subscription};
