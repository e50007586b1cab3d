//! Template system for card defaults
//!
//! A template is a named set of default field values. Cards are produced by
//! merging a template with caller-supplied overrides (see [`crate::card::merge`]).
//!
//! # Example
//!
//! ```rust
//! use card_forge::TemplateRegistry;
//!
//! let registry = TemplateRegistry::builtin();
//! let heavy = registry.get("heavy_unit").unwrap();
//! assert_eq!(heavy.cost, 3);
//! ```

mod registry;

pub use registry::{Template, TemplateRegistry, DEFAULT_CARD_IMAGE};
