//! Start/finish log templates.
//!
//! This module handles:
//! - Typed composite keys (`function.start.WARNING`)
//! - The fixed template cascade and its validation
//! - Rendering `{label}` and `{arguments}` into a resolved template

pub mod catalog;
pub mod keys;
pub mod render;

pub use catalog::{ContextTemplates, DEFAULT_TEMPLATES, REQUIRED_KEYS, build_cascade_graph};
pub use keys::{ContextKind, Severity, Stage, TemplateKey};
pub use render::{Fields, render};
