//! Logcascade - cascading start/finish log templates.
//!
//! This library provides:
//! - A generic cascading configuration resolver with explainable fallback paths
//! - The catalog of context/function start/finish templates per severity
//! - Template rendering and `.logcascade.toml` discovery
//!
//! # Example
//!
//! ```
//! use logcascade::templates::{ContextTemplates, Fields, render};
//!
//! let templates = ContextTemplates::new([
//! 	("start", "Start {label}"),
//! 	("finish", "Finish {label}"),
//! 	("function.start.DEBUG", "Calling {label}({arguments})"),
//! ])
//! .unwrap();
//!
//! let template = templates.resolve_template("function.start.DEBUG").unwrap();
//! let line = render(template, &Fields::new("divide").with_arguments("1, 0")).unwrap();
//! assert_eq!(line, "Calling divide(1, 0)");
//!
//! assert_eq!(
//! 	templates.cascade().cascade_path("context.finish.ERROR"),
//! 	"context.finish.ERROR -> finish.ERROR -> context.finish -> finish"
//! );
//! ```

pub mod cascade;
pub mod config;
pub mod error;
pub mod logging;
pub mod templates;

pub use error::{CascadeError, Result};
