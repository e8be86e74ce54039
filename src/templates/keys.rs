use crate::error::{CascadeError, Result};
use std::fmt;
use std::str::FromStr;

/// Severity levels that have their own template keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	Debug,
	Info,
	Warning,
	Error,
	Critical,
}

impl Severity {
	/// Every severity, lowest first.
	pub const ALL: [Severity; 5] = [
		Severity::Debug,
		Severity::Info,
		Severity::Warning,
		Severity::Error,
		Severity::Critical,
	];

	/// Name used inside template keys.
	pub fn as_str(&self) -> &'static str {
		match self {
			Severity::Debug => "DEBUG",
			Severity::Info => "INFO",
			Severity::Warning => "WARNING",
			Severity::Error => "ERROR",
			Severity::Critical => "CRITICAL",
		}
	}
}

impl FromStr for Severity {
	type Err = CascadeError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_uppercase().as_str() {
			"DEBUG" => Ok(Severity::Debug),
			"INFO" => Ok(Severity::Info),
			"WARNING" | "WARN" => Ok(Severity::Warning),
			"ERROR" => Ok(Severity::Error),
			"CRITICAL" | "FATAL" => Ok(Severity::Critical),
			_ => Err(CascadeError::UnknownSeverity {
				name: s.to_string(),
			}),
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Where a start/finish pair is logged from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
	/// A scoped block with a caller-chosen label.
	Context,
	/// A wrapped function call labelled with the function name.
	Function,
}

impl ContextKind {
	pub const ALL: [ContextKind; 2] = [ContextKind::Context, ContextKind::Function];

	pub fn as_str(&self) -> &'static str {
		match self {
			ContextKind::Context => "context",
			ContextKind::Function => "function",
		}
	}
}

/// Lifecycle stage of a logged context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
	Start,
	Finish,
}

impl Stage {
	pub const ALL: [Stage; 2] = [Stage::Start, Stage::Finish];

	/// Name of the stage, which is also its root template key.
	pub fn as_str(&self) -> &'static str {
		match self {
			Stage::Start => "start",
			Stage::Finish => "finish",
		}
	}
}

/// Typed composite template key such as `function.start.WARNING`.
///
/// Kind and severity are optional, so `start`, `start.DEBUG` and
/// `context.finish` are all representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
	pub kind: Option<ContextKind>,
	pub stage: Stage,
	pub severity: Option<Severity>,
}

impl TemplateKey {
	pub fn new(kind: Option<ContextKind>, stage: Stage, severity: Option<Severity>) -> Self {
		TemplateKey {
			kind,
			stage,
			severity,
		}
	}

	/// The root key for a stage.
	pub fn root(stage: Stage) -> Self {
		TemplateKey::new(None, stage, None)
	}

	/// Every key of the template namespace, roots first.
	pub fn all() -> impl Iterator<Item = TemplateKey> {
		let kinds = [None, Some(ContextKind::Context), Some(ContextKind::Function)];
		let severities = std::iter::once(None).chain(Severity::ALL.into_iter().map(Some));

		kinds.into_iter().flat_map(move |kind| {
			let severities = severities.clone();
			Stage::ALL.into_iter().flat_map(move |stage| {
				severities
					.clone()
					.map(move |severity| TemplateKey::new(kind, stage, severity))
			})
		})
	}

	/// Coarser keys this one falls back to, most specific first.
	///
	/// `k.s.L` falls back to `s.L` and then `k.s`; `s.L` and `k.s` fall back
	/// to `s`; the root `s` has no fallback.
	pub fn fallbacks(&self) -> Vec<TemplateKey> {
		match (self.kind, self.severity) {
			(None, None) => Vec::new(),
			(Some(_), None) | (None, Some(_)) => vec![TemplateKey::root(self.stage)],
			(Some(kind), Some(severity)) => vec![
				TemplateKey::new(None, self.stage, Some(severity)),
				TemplateKey::new(Some(kind), self.stage, None),
			],
		}
	}
}

impl fmt::Display for TemplateKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(kind) = self.kind {
			write!(f, "{}.", kind.as_str())?;
		}
		f.write_str(self.stage.as_str())?;
		if let Some(severity) = self.severity {
			write!(f, ".{}", severity.as_str())?;
		}
		Ok(())
	}
}

impl FromStr for TemplateKey {
	type Err = CascadeError;

	/// Parse a dotted key. Severity names must be upper case here, matching
	/// how keys appear in configuration.
	fn from_str(s: &str) -> Result<Self> {
		let invalid = || CascadeError::InvalidTemplateKey { key: s.to_string() };
		let mut parts = s.split('.').peekable();

		let kind = match parts.peek() {
			Some(&"context") => Some(ContextKind::Context),
			Some(&"function") => Some(ContextKind::Function),
			_ => None,
		};
		if kind.is_some() {
			parts.next();
		}

		let stage = match parts.next() {
			Some("start") => Stage::Start,
			Some("finish") => Stage::Finish,
			_ => return Err(invalid()),
		};

		let severity = match parts.next() {
			None => None,
			Some(name) => Some(
				Severity::ALL
					.into_iter()
					.find(|severity| severity.as_str() == name)
					.ok_or_else(invalid)?,
			),
		};

		if parts.next().is_some() {
			return Err(invalid());
		}

		Ok(TemplateKey::new(kind, stage, severity))
	}
}
