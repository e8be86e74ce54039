use crate::error::{CascadeError, Result};
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("valid regex")
});

/// Values substituted into a template.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fields<'a> {
	/// Context label or function name.
	pub label: &'a str,

	/// Formatted call arguments; empty for plain contexts.
	pub arguments: &'a str,
}

impl<'a> Fields<'a> {
	pub fn new(label: &'a str) -> Self {
		Fields {
			label,
			arguments: "",
		}
	}

	pub fn with_arguments(mut self, arguments: &'a str) -> Self {
		self.arguments = arguments;
		self
	}

	fn lookup(&self, name: &str) -> Option<&'a str> {
		match name {
			"label" => Some(self.label),
			"arguments" => Some(self.arguments),
			_ => None,
		}
	}
}

/// Substitute `{label}` and `{arguments}` into `template`.
///
/// `{{` and `}}` produce literal braces. Any other field name, or a lone
/// brace, is an error.
pub fn render(template: &str, fields: &Fields) -> Result<String> {
	let mut output = String::with_capacity(template.len());
	let mut last = 0;

	for caps in PLACEHOLDER.captures_iter(template) {
		let Some(whole) = caps.get(0) else {
			continue;
		};
		output.push_str(&template[last..whole.start()]);
		last = whole.end();

		match (whole.as_str(), caps.get(1)) {
			("{{", _) => output.push('{'),
			("}}", _) => output.push('}'),
			(_, Some(name)) => {
				let value =
					fields
						.lookup(name.as_str())
						.ok_or_else(|| CascadeError::UnknownPlaceholder {
							name: name.as_str().to_string(),
							template: template.to_string(),
						})?;
				output.push_str(value);
			}
			_ => {
				return Err(CascadeError::UnbalancedBrace {
					template: template.to_string(),
				});
			}
		}
	}

	output.push_str(&template[last..]);
	Ok(output)
}
