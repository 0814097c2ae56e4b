//! Status messages shown next to the field

use serde::{Deserialize, Serialize};

/// The three status messages a field can display.
///
/// Each message is independently settable; unset messages fall back to the
/// defaults.
///
/// # Examples
///
/// ```
/// use fieldwatch::ValidationMessages;
///
/// let messages = ValidationMessages::new()
/// 	.with_invalid("Please enter a valid email address");
///
/// assert_eq!(messages.valid, "Valid field");
/// assert_eq!(messages.invalid, "Please enter a valid email address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessages {
	/// Shown when the content passes validation.
	pub valid: String,
	/// Shown when the content fails validation.
	pub invalid: String,
	/// Shown when the content is empty.
	pub empty: String,
}

impl ValidationMessages {
	/// Create the default message set.
	pub fn new() -> Self {
		Self {
			valid: "Valid field".to_string(),
			invalid: "Invalid field".to_string(),
			empty: "Empty field".to_string(),
		}
	}

	/// Set the valid message (builder).
	pub fn with_valid(mut self, message: impl Into<String>) -> Self {
		self.valid = message.into();
		self
	}

	/// Set the invalid message (builder).
	pub fn with_invalid(mut self, message: impl Into<String>) -> Self {
		self.invalid = message.into();
		self
	}

	/// Set the empty message (builder).
	pub fn with_empty(mut self, message: impl Into<String>) -> Self {
		self.empty = message.into();
		self
	}
}

impl Default for ValidationMessages {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let messages = ValidationMessages::new();
		assert_eq!(messages.valid, "Valid field");
		assert_eq!(messages.invalid, "Invalid field");
		assert_eq!(messages.empty, "Empty field");
	}

	#[rstest]
	fn test_builders_set_independently() {
		let messages = ValidationMessages::new()
			.with_valid("ok")
			.with_empty("required");

		assert_eq!(messages.valid, "ok");
		assert_eq!(messages.invalid, "Invalid field");
		assert_eq!(messages.empty, "required");
	}
}
