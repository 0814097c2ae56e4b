//! Validation results
//!
//! A [`ValidationOutcome`] is the externally observable result of one
//! evaluation: the tri-state status plus the display message and color role
//! pushed to the status label. It is a pure function of the current text
//! and configuration at the moment of evaluation; no prior evaluation
//! influences it.

use serde::{Deserialize, Serialize};

/// Tri-state validation status, recomputed on every text change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
	/// The content is empty (or the designated empty-equivalent input).
	Empty,
	/// The content matches the category pattern and the length floor.
	Valid,
	/// The content fails the pattern or the length floor.
	Invalid,
}

impl ValidationStatus {
	/// Whether this status counts as valid.
	pub fn is_valid(&self) -> bool {
		matches!(self, ValidationStatus::Valid)
	}

	/// The color role this status is displayed with.
	///
	/// Empty and Invalid share the negative color.
	pub fn color_role(&self) -> ColorRole {
		match self {
			ValidationStatus::Valid => ColorRole::Positive,
			ValidationStatus::Empty | ValidationStatus::Invalid => ColorRole::Negative,
		}
	}
}

/// Display color role for a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
	Positive,
	Negative,
}

/// The result of evaluating the current text: status, display message, and
/// color role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
	pub status: ValidationStatus,
	pub message: String,
	pub color_role: ColorRole,
}

impl ValidationOutcome {
	/// Build an outcome for `status`, deriving the color role.
	pub fn new(status: ValidationStatus, message: impl Into<String>) -> Self {
		Self {
			status,
			message: message.into(),
			color_role: status.color_role(),
		}
	}

	/// Whether the underlying status is [`ValidationStatus::Valid`].
	pub fn is_valid(&self) -> bool {
		self.status.is_valid()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ValidationStatus::Valid, ColorRole::Positive)]
	#[case(ValidationStatus::Invalid, ColorRole::Negative)]
	#[case(ValidationStatus::Empty, ColorRole::Negative)]
	fn test_color_role(#[case] status: ValidationStatus, #[case] expected: ColorRole) {
		assert_eq!(status.color_role(), expected);
		assert_eq!(ValidationOutcome::new(status, "msg").color_role, expected);
	}

	#[rstest]
	fn test_only_valid_is_valid() {
		assert!(ValidationStatus::Valid.is_valid());
		assert!(!ValidationStatus::Invalid.is_valid());
		assert!(!ValidationStatus::Empty.is_valid());
	}
}
