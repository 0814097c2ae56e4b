//! The validation controller
//!
//! Holds the active category, the optional minimum-length floor, and the
//! three status messages, and derives a [`ValidationOutcome`] from the full
//! current content on every text-change event.
//!
//! The controller is driven by whatever event source the host UI layer
//! provides; it runs synchronously on the dispatching thread and keeps no
//! state across evaluations.
//!
//! # Examples
//!
//! ```
//! use fieldwatch::{Category, ValidationController, ValidationStatus};
//!
//! let controller = ValidationController::new(Category::Email);
//!
//! assert_eq!(controller.on_text_changed("").status, ValidationStatus::Empty);
//! assert_eq!(controller.on_text_changed("user@example.com").status, ValidationStatus::Valid);
//! assert_eq!(controller.on_text_changed("user@example.").status, ValidationStatus::Invalid);
//! ```

use crate::category::{Category, PatternClassifier};
use crate::messages::ValidationMessages;
use crate::outcome::{ValidationOutcome, ValidationStatus};

/// Derives a validation outcome from the current text and configuration.
#[derive(Debug)]
pub struct ValidationController {
	category: Category,
	min_length: Option<usize>,
	messages: ValidationMessages,
	classifier: PatternClassifier,
}

impl ValidationController {
	/// Create a controller for `category` with no length floor and default
	/// messages.
	pub fn new(category: Category) -> Self {
		Self {
			category,
			min_length: None,
			messages: ValidationMessages::new(),
			classifier: PatternClassifier::new(),
		}
	}

	/// Set the minimum-length floor (builder).
	///
	/// # Examples
	///
	/// ```
	/// use fieldwatch::{Category, ValidationController, ValidationStatus};
	///
	/// let controller = ValidationController::new(Category::Alphanumeric).with_min_length(8);
	///
	/// assert_eq!(controller.on_text_changed("abc12").status, ValidationStatus::Invalid);
	/// assert_eq!(controller.on_text_changed("abc12345").status, ValidationStatus::Valid);
	/// ```
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Set the status messages (builder).
	pub fn with_messages(mut self, messages: ValidationMessages) -> Self {
		self.messages = messages;
		self
	}

	/// Get the active category.
	pub fn category(&self) -> Category {
		self.category
	}

	/// Get the minimum-length floor, if set.
	pub fn min_length(&self) -> Option<usize> {
		self.min_length
	}

	/// Get the status messages.
	pub fn messages(&self) -> &ValidationMessages {
		&self.messages
	}

	/// Reconfigure the category. Takes effect on the next evaluation.
	pub fn set_category(&mut self, category: Category) {
		self.category = category;
	}

	/// Reconfigure the minimum-length floor; `None` removes it.
	pub fn set_min_length(&mut self, min_length: Option<usize>) {
		self.min_length = min_length;
	}

	/// Replace the status messages.
	pub fn set_messages(&mut self, messages: ValidationMessages) {
		self.messages = messages;
	}

	/// Evaluate the full current content and derive an outcome.
	///
	/// Empty content, or exactly one space character (a quirk of the
	/// historical rule set, kept for compatibility), yields
	/// [`ValidationStatus::Empty`] without consulting the classifier. Any
	/// other all-whitespace string classifies normally. The length floor,
	/// when set, downgrades an otherwise-valid match; it is measured in
	/// characters, not bytes.
	///
	/// Pure: the same text under the same configuration always yields the
	/// same outcome.
	pub fn on_text_changed(&self, text: &str) -> ValidationOutcome {
		if text.is_empty() || text == " " {
			return ValidationOutcome::new(ValidationStatus::Empty, self.messages.empty.clone());
		}

		let mut pattern_ok = self.classifier.matches(self.category, text);

		if let Some(min_length) = self.min_length
			&& text.chars().count() < min_length
		{
			pattern_ok = false;
		}

		let status = if pattern_ok {
			ValidationStatus::Valid
		} else {
			ValidationStatus::Invalid
		};
		tracing::trace!(category = self.category.name(), ?status, "evaluated text change");

		let message = if pattern_ok {
			self.messages.valid.clone()
		} else {
			self.messages.invalid.clone()
		};
		ValidationOutcome::new(status, message)
	}
}
