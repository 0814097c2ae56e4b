//! Input categories and the pattern classifier
//!
//! Each text field is configured with one [`Category`] that selects the
//! rule family its content is validated against. Every category owns a
//! single fixed, full-string-anchored regular expression; classification
//! is a pure lookup with no error conditions.
//!
//! # Examples
//!
//! ```
//! use fieldwatch::{Category, PatternClassifier};
//!
//! let classifier = PatternClassifier::new();
//!
//! assert!(classifier.matches(Category::Numeric, "123"));
//! assert!(!classifier.matches(Category::Numeric, "12 3"));
//! assert!(classifier.matches(Category::NumericWithSpace, "12 3"));
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Errors for category codes or names that do not map to a known category.
///
/// Rejected eagerly at conversion time so that a field can never sit on an
/// unrecognized category with a stale validity flag.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
	#[error("Unknown category code: {0}")]
	UnknownCode(i32),

	#[error("Unknown category name: '{0}'")]
	UnknownName(String),
}

/// Entry mode hint derived from the category.
///
/// [`Category::Password`] validates like [`Category::Alphanumeric`] but asks
/// the host toolkit for a masked entry widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
	/// Characters are echoed as typed.
	Plain,
	/// Characters are echoed masked (password entry).
	Masked,
}

/// Validation rule family for a field instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	/// ASCII letters and whitespace only.
	Alpha,
	/// ASCII letters, digits, and whitespace.
	Alphanumeric,
	/// Local part, "@", and a domain of at least two characters that does
	/// not end in "." and contains no "@".
	Email,
	/// Same pattern as [`Category::Alphanumeric`], masked entry.
	Password,
	/// Digits only.
	Numeric,
	/// Digits and whitespace.
	NumericWithSpace,
	/// Digits, whitespace, and "+".
	NumericWithSpaceAndPlus,
}

impl Category {
	/// Get the anchored regex pattern for this category.
	fn pattern(&self) -> &'static str {
		match self {
			Category::Alpha => r"^[a-zA-Z\s]*$",
			Category::Alphanumeric | Category::Password => r"^[a-zA-Z0-9\s]*$",
			Category::Email => r"^(.+)@([^@]+[^.])$",
			Category::Numeric => r"^[0-9]*$",
			Category::NumericWithSpace => r"^[\s0-9]*$",
			Category::NumericWithSpaceAndPlus => r"^[\s0-9+]*$",
		}
	}

	/// Get the snake_case name of this category.
	pub fn name(&self) -> &'static str {
		match self {
			Category::Alpha => "alpha",
			Category::Alphanumeric => "alphanumeric",
			Category::Email => "email",
			Category::Password => "password",
			Category::Numeric => "numeric",
			Category::NumericWithSpace => "numeric_with_space",
			Category::NumericWithSpaceAndPlus => "numeric_with_space_and_plus",
		}
	}

	/// Get the integer wire code of this category.
	///
	/// Codes are stable and match the order of declaration, 0 through 6.
	pub fn code(&self) -> i32 {
		match self {
			Category::Alpha => 0,
			Category::Alphanumeric => 1,
			Category::Email => 2,
			Category::Password => 3,
			Category::Numeric => 4,
			Category::NumericWithSpace => 5,
			Category::NumericWithSpaceAndPlus => 6,
		}
	}

	/// Convert an integer wire code into a category.
	///
	/// # Examples
	///
	/// ```
	/// use fieldwatch::{Category, CategoryError};
	///
	/// assert_eq!(Category::from_code(2), Ok(Category::Email));
	/// assert_eq!(Category::from_code(7), Err(CategoryError::UnknownCode(7)));
	/// ```
	pub fn from_code(code: i32) -> Result<Self, CategoryError> {
		match code {
			0 => Ok(Category::Alpha),
			1 => Ok(Category::Alphanumeric),
			2 => Ok(Category::Email),
			3 => Ok(Category::Password),
			4 => Ok(Category::Numeric),
			5 => Ok(Category::NumericWithSpace),
			6 => Ok(Category::NumericWithSpaceAndPlus),
			other => Err(CategoryError::UnknownCode(other)),
		}
	}

	/// Get the entry mode hint for this category.
	pub fn input_mode(&self) -> InputMode {
		match self {
			Category::Password => InputMode::Masked,
			_ => InputMode::Plain,
		}
	}

	/// Get all categories, in wire-code order.
	pub fn all() -> Vec<Category> {
		vec![
			Category::Alpha,
			Category::Alphanumeric,
			Category::Email,
			Category::Password,
			Category::Numeric,
			Category::NumericWithSpace,
			Category::NumericWithSpaceAndPlus,
		]
	}
}

impl FromStr for Category {
	type Err = CategoryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"alpha" => Ok(Category::Alpha),
			"alphanumeric" => Ok(Category::Alphanumeric),
			"email" => Ok(Category::Email),
			"password" => Ok(Category::Password),
			"numeric" => Ok(Category::Numeric),
			"numeric_with_space" => Ok(Category::NumericWithSpace),
			"numeric_with_space_and_plus" => Ok(Category::NumericWithSpaceAndPlus),
			other => Err(CategoryError::UnknownName(other.to_string())),
		}
	}
}

/// Pure matcher translating (category, text) to a boolean.
///
/// Compiles the pattern of every category once at construction. Matching is
/// total: it has no side effects and cannot fail.
///
/// Note that the `*` quantifiers make the empty string match every
/// non-email pattern; callers that treat empty input specially must
/// intercept it before classification (the
/// [`ValidationController`](crate::ValidationController) does).
#[derive(Debug)]
pub struct PatternClassifier {
	patterns: HashMap<Category, Regex>,
}

impl PatternClassifier {
	/// Create a classifier with all category patterns compiled.
	pub fn new() -> Self {
		let mut patterns = HashMap::new();
		for category in Category::all() {
			patterns.insert(
				category,
				Regex::new(category.pattern()).expect("invalid category pattern"),
			);
		}

		Self { patterns }
	}

	/// Check whether `text` matches the pattern of `category`.
	///
	/// # Examples
	///
	/// ```
	/// use fieldwatch::{Category, PatternClassifier};
	///
	/// let classifier = PatternClassifier::new();
	///
	/// assert!(classifier.matches(Category::Email, "user@example.com"));
	/// assert!(!classifier.matches(Category::Email, "user@example."));
	/// ```
	pub fn matches(&self, category: Category, text: &str) -> bool {
		self.patterns
			.get(&category)
			.is_some_and(|pattern| pattern.is_match(text))
	}
}

impl Default for PatternClassifier {
	fn default() -> Self {
		Self::new()
	}
}
