//! Live validation state for text-entry field widgets
//!
//! This crate models a single text-entry widget (icon, entry text,
//! underline indicator, and inline validation-status label) around a small
//! synchronous validation engine:
//! - Seven fixed input categories (alpha, alphanumeric, email, password,
//!   numeric, numeric-with-space, numeric-with-space-and-plus), one anchored
//!   regular expression each
//! - An optional minimum-length floor that downgrades an otherwise-valid
//!   match
//! - A tri-state status (empty / valid / invalid) projected onto the status
//!   label as a message and a color role on every text change
//! - Widget surface state: hint, icon, palette, editability with a cached
//!   key listener, and change observers
//!
//! Rendering and event delivery stay with the host toolkit; the crate is
//! the state model it drives. Evaluation is pure and single-threaded: the
//! outcome depends only on the current text and configuration.
//!
//! # Examples
//!
//! ```
//! use fieldwatch::{Category, TextField};
//!
//! let mut field = TextField::new()
//! 	.with_hint("Phone number")
//! 	.with_category(Category::NumericWithSpaceAndPlus);
//!
//! field.set_text("+34 600 000 000");
//! assert!(field.is_ok());
//! ```

pub mod category;
pub mod controller;
pub mod field;
pub mod messages;
pub mod outcome;

pub use category::{Category, CategoryError, InputMode, PatternClassifier};
pub use controller::ValidationController;
pub use field::{ChangeWatcher, KeyListener, Palette, StatusLabel, TextField};
pub use messages::ValidationMessages;
pub use outcome::{ColorRole, ValidationOutcome, ValidationStatus};

/// Re-export commonly used types
pub mod prelude {
	pub use super::category::{Category, CategoryError, InputMode};
	pub use super::controller::ValidationController;
	pub use super::field::TextField;
	pub use super::messages::ValidationMessages;
	pub use super::outcome::{ColorRole, ValidationOutcome, ValidationStatus};
}
