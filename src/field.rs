//! Text field widget state
//!
//! [`TextField`] composes the [`ValidationController`] with the rest of the
//! widget's state: hint, icon, colors, underline, the status label, and
//! editability. It is a plain object driven by the host toolkit's event
//! source; the host pushes text changes and key presses in and reads the
//! label, underline, and validity state back out. No drawing happens here.
//!
//! # Examples
//!
//! ```
//! use fieldwatch::{Category, TextField};
//!
//! let mut field = TextField::new()
//! 	.with_hint("Email address")
//! 	.with_category(Category::Email);
//!
//! field.set_text("user@example.com");
//! assert!(field.is_ok());
//! assert_eq!(field.label().message(), "Valid field");
//!
//! field.set_text("user@example.");
//! assert!(!field.is_ok());
//! ```

use crate::category::{Category, InputMode};
use crate::controller::ValidationController;
use crate::messages::ValidationMessages;
use crate::outcome::{ColorRole, ValidationOutcome};
use serde::{Deserialize, Serialize};

/// Default text color.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
/// Default hint and underline color.
pub const DEFAULT_HINT_COLOR: &str = "#aaaaaa";
/// Default positive status color (cerulean).
pub const DEFAULT_POSITIVE_COLOR: &str = "#007ba7";
/// Default negative status color (valencia).
pub const DEFAULT_NEGATIVE_COLOR: &str = "#d8625b";

/// Observer invoked with the full text and the derived outcome after every
/// evaluation.
pub type ChangeWatcher = Box<dyn FnMut(&str, &ValidationOutcome) + Send>;

/// Keyboard binding from the host toolkit.
///
/// Maps an incoming key press to the character to insert, or `None` to
/// swallow the key. Detached while the field is not editable.
pub type KeyListener = Box<dyn FnMut(char) -> Option<char> + Send>;

/// Configured colors for the field, as hex strings the host resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
	pub text: String,
	pub hint: String,
	pub underline: String,
	pub positive: String,
	pub negative: String,
}

impl Palette {
	fn color_for(&self, role: ColorRole) -> &str {
		match role {
			ColorRole::Positive => &self.positive,
			ColorRole::Negative => &self.negative,
		}
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			text: DEFAULT_TEXT_COLOR.to_string(),
			hint: DEFAULT_HINT_COLOR.to_string(),
			underline: DEFAULT_HINT_COLOR.to_string(),
			positive: DEFAULT_POSITIVE_COLOR.to_string(),
			negative: DEFAULT_NEGATIVE_COLOR.to_string(),
		}
	}
}

/// State of the bound status label, updated on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLabel {
	message: String,
	color: String,
	visible: bool,
}

impl StatusLabel {
	/// The displayed message.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// The displayed color, as a hex string.
	pub fn color(&self) -> &str {
		&self.color
	}

	/// Whether the label is shown. Tracks editability.
	pub fn visible(&self) -> bool {
		self.visible
	}
}

impl Default for StatusLabel {
	fn default() -> Self {
		Self {
			message: String::new(),
			color: DEFAULT_NEGATIVE_COLOR.to_string(),
			visible: true,
		}
	}
}

/// State model of a validated text-entry widget: icon, entry text,
/// underline, and an inline status label.
pub struct TextField {
	hint: String,
	icon: String,
	palette: Palette,
	text: String,
	controller: ValidationController,
	label: StatusLabel,
	underline_visible: bool,
	editable: bool,
	ok: bool,
	key_listener: Option<KeyListener>,
	cached_key_listener: Option<KeyListener>,
	watchers: Vec<ChangeWatcher>,
}

impl TextField {
	/// Create a field with the default configuration: alphanumeric
	/// category, no length floor, editable, default messages and palette.
	pub fn new() -> Self {
		Self {
			hint: String::new(),
			icon: "info".to_string(),
			palette: Palette::default(),
			text: String::new(),
			controller: ValidationController::new(Category::Alphanumeric),
			label: StatusLabel::default(),
			underline_visible: true,
			editable: true,
			ok: false,
			key_listener: Some(Box::new(|key| Some(key))),
			cached_key_listener: None,
			watchers: Vec::new(),
		}
	}

	// --- Builders ---

	/// Set the hint text (builder).
	pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
		self.hint = hint.into();
		self
	}

	/// Set the validation category (builder).
	pub fn with_category(mut self, category: Category) -> Self {
		self.controller.set_category(category);
		self
	}

	/// Set the minimum-length floor (builder).
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.controller.set_min_length(Some(min_length));
		self
	}

	/// Set the status messages (builder).
	pub fn with_messages(mut self, messages: ValidationMessages) -> Self {
		self.controller.set_messages(messages);
		self
	}

	/// Set the palette (builder).
	pub fn with_palette(mut self, palette: Palette) -> Self {
		self.palette = palette;
		self
	}

	/// Set the icon identifier (builder).
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = icon.into();
		self
	}

	/// Set editability (builder).
	pub fn with_editable(mut self, editable: bool) -> Self {
		self.set_editable(editable);
		self
	}

	// --- Configuration ---

	/// Configure hint, category, length floor, and editability in one call.
	pub fn setup(
		&mut self,
		hint: impl Into<String>,
		category: Category,
		min_length: Option<usize>,
		editable: bool,
	) {
		self.hint = hint.into();
		self.controller.set_category(category);
		self.controller.set_min_length(min_length);
		self.set_editable(editable);
		tracing::debug!(
			category = category.name(),
			?min_length,
			editable,
			"field configured"
		);
	}

	/// Set the hint text.
	pub fn set_hint(&mut self, hint: impl Into<String>) {
		self.hint = hint.into();
	}

	/// Get the hint text.
	pub fn hint(&self) -> &str {
		&self.hint
	}

	/// Set colors for the entry text and the hint.
	pub fn text_colors(&mut self, text: impl Into<String>, hint: impl Into<String>) {
		self.palette.text = text.into();
		self.palette.hint = hint.into();
	}

	/// Set the underline color.
	pub fn underline_color(&mut self, color: impl Into<String>) {
		self.palette.underline = color.into();
	}

	/// Set the three status messages at once.
	pub fn validation_text(
		&mut self,
		valid: impl Into<String>,
		invalid: impl Into<String>,
		empty: impl Into<String>,
	) {
		self.controller.set_messages(
			ValidationMessages::new()
				.with_valid(valid)
				.with_invalid(invalid)
				.with_empty(empty),
		);
	}

	/// Set the icon identifier the host resolves to a drawable.
	pub fn set_icon(&mut self, icon: impl Into<String>) {
		self.icon = icon.into();
	}

	/// Get the icon identifier.
	pub fn icon(&self) -> &str {
		&self.icon
	}

	/// Get the configured palette.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Get the validation controller.
	pub fn controller(&self) -> &ValidationController {
		&self.controller
	}

	/// Reconfigure the validation category.
	pub fn set_category(&mut self, category: Category) {
		self.controller.set_category(category);
	}

	/// Reconfigure the minimum-length floor; `None` removes it.
	pub fn set_min_length(&mut self, min_length: usize) {
		self.controller.set_min_length(Some(min_length));
	}

	/// Remove the minimum-length floor.
	pub fn clear_min_length(&mut self) {
		self.controller.set_min_length(None);
	}

	/// The entry mode the host should use, derived from the category.
	pub fn input_mode(&self) -> InputMode {
		self.controller.category().input_mode()
	}

	// --- Text and validity ---

	/// Get the current entry content.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Replace the entry content and re-evaluate.
	///
	/// Programmatic assignment always fires the change pipeline, whether or
	/// not the field is editable; editability only gates keyboard input.
	pub fn set_text(&mut self, text: impl Into<String>) -> ValidationOutcome {
		self.text = text.into();
		self.dispatch_change()
	}

	/// Get the validity flag from the most recent evaluation.
	pub fn is_ok(&self) -> bool {
		self.ok
	}

	/// Re-derive the outcome from the current text, e.g. after
	/// reconfiguring the category or the length floor.
	pub fn revalidate(&mut self) -> ValidationOutcome {
		self.dispatch_change()
	}

	/// Get the status label state.
	pub fn label(&self) -> &StatusLabel {
		&self.label
	}

	/// Whether the underline indicator is shown. Tracks editability.
	pub fn underline_visible(&self) -> bool {
		self.underline_visible
	}

	// --- Input ---

	/// Route a key press from the host toolkit through the key listener.
	///
	/// Returns `true` when the key produced a text change. Dropped without
	/// effect while the field is not editable (no listener attached).
	pub fn key_press(&mut self, key: char) -> bool {
		let Some(listener) = self.key_listener.as_mut() else {
			return false;
		};
		let Some(inserted) = listener(key) else {
			return false;
		};
		self.text.push(inserted);
		self.dispatch_change();
		true
	}

	/// Replace the key listener. While the field is not editable the
	/// listener is parked and takes effect on re-enable.
	pub fn set_key_listener(&mut self, listener: KeyListener) {
		if self.editable {
			self.key_listener = Some(listener);
		} else {
			self.cached_key_listener = Some(listener);
		}
	}

	/// Whether the field currently accepts keyboard input.
	pub fn editable(&self) -> bool {
		self.editable
	}

	/// Toggle editability.
	///
	/// Disabling hides the underline and status label and detaches the key
	/// listener, caching it so the exact same listener is restored on
	/// re-enable.
	pub fn set_editable(&mut self, editable: bool) {
		self.editable = editable;
		self.underline_visible = editable;
		self.label.visible = editable;
		if !editable {
			if self.key_listener.is_some() {
				self.cached_key_listener = self.key_listener.take();
			}
		} else if self.cached_key_listener.is_some() {
			self.key_listener = self.cached_key_listener.take();
		}
	}

	// --- Observers ---

	/// Register an observer notified with the text and outcome after every
	/// evaluation.
	pub fn add_change_watcher(&mut self, watcher: ChangeWatcher) {
		self.watchers.push(watcher);
	}

	fn dispatch_change(&mut self) -> ValidationOutcome {
		let outcome = self.controller.on_text_changed(&self.text);

		self.label.message = outcome.message.clone();
		self.label.color = self.palette.color_for(outcome.color_role).to_string();
		self.ok = outcome.is_valid();

		for watcher in &mut self.watchers {
			watcher(&self.text, &outcome);
		}
		outcome
	}
}

impl Default for TextField {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::outcome::ValidationStatus;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::Arc;

	#[rstest]
	fn test_set_text_updates_label_and_flag() {
		let mut field = TextField::new().with_category(Category::Numeric);

		let outcome = field.set_text("123");
		assert_eq!(outcome.status, ValidationStatus::Valid);
		assert!(field.is_ok());
		assert_eq!(field.label().message(), "Valid field");
		assert_eq!(field.label().color(), DEFAULT_POSITIVE_COLOR);

		field.set_text("12a");
		assert!(!field.is_ok());
		assert_eq!(field.label().message(), "Invalid field");
		assert_eq!(field.label().color(), DEFAULT_NEGATIVE_COLOR);

		field.set_text("");
		assert!(!field.is_ok());
		assert_eq!(field.label().message(), "Empty field");
		assert_eq!(field.label().color(), DEFAULT_NEGATIVE_COLOR);
	}

	#[rstest]
	fn test_setup_applies_configuration() {
		let mut field = TextField::new();
		field.setup("Password", Category::Password, Some(8), true);

		assert_eq!(field.hint(), "Password");
		assert_eq!(field.controller().category(), Category::Password);
		assert_eq!(field.controller().min_length(), Some(8));
		assert_eq!(field.input_mode(), InputMode::Masked);

		field.set_text("abc12");
		assert!(!field.is_ok());
		field.set_text("abc12345");
		assert!(field.is_ok());
	}

	#[rstest]
	fn test_key_press_feeds_text() {
		let mut field = TextField::new().with_category(Category::Numeric);

		assert!(field.key_press('1'));
		assert!(field.key_press('2'));
		assert_eq!(field.text(), "12");
		assert!(field.is_ok());
	}

	#[rstest]
	fn test_key_press_dropped_while_not_editable() {
		let mut field = TextField::new().with_category(Category::Numeric);
		field.set_editable(false);

		assert!(!field.key_press('1'));
		assert_eq!(field.text(), "");
		assert!(!field.underline_visible());
		assert!(!field.label().visible());
	}

	#[rstest]
	fn test_editable_toggle_restores_prior_listener() {
		let mut field = TextField::new().with_category(Category::Alpha);
		// Custom listener that upper-cases everything it routes.
		field.set_key_listener(Box::new(|c| Some(c.to_ascii_uppercase())));

		field.set_editable(false);
		assert!(!field.key_press('a'));

		field.set_editable(true);
		assert!(field.key_press('a'));
		assert_eq!(field.text(), "A"); // the same listener survived the cycle
	}

	#[rstest]
	fn test_listener_survives_repeated_disable() {
		let mut field = TextField::new();
		field.set_key_listener(Box::new(|c| Some(c.to_ascii_uppercase())));

		field.set_editable(false);
		field.set_editable(false);
		field.set_editable(true);

		assert!(field.key_press('x'));
		assert_eq!(field.text(), "X");
	}

	#[rstest]
	fn test_set_text_validates_even_while_not_editable() {
		let mut field = TextField::new().with_category(Category::Numeric);
		field.set_editable(false);

		field.set_text("123");
		assert!(field.is_ok());
	}

	#[rstest]
	fn test_watchers_observe_every_change() {
		let seen = Arc::new(AtomicUsize::new(0));
		let seen_in_watcher = Arc::clone(&seen);

		let mut field = TextField::new().with_category(Category::Numeric);
		field.add_change_watcher(Box::new(move |text, outcome| {
			assert_eq!(outcome.is_valid(), text.chars().all(|c| c.is_ascii_digit()));
			seen_in_watcher.fetch_add(1, Ordering::SeqCst);
		}));

		field.set_text("12");
		field.key_press('3');
		field.set_text("12a");
		assert_eq!(seen.load(Ordering::SeqCst), 3);
	}

	#[rstest]
	fn test_revalidate_after_reconfiguration() {
		let mut field = TextField::new().with_category(Category::Alphanumeric);
		field.set_text("abc12");
		assert!(field.is_ok());

		field.set_min_length(8);
		let outcome = field.revalidate();
		assert_eq!(outcome.status, ValidationStatus::Invalid);
		assert!(!field.is_ok());
	}

	#[rstest]
	fn test_color_configuration() {
		let mut field = TextField::new().with_category(Category::Numeric);
		field.text_colors("#111111", "#999999");
		field.underline_color("#222222");

		assert_eq!(field.palette().text, "#111111");
		assert_eq!(field.palette().hint, "#999999");
		assert_eq!(field.palette().underline, "#222222");

		let palette = Palette {
			positive: "#00ff00".to_string(),
			negative: "#ff0000".to_string(),
			..Palette::default()
		};
		let mut field = TextField::new().with_category(Category::Numeric).with_palette(palette);

		field.set_text("123");
		assert_eq!(field.label().color(), "#00ff00");
		field.set_text("abc");
		assert_eq!(field.label().color(), "#ff0000");
	}

	#[rstest]
	fn test_validation_text_sets_all_three_messages() {
		let mut field = TextField::new().with_category(Category::Email);
		field.validation_text("Looks good", "Not an email", "Type something");

		field.set_text("a@bc");
		assert_eq!(field.label().message(), "Looks good");
		field.set_text("a@b");
		assert_eq!(field.label().message(), "Not an email");
		field.set_text(" ");
		assert_eq!(field.label().message(), "Type something");
	}

	#[rstest]
	fn test_icon_and_hint_defaults() {
		let field = TextField::new();
		assert_eq!(field.icon(), "info");
		assert_eq!(field.hint(), "");
		assert!(field.editable());

		let field = TextField::new().with_icon("mail").with_hint("Email");
		assert_eq!(field.icon(), "mail");
		assert_eq!(field.hint(), "Email");
	}
}
