//! The customer form component
//!
//! Wraps a [`Form`] with the customer schema and the reactive behaviors
//! around it: the notification toggle that makes phone required, the
//! debounced email stream, per-field messages, and the save/debug
//! helpers.

use std::time::Duration;

use formwork_control::{Control, ControlError, ControlEvent, ControlState, Form, Rule, debounce};
use formwork_validator::foundation::ValidationError;
use serde_json::{Value, json};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, trace};

use crate::schema::{build_address, customer_group, default_address_value};

/// Quiet window before email validation feedback reacts to typing.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(1000);

/// Buffer for raw (not yet debounced) email edits.
const EMAIL_CHANNEL_CAPACITY: usize = 64;

const REQUIRED_MESSAGE: &str = "Please enter your email address.";
const EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// The customer data-entry form.
///
/// # Examples
///
/// ```rust,ignore
/// use formwork_customer::CustomerForm;
/// use serde_json::json;
///
/// let mut form = CustomerForm::new();
/// form.set("firstName", json!("Jack"))?;
/// form.set("notification", json!("text"))?; // phone becomes required
/// ```
pub struct CustomerForm {
    form: Form,
    email_tx: mpsc::Sender<Value>,
    email_rx: Option<mpsc::Receiver<Value>>,
}

impl CustomerForm {
    /// Builds the customer form with its fixed schema.
    #[must_use]
    pub fn new() -> Self {
        let (email_tx, email_rx) = mpsc::channel(EMAIL_CHANNEL_CAPACITY);
        Self {
            form: Form::new(customer_group()),
            email_tx,
            email_rx: Some(email_rx),
        }
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Applies a user edit, then runs the field's watchers synchronously:
    /// the notification choice retunes the phone rules, and email edits
    /// feed the debounced stream.
    pub fn set(&mut self, path: &str, value: Value) -> Result<(), ControlError> {
        let old = self.form.value_at(path)?;
        self.form.set(path, value.clone())?;
        match path {
            "notification" => {
                self.set_notification_via(value.as_str().unwrap_or(""))?;
            }
            // a repeat of the current value is a no-op upstream and must
            // not restart the debounce window
            "emailGroup.email" if value != old => {
                if self.email_tx.try_send(value).is_err() {
                    trace!("email stream full or closed, dropping edit");
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Retunes the phone field for the chosen notification channel:
    /// `"text"` makes phone required, anything else lifts the rule.
    /// Revalidates immediately either way, and is idempotent.
    pub fn set_notification_via(&mut self, via: &str) -> Result<(), ControlError> {
        let rules = if via == "text" {
            vec![Rule::Required]
        } else {
            Vec::new()
        };
        debug!(via, "notification preference changed");
        self.form.reset_rules("phone", rules)
    }

    /// Takes the debounced email stream (window 1000 ms). Each burst of
    /// edits is collapsed to the latest value once typing pauses.
    ///
    /// Returns `Some` on the first call, `None` afterwards. Must be
    /// called within a tokio runtime.
    pub fn email_changes(&mut self) -> Option<mpsc::Receiver<Value>> {
        let raw = self.email_rx.take()?;
        Some(debounce(raw, DEBOUNCE_WINDOW))
    }

    /// Appends one more default address entry, returning its index.
    pub fn add_address(&mut self) -> Result<usize, ControlError> {
        self.form.add_item("addressGroup", build_address())
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    /// The validation message to display for a field, or empty when the
    /// field is pristine/untouched or valid. A single message with fixed
    /// priority: the required message wins over the email-shape one.
    pub fn message_for(&self, path: &str) -> Result<String, ControlError> {
        let state = self.form.state(path)?;
        if !(state.is_touched() || state.is_dirty()) {
            return Ok(String::new());
        }
        if state.errors().iter().any(|e| e.is_code("required")) {
            return Ok(REQUIRED_MESSAGE.to_string());
        }
        if state.errors().iter().any(|e| e.is_code("email")) {
            return Ok(EMAIL_MESSAGE.to_string());
        }
        Ok(String::new())
    }

    // ------------------------------------------------------------------
    // Save & debug helpers
    // ------------------------------------------------------------------

    /// Returns the serialized form value. Transmission is the caller's
    /// concern.
    #[must_use]
    pub fn save(&self) -> Value {
        let value = self.form.value();
        info!(valid = self.is_valid(), customer = %value, "saved customer form");
        value
    }

    /// Loads the fixed demo record via a strict full replace. The
    /// literal matches the initial schema shape (one address entry); with
    /// extra addresses added the replace reports a shape error.
    pub fn populate_test_values(&mut self) -> Result<(), ControlError> {
        self.form.replace(&json!({
            "firstName": "Jack",
            "lastName": "Harness",
            "emailGroup": {
                "email": "jack@harnesstrading.com",
                "confirmEmail": "jack@harnesstrading.com",
            },
            "sendCatalog": true,
            "phone": "",
            "notification": "email",
            "rating": null,
            "addressGroup": [default_address_value()],
        }))
    }

    /// Patches just the demo name fields; everything else is untouched.
    pub fn patch_test_data(&mut self) {
        self.form.patch(&json!({
            "firstName": "Jack",
            "lastName": "Harness",
        }));
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Subscribes to form events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ControlEvent> {
        self.form.subscribe()
    }

    /// The control at a dotted path.
    pub fn get(&self, path: &str) -> Result<&Control, ControlError> {
        self.form.get(path)
    }

    /// The state of the control at a dotted path.
    pub fn state(&self, path: &str) -> Result<&ControlState, ControlError> {
        self.form.state(path)
    }

    /// The whole form value as nested JSON.
    #[must_use]
    pub fn value(&self) -> Value {
        self.form.value()
    }

    /// The value at a dotted path.
    pub fn value_at(&self, path: &str) -> Result<Value, ControlError> {
        self.form.value_at(path)
    }

    /// All current errors, tagged with field paths.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        self.form.errors()
    }

    /// True when every field is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
