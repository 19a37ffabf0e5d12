//! Form state: ordered fields plus the submit control

use super::field::FormField;
use crate::backend::SubmissionPayload;
use crate::format::current_date;

/// Label shown on the submit control while an attempt is in its delay window
pub const BUSY_LABEL: &str = "Sending...";

/// A form owns an ordered field list and the state of its submit control.
/// The last tab position (index == `fields.len()`) is the submit row.
#[derive(Debug, Clone)]
pub struct Form {
    pub name: String,
    pub fields: Vec<FormField>,
    pub active_index: usize,
    pub submit_label: String,
    /// True while a submission attempt is in flight; disables the control
    pub busy: bool,
    /// Values carried along without being rendered or validated
    /// (the reservation dialog's service name and price)
    hidden_fields: Vec<(String, String)>,
}

impl Form {
    pub fn new(name: &str, fields: Vec<FormField>, submit_label: &str) -> Self {
        Self {
            name: name.to_string(),
            fields,
            active_index: 0,
            submit_label: submit_label.to_string(),
            busy: false,
            hidden_fields: Vec::new(),
        }
    }

    /// The contact form from the salon's contact page
    pub fn contact() -> Self {
        Self::new(
            "contact",
            vec![
                FormField::text("name", "Your name", true, false),
                FormField::email("email", "Email", true),
                FormField::tel("phone", "Phone", false),
                FormField::text("message", "Message", true, true),
            ],
            "Send message",
        )
    }

    /// The reservation form hosted by the modal; the selected service and
    /// its formatted price travel along as hidden values
    pub fn reservation(service_name: &str, service_price: &str) -> Self {
        let mut form = Self::new(
            "reservation",
            vec![
                FormField::text("name", "Your name", true, false),
                FormField::email("email", "Email", true),
                FormField::tel("phone", "Phone", true),
                FormField::text("date", "Preferred date", false, false).with_value(current_date()),
            ],
            "Request reservation",
        );
        form.hidden_fields = vec![
            ("service".to_string(), service_name.to_string()),
            ("price".to_string(), service_price.to_string()),
        ];
        form
    }

    /// Number of tab positions: every field plus the submit row
    pub fn position_count(&self) -> usize {
        self.fields.len() + 1
    }

    /// True when the submit row is the active tab position
    pub fn is_submit_row_active(&self) -> bool {
        self.active_index == self.fields.len()
    }

    pub fn next_field(&mut self) {
        self.active_index = (self.active_index + 1) % self.position_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_index == 0 {
            self.active_index = self.position_count() - 1;
        } else {
            self.active_index -= 1;
        }
    }

    /// The active field, or None when the submit row is active
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_index)
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Clear every inline error annotation (re-validation starts clean)
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.clear_error();
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.is_invalid())
    }

    /// Reset all field values and errors after a successful submission
    pub fn reset_fields(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_index = 0;
    }

    /// Label to render on the submit control right now
    pub fn submit_display_label(&self) -> &str {
        if self.busy {
            BUSY_LABEL
        } else {
            &self.submit_label
        }
    }

    /// Assemble the payload handed to the submission backend
    pub fn payload(&self) -> SubmissionPayload {
        let mut fields: Vec<(String, String)> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        fields.extend(self.hidden_fields.iter().cloned());
        SubmissionPayload {
            form_name: self.name.clone(),
            fields,
        }
    }
}
