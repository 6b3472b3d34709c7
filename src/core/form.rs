//! Required-field validation and the simulated submission messages.

use derive_more::Display;

/// Alert shown when any required field is empty
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";

/// Delay before the simulated submission acknowledges
pub const SUBMIT_DELAY_MS: u32 = 500;

/// Class marking a field that failed validation
pub const ERROR_CLASS: &str = "error";

const CONTACT_MESSAGE: &str =
    "Thank you for contacting us! We'll get back to you within 24 hours.";
const NEWSLETTER_MESSAGE: &str = "Successfully subscribed to our newsletter! Stay tuned for sustainability tips and product updates.";
const DEMO_MESSAGE: &str =
    "Demo request submitted! Our team will contact you shortly to schedule your personalized demo.";

/// The declared `data-type` of a form
#[derive(Clone, Debug, PartialEq, Eq, Display, Default)]
pub enum FormKind {
    #[default]
    #[display("contact")]
    Contact,
    #[display("newsletter")]
    Newsletter,
    #[display("demo")]
    Demo,
    #[display("{_0}")]
    Other(String),
}

impl FormKind {
    /// Parse the declared type; absent or empty means contact.
    pub fn from_declared(value: Option<&str>) -> Self {
        match value.unwrap_or_default() {
            "" | "contact" => FormKind::Contact,
            "newsletter" => FormKind::Newsletter,
            "demo" => FormKind::Demo,
            other => FormKind::Other(other.to_string()),
        }
    }
}

/// Acknowledgement text for a submission; unknown kinds read as contact.
pub fn submission_message(kind: &FormKind) -> &'static str {
    match kind {
        FormKind::Newsletter => NEWSLETTER_MESSAGE,
        FormKind::Demo => DEMO_MESSAGE,
        FormKind::Contact | FormKind::Other(_) => CONTACT_MESSAGE,
    }
}

/// Element id of a form control, scoped by its form so the same field name
/// can appear in several forms on one page.
pub fn field_element_id(form: &str, field: &str) -> String {
    format!("field-{}-{}", form, field)
}

/// One control of a form at submit time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl FieldEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.required || !self.value.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

/// Per-field outcome of validating a form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Status of every required field, in document order
    pub fields: Vec<(String, FieldStatus)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, s)| *s == FieldStatus::Valid)
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, s)| *s == FieldStatus::Invalid)
            .map(|(name, _)| name.as_str())
    }

    pub fn status_of(&self, name: &str) -> Option<FieldStatus> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, s)| *s)
    }
}

/// Check every required field; optional fields are not reported.
pub fn validate(fields: &[FieldEntry]) -> ValidationReport {
    let fields = fields
        .iter()
        .filter(|f| f.required)
        .map(|f| {
            let status = if f.is_valid() {
                FieldStatus::Valid
            } else {
                FieldStatus::Invalid
            };
            (f.name.clone(), status)
        })
        .collect();
    ValidationReport { fields }
}

/// Snapshot of a form's name/value pairs handed to the submission handler
pub type FormData = Vec<(String, String)>;

/// Outcome of a submit event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show [`VALIDATION_MESSAGE`]; the handler is not called
    Rejected(ValidationReport),
    /// Call the submission handler with this kind and data
    Accepted {
        kind: FormKind,
        data: FormData,
        report: ValidationReport,
    },
}

/// Validate a submitted form and decide whether it goes to the handler.
pub fn process_submit(kind: FormKind, fields: &[FieldEntry]) -> SubmitOutcome {
    let report = validate(fields);
    if report.is_valid() {
        let data = fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        SubmitOutcome::Accepted { kind, data, report }
    } else {
        SubmitOutcome::Rejected(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_kind() {
        assert_eq!(FormKind::from_declared(None), FormKind::Contact);
        assert_eq!(FormKind::from_declared(Some("")), FormKind::Contact);
        assert_eq!(
            FormKind::from_declared(Some("newsletter")),
            FormKind::Newsletter
        );
        assert_eq!(
            FormKind::from_declared(Some("careers")),
            FormKind::Other("careers".to_string())
        );
        assert_eq!(FormKind::Other("careers".to_string()).to_string(), "careers");
    }

    #[test]
    fn test_unknown_kind_uses_contact_message() {
        let other = FormKind::Other("careers".to_string());
        assert_eq!(
            submission_message(&other),
            submission_message(&FormKind::Contact)
        );
        assert!(submission_message(&FormKind::Demo).starts_with("Demo request submitted!"));
    }

    #[test]
    fn test_field_ids_are_scoped_by_form() {
        assert_eq!(field_element_id("contact", "email"), "field-contact-email");
        assert_ne!(
            field_element_id("contact", "email"),
            field_element_id("newsletter", "email")
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(!FieldEntry::new("email", "   \t", true).is_valid());
        assert!(FieldEntry::new("email", " a ", true).is_valid());
        assert!(FieldEntry::new("company", "", false).is_valid());
    }

    #[test]
    fn test_report_marks_exactly_the_empty_required_fields() {
        let fields = vec![
            FieldEntry::new("name", "Asha", true),
            FieldEntry::new("email", "", true),
            FieldEntry::new("phone", "", false),
            FieldEntry::new("message", "  ", true),
        ];
        let report = validate(&fields);

        assert!(!report.is_valid());
        assert_eq!(report.invalid_fields().collect::<Vec<_>>(), vec!["email", "message"]);
        assert_eq!(report.status_of("name"), Some(FieldStatus::Valid));
        assert_eq!(report.status_of("phone"), None);
    }

    #[test]
    fn test_process_submit() {
        let rejected = process_submit(
            FormKind::Contact,
            &[FieldEntry::new("email", "", true)],
        );
        assert!(matches!(rejected, SubmitOutcome::Rejected(_)));

        let accepted = process_submit(
            FormKind::Newsletter,
            &[
                FieldEntry::new("email", "asha@example.com", true),
                FieldEntry::new("name", "", false),
            ],
        );
        match accepted {
            SubmitOutcome::Accepted { kind, data, report } => {
                assert_eq!(kind, FormKind::Newsletter);
                assert_eq!(data.len(), 2);
                assert!(report.is_valid());
            }
            other => panic!("expected accepted, got {:?}", other),
        }
    }
}
