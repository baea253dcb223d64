//! Contact form field snapshot

/// The four fields of the contact form.
///
/// Sent as `name=..&email=..&subject=..&message=..`, see [`ContactFields::to_form_body`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Identifies one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in display order
    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    /// Form key used on the wire
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your name:",
            ContactField::Email => "Your email:",
            ContactField::Subject => "Your subject:",
            ContactField::Message => "Your message:",
        }
    }
}

/// Why the form cannot be submitted yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing(ContactField),
    InvalidEmail,
}

impl FieldProblem {
    /// Inline hint for the form
    pub fn hint(&self) -> String {
        match self {
            FieldProblem::Missing(field) => format!("Please fill out the {} field.", field.key()),
            FieldProblem::InvalidEmail => "Please enter a valid email address.".to_string(),
        }
    }
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Value of a single field
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Mutable value of a single field, for text inputs
    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// First reason the form is not ready to submit, in field order.
    ///
    /// Mirrors what a browser enforces for `required` and `type="email"`
    /// inputs: every field non-empty, email shaped like `local@domain`.
    pub fn first_problem(&self) -> Option<FieldProblem> {
        for &field in ContactField::all() {
            if self.get(field).trim().is_empty() {
                return Some(FieldProblem::Missing(field));
            }
            if field == ContactField::Email && !looks_like_email(&self.email) {
                return Some(FieldProblem::InvalidEmail);
            }
        }
        None
    }

    /// Whether the form can be submitted
    pub fn is_complete(&self) -> bool {
        self.first_problem().is_none()
    }

    /// Encode as an `application/x-www-form-urlencoded` body
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(ContactField::all().iter().map(|&f| (f.key(), self.get(f))))
            .finish()
    }
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactFields {
        ContactFields::new("Jo", "jo@x.com", "Hi", "Hello")
    }

    #[test]
    fn test_complete_fields() {
        assert!(sample().is_complete());
        assert_eq!(sample().first_problem(), None);
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let mut fields = sample();
        fields.subject.clear();
        fields.message = "   ".to_string();
        assert_eq!(
            fields.first_problem(),
            Some(FieldProblem::Missing(ContactField::Subject))
        );

        let empty = ContactFields::default();
        assert_eq!(
            empty.first_problem(),
            Some(FieldProblem::Missing(ContactField::Name))
        );
    }

    #[test]
    fn test_email_shape() {
        for bad in ["jo", "@x.com", "jo@", "jo @x.com", "jo@x@y"] {
            let mut fields = sample();
            fields.email = bad.to_string();
            assert_eq!(
                fields.first_problem(),
                Some(FieldProblem::InvalidEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_form_encoding_keys_and_order() {
        let encoded = ContactFields::new("Jo Doe", "jo@x.com", "Hi & bye", "a=b").to_form_body();
        assert_eq!(
            encoded,
            "name=Jo+Doe&email=jo%40x.com&subject=Hi+%26+bye&message=a%3Db"
        );
    }

    #[test]
    fn test_hint_text() {
        assert_eq!(
            FieldProblem::Missing(ContactField::Email).hint(),
            "Please fill out the email field."
        );
    }
}
