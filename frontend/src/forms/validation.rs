use std::fmt;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Whitespace as browsers see it in `\s` and `trim()`: Unicode white space
/// plus the byte-order mark.
pub fn is_js_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_js_space).is_empty()
}

/// `local@domain.tld` with no whitespace and exactly one `@`. Nothing checks
/// TLD length or whether the domain resolves.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_js_space) {
        return false;
    }
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    // Some dot must leave non-empty text on both sides.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// The form name the error text is built from.
    pub fn form_name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Subject)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

impl FieldError {
    pub fn required(field: ContactField) -> Self {
        Self {
            field,
            message: format!("{} is required", field),
        }
    }

    pub fn invalid_email() -> Self {
        Self {
            field: ContactField::Email,
            message: INVALID_EMAIL.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// Every failure, in field order. The required and format checks run
/// independently, so a whitespace-only email fails both; the format error
/// comes last and is the one a per-field display keeps.
pub fn validate_contact(fields: &ContactFields) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in ContactField::ALL {
        let value = fields.get(field);
        if field.is_required() && is_blank(value) {
            errors.push(FieldError::required(field));
        }
        if field == ContactField::Email && !value.is_empty() && !is_valid_email(value) {
            errors.push(FieldError::invalid_email());
        }
    }
    errors
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsletterError {
    Empty,
    Invalid,
}

impl NewsletterError {
    pub fn alert_text(self) -> &'static str {
        match self {
            NewsletterError::Empty => "Please enter your email address",
            NewsletterError::Invalid => INVALID_EMAIL,
        }
    }
}

pub fn validate_newsletter(email: &str) -> Result<(), NewsletterError> {
    if email.is_empty() {
        return Err(NewsletterError::Empty);
    }
    if !is_valid_email(email) {
        return Err(NewsletterError::Invalid);
    }
    Ok(())
}
