//! Field Validation Rules
//!
//! Rules used by the client forms before a request is sent, and by the
//! backend to reject requests with missing fields.
//!
//! Every rule except [`Rule::Required`] treats an empty value as valid, so
//! that an empty field reports exactly one problem ("required") instead of
//! several.

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;

/// A validation rule attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLength(usize),
    PasswordMismatch,
}

impl Rule {
    /// Stable key for the rule, as reported to a UI layer.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::MinLength(_) => "minlength",
            Self::PasswordMismatch => "passwordMismatch",
        }
    }

    /// Check `value` against this rule. `PasswordMismatch` is a cross-field
    /// rule and is checked with [`passwords_match`] instead.
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::Email => value.is_empty() || is_email(value),
            Self::MinLength(min) => value.is_empty() || value.chars().count() >= *min,
            Self::PasswordMismatch => true,
        }
    }
}

/// A failed rule on a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: Rule,
}

impl FieldError {
    pub fn new(field: &'static str, rule: Rule) -> Self {
        Self { field, rule }
    }

    pub fn message(&self) -> String {
        match self.rule {
            Rule::Required => format!("{} is required", self.field),
            Rule::Email => format!("{} must be a valid email address", self.field),
            Rule::MinLength(min) => format!("{} must be at least {} characters", self.field, min),
            Rule::PasswordMismatch => "Passwords do not match".to_string(),
        }
    }
}

/// Run `rules` against a single field, collecting failures into `errors`.
pub fn check_field(field: &'static str, value: &str, rules: &[Rule], errors: &mut Vec<FieldError>) {
    for rule in rules {
        if !rule.check(value) {
            errors.push(FieldError::new(field, *rule));
        }
    }
}

pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Server-side presence check, worded the way API consumers expect:
/// `The Email field is required.`
pub fn required_field_message(field: &str, value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => None,
        _ => Some(format!("The {} field is required.", field)),
    }
}

/// Email shape check: `local@domain` where the local part uses the usual
/// atom characters and the domain is one or more dot-separated labels of
/// letters, digits and inner hyphens. A single-label domain is accepted.
pub fn is_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH {
        return false;
    }
    if !local.chars().all(is_local_char) {
        return false;
    }

    !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
