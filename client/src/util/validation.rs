//! Declarative form validation and field-error mapping.
//!
//! DESIGN
//! ======
//! Each form record declares a static table of per-field rules. Validation is
//! a pure pass over that table in declaration order that collects every
//! failure (no abort-early), so the form can annotate all bad fields at once.
//! Cross-field rules (`MatchesField`, `*WhenPresent`) read sibling values from
//! the same record.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field_path: String,
    pub message: String,
}

/// Every rule that failed for a submitted record, in evaluation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn push(&mut self, field_path: &str, message: &str) {
        self.errors.push(FieldError { field_path: field_path.to_owned(), message: message.to_owned() });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Flatten a failure into `field path -> message`; a repeated path keeps its
/// last message.
pub fn field_errors(failure: &ValidationFailure) -> BTreeMap<String, String> {
    failure
        .errors
        .iter()
        .map(|e| (e.field_path.clone(), e.message.clone()))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed value must be non-empty.
    Required(&'static str),
    /// Non-empty value must look like an e-mail address.
    Email(&'static str),
    /// Value must have at least `n` characters.
    MinLength(usize, &'static str),
    /// Value must equal the named sibling field.
    MatchesField(&'static str, &'static str),
    /// `Required`, but only while `other` is non-empty.
    RequiredWhenPresent { other: &'static str, message: &'static str },
    /// `MinLength`, but only while `other` is non-empty.
    MinLengthWhenPresent { other: &'static str, min: usize, message: &'static str },
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// A submitted form whose fields can be checked against its rule table.
pub trait FormRecord {
    const RULES: &'static [FieldRules];

    /// Current value of `field`; unknown fields read as empty.
    fn value(&self, field: &str) -> &str;

    /// # Errors
    ///
    /// Returns every failed rule when at least one field is invalid.
    fn validate(&self) -> Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::default();
        for field_rules in Self::RULES {
            let value = self.value(field_rules.field);
            for rule in field_rules.rules {
                if let Some(message) = check(rule, value, |other| self.value(other)) {
                    failure.push(field_rules.field, message);
                }
            }
        }
        if failure.is_empty() { Ok(()) } else { Err(failure) }
    }
}

fn check<'a>(rule: &Rule, value: &str, sibling: impl Fn(&str) -> &'a str) -> Option<&'static str> {
    let failed = match *rule {
        Rule::Required(_) => value.trim().is_empty(),
        Rule::Email(_) => !value.is_empty() && !is_email(value),
        Rule::MinLength(min, _) => value.chars().count() < min,
        Rule::MatchesField(other, _) => value != sibling(other),
        Rule::RequiredWhenPresent { other, .. } => !sibling(other).is_empty() && value.trim().is_empty(),
        Rule::MinLengthWhenPresent { other, min, .. } => {
            !sibling(other).is_empty() && value.chars().count() < min
        }
    };
    failed.then_some(rule.message())
}

impl Rule {
    pub fn message(&self) -> &'static str {
        match *self {
            Self::Required(message)
            | Self::Email(message)
            | Self::MinLength(_, message)
            | Self::MatchesField(_, message)
            | Self::RequiredWhenPresent { message, .. }
            | Self::MinLengthWhenPresent { message, .. } => message,
        }
    }
}

/// Shape check: one `@`, non-empty local part, dotted domain, no whitespace.
#[must_use]
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|label| !label.is_empty())
}

const MSG_EMAIL_INVALID: &str = "Informe um e-mail válido!";
const MSG_PASSWORD_MIN: &str = "A senha deve ter no mínimo 6 caracteres";
const MSG_CONFIRMATION_MISMATCH: &str = "Confirmação incorreta";
const MIN_PASSWORD_LEN: usize = 6;

const NAME_RULES: &[Rule] = &[Rule::Required("O nome é obrigatório!")];
const ACCOUNT_EMAIL_RULES: &[Rule] = &[Rule::Required("O e-mail é obrigatório"), Rule::Email(MSG_EMAIL_INVALID)];
const LOGIN_EMAIL_RULES: &[Rule] = &[Rule::Required("Informe seu e-mail"), Rule::Email(MSG_EMAIL_INVALID)];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl FormRecord for SignInForm {
    const RULES: &'static [FieldRules] = &[
        FieldRules { field: "email", rules: LOGIN_EMAIL_RULES },
        FieldRules { field: "password", rules: &[Rule::Required("Informe sua senha")] },
    ];

    fn value(&self, field: &str) -> &str {
        match field {
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormRecord for SignUpForm {
    const RULES: &'static [FieldRules] = &[
        FieldRules { field: "name", rules: NAME_RULES },
        FieldRules { field: "email", rules: ACCOUNT_EMAIL_RULES },
        FieldRules { field: "password", rules: &[Rule::MinLength(MIN_PASSWORD_LEN, MSG_PASSWORD_MIN)] },
    ];

    fn value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl FormRecord for ForgotPasswordForm {
    const RULES: &'static [FieldRules] = &[FieldRules { field: "email", rules: LOGIN_EMAIL_RULES }];

    fn value(&self, field: &str) -> &str {
        match field {
            "email" => &self.email,
            _ => "",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub password_confirmation: String,
}

impl FormRecord for ResetPasswordForm {
    const RULES: &'static [FieldRules] = &[
        FieldRules { field: "password", rules: &[Rule::Required("Informe sua senha")] },
        FieldRules {
            field: "password_confirmation",
            rules: &[Rule::MatchesField("password", MSG_CONFIRMATION_MISMATCH)],
        },
    ];

    fn value(&self, field: &str) -> &str {
        match field {
            "password" => &self.password,
            "password_confirmation" => &self.password_confirmation,
            _ => "",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ProfileForm {
    /// Whether the submission asks for a password change.
    pub fn changes_password(&self) -> bool {
        !self.old_password.is_empty()
    }
}

impl FormRecord for ProfileForm {
    const RULES: &'static [FieldRules] = &[
        FieldRules { field: "name", rules: NAME_RULES },
        FieldRules { field: "email", rules: ACCOUNT_EMAIL_RULES },
        FieldRules {
            field: "password",
            rules: &[Rule::MinLengthWhenPresent { other: "old_password", min: MIN_PASSWORD_LEN, message: MSG_PASSWORD_MIN }],
        },
        FieldRules {
            field: "password_confirmation",
            rules: &[
                Rule::RequiredWhenPresent { other: "password", message: "Confirme a nova senha" },
                Rule::MatchesField("password", MSG_CONFIRMATION_MISMATCH),
            ],
        },
    ];

    fn value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "old_password" => &self.old_password,
            "password" => &self.password,
            "password_confirmation" => &self.password_confirmation,
            _ => "",
        }
    }
}
