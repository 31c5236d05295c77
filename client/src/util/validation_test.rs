use super::*;

fn failure(pairs: &[(&str, &str)]) -> ValidationFailure {
    let mut failure = ValidationFailure::default();
    for (path, message) in pairs {
        failure.push(path, message);
    }
    failure
}

// =============================================================
// field_errors
// =============================================================

#[test]
fn field_errors_maps_single_failure() {
    let mapped = field_errors(&failure(&[("email", "Informe um e-mail válido!")]));
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped.get("email").map(String::as_str), Some("Informe um e-mail válido!"));
}

#[test]
fn field_errors_keeps_last_message_per_path() {
    let mapped = field_errors(&failure(&[
        ("password_confirmation", "Confirme a nova senha"),
        ("name", "O nome é obrigatório!"),
        ("password_confirmation", "Confirmação incorreta"),
    ]));
    assert_eq!(mapped.len(), 2);
    assert_eq!(mapped["password_confirmation"], "Confirmação incorreta");
    assert_eq!(mapped["name"], "O nome é obrigatório!");
}

#[test]
fn field_errors_of_empty_failure_is_empty() {
    assert!(field_errors(&ValidationFailure::default()).is_empty());
}

// =============================================================
// is_email
// =============================================================

#[test]
fn is_email_accepts_common_addresses() {
    assert!(is_email("ana@example.com"));
    assert!(is_email("ana.maria+tag@mail.example.com.br"));
}

#[test]
fn is_email_rejects_malformed_addresses() {
    for bad in ["ana", "@example.com", "ana@", "ana@example", "a@b@c.com", "ana @x.com", "ana@x..com"] {
        assert!(!is_email(bad), "{bad} should be rejected");
    }
}

// =============================================================
// Form rule tables
// =============================================================

#[test]
fn sign_in_requires_both_fields() {
    let err = SignInForm::default().validate().unwrap_err();
    let mapped = field_errors(&err);
    assert_eq!(mapped["email"], "Informe seu e-mail");
    assert_eq!(mapped["password"], "Informe sua senha");
}

#[test]
fn sign_in_reports_malformed_email() {
    let form = SignInForm { email: "ana".to_owned(), password: "123456".to_owned() };
    let err = form.validate().unwrap_err();
    assert_eq!(
        err.errors,
        vec![FieldError { field_path: "email".to_owned(), message: "Informe um e-mail válido!".to_owned() }]
    );
}

#[test]
fn sign_in_accepts_valid_input() {
    let form = SignInForm { email: "ana@example.com".to_owned(), password: "x".to_owned() };
    assert!(form.validate().is_ok());
}

#[test]
fn required_treats_whitespace_as_missing() {
    let form = SignInForm { email: "ana@example.com".to_owned(), password: "   ".to_owned() };
    let mapped = field_errors(&form.validate().unwrap_err());
    assert_eq!(mapped["password"], "Informe sua senha");
}

#[test]
fn sign_up_enforces_minimum_password_length() {
    let form = SignUpForm { name: "Ana".to_owned(), email: "ana@example.com".to_owned(), password: "12345".to_owned() };
    let mapped = field_errors(&form.validate().unwrap_err());
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped["password"], "A senha deve ter no mínimo 6 caracteres");
}

#[test]
fn sign_up_reports_fields_in_declaration_order() {
    let err = SignUpForm::default().validate().unwrap_err();
    let paths = err.errors.iter().map(|e| e.field_path.as_str()).collect::<Vec<_>>();
    assert_eq!(paths, vec!["name", "email", "password"]);
}

#[test]
fn forgot_password_validates_email_only() {
    assert!(ForgotPasswordForm { email: "ana@example.com".to_owned() }.validate().is_ok());
    let mapped = field_errors(&ForgotPasswordForm::default().validate().unwrap_err());
    assert_eq!(mapped["email"], "Informe seu e-mail");
}

#[test]
fn reset_password_requires_matching_confirmation() {
    let form = ResetPasswordForm { password: "secret1".to_owned(), password_confirmation: "secret2".to_owned() };
    let mapped = field_errors(&form.validate().unwrap_err());
    assert_eq!(mapped["password_confirmation"], "Confirmação incorreta");

    let ok = ResetPasswordForm { password: "secret1".to_owned(), password_confirmation: "secret1".to_owned() };
    assert!(ok.validate().is_ok());
}

fn profile() -> ProfileForm {
    ProfileForm { name: "Ana".to_owned(), email: "ana@example.com".to_owned(), ..ProfileForm::default() }
}

#[test]
fn profile_without_password_change_skips_password_rules() {
    let form = profile();
    assert!(!form.changes_password());
    assert!(form.validate().is_ok());
}

#[test]
fn profile_password_change_enforces_minimum_length() {
    let form = ProfileForm {
        old_password: "old123".to_owned(),
        password: "abc".to_owned(),
        password_confirmation: "abc".to_owned(),
        ..profile()
    };
    assert!(form.changes_password());
    let mapped = field_errors(&form.validate().unwrap_err());
    assert_eq!(mapped["password"], "A senha deve ter no mínimo 6 caracteres");
    assert!(!mapped.contains_key("password_confirmation"));
}

#[test]
fn profile_missing_confirmation_reports_last_failure() {
    let form = ProfileForm { old_password: "old123".to_owned(), password: "new123".to_owned(), ..profile() };
    let err = form.validate().unwrap_err();
    assert_eq!(err.errors.len(), 2);
    assert_eq!(err.errors[0].message, "Confirme a nova senha");
    assert_eq!(field_errors(&err)["password_confirmation"], "Confirmação incorreta");
}

#[test]
fn profile_valid_password_change_passes() {
    let form = ProfileForm {
        old_password: "old123".to_owned(),
        password: "new123".to_owned(),
        password_confirmation: "new123".to_owned(),
        ..profile()
    };
    assert!(form.validate().is_ok());
}
