use super::*;

fn form(old_password: &str) -> ProfileForm {
    ProfileForm {
        name: " Ana Souza ".to_owned(),
        email: "ana@example.com".to_owned(),
        old_password: old_password.to_owned(),
        password: "654321".to_owned(),
        password_confirmation: "654321".to_owned(),
    }
}

#[test]
fn profile_update_omits_passwords_without_current_password() {
    let update = profile_update(&form(""));
    assert_eq!(update.name, "Ana Souza");
    assert_eq!(update.password_change, None);
}

#[test]
fn profile_update_includes_passwords_with_current_password() {
    let update = profile_update(&form("123456"));
    assert_eq!(
        update.password_change,
        Some(PasswordChange {
            old_password: "123456".to_owned(),
            password: "654321".to_owned(),
            password_confirmation: "654321".to_owned(),
        })
    );
}

#[test]
fn profile_update_wire_shape_is_flat_camel_case() {
    let json = serde_json::to_value(profile_update(&form("123456"))).expect("json");
    assert_eq!(json["oldPassword"], "123456");
    assert_eq!(json["passwordConfirmation"], "654321");
    let json = serde_json::to_value(profile_update(&form(""))).expect("json");
    assert!(json.get("oldPassword").is_none());
}

#[test]
fn initials_take_first_two_words() {
    let identity = crate::test_support::identity("ana maria souza");
    assert_eq!(initials(&identity), "AM");
}
