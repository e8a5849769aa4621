use super::*;

fn filled_form() -> RegisterForm {
    RegisterForm {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: " ada@example.com".to_owned(),
        password: "engine1".to_owned(),
        confirm_password: "engine1".to_owned(),
    }
}

#[test]
fn valid_form_builds_trimmed_request() {
    assert_eq!(
        validate_register_form(&filled_form()),
        Ok(RegisterRequest {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "engine1".to_owned(),
        })
    );
}

#[test]
fn any_blank_field_is_missing() {
    let blanks: [fn(&mut RegisterForm); 5] = [
        |f| f.first_name = "  ".to_owned(),
        |f| f.last_name.clear(),
        |f| f.email.clear(),
        |f| f.password.clear(),
        |f| f.confirm_password.clear(),
    ];
    for blank in blanks {
        let mut form = filled_form();
        blank(&mut form);
        assert_eq!(validate_register_form(&form), Err(RegisterFormError::MissingFields));
    }
}

#[test]
fn mismatched_passwords_are_rejected_before_length() {
    let form = RegisterForm { password: "abc".to_owned(), confirm_password: "abd".to_owned(), ..filled_form() };
    assert_eq!(validate_register_form(&form), Err(RegisterFormError::PasswordMismatch));
}

#[test]
fn short_password_is_rejected() {
    let form = RegisterForm { password: "abcde".to_owned(), confirm_password: "abcde".to_owned(), ..filled_form() };
    assert_eq!(validate_register_form(&form), Err(RegisterFormError::PasswordTooShort));
}

#[test]
fn six_character_password_is_accepted() {
    let form = RegisterForm { password: "abcdef".to_owned(), confirm_password: "abcdef".to_owned(), ..filled_form() };
    assert!(validate_register_form(&form).is_ok());
}

#[test]
fn error_messages_match_form_copy() {
    assert_eq!(RegisterFormError::MissingFields.to_string(), "Please fill in all fields");
    assert_eq!(RegisterFormError::PasswordMismatch.to_string(), "Passwords do not match");
    assert_eq!(
        RegisterFormError::PasswordTooShort.to_string(),
        "Password must be at least 6 characters long"
    );
}
