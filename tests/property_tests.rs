//! Property-based tests for the signup rules.

use formcheck::prelude::*;
use proptest::prelude::*;

fn arb_fields() -> impl Strategy<Value = FormFields> {
    (".{0,20}", ".{0,20}", ".{0,20}", ".{0,20}").prop_map(
        |(username, email, password, confirm_password)| FormFields {
            username,
            email,
            password,
            confirm_password,
        },
    )
}

proptest! {
    // validate(x) == validate(x) for unchanged fields.
    #[test]
    fn validate_is_idempotent(fields in arb_fields()) {
        prop_assert_eq!(validate(&fields), validate(&fields));
    }

    // The validity flag is exactly "no field errors".
    #[test]
    fn valid_iff_empty(fields in arb_fields()) {
        let report = validate(&fields);
        prop_assert_eq!(report.is_valid(), report.is_empty());
    }

    // At most one error per field, so never more than four total.
    #[test]
    fn at_most_one_error_per_field(fields in arb_fields()) {
        let report = validate(&fields);
        prop_assert!(report.len() <= 4);
        for field in FieldName::ALL {
            let count = report.iter().filter(|(f, _)| *f == field).count();
            prop_assert!(count <= 1);
        }
    }

    // Any well-formed submission is accepted.
    #[test]
    fn well_formed_submissions_pass(
        username in "[a-z]{1,12}",
        local in "[a-z0-9]{1,8}",
        domain in "[a-z]{1,8}",
        tld in "[a-z]{2,4}",
        body in "[A-Za-z0-9]{5,12}",
    ) {
        let password = format!("{body}!");
        let fields = FormFields {
            username,
            email: format!("{local}@{domain}.{tld}"),
            password: password.clone(),
            confirm_password: password,
        };
        prop_assert!(validate(&fields).is_valid());
    }

    // A password below six characters never grades above Weak, and the
    // grade never depends on special characters.
    #[test]
    fn strength_matches_its_definition(password in ".{0,16}") {
        let strength = PasswordStrength::classify(&password);
        if password.chars().count() < 6 {
            prop_assert_eq!(strength, PasswordStrength::Weak);
        } else {
            let lower = password.chars().any(|c| c.is_ascii_lowercase());
            let upper = password.chars().any(|c| c.is_ascii_uppercase());
            let digit = password.chars().any(|c| c.is_ascii_digit());
            let expected = if lower && upper && digit {
                PasswordStrength::Strong
            } else {
                PasswordStrength::Medium
            };
            prop_assert_eq!(strength, expected);
        }
    }

    // Confirm mismatch is symmetric in what it reports: matching strings
    // never produce a confirm error, differing strings always do.
    #[test]
    fn confirm_error_iff_strings_differ(password in ".{0,12}", confirm in ".{0,12}") {
        let fields = FormFields {
            username: "joe".into(),
            email: "joe@x.com".into(),
            password: password.clone(),
            confirm_password: confirm.clone(),
        };
        let report = validate(&fields);
        let has_confirm_error = report.message_for(FieldName::ConfirmPassword).is_some();
        prop_assert_eq!(has_confirm_error, password != confirm);
    }
}
