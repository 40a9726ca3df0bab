use folio_core::{check, validate, Draft, DraftField, ValidationError};

fn jane() -> Draft {
    Draft::new("Jane", "jane@example.com", "", "hi")
}

#[test]
fn complete_draft_without_subject_is_valid() {
    assert!(validate(&jane()));
}

#[test]
fn blank_required_fields_are_rejected() {
    for field in DraftField::REQUIRED {
        for blank in ["", "   ", "\t\n"] {
            let mut d = jane();
            d.set(field, blank);
            assert!(!validate(&d), "{field} = {blank:?} should fail");
            assert_eq!(check(&d), Err(ValidationError::MissingField(field)));
        }
    }
}

#[test]
fn missing_fields_are_reported_in_form_order() {
    let d = Draft::default();
    assert_eq!(
        check(&d),
        Err(ValidationError::MissingField(DraftField::Name))
    );
}

#[test]
fn subject_is_never_validated() {
    let mut d = jane();
    d.subject = "   ".into();
    assert!(validate(&d));
}

#[test]
fn malformed_emails_are_rejected() {
    for email in [
        "not-an-email",
        "jane.example.com",
        "jane@example",
        "jane@@example.com",
        "@example.com",
        "jane@.com",
        "jane@example.",
        "jane doe@example.com",
        " jane@example.com",
    ] {
        let mut d = jane();
        d.email = email.into();
        assert!(!validate(&d), "{email:?} should fail");
    }

    let d = Draft::new("Jane", "not-an-email", "", "hi");
    assert_eq!(check(&d), Err(ValidationError::InvalidEmail));
}

#[test]
fn lax_email_shapes_are_accepted() {
    for email in [
        "jane@example.com",
        "j@e.c",
        "first.last+tag@sub.example.co.uk",
        "jane@localhost.localdomain",
    ] {
        let mut d = jane();
        d.email = email.into();
        assert!(validate(&d), "{email:?} should pass");
    }
}

#[test]
fn template_params_default_the_subject_and_reply_to_sender() {
    let params = jane().template_params("owner@example.com", "New Contact Form Message");
    assert_eq!(params.to_email, "owner@example.com");
    assert_eq!(params.from_name, "Jane");
    assert_eq!(params.from_email, "jane@example.com");
    assert_eq!(params.reply_to, "jane@example.com");
    assert_eq!(params.subject, "New Contact Form Message");
    assert_eq!(params.message, "hi");

    let mut d = jane();
    d.subject = "Hello".into();
    assert_eq!(d.template_params("o@e.com", "fallback").subject, "Hello");
}

#[test]
fn template_params_serialize_with_provider_field_names() {
    let params = jane().template_params("owner@example.com", "Subject");
    let json = serde_json::to_value(&params).unwrap();
    for key in [
        "to_email",
        "from_name",
        "from_email",
        "subject",
        "message",
        "reply_to",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}
