//! Scenario tests for the customer form: the behaviors a user actually
//! drives from the template.

use formwork_customer::{CustomerForm, default_address_value};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

#[test]
fn email_pair_must_match_once_both_edited() {
    let mut form = CustomerForm::new();

    // only the first field edited: no match error yet
    form.set("emailGroup.email", json!("jack@example.com")).unwrap();
    assert!(form.state("emailGroup").unwrap().errors().is_empty());

    // both edited and differing
    form.set("emailGroup.confirmEmail", json!("jak@example.com")).unwrap();
    let errors = form.state("emailGroup").unwrap().errors().to_vec();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "match");

    // agreement clears it
    form.set("emailGroup.confirmEmail", json!("jack@example.com")).unwrap();
    assert!(form.state("emailGroup").unwrap().is_valid());
}

#[rstest]
#[case("text", false)]
#[case("email", true)]
#[case("", true)]
fn notification_choice_drives_phone_requirement(#[case] via: &str, #[case] phone_ok: bool) {
    let mut form = CustomerForm::new();
    form.set("notification", json!(via)).unwrap();

    let state = form.state("phone").unwrap();
    assert_eq!(state.is_valid(), phone_ok, "via = {via:?}");
    if !phone_ok {
        assert_eq!(state.errors()[0].code, "required");
    }
}

#[test]
fn switching_notification_back_lifts_the_phone_rule() {
    let mut form = CustomerForm::new();

    form.set("notification", json!("text")).unwrap();
    assert!(!form.state("phone").unwrap().is_valid());

    // phone still empty, but no longer required
    form.set("notification", json!("email")).unwrap();
    assert!(form.state("phone").unwrap().is_valid());
    assert_eq!(form.value_at("phone").unwrap(), json!(""));
}

#[test]
fn filled_phone_satisfies_the_text_requirement() {
    let mut form = CustomerForm::new();
    form.set("phone", json!("555-0100")).unwrap();
    form.set("notification", json!("text")).unwrap();
    assert!(form.state("phone").unwrap().is_valid());
}

#[test]
fn added_addresses_are_defaulted_and_positional() {
    let mut form = CustomerForm::new();
    assert_eq!(form.add_address().unwrap(), 1);
    assert_eq!(form.add_address().unwrap(), 2);

    let addresses = form.value_at("addressGroup").unwrap();
    let addresses = addresses.as_array().unwrap();
    assert_eq!(addresses.len(), 3);
    for entry in addresses {
        assert_eq!(*entry, default_address_value());
    }

    // entries are edited independently
    form.set("addressGroup.1.city", json!("Cardiff")).unwrap();
    assert_eq!(form.value_at("addressGroup.1.city").unwrap(), json!("Cardiff"));
    assert_eq!(form.value_at("addressGroup.0.city").unwrap(), json!(""));
    assert_eq!(form.value_at("addressGroup.2.city").unwrap(), json!(""));
}

#[test]
fn populate_test_values_loads_the_demo_record() {
    let mut form = CustomerForm::new();
    form.populate_test_values().unwrap();

    assert_eq!(form.value_at("firstName").unwrap(), json!("Jack"));
    assert_eq!(form.value_at("lastName").unwrap(), json!("Harness"));
    assert_eq!(
        form.value_at("emailGroup.email").unwrap(),
        json!("jack@harnesstrading.com")
    );
    assert_eq!(form.value_at("sendCatalog").unwrap(), json!(true));

    // a programmatic load does not look like user input
    assert!(form.state("firstName").unwrap().is_pristine());
}

#[test]
fn populate_fails_against_a_grown_address_list() {
    let mut form = CustomerForm::new();
    form.add_address().unwrap();

    // the demo literal carries one address; the form now has two
    let err = form.populate_test_values().unwrap_err();
    assert_eq!(err.code(), "CTRL_INVALID_SHAPE");
}

#[test]
fn patch_test_data_touches_only_the_names() {
    let mut form = CustomerForm::new();
    form.set("rating", json!(4)).unwrap();
    let before = form.value();

    form.patch_test_data();
    let after = form.value();

    assert_eq!(after["firstName"], json!("Jack"));
    assert_eq!(after["lastName"], json!("Harness"));
    assert_eq!(after["rating"], before["rating"]);
    assert_eq!(after["addressGroup"], before["addressGroup"]);
    assert_eq!(after["emailGroup"], before["emailGroup"]);
    assert_eq!(after["notification"], before["notification"]);
    assert_eq!(after["sendCatalog"], before["sendCatalog"]);
    assert_eq!(after["phone"], before["phone"]);
}

#[tokio::test(start_paused = true)]
async fn rapid_email_edits_deliver_once_after_the_quiet_window() {
    let mut form = CustomerForm::new();
    let mut emails = form.email_changes().expect("first take of the stream");
    assert!(form.email_changes().is_none());

    form.set("emailGroup.email", json!("j@example.com")).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    form.set("emailGroup.email", json!("jack@example.com")).unwrap();

    // still inside the quiet window
    tokio::time::sleep(std::time::Duration::from_millis(900)).await;
    assert!(emails.try_recv().is_err());

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(emails.recv().await, Some(Value::String("jack@example.com".into())));

    // nothing else pending
    drop(form);
    assert_eq!(emails.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn repeated_email_value_does_not_restart_the_window() {
    let mut form = CustomerForm::new();
    let mut emails = form.email_changes().expect("first take of the stream");

    form.set("emailGroup.email", json!("jack@example.com")).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(900)).await;

    // re-entering the current value is a no-op and must not defer delivery
    form.set("emailGroup.email", json!("jack@example.com")).unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert_eq!(
        emails.try_recv().ok(),
        Some(Value::String("jack@example.com".into()))
    );

    // nor does it queue a second delivery
    form.set("emailGroup.email", json!("jack@example.com")).unwrap();
    drop(form);
    assert_eq!(emails.recv().await, None);
}
