use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;

mod common;

#[test]
fn test_link_end_to_end() {
    common::merchant_cmd()
        .args(["link", "199.00", "12345", "Step One subscription"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://auth.robokassa.ru/Merchant/Index.aspx?",
        ))
        .stdout(predicate::str::contains("MerchantLogin=stepone"))
        .stdout(predicate::str::contains("OutSum=199.00"))
        .stdout(predicate::str::contains("InvoiceID=12345"))
        .stdout(predicate::str::contains(
            "SignatureValue=b1b93375d1b771994fa7a391dd7aadcb",
        ))
        .stdout(predicate::str::contains("IsTest").not())
        .stdout(predicate::str::contains("Recurring").not());
}

#[test]
fn test_link_pads_amount_to_two_decimals() {
    common::merchant_cmd()
        .args(["link", "199", "12345", "Step One subscription"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OutSum=199.00"))
        .stdout(predicate::str::contains(
            "SignatureValue=b1b93375d1b771994fa7a391dd7aadcb",
        ));
}

#[test]
fn test_link_recurring_flag() {
    common::merchant_cmd()
        .args(["link", "199.00", "12346", "Step One subscription", "--recurring"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recurring=1"))
        .stdout(predicate::str::contains(
            "SignatureValue=f21472d542e0e0fb02af532993dd8ee8",
        ));
}

#[test]
fn test_link_test_mode_from_env() {
    common::merchant_cmd()
        .env("ROBOKASSA_TEST_MODE", "1")
        .args(["link", "199.00", "12345", "Step One subscription"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IsTest=1"));
}

#[test]
fn test_link_user_param_enters_signature() {
    common::merchant_cmd()
        .args([
            "link",
            "199.00",
            "12345",
            "Step One subscription",
            "--shp",
            "Shp_userId=593315158",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shp_userId=593315158"))
        .stdout(predicate::str::contains(
            "SignatureValue=87faddf3953c2a2f9fe32b5f356c415e",
        ));
}

#[test]
fn test_link_json_output() {
    common::merchant_cmd()
        .args(["link", "199.00", "12345", "Step One subscription", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"url\""))
        .stdout(predicate::str::contains("\"params\""))
        .stdout(predicate::str::contains("b1b93375d1b771994fa7a391dd7aadcb"));
}

#[test]
fn test_link_without_credentials_fails() {
    common::bare_cmd()
        .args(["link", "199.00", "12345", "Step One subscription"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ROBOKASSA_MERCHANT_LOGIN"));
}
