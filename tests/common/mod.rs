use assert_cmd::cargo_bin;
use std::process::Command;

pub const MERCHANT_LOGIN: &str = "stepone";
pub const PASSWORD1: &str = "B2Bnpr5rF948tbTZXsg";
pub const PASSWORD2: &str = "FCxKxmU1VgdE4V0S4Q1f";

/// Command with the merchant credentials set and ambient test mode cleared.
pub fn merchant_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin!("rklink"));
    cmd.env("ROBOKASSA_MERCHANT_LOGIN", MERCHANT_LOGIN)
        .env("ROBOKASSA_PASSWORD1", PASSWORD1)
        .env("ROBOKASSA_PASSWORD2", PASSWORD2)
        .env_remove("ROBOKASSA_TEST_MODE");
    cmd
}

/// Command with no merchant credentials at all.
pub fn bare_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin!("rklink"));
    cmd.env_remove("ROBOKASSA_MERCHANT_LOGIN")
        .env_remove("ROBOKASSA_PASSWORD1")
        .env_remove("ROBOKASSA_PASSWORD2")
        .env_remove("ROBOKASSA_TEST_MODE");
    cmd
}
