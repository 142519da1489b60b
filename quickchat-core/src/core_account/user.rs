/*
    user.rs - Local user account

    One UserAccount holds the registered credentials for this device's
    user, in memory only. Login has exactly two outcomes and the status
    lines are the console copy shown to the user.
*/

use crate::core_account::validation;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised when registration fields fail validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Username missing its underscore or longer than six characters
    #[error("Username is not correctly formatted: it must contain an underscore and be no more than six characters long")]
    BadUsername,
    /// Password shorter than eight characters or missing a character class
    #[error("Password does not meet the complexity rules: at least eight characters with an uppercase letter, a digit and a special character")]
    BadPassword,
    /// Cell number without a country code or with an implausible digit count
    #[error("Cell number is not an international number: it must start with '+' followed by the country code and subscriber number")]
    BadCellNumber,
}

/// Credentials and display names for the single local user
#[derive(Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Login name, underscore required
    pub username: String,
    /// Login secret, complexity-checked at registration
    pub password: String,
    /// International cell number for the account
    pub cell_number: String,
    /// Display name, free text
    pub first_name: String,
    /// Display name, free text
    pub last_name: String,
}

impl UserAccount {
    /// Create an account from registration input. Fields are taken
    /// as-is; call `validate` to check them.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        cell_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            cell_number: cell_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Check every credential field and report the first one that fails.
    pub fn validate(&self) -> Result<(), AccountError> {
        if !validation::valid_username(&self.username) {
            return Err(AccountError::BadUsername);
        }
        if !validation::valid_password(&self.password) {
            return Err(AccountError::BadPassword);
        }
        if !validation::valid_cell_number(&self.cell_number) {
            return Err(AccountError::BadCellNumber);
        }
        Ok(())
    }

    /// True when the supplied credentials match this account exactly.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let matched = self.username == username && self.password == password;
        if matched {
            debug!(username = %self.username, "login verified");
        } else {
            warn!(username = %username, "login rejected");
        }
        matched
    }

    /// The status line shown after a login attempt.
    pub fn login_status(&self, success: bool) -> String {
        if success {
            format!(
                "Welcome {} {}, it is great to see you again.",
                self.first_name, self.last_name
            )
        } else {
            "Username or password incorrect, please try again.".to_string()
        }
    }

    /// Verify credentials and render the status line in one step.
    pub fn login(&self, username: &str, password: &str) -> String {
        let success = self.verify(username, password);
        self.login_status(success)
    }
}

// Manual Debug keeps the password out of log output.
impl fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("cell_number", &self.cell_number)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::test_account;

    #[test]
    fn test_valid_account_passes_validation() {
        assert_eq!(test_account().validate(), Ok(()));
    }

    #[test]
    fn test_validation_reports_first_bad_field() {
        let mut bad = test_account();
        bad.username = "kyle".to_string();
        assert_eq!(bad.validate(), Err(AccountError::BadUsername));

        let mut bad = test_account();
        bad.password = "weak".to_string();
        assert_eq!(bad.validate(), Err(AccountError::BadPassword));

        let mut bad = test_account();
        bad.cell_number = "0838968976".to_string();
        assert_eq!(bad.validate(), Err(AccountError::BadCellNumber));
    }

    #[test]
    fn test_login_greets_by_name() {
        let status = test_account().login("kyl_1", "Ch&&sec@ke99!");
        assert!(status.contains("Welcome"));
        assert!(status.contains("Kyle"));
        assert!(status.contains("Smith"));
    }

    #[test]
    fn test_login_rejects_wrong_credentials() {
        let account = test_account();
        assert!(account.login("kyl_1", "wrong").contains("incorrect"));
        assert!(account.login("someone", "Ch&&sec@ke99!").contains("incorrect"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", test_account());
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("Ch&&sec@ke99!"));
    }
}
