/*
    core_account - Local user credentials and login

    Single-user account layer: validation of registration input and the
    login status lines shown by the console. Credentials live in memory
    for the life of the process; nothing is persisted.
*/

pub mod user;
pub mod validation;

pub use user::{AccountError, UserAccount};
pub use validation::{msisdn_digits, valid_cell_number, valid_password, valid_username};
