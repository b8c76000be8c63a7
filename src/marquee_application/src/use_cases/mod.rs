pub mod add_favorite;
pub mod catalog;
pub mod delete_account;
pub mod get_account;
pub mod list_accounts;
pub mod login;
pub mod register;
pub mod remove_favorite;
pub mod update_profile;
