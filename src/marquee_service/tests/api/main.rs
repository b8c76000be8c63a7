mod accounts;
mod auth;
mod catalog;
mod favorites;
mod helpers;
