pub mod account;
pub mod index;
pub mod validation;
