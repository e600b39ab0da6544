pub mod chrome;
pub mod contact;
pub mod gallery;
pub mod i18n;
pub mod site;
