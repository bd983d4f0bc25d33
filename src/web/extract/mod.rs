//! Custom request extractors.

mod login_form;

pub use login_form::LoginForm;
