pub mod app_error;
pub mod email_templates;
pub mod password;
pub mod session;
pub mod tokens;
pub mod use_cases;
pub mod validators;
