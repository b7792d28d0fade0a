//! Application handlers - one per API operation.
//!
//! Handlers own their port collaborators behind `Arc<dyn Trait>` and carry
//! no HTTP concerns; the HTTP adapter translates requests and errors.

mod get_analytics;
mod list_forms;
mod login;
mod submit_form;

pub use get_analytics::{GetAnalyticsHandler, GetAnalyticsQuery};
pub use list_forms::{FormPage, ListFormsHandler, ListFormsQuery};
pub use login::{LoginCommand, LoginHandler};
pub use submit_form::{SubmitFormCommand, SubmitFormHandler};
