pub mod analytics;
pub mod catalog;
pub mod errors;
pub mod goal;

pub use errors::WizardError;
