//! Registration wizard: linear step controller and its persistence port

pub mod ports;
pub mod service;

pub use ports::RegistrationStore;
pub use service::{RegistrationWizard, WizardSettings};
