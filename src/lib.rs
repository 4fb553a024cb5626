// Infrastructure layer (shared components)
pub mod config;
pub mod error;
pub mod telemetry;

// Core components (independent, no shared state)
pub mod extract;
pub mod soap;
pub mod template;

// Composition convenience for test code
pub mod harness;

pub use error::{HarnessError, Result};
pub use extract::extract;
pub use harness::Harness;
pub use soap::{SoapClient, SoapRequest, SoapResponse};
pub use template::{Template, TemplateStore};
