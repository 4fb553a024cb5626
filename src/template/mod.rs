//! Request template loading and rendering

mod store;
mod substitution;
mod types;

pub use store::TemplateStore;
pub use types::{Template, TemplateError, TemplateResult};
