mod settings;

pub use settings::{Settings, SoapConfig, TemplateConfig};
