use thiserror::Error;

use crate::soap::SoapError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("SOAP error: {0}")]
    Soap(#[from] SoapError),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
