//! SOAP request construction and dispatch

mod client;
mod types;

pub use client::{build_headers, SoapClient};
pub use types::{SoapError, SoapRequest, SoapResponse, SoapResult};
