use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value outside the valid domain for {what}: {value}")]
    OutOfDomain { what: &'static str, value: f64 },
}
