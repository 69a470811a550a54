use thiserror::Error;

use crate::kind::VitalKind;

#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
    #[error("cannot convert between {from} ({from_kind}) and {to} ({to_kind})")]
    UnitMismatch {
        from: String,
        from_kind: VitalKind,
        to: String,
        to_kind: VitalKind,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, VitalsError>;
