use ark_std::{error, fmt};
use pedeval_algebra::prelude::AlgebraError;
use pedeval_crypto::errors::CryptoError;

pub(crate) type Result<T> = core::result::Result<T, PedevalError>;

#[derive(Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum PedevalError {
    Algebra(AlgebraError),
    Crypto(CryptoError),
    ParameterError,
    InconsistentStructureError,
}

impl fmt::Display for PedevalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PedevalError::*;
        f.write_str(match self {
            Algebra(e) => return write!(f, "Algebra: {}", e),
            Crypto(e) => return write!(f, "Crypto: {}", e),
            ParameterError => "Unexpected parameter for method or function",
            InconsistentStructureError => "Proof structure is inconsistent",
        })
    }
}

impl error::Error for PedevalError {}

impl From<AlgebraError> for PedevalError {
    fn from(e: AlgebraError) -> PedevalError {
        PedevalError::Algebra(e)
    }
}

impl From<CryptoError> for PedevalError {
    fn from(e: CryptoError) -> PedevalError {
        PedevalError::Crypto(e)
    }
}
