use ark_std::{error, fmt};
use pedeval_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, CryptoError>;

#[derive(Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum CryptoError {
    ParameterError,
    MalformedInput,
    RandomnessError,
    BasisDerivationExhausted,
    Algebra(AlgebraError),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        f.write_str(match self {
            ParameterError => "Unexpected parameter for method or function",
            MalformedInput => "Input does not have the expected shape",
            RandomnessError => "The random source failed to produce bytes",
            BasisDerivationExhausted => "Ran out of counters while deriving basis points",
            Algebra(e) => return write!(f, "Algebra: {}", e),
        })
    }
}

impl error::Error for CryptoError {}

impl From<AlgebraError> for CryptoError {
    fn from(e: AlgebraError) -> CryptoError {
        CryptoError::Algebra(e)
    }
}
