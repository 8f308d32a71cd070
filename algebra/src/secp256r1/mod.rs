/// The number of bytes for a scalar value over secp256r1
pub const SECP256R1_SCALAR_LEN: usize = 32;

mod field;
pub use field::*;

mod g1;
pub use g1::*;
