/// The module for the Pedersen commitments to scalars and polynomials.
pub mod pedersen_comm;
