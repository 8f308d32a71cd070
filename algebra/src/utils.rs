use crate::prelude::*;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

#[cfg(test)]
mod test {
    use ark_std::vec;

    #[test]
    fn test_b64_roundtrip_without_padding() {
        let data = vec![1u8, 2, 3, 4, 5];
        let enc = super::b64enc(&data);
        assert_eq!(super::b64dec(&enc).unwrap(), data);
        assert_eq!(super::b64dec(enc.trim_end_matches('=')).unwrap(), data);
        assert!(super::b64dec("*&^").is_err());
    }
}
