//! Referral code generation: `LUX` followed by 8 upper-case hex digits.

use rand::Rng;

const PREFIX: &str = "LUX";

/// A fresh random referral code.
pub fn referral_code() -> String {
    referral_code_with(&mut rand::thread_rng())
}

pub fn referral_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}{:08X}", PREFIX, rng.gen::<u32>())
}

/// Whether `code` has the shape of a generated referral code.
pub fn is_referral_code(code: &str) -> bool {
    code.strip_prefix(PREFIX).is_some_and(|hex| {
        hex.len() == 8
            && hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_have_expected_shape() {
        for _ in 0..100 {
            let code = referral_code();
            assert_eq!(code.len(), 11);
            assert!(is_referral_code(&code), "{}", code);
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(!is_referral_code("LUX1234567"));
        assert!(!is_referral_code("LUX123456789"));
        assert!(!is_referral_code("LUXabcdef12"));
        assert!(!is_referral_code("ABC12345678"));
        assert!(!is_referral_code(""));
    }
}
