//! Unit tests for [`openai_client::mask_token`].
//!
//! API keys are masked for logs as first 7 chars + `***` + last 4 chars.
//! Keys of 11 chars or fewer are fully masked.

use openai_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("a"), "***");
    assert_eq!(mask_token("sk-12345"), "***");
    assert_eq!(mask_token("sk-proj-123"), "***");
}

/// **Test: Long tokens show first 7 and last 4 characters.**
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("sk-proj-abcdefghijklmnop"), "sk-proj***mnop");
    assert_eq!(mask_token("sk-proj-xyzw"), "sk-proj***xyzw");
}

/// **Test: Multi-byte characters are counted as characters, not bytes.**
#[test]
fn mask_token_handles_non_ascii() {
    let masked = mask_token("ключ-секрет-значение");
    assert_eq!(masked, "ключ-се***ение");
}
