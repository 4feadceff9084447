//! Canonical UUID layout check for report identifiers.

/// Hyphen positions in the canonical 8-4-4-4-12 layout.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];
const CANONICAL_LEN: usize = 36;

/// True if `s` is exactly a hyphenated 8-4-4-4-12 hexadecimal UUID
/// (either case). Braced, URN and unhyphenated forms are rejected.
pub fn is_canonical_uuid(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != CANONICAL_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| {
        if HYPHENS.contains(&i) {
            *b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}
