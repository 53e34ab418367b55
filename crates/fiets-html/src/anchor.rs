//! Anchor ids for chapter headings.

/// Whether `b` may appear in an anchor id as-is.
fn is_anchor_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Derive an HTML `id` / fragment from a heading title.
///
/// Works on the UTF-8 bytes of `title`. Bytes outside `[A-Za-z0-9_-]` are
/// replaced one for one: `+` becomes `p` (so `C++` stays recognisable as
/// `Cpp`), everything else becomes `-`. A multi-byte character therefore
/// yields one `-` per byte (`Ü` becomes `--`). Case and repeated dashes are
/// preserved, which makes the mapping idempotent.
///
/// # Examples
///
/// ```
/// use fiets_html::anchor_id;
///
/// assert_eq!(anchor_id("C++ Basics"), "Cpp-Basics");
/// assert_eq!(anchor_id("std::vector<T>"), "std--vector-T-");
/// assert_eq!(anchor_id("Über"), "--ber");
/// ```
#[must_use]
pub fn anchor_id(title: &str) -> String {
    title
        .bytes()
        .map(|b| match b {
            b if is_anchor_byte(b) => char::from(b),
            b'+' => 'p',
            _ => '-',
        })
        .collect()
}
