//! Base64 alphabet normalization.

/// Rewrites URL-safe base64 (`-`, `_`, no padding) into the standard
/// alphabet (`+`, `/`) and pads it to a multiple of 4 with `=`.
///
/// The padding count is derived from the input length as given, so input
/// that already carries padding is left as is.
pub fn url_safe_to_standard(code: &str) -> String {
    let pad = (4 - code.len() % 4) % 4;
    let mut standard = String::with_capacity(code.len() + pad);
    standard.extend(code.chars().map(|c| match c {
        '-' => '+',
        '_' => '/',
        other => other,
    }));
    standard.extend(std::iter::repeat('=').take(pad));
    standard
}
