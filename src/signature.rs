/// Joins the values with `:` and returns the lowercase hex MD5 digest.
///
/// Order is significant: the gateway documents a fixed field order per
/// operation, and a reordered payload yields a different digest. No
/// validation happens here; callers pre-format amounts and ids.
pub fn calculate_signature<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let payload = parts
        .into_iter()
        .map(|part| part.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(":");
    hex::encode(md5::compute(payload.as_bytes()).0)
}

/// Case-insensitive digest comparison; the gateway may return uppercase hex.
pub fn signatures_match(received: &str, expected: &str) -> bool {
    received.eq_ignore_ascii_case(expected)
}
