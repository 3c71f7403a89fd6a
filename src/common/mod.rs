/// Result of parsing a chunk of buffered bytes.
#[derive(Debug)]
pub enum ParseResult<T, E> {
    /// Bytes is not sufficient for parsing, more IO read is required.
    Pending,
    /// Parse success.
    Ok(T),
    /// Parse failed.
    Err(E),
}

/// Returns `true` if byte is allowed in a [token].
///
/// [token]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-tokens>
pub const fn is_tchar(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
            | b'^' | b'_' | b'`' | b'|' | b'~'
            | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z'
    )
}
