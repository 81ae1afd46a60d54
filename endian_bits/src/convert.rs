use crate::error::ErrorKind;

/// Verify that `width` bytes starting at `start` lie within `bytes`.
///
/// A start index at or past the end of the buffer is rejected even when the
/// remaining length would be irrelevant, except for zero-width ranges, which
/// may start right at the end.
pub(crate) fn check_range(bytes: &[u8], start: usize, width: usize) -> Result<(), ErrorKind> {
    let result = if start > bytes.len() || (start == bytes.len() && width != 0) {
        Err(ErrorKind::InvalidStartIndex)
    } else if start.checked_add(width).is_none_or(|end| end > bytes.len()) {
        Err(ErrorKind::InsufficientBytes)
    } else {
        Ok(())
    };
    #[cfg(feature = "tracing")]
    if let Err(kind) = &result {
        tracing::debug!(start, width, len = bytes.len(), "rejected byte range: {kind}");
    }
    result
}

/// Copy the bytes of a `Buffer` sized value starting at `start`.
pub(crate) fn extract<Buffer>(bytes: &[u8], start: usize) -> Result<Buffer, ErrorKind>
where
    Buffer: AsMut<[u8]> + Default,
{
    let mut buffer = Buffer::default();
    let width = buffer.as_mut().len();
    check_range(bytes, start, width)?;
    buffer.as_mut().copy_from_slice(&bytes[start..(start + width)]);
    Ok(buffer)
}

/// Copy the bytes of a `Buffer` sized value starting at `start` and reverse
/// their order.
pub(crate) fn extract_reversed<Buffer>(bytes: &[u8], start: usize) -> Result<Buffer, ErrorKind>
where
    Buffer: AsMut<[u8]> + Default,
{
    let mut buffer: Buffer = extract(bytes, start)?;
    buffer.as_mut().reverse();
    Ok(buffer)
}
