use std::fmt;

/// Writes lowercase hex; the alternate form (`{:#x}`) adds a `0x` prefix.
pub(crate) fn fmt_lower_hex_bytes(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if f.alternate() {
        f.write_str("0x")?;
    }
    for b in bytes {
        write!(f, "{:02x}", b)?;
    }
    Ok(())
}
