use std::fmt::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Cache file name for `path`.
///
/// Printable ASCII other than `/` is kept; every other byte (`/`, space,
/// control characters, anything above 0x7E) becomes `%XX` in uppercase hex.
/// The result is a single path component with no NUL or whitespace.
pub fn encode(path: &Path) -> String {
    encode_bytes(path.as_os_str().as_bytes())
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if b == b'/' || b <= b' ' || b > 0x7E {
            let _ = write!(out, "%{:02X}", b);
        } else {
            out.push(b as char);
        }
    }
    out
}
