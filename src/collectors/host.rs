use crate::error::{DfError, DfResult};

/// The machine's network host name (uname nodename).
pub fn hostname() -> DfResult<String> {
    let name = nix::unistd::gethostname().map_err(DfError::Hostname)?;
    Ok(name.to_string_lossy().into_owned())
}
