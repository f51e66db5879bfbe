use anyhow::Result;

/// The niceness increment applied with `--nice`.
pub const NICE_VALUE: i32 = 10;

/// Lowers the scheduling priority of the process.
#[cfg(target_os = "linux")]
pub fn lower_priority() -> Result<()> {
    use std::io;

    use anyhow::Context;
    use tracing::info;

    // nice can legitimately return -1, only errno tells failures apart
    // SAFETY: __errno_location always points to the errno of the calling thread.
    let priority = unsafe {
        *libc::__errno_location() = 0;
        libc::nice(NICE_VALUE)
    };

    if priority == -1 {
        let err = io::Error::last_os_error();
        if err.raw_os_error() != Some(0) {
            return Err(err).context(format!("Error applying nice({NICE_VALUE})"));
        }
    }

    info!("applied nice({NICE_VALUE}), new priority: {priority}");

    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn lower_priority() -> Result<()> {
    tracing::warn!("nice({NICE_VALUE}) is not supported on this platform, priority unchanged");

    Ok(())
}
