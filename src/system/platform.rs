use std::path::Path;

/// Mount point of the filesystem that holds the operating system.
pub fn root_mount_point() -> &'static Path {
    #[cfg(target_os = "windows")]
    {
        Path::new("C:\\")
    }
    #[cfg(not(target_os = "windows"))]
    {
        Path::new("/")
    }
}

/// Kernel name the way `uname -s` reports it.
pub fn kernel_name() -> &'static str {
    match std::env::consts::OS {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        other => other,
    }
}

/// Raw filesystem counters in bytes. `free` still counts blocks reserved for
/// the superuser; `available` is what an unprivileged user may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsUsage {
    pub total: u64,
    pub free: u64,
    pub available: u64,
}

#[cfg(unix)]
// statvfs field widths differ between platforms.
#[allow(clippy::useless_conversion)]
pub fn filesystem_usage(path: &Path) -> Option<FsUsage> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes()).ok()?;
    let mut stat = MaybeUninit::<libc::statvfs>::uninit();
    // SAFETY: `c_path` is NUL-terminated and `stat` is only read after
    // statvfs reports that it filled the buffer.
    let stat = unsafe {
        if libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) != 0 {
            return None;
        }
        stat.assume_init()
    };

    let fragment = u64::from(stat.f_frsize);
    Some(FsUsage {
        total: u64::from(stat.f_blocks).saturating_mul(fragment),
        free: u64::from(stat.f_bfree).saturating_mul(fragment),
        available: u64::from(stat.f_bavail).saturating_mul(fragment),
    })
}

#[cfg(not(unix))]
pub fn filesystem_usage(_path: &Path) -> Option<FsUsage> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_mount_point_is_absolute() {
        assert!(root_mount_point().is_absolute() || root_mount_point().has_root());
    }

    #[test]
    fn kernel_name_is_never_empty() {
        assert!(!kernel_name().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn kernel_name_on_linux_is_not_the_distribution() {
        assert_eq!(kernel_name(), "Linux");
    }

    #[cfg(unix)]
    #[test]
    fn root_filesystem_counters_are_ordered() {
        let usage = filesystem_usage(root_mount_point()).unwrap();
        assert!(usage.total > 0);
        assert!(usage.free <= usage.total);
        assert!(usage.available <= usage.free);
    }

    #[cfg(unix)]
    #[test]
    fn missing_path_has_no_usage() {
        assert!(filesystem_usage(Path::new("/definitely/not/a/mount/point")).is_none());
    }
}
