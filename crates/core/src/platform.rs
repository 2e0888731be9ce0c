//! Drive enumeration for the `drives` operation
//!
//! On Windows every existing drive letter is a drive. Elsewhere the mount
//! table is read and only device-backed mounts (plus `/`) are kept.

use std::path::PathBuf;

/// A mounted volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    /// Where the volume is reachable (`/`, `/home`, `C:\`)
    pub mount_point: PathBuf,
    /// Filesystem type when the platform reports one
    pub fs_type: Option<String>,
    /// Capacity in bytes
    pub total_bytes: Option<u64>,
    /// Bytes available to unprivileged users
    pub free_bytes: Option<u64>,
}

impl Drive {
    fn new(mount_point: PathBuf, fs_type: Option<String>) -> Self {
        let (total_bytes, free_bytes) = space(&mount_point).unzip();
        Self {
            mount_point,
            fs_type,
            total_bytes,
            free_bytes,
        }
    }
}

/// Enumerate the volumes visible to this process
///
/// Never fails: a platform without a mount table yields just the root.
pub fn drives() -> Vec<Drive> {
    #[cfg(windows)]
    {
        ('A'..='Z')
            .map(|letter| PathBuf::from(format!("{letter}:\\")))
            .filter(|root| root.exists())
            .map(|root| Drive::new(root, None))
            .collect()
    }

    #[cfg(not(windows))]
    {
        let mounts = std::fs::read_to_string("/proc/mounts")
            .map(|table| parse_mount_table(&table))
            .unwrap_or_default();

        if mounts.is_empty() {
            return vec![Drive::new(PathBuf::from("/"), None)];
        }

        mounts
            .into_iter()
            .map(|(mount_point, fs_type)| Drive::new(mount_point, Some(fs_type)))
            .collect()
    }
}

/// Extract device-backed mounts (and `/`) from a `/proc/mounts` style table
#[cfg_attr(windows, allow(dead_code))]
fn parse_mount_table(table: &str) -> Vec<(PathBuf, String)> {
    let mut mounts: Vec<(PathBuf, String)> = Vec::new();
    for line in table.lines() {
        let mut fields = line.split_whitespace();
        let (Some(device), Some(mount_point), Some(fs_type)) =
            (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };

        let mount_point = PathBuf::from(unescape_mount_field(mount_point));
        let is_root = mount_point.as_os_str() == "/";
        if !(device.starts_with('/') || is_root) {
            continue;
        }
        if mounts.iter().any(|(seen, _)| *seen == mount_point) {
            continue;
        }
        mounts.push((mount_point, fs_type.to_string()));
    }
    mounts
}

/// Undo the octal escaping (`\040` for space) used in mount tables
#[cfg_attr(windows, allow(dead_code))]
fn unescape_mount_field(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\'
            && i + 3 < bytes.len()
            && let Ok(digits) = std::str::from_utf8(&bytes[i + 1..i + 4])
            && let Ok(code) = u8::from_str_radix(digits, 8)
        {
            out.push(code);
            i += 4;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(unix)]
fn space(mount_point: &std::path::Path) -> Option<(u64, u64)> {
    let stat = rustix::fs::statvfs(mount_point).ok()?;
    let total = stat.f_blocks.saturating_mul(stat.f_frsize);
    let free = stat.f_bavail.saturating_mul(stat.f_frsize);
    Some((total, free))
}

#[cfg(not(unix))]
fn space(_mount_point: &std::path::Path) -> Option<(u64, u64)> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mount_table_keeps_device_mounts() {
        let table = "\
sysfs /sys sysfs rw,nosuid 0 0
/dev/sda1 / ext4 rw,relatime 0 0
proc /proc proc rw 0 0
/dev/sda2 /home ext4 rw 0 0
/dev/sdb1 /mnt/usb\\040stick vfat rw 0 0
/dev/sda2 /home ext4 rw 0 0
";
        let mounts = parse_mount_table(table);
        assert_eq!(
            mounts,
            vec![
                (PathBuf::from("/"), "ext4".to_string()),
                (PathBuf::from("/home"), "ext4".to_string()),
                (PathBuf::from("/mnt/usb stick"), "vfat".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_mount_table_overlay_root() {
        let mounts = parse_mount_table("overlay / overlay rw 0 0\n");
        assert_eq!(mounts, vec![(PathBuf::from("/"), "overlay".to_string())]);
    }

    #[test]
    fn test_unescape_leaves_plain_text() {
        assert_eq!(unescape_mount_field("/data"), "/data");
        assert_eq!(unescape_mount_field("a\\134b"), "a\\b");
        assert_eq!(unescape_mount_field("trail\\"), "trail\\");
    }

    #[test]
    fn test_drives_never_empty() {
        assert!(!drives().is_empty());
    }
}
