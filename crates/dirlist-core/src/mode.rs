//! Permission/mode string rendering.

use std::fs::Metadata;

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;
const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Render raw Unix `st_mode` bits as a mode string such as `drwxr-xr-x`.
///
/// Type letters come first, in the fixed order `d L D p S u g c t`; a
/// lone `-` stands in when none apply. Block devices show as `D`,
/// character devices as `Dc`.
pub fn format_mode(mode: u32) -> String {
    let mut out = String::with_capacity(12);

    let file_type = mode & S_IFMT;
    let flags = [
        (file_type == S_IFDIR, 'd'),
        (file_type == S_IFLNK, 'L'),
        (file_type == S_IFBLK || file_type == S_IFCHR, 'D'),
        (file_type == S_IFIFO, 'p'),
        (file_type == S_IFSOCK, 'S'),
        (mode & S_ISUID != 0, 'u'),
        (mode & S_ISGID != 0, 'g'),
        (file_type == S_IFCHR, 'c'),
        (mode & S_ISVTX != 0, 't'),
    ];
    for (set, letter) in flags {
        if set {
            out.push(letter);
        }
    }
    if out.is_empty() {
        out.push('-');
    }

    const RWX: &[u8; 9] = b"rwxrwxrwx";
    for (i, c) in RWX.iter().enumerate() {
        if mode & (1 << (8 - i)) != 0 {
            out.push(*c as char);
        } else {
            out.push('-');
        }
    }

    out
}

/// Render the mode string for a piece of metadata.
#[cfg(unix)]
pub fn mode_string(metadata: &Metadata) -> String {
    use std::os::unix::fs::MetadataExt;
    format_mode(metadata.mode())
}

#[cfg(not(unix))]
pub fn mode_string(metadata: &Metadata) -> String {
    // No permission bits here; approximate from type and read-only flag
    let mut mode = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
    if metadata.is_dir() {
        mode |= S_IFDIR | 0o111;
    } else if metadata.file_type().is_symlink() {
        mode |= S_IFLNK;
    }
    format_mode(mode)
}
