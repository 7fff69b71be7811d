use std::io;
use std::os::windows::fs::{symlink_dir, symlink_file};
use std::path::Path;

/// Windows needs to know up front whether the link points at a directory. Relative targets are
/// resolved from the directory containing the link, like the OS does when following it.
pub(crate) fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    let resolved = match link.parent() {
        Some(parent) => parent.join(target),
        None => target.to_path_buf(),
    };

    if resolved.is_dir() {
        symlink_dir(target, link)
    } else {
        symlink_file(target, link)
    }
}
