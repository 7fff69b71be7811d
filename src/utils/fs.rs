use crate::native;
use crate::prelude::*;
use std::fs;
use std::io;
use std::path::Path;

/// Removes `dir` and everything inside it. A directory that doesn't exist is left alone.
pub(crate) fn remove_dir_all(dir: &Path) -> Fallible<()> {
    if fs::symlink_metadata(dir).is_err() {
        return Ok(());
    }

    match ::remove_dir_all::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err)
            .with_context(|| format!("unable to remove directory: {}", dir.display())),
    }
}

/// Wipes `dir` and creates it again, empty. The parent must already exist.
pub(crate) fn clean_mkdir(dir: &Path) -> Fallible<()> {
    remove_dir_all(dir)?;
    fs::create_dir(dir)
        .with_context(|| format!("unable to create directory: {}", dir.display()))?;
    debug!("created empty directory {}", dir.display());
    Ok(())
}

pub(crate) fn symlink(target: &Path, link: &Path) -> Fallible<()> {
    native::symlink(target, link).with_context(|| {
        format!(
            "unable to create symlink {} -> {}",
            link.display(),
            target.display()
        )
    })
}
