use jfs::Store;
use std::{fs, io, path::Path};

pub fn open_store<P: AsRef<Path>>(directory: P) -> io::Result<Store> {
    fs::create_dir_all(&directory)?;
    Store::new(directory)
}

/// Account ids end up as file names, so anything that could
/// escape the store directory never matches a record.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.starts_with('.') && !key.contains(['/', '\\'])
}
