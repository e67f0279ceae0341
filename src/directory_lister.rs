// directory_lister.rs — Single-directory enumeration
//
// Core enumeration loop: open the directory, record each member's name and
// dirent type, and optionally its size and modification time.  No filtering
// beyond the dot-entry policy happens here.
//
// The listing itself only needs the defaults (TypeOnly, Both).  Status and
// the narrower dot-entry policies are library API for callers that want
// sizes and mtimes or the readdir-without-"." shape.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::ehm::AppError;
use crate::file_info::{DirectoryEntry, EntryType};





/// How much metadata to gather per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataMode {
    /// Name and type only; no extra syscalls beyond the scan itself.
    #[default]
    TypeOnly,
    /// Also size and modification time, via one lstat per entry.
    Status,
}

/// Which of the self/parent links to report.  `readdir` always yields both;
/// `std::fs::read_dir` yields neither, so they are synthesized here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotEntries {
    #[default]
    Both,
    ParentOnly,
    None,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    pub metadata:    MetadataMode,
    pub dot_entries: DotEntries,
}





////////////////////////////////////////////////////////////////////////////////
//
//  collect_entries
//
//  Enumerate every member of `dir_path`.  Order is whatever the filesystem
//  returns.  Failing to open the directory is fatal; so is an error partway
//  through, since a partial listing is never printed.
//
////////////////////////////////////////////////////////////////////////////////

pub fn collect_entries(dir_path: &Path, opts: &CollectOptions) -> Result<Vec<DirectoryEntry>, AppError> {
    let read_dir = fs::read_dir(dir_path).map_err(|source| AppError::DirectoryOpen {
        path: dir_path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();

    add_dot_entries(dir_path, opts, &mut entries);

    for item in read_dir {
        let dirent = item.map_err(|source| AppError::DirectoryRead {
            path: dir_path.to_path_buf(),
            source,
        })?;

        let entry_type = dirent
            .file_type()
            .map(EntryType::from)
            .unwrap_or(EntryType::Unknown);

        let mut entry = DirectoryEntry::new(dirent.file_name(), entry_type);

        if opts.metadata == MetadataMode::Status {
            // DirEntry::metadata does not follow symlinks
            if let Ok(md) = dirent.metadata() {
                entry.size = Some(md.len());
                entry.modified_time = md.modified().ok();
            }
        }

        trace!(name = ?entry.name, entry_type = ?entry.entry_type, "collected");
        entries.push(entry);
    }

    debug!(path = %dir_path.display(), count = entries.len(), "directory scanned");

    Ok(entries)
}





////////////////////////////////////////////////////////////////////////////////
//
//  add_dot_entries
//
//  Push the "." and ".." links according to the dot-entry policy.
//
////////////////////////////////////////////////////////////////////////////////

fn add_dot_entries(dir_path: &Path, opts: &CollectOptions, entries: &mut Vec<DirectoryEntry>) {
    let names: &[&str] = match opts.dot_entries {
        DotEntries::Both       => &[".", ".."],
        DotEntries::ParentOnly => &[".."],
        DotEntries::None       => &[],
    };

    for name in names {
        let mut entry = DirectoryEntry::new(*name, EntryType::Directory);

        if opts.metadata == MetadataMode::Status {
            if let Ok(md) = fs::symlink_metadata(dir_path.join(name)) {
                entry.size = Some(md.len());
                entry.modified_time = md.modified().ok();
            }
        }

        entries.push(entry);
    }
}
