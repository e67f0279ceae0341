// file_info.rs — Directory entry records
//
// One DirectoryEntry per member reported by the directory scan.  Metadata that
// only some scan modes gather (size, modification time) is optional.

use std::ffi::OsString;
use std::fs::FileType;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::FileTypeExt;
use std::time::SystemTime;

/// Marker that starts the name of a hidden entry
pub const HIDDEN_MARKER: u8 = b'.';

// ── Entry type ────────────────────────────────────────────────────────────────

/// File type as reported by the directory scan (the dirent type tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Directory,
    SymLink,
    Socket,
    Fifo,
    Regular,
    BlockDevice,
    CharDevice,
    Unknown,
}

impl From<FileType> for EntryType {
    fn from(ft: FileType) -> Self {
        if ft.is_dir() {
            EntryType::Directory
        } else if ft.is_symlink() {
            EntryType::SymLink
        } else if ft.is_file() {
            EntryType::Regular
        } else if ft.is_socket() {
            EntryType::Socket
        } else if ft.is_fifo() {
            EntryType::Fifo
        } else if ft.is_block_device() {
            EntryType::BlockDevice
        } else if ft.is_char_device() {
            EntryType::CharDevice
        } else {
            EntryType::Unknown
        }
    }
}

// ── Directory entry ───────────────────────────────────────────────────────────

/// Holds everything known about a single member of the listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name:          OsString,
    pub entry_type:    EntryType,
    pub size:          Option<u64>,
    pub modified_time: Option<SystemTime>,
}

impl DirectoryEntry {
    /// Entry with no metadata beyond its name and type.
    pub fn new(name: impl Into<OsString>, entry_type: EntryType) -> Self {
        DirectoryEntry {
            name: name.into(),
            entry_type,
            size: None,
            modified_time: None,
        }
    }

    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    pub fn is_hidden(&self) -> bool {
        self.name_bytes().first() == Some(&HIDDEN_MARKER)
    }
}
