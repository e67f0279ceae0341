// results_displayer.rs — Single-line listing assembly
//
// Walks the sorted entries, drops hidden ones unless asked to show them, and
// appends each name (optionally wrapped in its category color) followed by a
// tab.  The executable check for regular files happens here, at output time,
// so it reflects the file's permissions as they are now.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tracing::debug;

use crate::ansi_codes::RESET_ALL;
use crate::color_table::{Category, ColorTable};
use crate::command_line::ProgramOptions;
use crate::file_info::{DirectoryEntry, EntryType};
use crate::output_buffer::OutputBuffer;

/// User-execute permission bit (S_IXUSR)
pub const USER_EXECUTE: u32 = 0o100;

const SEPARATOR: &[u8] = b"\t";





////////////////////////////////////////////////////////////////////////////////
//
//  assemble_listing
//
//  Build the tab-separated listing line for `entries`, which must already be
//  sorted.
//
////////////////////////////////////////////////////////////////////////////////

pub fn assemble_listing(entries: &[DirectoryEntry], options: &ProgramOptions, colors: &ColorTable) -> OutputBuffer {
    let mut buffer = OutputBuffer::new();
    let mut shown = 0usize;

    for entry in entries {
        if entry.is_hidden() && !options.show_hidden {
            continue;
        }

        let style = if options.colorize && colors.is_enabled() {
            category_for_entry(entry, &options.target_directory)
                .map(|category| colors.style(category))
                .unwrap_or("")
        } else {
            ""
        };

        buffer.push_str(style);
        buffer.append(entry.name_bytes());
        buffer.append(SEPARATOR);

        if !style.is_empty() {
            buffer.push_str(RESET_ALL);
        }

        shown += 1;
    }

    debug!(shown, total = entries.len(), bytes = buffer.len(), "listing assembled");

    buffer
}





////////////////////////////////////////////////////////////////////////////////
//
//  category_for_entry
//
//  Map an entry to its color category.  Regular files are only styled when
//  the user-execute bit is set; unknown types are never styled.
//
////////////////////////////////////////////////////////////////////////////////

fn category_for_entry(entry: &DirectoryEntry, dir_path: &Path) -> Option<Category> {
    match entry.entry_type {
        EntryType::Directory   => Some(Category::Directory),
        EntryType::SymLink     => Some(Category::SymLink),
        EntryType::Socket      => Some(Category::Socket),
        EntryType::Fifo        => Some(Category::Pipe),
        EntryType::BlockDevice => Some(Category::BlockDevice),
        EntryType::CharDevice  => Some(Category::CharDevice),
        EntryType::Regular     => is_user_executable(&dir_path.join(&entry.name)).then_some(Category::Executable),
        EntryType::Unknown     => None,
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  is_user_executable
//
//  stat() the file now.  A file that vanished since the scan is treated as
//  not executable.
//
////////////////////////////////////////////////////////////////////////////////

fn is_user_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|md| md.permissions().mode() & USER_EXECUTE != 0)
        .unwrap_or(false)
}
