//! Listed entries and their formatting

use std::fmt;
use std::fs::Metadata;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    pub fn from_metadata(meta: &Metadata) -> Self {
        if meta.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        }
    }

    /// Single-letter tag used in text output.
    pub fn tag(self) -> char {
        match self {
            EntryKind::File => 'F',
            EntryKind::Dir => 'D',
        }
    }
}

/// One listed filesystem item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub permissions: String,
    pub size: u64,
    pub path: String,
}

impl Entry {
    pub fn new(kind: EntryKind, meta: &Metadata, path: String) -> Self {
        Self {
            kind,
            permissions: format_permissions(permission_bits(meta)),
            size: meta.len(),
            path,
        }
    }
}

/// `KIND<TAB>PERMS<TAB>SIZE<TAB>PATH`
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.kind.tag(),
            self.permissions,
            self.size,
            self.path
        )
    }
}

#[cfg(unix)]
fn permission_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

/// Render permission bits as `-rwxr-xr-x`. The leading slot is always `-`:
/// the kind is carried separately.
pub fn format_permissions(mode: u32) -> String {
    const FLAGS: [char; 3] = ['r', 'w', 'x'];

    let mut out = String::with_capacity(10);
    out.push('-');
    for shift in (0..9).rev() {
        if mode & (1 << shift) != 0 {
            out.push(FLAGS[(8 - shift) % 3]);
        } else {
            out.push('-');
        }
    }
    out
}

/// Join a child name onto the display path of its parent, dropping a leading
/// `./` so entries under the root `.` read `foo` rather than `./foo`.
pub fn join_display(parent: &str, name: &str) -> String {
    let joined = if parent.ends_with('/') {
        format!("{}{}", parent, name)
    } else {
        format!("{}/{}", parent, name)
    };
    match joined.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => joined,
    }
}
