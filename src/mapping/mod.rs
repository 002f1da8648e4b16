//! DOS-to-native command mapping table
//!
//! Loads translations from a plain-text mapping file, one `<dos> = <native>`
//! pair per line. A missing or unreadable file falls back to a built-in
//! default table so the shell always has something to work with.
//!
//! # File format
//! - one mapping per line: `<dos_command> = <native_command>`
//! - both sides are trimmed of surrounding whitespace
//! - empty lines and lines starting with `#` are skipped
//! - lines without a `=` are skipped silently, keeping hand-edited files usable
//! - only the first `=` delimits; later ones belong to the native command

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::policy::{self, ArgLimit};

/// Hard cap on table size so a malformed source cannot grow it without bound
const MAX_ENTRIES: usize = 1000;

/// A single DOS-to-native command translation
///
/// Argument bounds are stamped from the argument policy when the entry is
/// created, so `min_args <= max_args` holds by construction.
#[derive(Debug, Clone)]
pub struct MappingEntry {
    pub dos_command: String,
    pub native_command: String,
    pub min_args: u32,
    pub max_args: ArgLimit,
}

impl MappingEntry {
    fn new(dos_command: String, native_command: String) -> Self {
        let (min_args, max_args) = policy::requirements(&dos_command);

        Self {
            dos_command,
            native_command,
            min_args,
            max_args,
        }
    }
}

/// Where the active mapping table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    MappingFile,
    BuiltinDefaults,
}

/// Ordered table of DOS-to-native command mappings
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    /// Parse a mapping definition text into a table
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();

        for line in text.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (dos, native) = match line.split_once('=') {
                Some(parts) => parts,
                None => {
                    debug!("Skipping mapping line without '=': {}", line);
                    continue;
                }
            };

            let dos = dos.trim();
            let native = native.trim();

            if dos.is_empty() {
                debug!("Skipping mapping line with empty DOS command");
                continue;
            }

            table.insert(dos, native);
        }

        table
    }

    /// Built-in default table used when no mapping file is available
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::default();

        for (dos, native) in [
            ("dir", "ls -la"),
            ("copy", "cp"),
            ("del", "rm"),
            ("md", "mkdir"),
            ("cd", "cd"),
            ("cls", "clear"),
            ("type", "cat"),
            ("move", "mv"),
            ("echo", "echo"),
        ] {
            table.insert(dos, native);
        }

        table
    }

    /// Load the mapping table from a file
    ///
    /// A missing or unreadable file is not an error: the built-in defaults
    /// are returned instead, with `TableSource::BuiltinDefaults` so callers
    /// can tell the user.
    pub fn load(path: &Path) -> (Self, TableSource) {
        match fs::read_to_string(path) {
            Ok(text) => {
                let table = Self::parse(&text);
                debug!("Loaded {} mappings from {}", table.len(), path.display());
                (table, TableSource::MappingFile)
            }
            Err(e) => {
                warn!(
                    "Mapping file {} unavailable ({}), using built-in defaults",
                    path.display(),
                    e
                );
                (Self::builtin(), TableSource::BuiltinDefaults)
            }
        }
    }

    /// Look up an entry by DOS command name, case-insensitively
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MappingEntry> {
        self.entries
            .iter()
            .find(|entry| entry.dos_command.eq_ignore_ascii_case(name))
    }

    /// Number of entries in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Last occurrence wins: a repeated key replaces the earlier entry in
    // place, keeping its position in table order. The cap applies to new
    // keys only.
    fn insert(&mut self, dos: &str, native: &str) {
        let existing = self
            .entries
            .iter()
            .position(|entry| entry.dos_command.eq_ignore_ascii_case(dos));

        if let Some(index) = existing {
            self.entries[index] = MappingEntry::new(dos.to_string(), native.to_string());
            return;
        }

        if self.entries.len() >= MAX_ENTRIES {
            debug!("Mapping table full, dropping entry for '{}'", dos);
            return;
        }

        self.entries
            .push(MappingEntry::new(dos.to_string(), native.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_line() {
        let table = MappingTable::parse("dir = ls");

        assert_eq!(table.len(), 1);
        let entry = table.find("dir").unwrap();
        assert_eq!(entry.dos_command, "dir");
        assert_eq!(entry.native_command, "ls");
    }

    #[test]
    fn test_parse_trims_both_sides() {
        let table = MappingTable::parse("  copy\t =   cp  ");

        let entry = table.find("copy").unwrap();
        assert_eq!(entry.dos_command, "copy");
        assert_eq!(entry.native_command, "cp");
    }

    #[test]
    fn test_parse_skips_comments_blanks_and_malformed_lines() {
        let table = MappingTable::parse("# comment\n\nbadline\ndir = ls\n");

        assert_eq!(table.len(), 1);
        assert_eq!(table.find("dir").unwrap().native_command, "ls");
    }

    #[test]
    fn test_parse_skips_indented_comment() {
        let table = MappingTable::parse("   # indented comment\ndir = ls");

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parse_splits_on_first_equals_only() {
        let table = MappingTable::parse("set = export PATH=/usr/bin");

        let entry = table.find("set").unwrap();
        assert_eq!(entry.native_command, "export PATH=/usr/bin");
    }

    #[test]
    fn test_parse_skips_empty_dos_side() {
        let table = MappingTable::parse(" = ls\ndir = ls");

        assert_eq!(table.len(), 1);
        assert_eq!(table.find("dir").unwrap().native_command, "ls");
    }

    #[test]
    fn test_last_occurrence_wins() {
        let table = MappingTable::parse("md = mkdir\nmd = mkdir -p");

        assert_eq!(table.len(), 1);
        assert_eq!(table.find("md").unwrap().native_command, "mkdir -p");
    }

    #[test]
    fn test_last_occurrence_wins_across_case() {
        let table = MappingTable::parse("DIR = dir\ndir = ls");

        assert_eq!(table.len(), 1);
        assert_eq!(table.find("dir").unwrap().native_command, "ls");
        assert_eq!(table.find("DIR").unwrap().native_command, "ls");
    }

    #[test]
    fn test_overwrite_preserves_table_position() {
        let table = MappingTable::parse("md = mkdir\ncls = clear\nmd = mkdir -p");

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries[0].dos_command, "md");
        assert_eq!(table.entries[0].native_command, "mkdir -p");
        assert_eq!(table.entries[1].dos_command, "cls");
    }

    #[test]
    fn test_entry_cap() {
        let mut text = String::new();
        for i in 0..1200 {
            text.push_str(&format!("cmd{} = native{}\n", i, i));
        }

        let table = MappingTable::parse(&text);
        assert_eq!(table.len(), MAX_ENTRIES);
        assert!(table.find("cmd0").is_some());
        assert!(table.find("cmd1199").is_none());
    }

    #[test]
    fn test_full_table_still_overwrites_existing_keys() {
        let mut text = String::new();
        for i in 0..1000 {
            text.push_str(&format!("cmd{} = native{}\n", i, i));
        }
        text.push_str("cmd0 = replaced\n");

        let table = MappingTable::parse(&text);
        assert_eq!(table.len(), MAX_ENTRIES);
        assert_eq!(table.find("cmd0").unwrap().native_command, "replaced");
    }

    #[test]
    fn test_builtin_covers_common_commands() {
        let table = MappingTable::builtin();

        for dos in ["dir", "copy", "del", "md", "cd", "cls", "type"] {
            assert!(table.find(dos).is_some(), "missing builtin for {}", dos);
        }
        assert_eq!(table.find("dir").unwrap().native_command, "ls -la");
    }

    #[test]
    fn test_bounds_stamped_from_policy() {
        let table = MappingTable::parse("copy = cp\nblah = blah");

        let copy = table.find("copy").unwrap();
        assert_eq!(copy.min_args, 2);
        assert_eq!(copy.max_args, ArgLimit::Bounded(2));

        let blah = table.find("blah").unwrap();
        assert_eq!(blah.min_args, 0);
        assert_eq!(blah.max_args, ArgLimit::Unbounded);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let table = MappingTable::parse("dir = ls");

        assert!(table.find("DIR").is_some());
        assert!(table.find("Dir").is_some());
        assert!(table.find("ls").is_none());
    }

    #[test]
    fn test_find_empty_name_misses() {
        let table = MappingTable::builtin();
        assert!(table.find("").is_none());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_builtin() {
        let (table, source) = MappingTable::load(Path::new("/nonexistent/mapping.txt"));

        assert_eq!(source, TableSource::BuiltinDefaults);
        assert!(!table.is_empty());
        assert!(table.find("dir").is_some());
    }
}
