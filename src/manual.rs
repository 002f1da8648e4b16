use std::path::Path;

/// User manual text, shown from the main menu
#[must_use]
pub fn manual_text(mapping_file: &Path) -> String {
    format!(
        "\
===== DOS Command Shell Manual =====

This shell simulates DOS commands by mapping them to equivalent native
commands. When you enter a DOS command like 'dir', the shell executes the
native equivalent 'ls'.

Mappings come from the file '{}'.
Format of the mapping file: <DOS command> = <native command>
Lines starting with '#' and lines without a '=' are ignored.
If the file is missing, a small built-in set of mappings is used instead.

Example commands:
  - dir      : Lists files and directories (maps to 'ls')
  - copy     : Copies files (maps to 'cp')
  - del      : Deletes files (maps to 'rm')
  - md       : Creates a directory (maps to 'mkdir')
  - cd       : Changes directory
  - cls      : Clears the screen (maps to 'clear')

Note: If a command is not found in the mapping file, an error message will
      be displayed. Some commands require specific numbers of arguments;
      an error is shown if too few or too many are provided.",
        mapping_file.display()
    )
}
