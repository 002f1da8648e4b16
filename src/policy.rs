use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Upper bound on the number of arguments a command accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgLimit {
    Bounded(u32),
    Unbounded,
}

impl ArgLimit {
    /// Check whether an argument count falls within this limit
    #[must_use]
    pub fn allows(self, count: u32) -> bool {
        match self {
            ArgLimit::Bounded(max) => count <= max,
            ArgLimit::Unbounded => true,
        }
    }
}

// Per-command argument policy, keyed by lowercase DOS command name
static ARG_REQUIREMENTS: Lazy<HashMap<&'static str, (u32, ArgLimit)>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Source and destination, nothing else
    m.insert("copy", (2, ArgLimit::Bounded(2)));
    m.insert("xcopy", (2, ArgLimit::Bounded(2)));
    m.insert("move", (2, ArgLimit::Bounded(2)));
    m.insert("rename", (2, ArgLimit::Bounded(2)));

    // At least one operand
    m.insert("type", (1, ArgLimit::Unbounded));
    m.insert("del", (1, ArgLimit::Unbounded));
    m.insert("erase", (1, ArgLimit::Unbounded));
    m.insert("rmdir", (1, ArgLimit::Unbounded));
    m.insert("rd", (1, ArgLimit::Unbounded));
    m.insert("md", (1, ArgLimit::Unbounded));
    m.insert("taskkill", (1, ArgLimit::Unbounded));
    m.insert("ping", (1, ArgLimit::Unbounded));
    m.insert("echo", (1, ArgLimit::Unbounded));

    // Search string plus at least one file
    m.insert("find", (2, ArgLimit::Unbounded));

    // Fine with no arguments at all
    m.insert("dir", (0, ArgLimit::Unbounded));
    m.insert("cls", (0, ArgLimit::Unbounded));
    m.insert("ver", (0, ArgLimit::Unbounded));
    m.insert("date", (0, ArgLimit::Unbounded));
    m.insert("time", (0, ArgLimit::Unbounded));
    m.insert("ipconfig", (0, ArgLimit::Unbounded));
    m.insert("netstat", (0, ArgLimit::Unbounded));
    m.insert("tasklist", (0, ArgLimit::Unbounded));

    m
});

/// Minimum and maximum argument counts accepted by a DOS command.
///
/// Lookup is case-insensitive. Commands not in the table get the permissive
/// default `(0, Unbounded)` — rejecting unknown commands is the mapping
/// table's job, not the policy's.
#[must_use]
pub fn requirements(command: &str) -> (u32, ArgLimit) {
    ARG_REQUIREMENTS
        .get(command.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or((0, ArgLimit::Unbounded))
}
