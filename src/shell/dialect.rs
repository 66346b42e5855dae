// src/shell/dialect.rs

use std::path::Path;

/// Whether a shell can report the status of every pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// The shell exposes a per-stage status array (`PIPESTATUS`,
    /// `pipestatus`).
    Pipestatus,
    /// Only the exit status of the last pipeline stage (`$?`) is available.
    PosixMinimal,
}

/// Shell families with distinct status syntax.
///
/// New shells are supported by extending [`ShellKind::from_name`]; anything
/// unknown is treated as a plain POSIX shell so we never promise per-stage
/// statuses the shell can't deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellKind {
    Bash,
    Zsh,
    Fish,
    Posix,
}

/// Basenames we accept as "a shell" when inspecting the parent process.
pub const KNOWN_SHELLS: &[&str] = &["bash", "zsh", "fish", "sh", "dash", "ash", "ksh", "mksh"];

impl ShellKind {
    /// Classify a shell by its basename (`bash`, `zsh`, ...).
    ///
    /// A leading `-` (login shells put it in argv0) is ignored.
    pub fn from_name(name: &str) -> Self {
        match name.trim_start_matches('-') {
            "bash" => ShellKind::Bash,
            "zsh" => ShellKind::Zsh,
            "fish" => ShellKind::Fish,
            _ => ShellKind::Posix,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(Self::from_name)
            .unwrap_or(ShellKind::Posix)
    }

    pub fn dialect(self) -> Dialect {
        match self {
            ShellKind::Bash | ShellKind::Zsh | ShellKind::Fish => Dialect::Pipestatus,
            ShellKind::Posix => Dialect::PosixMinimal,
        }
    }

    /// Statement saving the previous pipeline's statuses into `var`.
    ///
    /// Must run directly after the command whose statuses it reads.
    pub fn capture_statuses(self, var: &str) -> String {
        match self {
            ShellKind::Bash => format!(r#"{var}=("${{PIPESTATUS[@]}}")"#),
            ShellKind::Zsh => format!(r#"{var}=("${{pipestatus[@]}}")"#),
            ShellKind::Fish => format!("set {var} $pipestatus"),
            ShellKind::Posix => format!("{var}=$?"),
        }
    }

    /// Saved statuses as one word, for pattern matching. The separator
    /// depends on `IFS`, so only test this for nonzero digits.
    pub fn joined_statuses(self, var: &str) -> String {
        match self {
            ShellKind::Bash | ShellKind::Zsh => format!(r#""${{{var}[*]}}""#),
            ShellKind::Fish | ShellKind::Posix => format!(r#""${var}""#),
        }
    }

    /// Saved statuses as one argument per stage, independent of `IFS`.
    pub fn status_args(self, var: &str) -> String {
        match self {
            ShellKind::Bash | ShellKind::Zsh => format!(r#""${{{var}[@]}}""#),
            ShellKind::Fish => format!("${var}"),
            ShellKind::Posix => format!(r#""${var}""#),
        }
    }

    /// Whether the shell speaks fish syntax rather than POSIX syntax.
    pub fn is_fish(self) -> bool {
        matches!(self, ShellKind::Fish)
    }
}

/// True when `path`'s basename is one of [`KNOWN_SHELLS`].
pub fn is_known_shell(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| KNOWN_SHELLS.contains(&n.trim_start_matches('-')))
        .unwrap_or(false)
}
