// src/script/marker.rs

use uuid::Uuid;

/// Per-run sentinel printed in front of the status payload.
///
/// The token embeds a random UUID so output from the commands themselves is
/// vanishingly unlikely to contain it. A command that does print it verbatim
/// will still confuse the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    head: String,
    tail: String,
}

impl Marker {
    pub fn random() -> Self {
        Self::from_token(&Uuid::new_v4().simple().to_string())
    }

    /// Build a marker around a fixed token. Useful for tests.
    pub fn from_token(token: &str) -> Self {
        let mid = token.chars().count() / 2;
        let head: String = token.chars().take(mid).collect();
        let tail: String = token.chars().skip(mid).collect();
        Self {
            head: format!("__SHELLRUNNER_{head}"),
            tail: format!("{tail}__"),
        }
    }

    /// The full sentinel as it appears in the output.
    pub fn token(&self) -> String {
        format!("{}{}", self.head, self.tail)
    }

    /// Shell commands that print the marker line followed by `args`, each
    /// argument preceded by a space.
    ///
    /// The two halves are passed as separate `printf` arguments, so the
    /// script text never contains the sentinel in one piece. Shells that echo
    /// the offending source line in an error message can't fake a status
    /// line that way.
    pub fn print_command(&self, args: &str) -> String {
        format!(
            r#"printf '\n%s%s:' '{}' '{}'; printf ' %s' {}; printf '\n'"#,
            self.head, self.tail, args
        )
    }
}
