//! Registry of known `Defaults` keys and their value constraints.

const UNKNOWN_DESCRIPTION: &str = "Custom / undocumented key.";

/// Semantic type of a Defaults value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Flag: `""`, `"true"` or `"false"`.
    Bool,
    Enum { choices: &'static [&'static str] },
    Int { min: i64, max: i64 },
    /// Colon-separated directory list, see [`super::path_list`].
    Path,
    Text,
}

impl KeyKind {
    pub fn name(&self) -> &'static str {
        match self {
            KeyKind::Bool => "bool",
            KeyKind::Enum { .. } => "enum",
            KeyKind::Int { .. } => "int",
            KeyKind::Path => "path",
            KeyKind::Text => "text",
        }
    }
}

/// Description and value kind for one Defaults key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultsKeyMeta {
    pub description: &'static str,
    pub kind: KeyKind,
}

const fn flag(description: &'static str) -> DefaultsKeyMeta {
    DefaultsKeyMeta {
        description,
        kind: KeyKind::Bool,
    }
}

const REGISTRY: &[(&str, DefaultsKeyMeta)] = &[
    (
        "env_reset",
        flag("Reset most environment variables to a safe default set before running the command."),
    ),
    (
        "mail_badpass",
        flag("Send mail to the mailto user if an incorrect password is entered."),
    ),
    (
        "secure_path",
        DefaultsKeyMeta {
            description: "Overrides the user's PATH when a command is run via sudo. \
                          Separate directories with ':' (colon).",
            kind: KeyKind::Path,
        },
    ),
    (
        "use_pty",
        flag("Run the command in a new pseudo-terminal (recommended for logging/forensics)."),
    ),
    (
        "lecture",
        DefaultsKeyMeta {
            description: "Whether sudo should lecture the user about its dangers.",
            kind: KeyKind::Enum {
                choices: &["always", "once", "never"],
            },
        },
    ),
    (
        "timestamp_timeout",
        DefaultsKeyMeta {
            description: "Minutes before sudo asks for the password again. -1 means never time out.",
            kind: KeyKind::Int { min: -1, max: 999 },
        },
    ),
    (
        "authenticate",
        flag("Require users to authenticate before running commands."),
    ),
    (
        "tty_tickets",
        flag("Keep a separate authentication record per terminal."),
    ),
    (
        "set_home",
        flag("Set HOME to the target user's home directory when running a shell with -s."),
    ),
    (
        "requiretty",
        flag("Only allow sudo from a real terminal session."),
    ),
    (
        "visiblepw",
        flag("Allow password prompts even when the terminal does not hide input."),
    ),
    ("rootpw", flag("Prompt for the root password instead of the user's.")),
    (
        "runaspw",
        flag("Prompt for the password of the runas_default user."),
    ),
    (
        "targetpw",
        flag("Prompt for the password of the target user."),
    ),
    ("log_input", flag("Log all terminal input of the command.")),
    ("log_output", flag("Log all terminal output of the command.")),
];

/// Look up a key's metadata. Unknown keys are free text.
pub fn lookup(key: &str) -> DefaultsKeyMeta {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, meta)| *meta)
        .unwrap_or(DefaultsKeyMeta {
            description: UNKNOWN_DESCRIPTION,
            kind: KeyKind::Text,
        })
}
