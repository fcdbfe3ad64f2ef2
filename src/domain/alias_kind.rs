/// The four alias families a sudoers file can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AliasKind {
    User,
    Runas,
    Host,
    Cmnd,
}

impl AliasKind {
    pub const ALL: [AliasKind; 4] = [
        AliasKind::User,
        AliasKind::Runas,
        AliasKind::Host,
        AliasKind::Cmnd,
    ];

    /// Parse the bare kind name (`"User"`, not `"User_Alias"`).
    pub fn from_name(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AliasKind::User => "User",
            AliasKind::Runas => "Runas",
            AliasKind::Host => "Host",
            AliasKind::Cmnd => "Cmnd",
        }
    }

    /// The declaration keyword, e.g. `User_Alias`.
    pub fn keyword(&self) -> &'static str {
        match self {
            AliasKind::User => "User_Alias",
            AliasKind::Runas => "Runas_Alias",
            AliasKind::Host => "Host_Alias",
            AliasKind::Cmnd => "Cmnd_Alias",
        }
    }

    /// Inverse of [`AliasKind::keyword`].
    pub fn from_keyword(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == raw)
    }
}

impl std::fmt::Display for AliasKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
