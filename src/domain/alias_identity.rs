use super::AliasKind;

/// The identity column of an alias row: `"<Kind>_Alias <Name>"`.
///
/// Rows carry the identity as free text because the user may edit it; this
/// type is the checked view of that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasIdentity {
    pub kind: AliasKind,
    pub name: String,
}

impl AliasIdentity {
    pub fn new(kind: AliasKind, name: &str) -> Self {
        AliasIdentity {
            kind,
            name: name.to_string(),
        }
    }

    /// Parse `"User_Alias ADMINS"` into its kind and name.
    ///
    /// Returns `None` unless the text is exactly a known `<Kind>_Alias`
    /// keyword followed by one name token.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let keyword = tokens.next()?;
        let name = tokens.next()?;
        if tokens.next().is_some() {
            return None;
        }
        let kind = AliasKind::from_keyword(keyword)?;
        Some(AliasIdentity::new(kind, name))
    }
}

impl std::fmt::Display for AliasIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.keyword(), self.name)
    }
}
