//! Codec and editor for colon-separated directory lists (`secure_path`).

/// An ordered list of directories with no duplicates.
///
/// Stored form is `"dir1:dir2"` (double-quoted); an empty list is stored as
/// the empty string, which removes the setting's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList(Vec<String>);

impl PathList {
    /// Decode a stored value.
    ///
    /// Strips one layer of surrounding double quotes, splits on `:` and drops
    /// empty segments. Duplicates already present in the stored value are
    /// kept as written.
    pub fn decode(raw: &str) -> Self {
        let inner = strip_quotes(raw);
        PathList(
            inner
                .split(':')
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Encode for storage: quoted and colon-joined, or `""` when empty.
    pub fn encode(&self) -> String {
        if self.0.is_empty() {
            String::new()
        } else {
            format!("\"{}\"", self.0.join(":"))
        }
    }

    /// Append `dir` unless it is already present (exact, case-sensitive).
    ///
    /// Returns whether the list changed.
    pub fn insert(&mut self, dir: &str) -> bool {
        if dir.is_empty() || self.contains(dir) {
            return false;
        }
        self.0.push(dir.to_string());
        true
    }

    /// Remove `dir` if present. Returns whether the list changed.
    pub fn remove(&mut self, dir: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|d| d != dir);
        self.0.len() != before
    }

    /// Swap two entries. Out-of-range indices leave the list untouched.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.0.len() || b >= self.0.len() {
            return false;
        }
        self.0.swap(a, b);
        true
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        index > 0 && self.swap(index, index - 1)
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        self.swap(index, index + 1)
    }

    pub fn contains(&self, dir: &str) -> bool {
        self.0.iter().any(|d| d == dir)
    }

    pub fn dirs(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PathList {
    /// Build a list, suppressing duplicates.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = PathList::default();
        for dir in iter {
            list.insert(dir.as_ref());
        }
        list
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}
