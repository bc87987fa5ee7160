//! Tree guide glyphs.

/// Guide character styles for tree rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeGuides {
    /// ASCII guides: `|`, `+--`, `` `-- ``.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

impl TreeGuides {
    /// Vertical continuation (an ancestor has siblings below).
    pub const fn vertical(&self) -> &'static str {
        match self {
            Self::Ascii => "|   ",
            Self::Unicode => "\u{2502}   ",
        }
    }

    /// Branch guide (item has siblings below).
    pub const fn branch(&self) -> &'static str {
        match self {
            Self::Ascii => "+-- ",
            Self::Unicode => "\u{251C}\u{2500}\u{2500} ",
        }
    }

    /// Last-item guide (no siblings below).
    pub const fn last(&self) -> &'static str {
        match self {
            Self::Ascii => "`-- ",
            Self::Unicode => "\u{2514}\u{2500}\u{2500} ",
        }
    }

    /// Empty indentation.
    pub const fn space(&self) -> &'static str {
        "    "
    }

    /// Builds the guide prefix for a row.
    ///
    /// `last_flags` holds, for each level below the root, whether the node on the row's
    /// path at that level is the last of its siblings. The root row (no flags) gets no
    /// prefix.
    pub fn prefix(&self, last_flags: &[bool]) -> String {
        let Some((&is_last, ancestors)) = last_flags.split_last() else {
            return String::new();
        };
        let mut prefix = String::with_capacity(last_flags.len() * 4);
        for &ancestor_last in ancestors {
            prefix.push_str(if ancestor_last {
                self.space()
            } else {
                self.vertical()
            });
        }
        prefix.push_str(if is_last { self.last() } else { self.branch() });
        prefix
    }
}
