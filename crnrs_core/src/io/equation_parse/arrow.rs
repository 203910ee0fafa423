//! Module providing the reaction arrows recognised in equations

/// Represents the arrow separating the two sides of an equation
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub(crate) enum Arrow {
    /// `<->`, expands into a forward and a reverse reaction
    Reversible,
    /// `->`, a single directed reaction
    Irreversible,
}

impl Arrow {
    /// Find which arrow a line uses
    ///
    /// `->` is contained in `<->`, so the reversible arrow is checked first.
    pub(crate) fn detect(line: &str) -> Option<Arrow> {
        if line.contains(Arrow::Reversible.symbol()) {
            Some(Arrow::Reversible)
        } else if line.contains(Arrow::Irreversible.symbol()) {
            Some(Arrow::Irreversible)
        } else {
            None
        }
    }

    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            Arrow::Reversible => "<->",
            Arrow::Irreversible => "->",
        }
    }
}
