/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClauseSource {
    /// A *unit* clause pinning the value of a constant.
    Constant,

    /// A clause read directly from an expression already in the shape of a clause.
    Direct,

    /// A clause defining an auxiliary atom to be equivalent to some subexpression.
    Tseytin,

    /// A clause asserting the root of an expression, given the (resolved) operands of the root.
    Root,
}

impl std::fmt::Display for ClauseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant => write!(f, "Constant"),
            Self::Direct => write!(f, "Direct"),
            Self::Tseytin => write!(f, "Tseytin"),
            Self::Root => write!(f, "Root"),
        }
    }
}
