/// Classic double-dispatch visitor.
///
/// Each node kind implements `accept`, which calls back into the visitor
/// method for that kind.
pub mod classic;
/// Generic per-type visitor.
///
/// A visitor implements `Visit<N>` once for every concrete node type, and
/// each node forwards to the implementation matching its own type.
pub mod generic;
/// Kind-keyed dispatch table.
///
/// Handlers are registered per [`crate::ast::NodeKind`] and looked up at
/// every node instead of relying on a method call.
pub mod lookup;
/// Exhaustive `match` over the node variants.
pub mod switch;

/// Selects one of the interchangeable tree traversals.
///
/// Every strategy renders the same tree to the same string and evaluates it
/// to the same value; they differ only in how a node reaches the code that
/// handles its kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// [`classic`]
    #[default]
    Classic,
    /// [`lookup`]
    Lookup,
    /// [`switch`]
    Switch,
    /// [`generic`]
    Generic,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Self; 4] = [Self::Classic, Self::Lookup, Self::Switch, Self::Generic];
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Classic => "classic",
            Self::Lookup => "lookup",
            Self::Switch => "switch",
            Self::Generic => "generic",
        };
        write!(f, "{name}")
    }
}
