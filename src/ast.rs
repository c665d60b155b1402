/// A terminal numeric literal.
///
/// Literals are produced from `Integer` tokens and are never negative; a
/// negative value can only appear as the result of a subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    /// The literal's value.
    pub value: i64,
}

/// An internal node applying an operator to two sub-expressions.
///
/// Both children are owned by the node. A `Binary` is always complete: the
/// parser only builds one once it holds an operator and both operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    /// The operator.
    pub op:    BinaryOperator,
    /// Left operand.
    pub left:  Box<Expr>,
    /// Right operand.
    pub right: Box<Expr>,
}

/// An expression tree node.
///
/// `Expr` is built once by the parser and only read afterwards. Every
/// traversal in [`crate::interpreter::visitor`] borrows it for the duration
/// of one walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A numeric literal such as `42`.
    Literal(Literal),
    /// A binary operation such as `(1 + 2)`.
    Binary(Binary),
}

/// Fieldless tag naming the variant of an [`Expr`].
///
/// Used as the key of the lookup-table strategy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// [`Expr::Literal`]
    Literal,
    /// [`Expr::Binary`]
    Binary,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal(Literal { value })
    }

    /// Builds a binary node from an operator and two operands.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::literal(1), Expr::literal(2));
    ///
    /// assert_eq!(expr.value().unwrap(), 3);
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary(Binary { op,
                              left: Box::new(left),
                              right: Box::new(right) })
    }

    /// Gets the kind tag of `self`.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Literal(_) => NodeKind::Literal,
            Self::Binary(_) => NodeKind::Binary,
        }
    }

    /// Returns the text a single node contributes to a listing: the digits
    /// of a literal or the symbol of an operator.
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Literal(Literal { value }) => value.to_string(),
            Self::Binary(Binary { op, .. }) => op.to_string(),
        }
    }

    /// Iterates over every node of the tree in in-order sequence.
    ///
    /// The left subtree is yielded first, then the node itself, then the
    /// right subtree. Leaves are yielded once.
    ///
    /// ## Example
    /// ```
    /// use exprtree::interpreter::parser::parse;
    ///
    /// let expr = parse("(10+2)-7").unwrap();
    /// let listing: Vec<String> = expr.inorder().map(|node| node.symbol()).collect();
    ///
    /// assert_eq!(listing, ["10", "+", "2", "-", "7"]);
    /// ```
    #[must_use]
    pub fn inorder(&self) -> Inorder<'_> {
        let mut iter = Inorder { stack: Vec::new() };
        iter.push_left_spine(self);
        iter
    }

    /// Counts the literal operands of the tree.
    #[must_use]
    pub fn operands(&self) -> usize {
        self.inorder()
            .filter(|node| node.kind() == NodeKind::Literal)
            .count()
    }
}

/// In-order iterator over the nodes of an [`Expr`].
///
/// Created by [`Expr::inorder`]. Holds the chain of nodes whose left
/// subtree is being walked; no parent links are needed.
pub struct Inorder<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> Inorder<'a> {
    fn push_left_spine(&mut self, mut node: &'a Expr) {
        loop {
            self.stack.push(node);
            match node {
                Expr::Binary(Binary { left, .. }) => node = left,
                Expr::Literal(_) => break,
            }
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Expr::Binary(Binary { right, .. }) = node {
            self.push_left_spine(right);
        }
        Some(node)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::interpreter::visitor::switch::render(self))
    }
}
