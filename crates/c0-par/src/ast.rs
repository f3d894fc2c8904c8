//! AST node definitions.
//!
//! The tree uses a single node type tagged with a [`NodeKind`] rather than a
//! class hierarchy: non-leaf kinds carry only children, leaf kinds carry
//! exactly one [`Token`] and no children. The tree is immutable once parsed.

use c0_lex::Token;
use c0_util::Span;

/// The grammar production (or leaf lexical category) a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `<C0-program>`, the tree root.
    C0Root,

    VariableDeclaration,
    FunctionDefinition,

    TypeSpecifier,
    SimpleTypeSpecifier,
    ConstQualifier,

    InitDeclaratorList,
    InitDeclarator,
    Initializer,

    ParameterClause,
    ParameterDeclarationList,
    ParameterDeclaration,

    CompoundStatement,
    StatementSeq,
    Statement,
    ConditionStatement,
    Condition,
    LabeledStatement,
    LoopStatement,
    ForInitStatement,
    ForUpdateStatement,
    JumpStatement,
    ReturnStatement,
    ScanStatement,
    PrintStatement,
    PrintableList,
    Printable,

    AssignmentExpression,
    Expression,
    AdditiveExpression,
    MultiplicativeExpression,
    CastExpression,
    UnaryExpression,
    PrimaryExpression,
    FunctionCall,
    ExpressionList,

    Identifier,
    IntegerLiteral,
    CharLiteral,
    FloatLiteral,
    StrLiteral,

    UnaryOperator,
    AdditiveOperator,
    MultiplicativeOperator,
    RelationalOperator,
    AssignmentOperator,

    /// A leaf that carries a raw, otherwise-uninteresting token (e.g. `(`,
    /// `;`, `if`) purely for span tracking.
    Token,
}

/// A single AST node.
///
/// Invariant: `token.is_some()` iff `children.is_empty()` for every kind
/// that is lexically terminal (`Token`, `Identifier`, the literal kinds, and
/// the operator kinds); every other kind always has `token: None`.
#[derive(Debug, Clone)]
pub struct Ast {
    pub kind: NodeKind,
    pub token: Option<Token>,
    pub children: Vec<Ast>,
}

impl Ast {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            token: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(kind: NodeKind, token: Token) -> Self {
        Self {
            kind,
            token: Some(token),
            children: Vec::new(),
        }
    }

    pub fn token_leaf(token: Token) -> Self {
        Self::leaf(NodeKind::Token, token)
    }

    pub fn add_child(&mut self, child: Ast) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn with_child(mut self, child: Ast) -> Self {
        self.children.push(child);
        self
    }

    /// The node's own token, if it is a leaf; otherwise the first token
    /// found by descending into its first child, recursively.
    pub fn first_token(&self) -> Option<&Token> {
        if let Some(token) = &self.token {
            return Some(token);
        }
        self.children.first().and_then(Ast::first_token)
    }

    /// The span covering this node's entire subtree, used for diagnostics
    /// anchored on non-leaf nodes.
    pub fn span(&self) -> Span {
        if let Some(token) = &self.token {
            return token.span;
        }
        let first = self.children.first().and_then(Ast::first_token);
        let last = self.children.last().and_then(Ast::last_token);
        match (first, last) {
            (Some(a), Some(b)) => a.span.merge(b.span),
            (Some(a), None) => a.span,
            _ => Span::DUMMY,
        }
    }

    fn last_token(&self) -> Option<&Token> {
        if let Some(token) = &self.token {
            return Some(token);
        }
        self.children.last().and_then(Ast::last_token)
    }

    /// Renders the tree, collapsing single-child chains, matching the `-a`
    /// driver flag.
    pub fn print_collapsed(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0, true);
        out
    }

    /// Renders every node without collapsing, matching the `-A` driver flag.
    pub fn print_full(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0, false);
        out
    }

    fn write_tree(&self, out: &mut String, indent: usize, collapse: bool) {
        if let Some(token) = &self.token {
            out.push_str(&"  ".repeat(indent));
            out.push_str(&format!("{:?} @ {:?}\n", token.kind, token.literal));
            return;
        }

        out.push_str(&"  ".repeat(indent));
        out.push_str(&format!("{:?}\n", self.kind));

        let mut children = self.children.iter();
        if collapse && self.children.len() == 1 {
            let mut only = self.children[0].clone();
            while only.token.is_none() && only.children.len() == 1 {
                only = only.children[0].clone();
            }
            only.write_tree(out, indent + 1, collapse);
            return;
        }

        while let Some(child) = children.next() {
            child.write_tree(out, indent + 1, collapse);
        }
    }
}
