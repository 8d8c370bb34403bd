//! Binary operator tags.
//!
//! The tag set mirrors the operator tokens the parser attaches to
//! mathematical expressions. `BoolNot` and `BitNot` appear here even though
//! they read as unary operators: the grammar can place them in binary
//! position, and the evaluator gives them a defined two-operand meaning.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Bitwise
    Shl,
    Shr,
    BitAnd,
    BitXor,
    BitOr,
    BitNot,

    // Comparison
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,

    // Logical
    And,
    Xor,
    Or,
    Not,
}

impl BinaryOp {
    /// Every operator tag, in declaration order.
    pub const ALL: [BinaryOp; 21] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Shl,
        Self::Shr,
        Self::BitAnd,
        Self::BitXor,
        Self::BitOr,
        Self::BitNot,
        Self::Eq,
        Self::NotEq,
        Self::Gt,
        Self::Lt,
        Self::GtEq,
        Self::LtEq,
        Self::And,
        Self::Xor,
        Self::Or,
        Self::Not,
    ];

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::BitNot => "~",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::And => "&&",
            Self::Xor => "^^",
            Self::Or => "||",
            Self::Not => "!",
        }
    }

    /// Whether this is one of the six relational operators.
    #[inline]
    pub const fn is_relational(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Gt | Self::Lt | Self::GtEq | Self::LtEq
        )
    }

    /// Whether this is an equality operator (`==` or `!=`).
    #[inline]
    pub const fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::NotEq)
    }
}
