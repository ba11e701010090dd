//! Binary, prefix and postfix operators.

use std::fmt;

/// Binary operators, including assignment forms and the comma sequence.
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

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,

    // Logical
    LogicalAnd,
    LogicalXor,
    LogicalOr,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    BitAndAssign,
    BitXorAssign,
    BitOrAssign,
    LogicalAndAssign,
    LogicalXorAssign,
    LogicalOrAssign,

    /// `,` sequence: evaluates both sides and yields the right.
    Comma,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalXor => "^^",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubAssign => "-=",
            BinaryOp::MulAssign => "*=",
            BinaryOp::DivAssign => "/=",
            BinaryOp::ModAssign => "%=",
            BinaryOp::ShlAssign => "<<=",
            BinaryOp::ShrAssign => ">>=",
            BinaryOp::BitAndAssign => "&=",
            BinaryOp::BitXorAssign => "^=",
            BinaryOp::BitOrAssign => "|=",
            BinaryOp::LogicalAndAssign => "&&=",
            BinaryOp::LogicalXorAssign => "^^=",
            BinaryOp::LogicalOrAssign => "||=",
            BinaryOp::Comma => ",",
        }
    }

    /// `=` and every compound assignment.
    pub fn is_assignment(self) -> bool {
        matches!(
            self,
            BinaryOp::Assign
                | BinaryOp::AddAssign
                | BinaryOp::SubAssign
                | BinaryOp::MulAssign
                | BinaryOp::DivAssign
                | BinaryOp::ModAssign
                | BinaryOp::ShlAssign
                | BinaryOp::ShrAssign
                | BinaryOp::BitAndAssign
                | BinaryOp::BitXorAssign
                | BinaryOp::BitOrAssign
                | BinaryOp::LogicalAndAssign
                | BinaryOp::LogicalXorAssign
                | BinaryOp::LogicalOrAssign
        )
    }

    /// The operator a compound assignment applies. `=` and non-assignment
    /// operators map to themselves.
    #[must_use]
    pub fn remove_assignment(self) -> BinaryOp {
        match self {
            BinaryOp::AddAssign => BinaryOp::Add,
            BinaryOp::SubAssign => BinaryOp::Sub,
            BinaryOp::MulAssign => BinaryOp::Mul,
            BinaryOp::DivAssign => BinaryOp::Div,
            BinaryOp::ModAssign => BinaryOp::Mod,
            BinaryOp::ShlAssign => BinaryOp::Shl,
            BinaryOp::ShrAssign => BinaryOp::Shr,
            BinaryOp::BitAndAssign => BinaryOp::BitAnd,
            BinaryOp::BitXorAssign => BinaryOp::BitXor,
            BinaryOp::BitOrAssign => BinaryOp::BitOr,
            BinaryOp::LogicalAndAssign => BinaryOp::LogicalAnd,
            BinaryOp::LogicalXorAssign => BinaryOp::LogicalXor,
            BinaryOp::LogicalOrAssign => BinaryOp::LogicalOr,
            other => other,
        }
    }

    /// Comparison operators always produce `bool`.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Lt
                | BinaryOp::Gt
                | BinaryOp::LtEq
                | BinaryOp::GtEq
                | BinaryOp::Eq
                | BinaryOp::NotEq
        )
    }

    /// `<`, `>`, `<=`, `>=`.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq
        )
    }

    /// `&&`, `^^`, `||` and their assignment forms: operands and result
    /// are `bool`.
    pub fn is_logical(self) -> bool {
        matches!(
            self.remove_assignment(),
            BinaryOp::LogicalAnd | BinaryOp::LogicalXor | BinaryOp::LogicalOr
        )
    }

    /// Operators whose operands must have an integer component type.
    pub fn is_integer_only(self) -> bool {
        matches!(
            self.remove_assignment(),
            BinaryOp::Mod
                | BinaryOp::Shl
                | BinaryOp::Shr
                | BinaryOp::BitAnd
                | BinaryOp::BitXor
                | BinaryOp::BitOr
        )
    }

    /// `+ - * /` and their assignment forms.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self.remove_assignment(),
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div
        )
    }

    /// Operators available in strict ES2 programs.
    pub fn is_allowed_in_strict_es2(self) -> bool {
        !self.is_integer_only()
    }

    /// Operators that may be applied to arrays in strict ES2 programs.
    pub fn is_valid_for_arrays_in_strict_es2(self) -> bool {
        matches!(self, BinaryOp::Assign | BinaryOp::Comma)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOp {
    Plus,
    Neg,
    Not,
    BitNot,
    Inc,
    Dec,
}

impl PrefixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOp::Plus => "+",
            PrefixOp::Neg => "-",
            PrefixOp::Not => "!",
            PrefixOp::BitNot => "~",
            PrefixOp::Inc => "++",
            PrefixOp::Dec => "--",
        }
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postfix unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PostfixOp {
    Inc,
    Dec,
}

impl PostfixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            PostfixOp::Inc => "++",
            PostfixOp::Dec => "--",
        }
    }
}

impl fmt::Display for PostfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
