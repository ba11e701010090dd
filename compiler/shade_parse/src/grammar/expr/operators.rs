//! Operator Matching Helpers
//!
//! Map the next token to the operator of one precedence level.

use shade_ir::{BinaryOp, PostfixOp, PrefixOp, TokenKind};

use crate::Parser;

impl Parser<'_, '_> {
    pub(crate) fn match_comma_op(&mut self) -> Option<BinaryOp> {
        (self.peek_kind() == TokenKind::Comma).then_some(BinaryOp::Comma)
    }

    pub(crate) fn match_assignment_op(&mut self) -> Option<BinaryOp> {
        match self.peek_kind() {
            TokenKind::Eq => Some(BinaryOp::Assign),
            TokenKind::PlusEq => Some(BinaryOp::AddAssign),
            TokenKind::MinusEq => Some(BinaryOp::SubAssign),
            TokenKind::StarEq => Some(BinaryOp::MulAssign),
            TokenKind::SlashEq => Some(BinaryOp::DivAssign),
            TokenKind::PercentEq => Some(BinaryOp::ModAssign),
            TokenKind::ShlEq => Some(BinaryOp::ShlAssign),
            TokenKind::ShrEq => Some(BinaryOp::ShrAssign),
            TokenKind::AmpEq => Some(BinaryOp::BitAndAssign),
            TokenKind::CaretEq => Some(BinaryOp::BitXorAssign),
            TokenKind::PipeEq => Some(BinaryOp::BitOrAssign),
            TokenKind::AmpAmpEq => Some(BinaryOp::LogicalAndAssign),
            TokenKind::CaretCaretEq => Some(BinaryOp::LogicalXorAssign),
            TokenKind::PipePipeEq => Some(BinaryOp::LogicalOrAssign),
            _ => None,
        }
    }

    pub(crate) fn match_logical_or_op(&mut self) -> Option<BinaryOp> {
        (self.peek_kind() == TokenKind::PipePipe).then_some(BinaryOp::LogicalOr)
    }

    pub(crate) fn match_logical_xor_op(&mut self) -> Option<BinaryOp> {
        (self.peek_kind() == TokenKind::CaretCaret).then_some(BinaryOp::LogicalXor)
    }

    pub(crate) fn match_logical_and_op(&mut self) -> Option<BinaryOp> {
        (self.peek_kind() == TokenKind::AmpAmp).then_some(BinaryOp::LogicalAnd)
    }

    pub(crate) fn match_bitwise_or_op(&mut self) -> Option<BinaryOp> {
        (self.peek_kind() == TokenKind::Pipe).then_some(BinaryOp::BitOr)
    }

    pub(crate) fn match_bitwise_xor_op(&mut self) -> Option<BinaryOp> {
        (self.peek_kind() == TokenKind::Caret).then_some(BinaryOp::BitXor)
    }

    pub(crate) fn match_bitwise_and_op(&mut self) -> Option<BinaryOp> {
        (self.peek_kind() == TokenKind::Amp).then_some(BinaryOp::BitAnd)
    }

    pub(crate) fn match_equality_op(&mut self) -> Option<BinaryOp> {
        match self.peek_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_relational_op(&mut self) -> Option<BinaryOp> {
        match self.peek_kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_shift_op(&mut self) -> Option<BinaryOp> {
        match self.peek_kind() {
            TokenKind::Shl => Some(BinaryOp::Shl),
            TokenKind::Shr => Some(BinaryOp::Shr),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&mut self) -> Option<BinaryOp> {
        match self.peek_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&mut self) -> Option<BinaryOp> {
        match self.peek_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub(crate) fn match_prefix_op(&mut self) -> Option<PrefixOp> {
        match self.peek_kind() {
            TokenKind::Plus => Some(PrefixOp::Plus),
            TokenKind::Minus => Some(PrefixOp::Neg),
            TokenKind::Bang => Some(PrefixOp::Not),
            TokenKind::Tilde => Some(PrefixOp::BitNot),
            TokenKind::PlusPlus => Some(PrefixOp::Inc),
            TokenKind::MinusMinus => Some(PrefixOp::Dec),
            _ => None,
        }
    }

    pub(crate) fn match_postfix_op(&mut self) -> Option<PostfixOp> {
        match self.peek_kind() {
            TokenKind::PlusPlus => Some(PostfixOp::Inc),
            TokenKind::MinusMinus => Some(PostfixOp::Dec),
            _ => None,
        }
    }
}
