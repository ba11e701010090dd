//! Raw token to `TokenKind` conversion.

use shade_ir::TokenKind;

use crate::raw_token::RawToken;

pub(crate) fn convert(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Whitespace => TokenKind::Whitespace,
        RawToken::LineComment => TokenKind::LineComment,
        RawToken::BlockComment => TokenKind::BlockComment,
        RawToken::Directive => TokenKind::Directive,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::For => TokenKind::For,
        RawToken::While => TokenKind::While,
        RawToken::Do => TokenKind::Do,
        RawToken::Switch => TokenKind::Switch,
        RawToken::Case => TokenKind::Case,
        RawToken::Default => TokenKind::Default,
        RawToken::Break => TokenKind::Break,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Discard => TokenKind::Discard,
        RawToken::Return => TokenKind::Return,
        RawToken::Struct => TokenKind::Struct,
        RawToken::Layout => TokenKind::Layout,
        RawToken::Precision => TokenKind::Precision,
        RawToken::Uniform => TokenKind::Uniform,
        RawToken::Const => TokenKind::Const,
        RawToken::In => TokenKind::In,
        RawToken::Out => TokenKind::Out,
        RawToken::InOut => TokenKind::InOut,
        RawToken::Flat => TokenKind::Flat,
        RawToken::NoPerspective => TokenKind::NoPerspective,
        RawToken::Inline => TokenKind::Inline,
        RawToken::NoInline => TokenKind::NoInline,
        RawToken::HasSideEffects => TokenKind::HasSideEffects,
        RawToken::HighP => TokenKind::HighP,
        RawToken::MediumP => TokenKind::MediumP,
        RawToken::LowP => TokenKind::LowP,
        RawToken::Es3 => TokenKind::Es3,
        RawToken::Float => TokenKind::FloatLiteral,
        RawToken::Int => TokenKind::IntLiteral,
        RawToken::Ident => TokenKind::Identifier,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Question => TokenKind::Question,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::CaretCaret => TokenKind::CaretCaret,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::Eq => TokenKind::Eq,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::ShlEq => TokenKind::ShlEq,
        RawToken::ShrEq => TokenKind::ShrEq,
        RawToken::AmpEq => TokenKind::AmpEq,
        RawToken::CaretEq => TokenKind::CaretEq,
        RawToken::PipeEq => TokenKind::PipeEq,
        RawToken::AmpAmpEq => TokenKind::AmpAmpEq,
        RawToken::CaretCaretEq => TokenKind::CaretCaretEq,
        RawToken::PipePipeEq => TokenKind::PipePipeEq,
    }
}
