//! Token kinds and positioned tokens.
//!
//! Tokens carry no text: the parser slices the source through the span when
//! it needs an identifier or literal spelling.

use crate::Span;

/// Classified token produced by the lexer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals and names
    Identifier,
    IntLiteral,
    FloatLiteral,
    True,
    False,

    // Statement keywords
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Discard,
    Return,
    Struct,

    // Qualifiers
    Layout,
    Precision,
    Uniform,
    Const,
    In,
    Out,
    InOut,
    Flat,
    NoPerspective,
    Inline,
    NoInline,
    HasSideEffects,
    HighP,
    MediumP,
    LowP,
    Es3,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Dot,
    Comma,
    Semicolon,
    Colon,
    Question,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Shl,
    Shr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    Amp,
    Caret,
    Pipe,
    AmpAmp,
    CaretCaret,
    PipePipe,
    Bang,
    Tilde,
    PlusPlus,
    MinusMinus,
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    ShlEq,
    ShrEq,
    AmpEq,
    CaretEq,
    PipeEq,
    AmpAmpEq,
    CaretCaretEq,
    PipePipeEq,

    /// `#name` preprocessor-style directive.
    Directive,

    // Trivia, filtered by the token stream
    Whitespace,
    LineComment,
    BlockComment,

    /// Character sequence the lexer could not classify.
    Invalid,
    Eof,
}

impl TokenKind {
    /// Whitespace and comments, skipped by filtered token access.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Fixed spelling of punctuation and keyword tokens, `None` for tokens
    /// whose text varies.
    pub fn fixed_text(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Discard => "discard",
            TokenKind::Return => "return",
            TokenKind::Struct => "struct",
            TokenKind::Layout => "layout",
            TokenKind::Precision => "precision",
            TokenKind::Uniform => "uniform",
            TokenKind::Const => "const",
            TokenKind::In => "in",
            TokenKind::Out => "out",
            TokenKind::InOut => "inout",
            TokenKind::Flat => "flat",
            TokenKind::NoPerspective => "noperspective",
            TokenKind::Inline => "inline",
            TokenKind::NoInline => "noinline",
            TokenKind::HasSideEffects => "hasSideEffects",
            TokenKind::HighP => "highp",
            TokenKind::MediumP => "mediump",
            TokenKind::LowP => "lowp",
            TokenKind::Es3 => "es3",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Amp => "&",
            TokenKind::Caret => "^",
            TokenKind::Pipe => "|",
            TokenKind::AmpAmp => "&&",
            TokenKind::CaretCaret => "^^",
            TokenKind::PipePipe => "||",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Eq => "=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::ShlEq => "<<=",
            TokenKind::ShrEq => ">>=",
            TokenKind::AmpEq => "&=",
            TokenKind::CaretEq => "^=",
            TokenKind::PipeEq => "|=",
            TokenKind::AmpAmpEq => "&&=",
            TokenKind::CaretCaretEq => "^^=",
            TokenKind::PipePipeEq => "||=",
            TokenKind::Identifier
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::Directive
            | TokenKind::Whitespace
            | TokenKind::LineComment
            | TokenKind::BlockComment
            | TokenKind::Invalid
            | TokenKind::Eof => return None,
        })
    }
}

/// A classified token with its location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub const fn offset(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub const fn length(&self) -> u32 {
        self.span.end - self.span.start
    }

    /// Source text of this token. The end-of-file token renders as
    /// `end of file` for use in diagnostics.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        if self.kind == TokenKind::Eof {
            "end of file"
        } else {
            self.span.text(source)
        }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Token;
    crate::static_assert_size!(Token, 12);
}
