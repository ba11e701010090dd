//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before it is
//! mapped onto the shared `TokenKind`. Trivia is kept: the token stream
//! decides what to skip.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_]*")]
    Directive,

    // Keywords
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("discard")]
    Discard,
    #[token("return")]
    Return,
    #[token("struct")]
    Struct,
    #[token("layout")]
    Layout,
    #[token("precision")]
    Precision,
    #[token("uniform")]
    Uniform,
    #[token("const")]
    Const,
    #[token("in")]
    In,
    #[token("out")]
    Out,
    #[token("inout")]
    InOut,
    #[token("flat")]
    Flat,
    #[token("noperspective")]
    NoPerspective,
    #[token("inline")]
    Inline,
    #[token("noinline")]
    NoInline,
    #[token("hasSideEffects")]
    HasSideEffects,
    #[token("highp")]
    HighP,
    #[token("mediump")]
    MediumP,
    #[token("lowp")]
    LowP,
    #[token("es3")]
    Es3,

    // Literals
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?[fF]?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[fF]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fF]?")]
    Float,

    #[regex(r"[0-9]+[uU]?")]
    #[regex(r"0[xX][0-9a-fA-F]+[uU]?")]
    Int,

    // `$` prefixes the generic type names of builtin declarations.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_]*")]
    Ident,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("&")]
    Amp,
    #[token("^")]
    Caret,
    #[token("|")]
    Pipe,
    #[token("&&")]
    AmpAmp,
    #[token("^^")]
    CaretCaret,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token("&=")]
    AmpEq,
    #[token("^=")]
    CaretEq,
    #[token("|=")]
    PipeEq,
    #[token("&&=")]
    AmpAmpEq,
    #[token("^^=")]
    CaretCaretEq,
    #[token("||=")]
    PipePipeEq,
}
