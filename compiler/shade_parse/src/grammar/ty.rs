//! Types, modifiers, layout qualifiers and array dimensions.

use shade_diagnostic::ErrorCode;
use shade_ir::ast::TypeRef;
use shade_ir::{Layout, ModifierFlags, Modifiers, TokenKind};

use crate::layout::{layout_key, takes_value};
use crate::literal::{parse_int, LiteralError};
use crate::Parser;

fn modifier_flag(kind: TokenKind) -> Option<ModifierFlags> {
    let flag = match kind {
        TokenKind::Uniform => ModifierFlags::UNIFORM,
        TokenKind::Const => ModifierFlags::CONST,
        TokenKind::In => ModifierFlags::IN,
        TokenKind::Out => ModifierFlags::OUT,
        TokenKind::InOut => ModifierFlags::IN | ModifierFlags::OUT,
        TokenKind::Flat => ModifierFlags::FLAT,
        TokenKind::NoPerspective => ModifierFlags::NO_PERSPECTIVE,
        TokenKind::HasSideEffects => ModifierFlags::HAS_SIDE_EFFECTS,
        TokenKind::Inline => ModifierFlags::INLINE,
        TokenKind::NoInline => ModifierFlags::NO_INLINE,
        TokenKind::HighP => ModifierFlags::HIGHP,
        TokenKind::MediumP => ModifierFlags::MEDIUMP,
        TokenKind::LowP => ModifierFlags::LOWP,
        TokenKind::Es3 => ModifierFlags::ES3,
        _ => return None,
    };
    Some(flag)
}

impl Parser<'_, '_> {
    /// Whether the next token starts a modifier list.
    pub(crate) fn at_modifier(&mut self) -> bool {
        let kind = self.peek_kind();
        kind == TokenKind::Layout || modifier_flag(kind).is_some()
    }

    /// Parse `layout(...)` and any storage or precision qualifiers.
    ///
    /// Repeated qualifiers are reported but do not stop the declaration.
    pub(crate) fn modifiers(&mut self) -> Modifiers {
        let mut layout = Layout::default();
        let mut flags = ModifierFlags::empty();
        loop {
            let token = self.peek();
            if token.kind == TokenKind::Layout {
                self.layout(&mut layout);
                continue;
            }
            let Some(flag) = modifier_flag(token.kind) else {
                break;
            };
            self.advance();
            if flags.intersects(flag) {
                let text = self.text(token);
                self.error(
                    token.span,
                    ErrorCode::E1008,
                    format!("'{text}' appears more than once"),
                );
            }
            flags |= flag;
        }
        Modifiers::new(layout, flags)
    }

    fn layout(&mut self, layout: &mut Layout) {
        self.advance();
        if self.expect(TokenKind::LParen, "'('").is_none() {
            return;
        }
        if self.check_next(TokenKind::RParen).is_some() {
            return;
        }
        loop {
            let Some(key_token) = self.expect(TokenKind::Identifier, "a layout qualifier") else {
                return;
            };
            let key_text = self.text(key_token);
            match layout_key(key_text) {
                Some(key) => {
                    if layout.flags.contains(key) {
                        self.error(
                            key_token.span,
                            ErrorCode::E1007,
                            format!("layout qualifier '{key_text}' appears more than once"),
                        );
                    }
                    if takes_value(key) {
                        let Some(value) = self.layout_value() else {
                            return;
                        };
                        layout.set_value(key, value);
                    } else {
                        layout.flags |= key;
                    }
                }
                None => self.error(
                    key_token.span,
                    ErrorCode::E1007,
                    format!("'{key_text}' is not a valid layout qualifier"),
                ),
            }
            if self.check_next(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::RParen, "')'");
    }

    /// `= <int>` after a valued layout key.
    fn layout_value(&mut self) -> Option<i32> {
        self.expect(TokenKind::Eq, "'='")?;
        let negative = self.check_next(TokenKind::Minus).is_some();
        let token = self.expect(TokenKind::IntLiteral, "an int literal")?;
        let value = self.int_value(token)?;
        let value = if negative { -value } else { value };
        match i32::try_from(value) {
            Ok(value) => Some(value),
            Err(_) => {
                self.error(
                    token.span,
                    ErrorCode::E1007,
                    "layout value out of bounds",
                );
                None
            }
        }
    }

    /// Decode an integer literal token, reporting out-of-range values.
    pub(crate) fn int_value(&mut self, token: shade_ir::Token) -> Option<i64> {
        let text = self.text(token);
        match parse_int(text) {
            Ok(value) => Some(value),
            Err(LiteralError::TooLarge) => {
                self.error(
                    token.span,
                    ErrorCode::E0002,
                    format!("integer is too large: {text}"),
                );
                None
            }
            Err(LiteralError::Malformed) => {
                self.error(
                    token.span,
                    ErrorCode::E0001,
                    format!("invalid integer literal '{text}'"),
                );
                None
            }
        }
    }

    /// Parse a type name with optional `[N]` suffixes.
    pub(crate) fn type_ref(&mut self) -> Option<TypeRef> {
        let token = self.expect(TokenKind::Identifier, "a type")?;
        let name = self.text(token);
        if !self.is_type(name) {
            self.error(
                token.span,
                ErrorCode::E1005,
                format!("no type named '{name}'"),
            );
            return None;
        }
        let mut ty = TypeRef::new(name, token.span);
        while self.check_next(TokenKind::LBracket).is_some() {
            let size = self.array_dimension()?;
            ty.array_sizes.push(size);
        }
        ty.span = self.span_from(token.span);
        Some(ty)
    }

    /// Parse `[N][M]...` after a declarator name.
    ///
    /// Every dimension is consumed even when one is invalid, so the caller
    /// can finish the declaration before giving up on it.
    pub(crate) fn array_sizes(&mut self) -> Option<Vec<u32>> {
        let mut sizes = Vec::new();
        let mut valid = true;
        while self.check_next(TokenKind::LBracket).is_some() {
            match self.array_dimension() {
                Some(size) => sizes.push(size),
                None if self.reporter.is_fatal() => return None,
                None => valid = false,
            }
        }
        valid.then_some(sizes)
    }

    /// Parse the inside of one `[...]`, the `[` already consumed.
    pub(crate) fn array_dimension(&mut self) -> Option<u32> {
        let start = self.previous;
        if let Some(close) = self.check_next(TokenKind::RBracket) {
            self.error(
                start.merge(close.span),
                ErrorCode::E1006,
                "expected array dimension",
            );
            return None;
        }
        let negative = self.check_next(TokenKind::Minus).is_some();
        let token = self.expect(TokenKind::IntLiteral, "int literal")?;
        let value = self.int_value(token);
        self.expect(TokenKind::RBracket, "']'")?;
        let value = value?;
        let span = self.span_from(start);
        if negative || value <= 0 {
            self.error(span, ErrorCode::E1006, "array size must be positive");
            return None;
        }
        match u32::try_from(value) {
            Ok(size) if i32::try_from(size).is_ok() => Some(size),
            _ => {
                self.error(span, ErrorCode::E1006, "array size out of bounds");
                None
            }
        }
    }
}
