//! Top-level declarations.

use shade_diagnostic::ErrorCode;
use shade_ir::ast::{
    Decl, ExtensionDecl, FieldDecl, FunctionDecl, InterfaceBlockDecl, Module, ParamDecl,
    StructDecl, TypeRef, VarDecl, VarDeclarations,
};
use shade_ir::{Modifiers, Span, Token, TokenKind};

use crate::Parser;

const EXTENSION_BEHAVIORS: [&str; 4] = ["require", "enable", "warn", "disable"];

impl Parser<'_, '_> {
    /// Parse the whole unit.
    ///
    /// Stops at end of file or once a fatal error is reported. A declaration
    /// that fails without consuming anything skips one token so the loop
    /// always advances.
    pub(crate) fn parse_module(&mut self) -> Module {
        let mut module = Module::default();
        while !self.reporter.is_fatal() {
            let token = self.peek();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Invalid => {
                    self.advance();
                    self.fatal(token.span, ErrorCode::E0001, "invalid token");
                }
                TokenKind::Directive => {
                    if let Some(extension) = self.directive() {
                        module.decls.push(Decl::Extension(extension));
                    }
                }
                _ => match self.declaration() {
                    Some(decls) => module.decls.extend(decls),
                    None => {
                        if self.peek().offset() == token.offset() && !self.reporter.is_fatal() {
                            self.advance();
                        }
                    }
                },
            }
        }
        tracing::debug!(decls = module.decls.len(), "parsed module");
        module
    }

    /// `#extension name : behavior`
    fn directive(&mut self) -> Option<ExtensionDecl> {
        let start = self.advance();
        let text = self.text(start);
        if text != "#extension" {
            self.error(
                start.span,
                ErrorCode::E1009,
                format!("unsupported directive '{text}'"),
            );
            return None;
        }
        let name = self.expect(TokenKind::Identifier, "an identifier")?;
        self.expect(TokenKind::Colon, "':'")?;
        let behavior = self.expect(TokenKind::Identifier, "an identifier")?;
        let behavior_text = self.text(behavior);
        if !EXTENSION_BEHAVIORS.contains(&behavior_text) {
            self.error(
                behavior.span,
                ErrorCode::E1009,
                "expected 'require', 'enable', 'warn', or 'disable'",
            );
            return None;
        }
        Some(ExtensionDecl {
            name: self.text(name).to_string(),
            behavior: behavior_text.to_string(),
            span: self.span_from(start.span),
        })
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn declaration(&mut self) -> Option<Vec<Decl>> {
        let start = self.peek();
        match start.kind {
            TokenKind::Semicolon => {
                self.advance();
                self.error(
                    start.span,
                    ErrorCode::E1013,
                    "expected a declaration, but found ';'",
                );
                return None;
            }
            TokenKind::Precision => {
                self.precision();
                return Some(Vec::new());
            }
            _ => {}
        }

        let modifiers = self.modifiers();
        let lookahead = self.peek();
        match lookahead.kind {
            TokenKind::Identifier if !self.is_type(self.text(lookahead)) => {
                return self
                    .interface_block(modifiers, start.span)
                    .map(|block| vec![Decl::InterfaceBlock(block)]);
            }
            TokenKind::Semicolon => {
                self.advance();
                return Some(vec![Decl::Modifiers(modifiers, self.span_from(start.span))]);
            }
            TokenKind::Struct => return self.struct_var_declaration(modifiers, start.span),
            _ => {}
        }

        let ty = self.type_ref()?;
        let name = self.expect_identifier()?;
        if self.check_next(TokenKind::LParen).is_some() {
            return self
                .function(modifiers, ty, name, start.span)
                .map(|function| vec![Decl::Function(function)]);
        }
        self.var_declaration_end(modifiers, ty, name, start.span)
            .map(|vars| vec![Decl::Var(vars)])
    }

    /// `precision highp float;` is accepted and ignored.
    fn precision(&mut self) {
        self.advance();
        let token = self.peek();
        if !matches!(
            token.kind,
            TokenKind::LowP | TokenKind::MediumP | TokenKind::HighP
        ) {
            let text = self.text(token);
            self.fatal(
                token.span,
                ErrorCode::E1001,
                format!("expected 'lowp', 'mediump', or 'highp', but found '{text}'"),
            );
            return;
        }
        self.advance();
        if self.type_ref().is_some() {
            self.expect(TokenKind::Semicolon, "';'");
        }
    }

    /// `struct Name { fields } [vars];`
    fn struct_declaration(&mut self) -> Option<StructDecl> {
        let start = self.expect(TokenKind::Struct, "'struct'")?;
        let name_token = self.expect_identifier()?;
        let name = self.text(name_token).to_string();
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut fields = Vec::new();
        while self.check_next(TokenKind::RBrace).is_none() {
            let field_start = self.peek().span;
            let modifiers = self.modifiers();
            let ty = self.type_ref()?;
            loop {
                let field_name = self.expect_identifier()?;
                let array_sizes = self.array_sizes()?;
                fields.push(FieldDecl {
                    modifiers,
                    ty: ty.clone(),
                    name: self.text(field_name).to_string(),
                    array_sizes,
                    span: self.span_from(field_start),
                });
                if self.check_next(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::Semicolon, "';'")?;
        }
        self.struct_names.insert(name.clone());
        if fields.is_empty() {
            self.error(
                name_token.span,
                ErrorCode::E1011,
                format!("struct '{name}' must contain at least one field"),
            );
        }
        Some(StructDecl {
            name,
            fields,
            span: self.span_from(start.span),
        })
    }

    /// A struct declaration and any variables of its type. An empty struct
    /// is consumed through its `;` and then dropped.
    fn struct_var_declaration(&mut self, modifiers: Modifiers, start: Span) -> Option<Vec<Decl>> {
        let decl = self.struct_declaration()?;
        let valid = !decl.fields.is_empty();
        let ty = TypeRef::new(decl.name.clone(), decl.span);
        let mut decls = vec![Decl::Struct(decl)];
        if self.check(TokenKind::Identifier) {
            let name = self.expect_identifier()?;
            let vars = self.var_declaration_end(modifiers, ty, name, start)?;
            decls.push(Decl::Var(vars));
        } else {
            self.expect(TokenKind::Semicolon, "';'")?;
        }
        valid.then_some(decls)
    }

    /// `Name { members } [instance[N]];`, entered when a declaration starts
    /// with an identifier that is not a type.
    fn interface_block(&mut self, modifiers: Modifiers, start: Span) -> Option<InterfaceBlockDecl> {
        let name_token = self.advance();
        let type_name = self.text(name_token).to_string();
        if !self.check(TokenKind::LBrace) {
            // Almost always a misspelled type rather than a block.
            self.error(
                name_token.span,
                ErrorCode::E1005,
                format!("no type named '{type_name}'"),
            );
            return None;
        }
        self.advance();
        let mut fields = Vec::new();
        while self.check_next(TokenKind::RBrace).is_none() {
            if self.check(TokenKind::Eof) {
                let found = self.peek().span;
                self.fatal(
                    found,
                    ErrorCode::E1003,
                    "expected '}', but found end of file",
                );
                return None;
            }
            fields.push(self.var_declarations()?);
        }
        let mut valid = true;
        if fields.is_empty() {
            self.error(
                name_token.span,
                ErrorCode::E1012,
                format!("interface block '{type_name}' must contain at least one member"),
            );
            valid = false;
        }

        let mut instance_name = None;
        let mut instance_sizes = Vec::new();
        if let Some(instance) = self.check_next(TokenKind::Identifier) {
            instance_name = Some(self.text(instance).to_string());
            while self.check_next(TokenKind::LBracket).is_some() {
                if let Some(close) = self.check_next(TokenKind::RBracket) {
                    self.error(
                        close.span,
                        ErrorCode::E1006,
                        "unsized arrays are not permitted",
                    );
                    valid = false;
                    continue;
                }
                match self.array_dimension() {
                    Some(size) => instance_sizes.push(size),
                    None if self.reporter.is_fatal() => return None,
                    None => valid = false,
                }
            }
        }
        self.expect(TokenKind::Semicolon, "';'")?;
        valid.then(|| InterfaceBlockDecl {
            modifiers,
            type_name,
            fields,
            instance_name,
            instance_sizes,
            span: self.span_from(start),
        })
    }

    /// Parameters and body after `type name (`.
    fn function(
        &mut self,
        modifiers: Modifiers,
        return_type: TypeRef,
        name: Token,
        start: Span,
    ) -> Option<FunctionDecl> {
        let mut params = Vec::new();
        if !self.empty_parameter_list() {
            loop {
                params.push(self.parameter()?);
                if self.check_next(TokenKind::Comma).is_none() {
                    break;
                }
            }
            self.expect(TokenKind::RParen, "')'")?;
        }
        let body = if self.check_next(TokenKind::Semicolon).is_some() {
            None
        } else {
            Some(self.block()?)
        };
        Some(FunctionDecl {
            modifiers,
            return_type,
            name: self.text(name).to_string(),
            params,
            body,
            span: self.span_from(start),
        })
    }

    /// Consume `)` or `void)`.
    fn empty_parameter_list(&mut self) -> bool {
        if self.check_next(TokenKind::RParen).is_some() {
            return true;
        }
        let token = self.peek();
        if token.kind != TokenKind::Identifier || self.text(token) != "void" {
            return false;
        }
        self.try_parse(|p| {
            p.advance();
            p.check_next(TokenKind::RParen)
        })
        .is_some()
    }

    fn parameter(&mut self) -> Option<ParamDecl> {
        let start = self.peek().span;
        let modifiers = self.modifiers();
        let ty = self.type_ref()?;
        let name = self.expect_identifier()?;
        let array_sizes = self.array_sizes()?;
        Some(ParamDecl {
            modifiers,
            ty,
            name: self.text(name).to_string(),
            array_sizes,
            span: self.span_from(start),
        })
    }

    /// `modifiers type name ...;` as a complete declaration.
    pub(crate) fn var_declarations(&mut self) -> Option<VarDeclarations> {
        let start = self.peek().span;
        let modifiers = self.modifiers();
        let ty = self.type_ref()?;
        let name = self.expect_identifier()?;
        self.var_declaration_end(modifiers, ty, name, start)
    }

    /// Declarators after the first name: `[N] = init, other[M], ...;`
    ///
    /// A failed initializer keeps the variable with no initializer and ends
    /// the list there.
    pub(crate) fn var_declaration_end(
        &mut self,
        modifiers: Modifiers,
        base_type: TypeRef,
        first: Token,
        start: Span,
    ) -> Option<VarDeclarations> {
        let mut vars = Vec::new();
        let mut valid = true;
        let mut name = first;
        loop {
            let sizes = self.array_sizes();
            if self.reporter.is_fatal() {
                return None;
            }
            valid &= sizes.is_some();
            let mut var = VarDecl {
                name: self.text(name).to_string(),
                array_sizes: sizes.unwrap_or_default(),
                init: None,
                span: name.span,
            };
            if self.check_next(TokenKind::Eq).is_some() {
                var.init = self.assignment_expression();
                if var.init.is_none() {
                    var.span = self.span_from(name.span);
                    vars.push(var);
                    return valid.then(|| VarDeclarations {
                        modifiers,
                        base_type,
                        vars,
                        span: self.span_from(start),
                    });
                }
            }
            var.span = self.span_from(name.span);
            vars.push(var);
            if self.check_next(TokenKind::Comma).is_none() {
                break;
            }
            name = self.expect_identifier()?;
        }
        self.expect(TokenKind::Semicolon, "';'")?;
        valid.then(|| VarDeclarations {
            modifiers,
            base_type,
            vars,
            span: self.span_from(start),
        })
    }
}
