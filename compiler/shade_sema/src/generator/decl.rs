//! Top-level declarations: extensions, structs, globals, interface blocks
//! and functions.

use shade_diagnostic::{Diagnostic, ErrorCode};
use shade_ir::ast::{
    Decl, FunctionDecl, InterfaceBlockDecl, Module, StmtId, StructDecl, TypeRef,
    VarDeclarations as AstVarDeclarations,
};
use shade_ir::{ModifierFlags, Span};
use shade_types::{Field, Idx};

use super::IrGenerator;
use crate::ir::{
    Extension, Function, FunctionDeclaration, FunctionId, InterfaceBlock, ProgramElement,
    Storage, VarDeclaration, VarDeclarations, Variable,
};
use crate::symbols::Symbol;

/// Converted return and parameter types of a function declaration.
struct Signature {
    return_type: Idx,
    parameters: Vec<Variable>,
}

impl IrGenerator<'_, '_> {
    pub(super) fn convert_module(&mut self, module: &Module) {
        for decl in &module.decls {
            match decl {
                Decl::Extension(extension) => {
                    self.program
                        .elements
                        .push(ProgramElement::Extension(Extension {
                            name: extension.name.clone(),
                            behavior: extension.behavior.clone(),
                            span: extension.span,
                        }));
                }
                Decl::Modifiers(modifiers, span) => {
                    if self.settings().replace_settings {
                        self.program.layout_flags |= modifiers.layout.flags;
                    }
                    self.program
                        .elements
                        .push(ProgramElement::Modifiers(*modifiers, *span));
                }
                Decl::Struct(decl) => self.struct_declaration(decl),
                Decl::Var(decls) => {
                    if let Some(vars) = self.var_declarations(decls, Storage::Global) {
                        self.program.elements.push(ProgramElement::GlobalVars(vars));
                    }
                }
                Decl::InterfaceBlock(block) => self.interface_block(block),
                Decl::Function(function) => self.function(function, false),
            }
        }
        self.check_main();
    }

    fn check_main(&mut self) {
        if !self.program.kind.requires_main() {
            return;
        }
        let has_main = self
            .program
            .functions
            .iter()
            .any(|function| function.name == "main" && function.is_defined && !function.is_builtin);
        if !has_main {
            self.error(
                Span::point(0),
                ErrorCode::E2016,
                "program does not contain a 'main' function",
            );
        }
    }

    /// Resolve a written type, including its array dimensions.
    pub(super) fn convert_type(&mut self, ty: &TypeRef) -> Option<Idx> {
        let found = match self.symbols.lookup(&ty.name) {
            Some(Symbol::Type(idx)) => Some(*idx),
            _ => None,
        };
        let Some(base) = found else {
            let suggestion = self
                .symbols
                .find_similar(&ty.name, |symbol| matches!(symbol, Symbol::Type(_)));
            self.error_unknown(
                ty.span,
                ErrorCode::E2003,
                format!("unknown type '{}'", ty.name),
                suggestion,
            );
            return None;
        };
        if self.settings().strict_es2_mode && self.program.types.component_type(base) == Idx::UINT
        {
            self.error(
                ty.span,
                ErrorCode::E3003,
                format!("type '{}' is not allowed", ty.name),
            );
            return None;
        }
        Some(self.array_type(base, &ty.array_sizes))
    }

    /// `base[sizes[0]][sizes[1]]...`; the first dimension is outermost.
    pub(super) fn array_type(&mut self, base: Idx, sizes: &[u32]) -> Idx {
        sizes
            .iter()
            .rev()
            .fold(base, |ty, &size| self.program.types.array(ty, Some(size)))
    }

    /// Declare every variable of a declaration list in the current scope.
    ///
    /// Each variable is declared after its initializer is converted, so
    /// `float x = x;` reads an outer `x`.
    pub(super) fn var_declarations(
        &mut self,
        decls: &AstVarDeclarations,
        storage: Storage,
    ) -> Option<VarDeclarations> {
        let base_type = self.convert_type(&decls.base_type)?;
        if self.program.types.is_generic(base_type) {
            let message = format!(
                "type '{}' may only be used in function declarations",
                self.format_type(base_type)
            );
            self.error(decls.base_type.span, ErrorCode::E2003, message);
            return None;
        }
        if base_type == Idx::VOID {
            self.error(
                decls.base_type.span,
                ErrorCode::E2003,
                "variables of type 'void' are not allowed",
            );
            return None;
        }

        let mut ok = true;
        let mut vars = Vec::with_capacity(decls.vars.len());
        for var in &decls.vars {
            let ty = self.array_type(base_type, &var.array_sizes);
            let value = match var.init {
                Some(init) => {
                    let value = self
                        .expression(init)
                        .and_then(|value| self.coerce(value, ty));
                    ok &= value.is_some();
                    value
                }
                None => None,
            };
            let id = self.program.add_variable(Variable::new(
                &var.name,
                ty,
                storage,
                decls.modifiers,
                var.span,
            ));
            if !self.symbols.declare(&var.name, Symbol::Variable(id)) {
                self.error_redefinition(var.span, &var.name);
                ok = false;
                continue;
            }
            vars.push(VarDeclaration {
                var: id,
                value,
                span: var.span,
            });
        }
        ok.then(|| VarDeclarations {
            base_type,
            vars,
            span: decls.span,
        })
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = %decl.name))]
    fn struct_declaration(&mut self, decl: &StructDecl) {
        let mut ok = true;
        let mut fields: Vec<Field> = Vec::with_capacity(decl.fields.len());
        for field in &decl.fields {
            let Some(base) = self.convert_type(&field.ty) else {
                ok = false;
                continue;
            };
            if fields.iter().any(|existing| existing.name == field.name) {
                self.error(
                    field.span,
                    ErrorCode::E2004,
                    format!("field '{}' was already defined in the same struct", field.name),
                );
                ok = false;
                continue;
            }
            let ty = self.array_type(base, &field.array_sizes);
            fields.push(Field {
                modifiers: field.modifiers,
                name: field.name.clone(),
                ty,
            });
        }
        if !ok {
            return;
        }
        let ty = self.program.types.struct_type(&decl.name, fields);
        if !self.symbols.declare(&decl.name, Symbol::Type(ty)) {
            self.error_redefinition(decl.span, &decl.name);
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = %block.type_name))]
    fn interface_block(&mut self, block: &InterfaceBlockDecl) {
        let Some(fields) = self.interface_fields(block) else {
            return;
        };
        let block_type = self.program.types.struct_type(&block.type_name, fields);
        let ty = self.array_type(block_type, &block.instance_sizes);
        let name = block
            .instance_name
            .as_deref()
            .unwrap_or(&block.type_name);
        let variable = self.program.add_variable(Variable::new(
            name,
            ty,
            Storage::Global,
            block.modifiers,
            block.span,
        ));

        let mut ok = true;
        if let Some(instance) = &block.instance_name {
            ok = self.symbols.declare(instance, Symbol::Variable(variable));
            if !ok {
                self.error_redefinition(block.span, instance);
            }
        } else {
            // Members of an anonymous block are referenced by bare name.
            let members: Vec<String> = self
                .program
                .types
                .fields(block_type)
                .iter()
                .map(|field| field.name.clone())
                .collect();
            for (index, member) in members.iter().enumerate() {
                let index = u32::try_from(index).unwrap_or(u32::MAX);
                if !self.symbols.declare(
                    member,
                    Symbol::Field {
                        owner: variable,
                        index,
                    },
                ) {
                    self.error_redefinition(block.span, member);
                    ok = false;
                }
            }
        }
        if ok {
            self.program
                .elements
                .push(ProgramElement::InterfaceBlock(InterfaceBlock {
                    variable,
                    type_name: block.type_name.clone(),
                    instance_name: block.instance_name.clone(),
                    span: block.span,
                }));
        }
    }

    fn interface_fields(&mut self, block: &InterfaceBlockDecl) -> Option<Vec<Field>> {
        let mut ok = true;
        let mut fields: Vec<Field> = Vec::new();
        for decls in &block.fields {
            if decls.modifiers.has(ModifierFlags::STORAGE) {
                self.error(
                    decls.span,
                    ErrorCode::E2015,
                    "interface block fields may not have storage qualifiers",
                );
                ok = false;
                continue;
            }
            let Some(base) = self.convert_type(&decls.base_type) else {
                ok = false;
                continue;
            };
            for var in &decls.vars {
                if var.init.is_some() {
                    self.error(
                        var.span,
                        ErrorCode::E2015,
                        "initializers are not permitted on interface block fields",
                    );
                    ok = false;
                    continue;
                }
                if fields.iter().any(|existing| existing.name == var.name) {
                    self.error(
                        var.span,
                        ErrorCode::E2004,
                        format!("field '{}' was already defined in the same block", var.name),
                    );
                    ok = false;
                    continue;
                }
                let ty = self.array_type(base, &var.array_sizes);
                fields.push(Field {
                    modifiers: decls.modifiers,
                    name: var.name.clone(),
                    ty,
                });
            }
        }
        ok.then_some(fields)
    }

    /// Declare (and, with a body, define) a function.
    ///
    /// A prototype and a later definition with the same parameter types
    /// share one [`FunctionDeclaration`]; the definition's parameter names
    /// win. Intrinsics come through here too, with `is_builtin` set.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %decl.name))]
    pub(super) fn function(&mut self, decl: &FunctionDecl, is_builtin: bool) {
        let Some(signature) = self.signature(decl) else {
            return;
        };

        let types = &self.program.types;
        let is_generic = types.is_generic(signature.return_type)
            || signature
                .parameters
                .iter()
                .any(|param| types.is_generic(param.ty));
        if is_generic {
            if decl.body.is_some() {
                self.error(
                    decl.span,
                    ErrorCode::E2017,
                    format!("generic function '{}' may not have a body", decl.name),
                );
                return;
            }
            self.expand_generics(decl, &signature, is_builtin);
            return;
        }

        let Some(id) = self.declare_signature(decl, signature, is_builtin) else {
            return;
        };
        if let Some(body) = decl.body {
            self.function_body(id, decl, body);
        }
    }

    fn signature(&mut self, decl: &FunctionDecl) -> Option<Signature> {
        let return_type = self.convert_type(&decl.return_type);
        let mut ok = return_type.is_some();
        let mut parameters = Vec::with_capacity(decl.params.len());
        for param in &decl.params {
            let Some(base) = self.convert_type(&param.ty) else {
                ok = false;
                continue;
            };
            let ty = self.array_type(base, &param.array_sizes);
            parameters.push(Variable::new(
                &param.name,
                ty,
                Storage::Parameter,
                param.modifiers,
                param.span,
            ));
        }
        let return_type = return_type?;
        ok.then_some(Signature {
            return_type,
            parameters,
        })
    }

    /// Declare one concrete overload per candidate of the generic types.
    ///
    /// All generic types in a signature advance together: the `i`th
    /// expansion substitutes the `i`th candidate of each. Expansions that
    /// repeat an overload already visible are skipped.
    fn expand_generics(&mut self, decl: &FunctionDecl, signature: &Signature, is_builtin: bool) {
        let types = &self.program.types;
        let count = std::iter::once(signature.return_type)
            .chain(signature.parameters.iter().map(|param| param.ty))
            .filter(|&ty| types.is_generic(ty))
            .map(|ty| types.candidates(ty).len())
            .min()
            .unwrap_or(0);
        let substitute =
            |ty: Idx, i: usize| types.candidates(ty).get(i).copied().unwrap_or(ty);
        let expansions: Vec<Signature> = (0..count)
            .map(|i| Signature {
                return_type: substitute(signature.return_type, i),
                parameters: signature
                    .parameters
                    .iter()
                    .map(|param| Variable {
                        ty: substitute(param.ty, i),
                        ..param.clone()
                    })
                    .collect(),
            })
            .collect();

        let mut declared = 0_usize;
        for expansion in expansions {
            let param_types: Vec<Idx> = expansion.parameters.iter().map(|p| p.ty).collect();
            if self.find_overload(&decl.name, &param_types).is_some() {
                continue;
            }
            if self.add_function(decl, expansion, is_builtin).is_some() {
                declared += 1;
            }
        }
        tracing::trace!(name = %decl.name, declared, "expanded generic function");
    }

    /// Visible overload of `name` with exactly these parameter types.
    fn find_overload(&self, name: &str, param_types: &[Idx]) -> Option<FunctionId> {
        let symbol = self.symbols.lookup(name)?;
        symbol.overloads().iter().copied().find(|&id| {
            let other = self.program.function(id);
            other.parameters.len() == param_types.len()
                && other
                    .parameters
                    .iter()
                    .zip(param_types)
                    .all(|(&param, &ty)| self.program.variable(param).ty == ty)
        })
    }

    /// Match a concrete signature against earlier declarations of the same
    /// name, or declare it as a new overload.
    fn declare_signature(
        &mut self,
        decl: &FunctionDecl,
        signature: Signature,
        is_builtin: bool,
    ) -> Option<FunctionId> {
        let conflicts = self
            .symbols
            .lookup(&decl.name)
            .is_some_and(|symbol| !symbol.is_function());
        if conflicts {
            self.error_redefinition(decl.span, &decl.name);
            return None;
        }

        let param_types: Vec<Idx> = signature.parameters.iter().map(|p| p.ty).collect();
        let Some(existing) = self.find_overload(&decl.name, &param_types) else {
            return self.add_function(decl, signature, is_builtin);
        };

        let other = self.program.function(existing);
        let (other_return, other_defined) = (other.return_type, other.is_defined);
        let other_span = (!other.is_builtin).then_some(other.span);
        let previous = other.parameters.clone();
        if other_return != signature.return_type {
            let message = format!(
                "functions '{}' and '{}' differ only in return type",
                self.program.format_signature(
                    &decl.name,
                    signature.return_type,
                    &signature.parameters
                ),
                self.program.describe_function(existing),
            );
            self.error(decl.span, ErrorCode::E2004, message);
            return None;
        }
        let mismatch = signature
            .parameters
            .iter()
            .zip(&previous)
            .position(|(param, &id)| param.modifiers != self.program.variable(id).modifiers);
        if let Some(position) = mismatch {
            self.error(
                decl.span,
                ErrorCode::E2004,
                format!(
                    "modifiers on parameter {} differ between declaration and definition",
                    position + 1
                ),
            );
            return None;
        }
        if decl.body.is_some() {
            if other_defined {
                let message = format!(
                    "duplicate definition of {}",
                    self.program.describe_function(existing)
                );
                let mut diagnostic = Diagnostic::error(ErrorCode::E2004)
                    .with_message(message)
                    .with_label(decl.span, "");
                if let Some(other_span) = other_span {
                    diagnostic =
                        diagnostic.with_secondary_label(other_span, "previously defined here");
                }
                self.reporter.report(diagnostic);
                return None;
            }
            self.program.function_mut(existing).span = decl.span;
            for (param, id) in signature.parameters.into_iter().zip(previous) {
                let variable = self.program.variable_mut(id);
                variable.name = param.name;
                variable.span = param.span;
            }
        }
        Some(existing)
    }

    fn add_function(
        &mut self,
        decl: &FunctionDecl,
        signature: Signature,
        is_builtin: bool,
    ) -> Option<FunctionId> {
        let parameters = signature
            .parameters
            .into_iter()
            .map(|param| self.program.add_variable(param))
            .collect();
        let id = self.program.add_function(FunctionDeclaration {
            name: decl.name.clone(),
            parameters,
            return_type: signature.return_type,
            modifiers: decl.modifiers,
            is_defined: is_builtin,
            is_builtin,
            span: decl.span,
        });
        if !self.symbols.declare_function(&decl.name, id) {
            self.error_redefinition(decl.span, &decl.name);
            return None;
        }
        Some(id)
    }

    fn function_body(&mut self, id: FunctionId, decl: &FunctionDecl, body: StmtId) {
        self.program.function_mut(id).is_defined = true;
        let parameters = self.program.function(id).parameters.clone();
        self.current_function = Some(id);
        self.loop_depth = 0;
        self.switch_depth = 0;

        let body = self.scoped(|this| {
            for &param in &parameters {
                let variable = this.program.variable(param);
                let (name, span) = (variable.name.clone(), variable.span);
                if !this.symbols.declare(&name, Symbol::Variable(param)) {
                    this.error_redefinition(span, &name);
                }
            }
            this.statement(body)
        });
        self.current_function = None;

        if let Some(body) = body {
            self.program.elements.push(ProgramElement::Function(Function {
                declaration: id,
                body,
                span: decl.span,
            }));
        }
    }
}
