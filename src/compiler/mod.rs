/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Recursive translation of syntax trees into executable expressions.

mod binder;
mod calls;
mod names;

use crate::ast::{SyntaxKind, SyntaxNode};
use crate::diagnostics::{CompileStatus, Diagnostic};
use crate::expr::{CompiledConstant, CompiledFunction, Exp};
use crate::model::{Drawing, FigureRef};
use std::rc::Rc;
use tracing::debug;

use self::binder::Binder;

/// Conventional name of the single free variable in function compiles.
const PARAMETER_NAME: &str = "x";

/// Compiles parsed expression trees against a live figure registry.
///
/// An instance is reusable across independent compilations; each compilation
/// begins with [`ExpressionCompiler::set_context`] (or
/// [`ExpressionCompiler::clear_context`] for context-free expressions) so
/// stale state never leaks between compiles.
#[derive(Default)]
pub struct ExpressionCompiler {
    binder: Binder,
}

impl ExpressionCompiler {
    /// Creates a compiler with no drawing context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the figure registry and the figure-use policy for the next
    /// compilation.
    ///
    /// The policy answers whether reading a figure's current value is safe,
    /// typically "would this close a cycle in the dependency graph". Both are
    /// read-only for the duration of a compile.
    pub fn set_context(
        &mut self,
        drawing: Rc<dyn Drawing>,
        policy: impl Fn(&FigureRef) -> bool + 'static,
    ) {
        debug!("compile context set");
        self.binder.set_context(drawing, Box::new(policy));
    }

    /// Removes the drawing context for context-free expressions.
    pub fn clear_context(&mut self) {
        self.binder.clear_context();
    }

    /// Compiles a zero-argument real-valued expression.
    ///
    /// Returns `None` when any subtree fails to resolve; the failure is
    /// recorded in `status` before the abort.
    pub fn compile_constant(
        &mut self,
        root: &SyntaxNode,
        status: &mut CompileStatus,
    ) -> Option<CompiledConstant> {
        debug!("compiling constant expression");
        self.binder.clear_parameter();
        let body = self.compile_node(root, status)?;
        Some(CompiledConstant::new(body))
    }

    /// Compiles a one-argument real-valued function over the parameter `x`.
    ///
    /// Returns `None` when the body fails to compile; the failure is recorded
    /// in `status` before the abort.
    pub fn compile_function(
        &mut self,
        root: &SyntaxNode,
        status: &mut CompileStatus,
    ) -> Option<CompiledFunction> {
        debug!("compiling function of '{PARAMETER_NAME}'");
        self.binder.register_parameter(PARAMETER_NAME);
        let body = self.compile_node(root, status);
        self.binder.clear_parameter();
        Some(CompiledFunction::new(body?))
    }

    /// Dispatches one syntax node on its discriminant.
    pub(super) fn compile_node(
        &self,
        node: &SyntaxNode,
        status: &mut CompileStatus,
    ) -> Option<Exp> {
        match node.kind() {
            SyntaxKind::Number => Some(self.compile_number(node)),
            SyntaxKind::Identifier => self.compile_identifier(node, status),
            SyntaxKind::UnaryOp => self.compile_unary(node, status),
            SyntaxKind::BinaryOp => self.compile_binary(node, status),
            SyntaxKind::Call => self.compile_call(node, status),
            SyntaxKind::PropertyAccess => self.compile_property_access(node, status),
            // Argument lists only appear as the direct child of a call.
            SyntaxKind::ArgumentList => {
                panic!("malformed syntax tree: ArgumentList outside a call")
            }
        }
    }

    /// Converts numeric literal token text, locale-invariantly.
    fn compile_number(&self, node: &SyntaxNode) -> Exp {
        let token = node.token();
        let value = token.parse::<f64>().unwrap_or_else(|_| {
            panic!("malformed syntax tree: invalid numeric literal '{token}'")
        });
        Exp::val(value)
    }

    /// Compiles unary operations; negation is the only supported operator.
    fn compile_unary(&self, node: &SyntaxNode, status: &mut CompileStatus) -> Option<Exp> {
        let operator = node.token();
        if operator != "-" {
            panic!("malformed syntax tree: unsupported unary operator '{operator}'");
        }
        let operand = self.compile_node(node.child(0), status)?;
        Some(Exp::neg(operand))
    }

    /// Compiles binary operations, short-circuiting on the first failed
    /// operand.
    fn compile_binary(&self, node: &SyntaxNode, status: &mut CompileStatus) -> Option<Exp> {
        let left = self.compile_node(node.child(0), status)?;
        let right = self.compile_node(node.child(1), status)?;
        let compiled = match node.token() {
            "+" => Exp::add(left, right),
            "-" => Exp::sub(left, right),
            "*" => Exp::mul(left, right),
            "/" => Exp::div(left, right),
            "^" => Exp::pow(left, right),
            operator => {
                panic!("malformed syntax tree: unsupported binary operator '{operator}'")
            }
        };
        Some(compiled)
    }
}
