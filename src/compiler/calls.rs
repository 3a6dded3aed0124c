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

//! Resolution of builtin function calls.

use super::*;
use crate::builtins::{self, Builtin, BuiltinKind};

impl ExpressionCompiler {
    /// Resolves a call node against the builtin registry.
    pub(super) fn compile_call(&self, node: &SyntaxNode, status: &mut CompileStatus) -> Option<Exp> {
        let name = node.token();
        let Some(builtin) = builtins::lookup(name) else {
            status.report(Diagnostic::MethodNotFound(name.to_string()));
            return None;
        };

        let argument = node.child(0);
        if argument.kind() == SyntaxKind::ArgumentList {
            return self.compile_point_call(builtin, argument, status);
        }

        // A single nested expression: only scalar builtins accept one.
        match builtin.kind {
            BuiltinKind::Scalar(f) => {
                let arg = self.compile_node(argument, status)?;
                Some(Exp::Scalar {
                    name: builtin.name,
                    f,
                    arg: Box::new(arg),
                })
            }
            BuiltinKind::Points { arity, .. } => {
                status.report(Diagnostic::IncorrectArgumentCount {
                    name: builtin.name.to_string(),
                    expected: arity,
                    actual: 1,
                });
                None
            }
            BuiltinKind::PointArray { min_arity, .. } => {
                status.report(Diagnostic::IncorrectArgumentCount {
                    name: builtin.name.to_string(),
                    expected: min_arity,
                    actual: 1,
                });
                None
            }
        }
    }

    /// Resolves a bracketed point-name list as the call's arguments.
    fn compile_point_call(
        &self,
        builtin: &'static Builtin,
        list: &SyntaxNode,
        status: &mut CompileStatus,
    ) -> Option<Exp> {
        match builtin.kind {
            // The list production also carries single scalar arguments; a
            // one-element list compiles as an ordinary nested expression so
            // forms like `sqrt(AB)` stay valid.
            BuiltinKind::Scalar(f) => {
                if list.children().len() != 1 {
                    status.report(Diagnostic::IncorrectArgumentCount {
                        name: builtin.name.to_string(),
                        expected: 1,
                        actual: list.children().len(),
                    });
                    return None;
                }
                let arg = self.compile_node(list.child(0), status)?;
                Some(Exp::Scalar {
                    name: builtin.name,
                    f,
                    arg: Box::new(arg),
                })
            }
            BuiltinKind::Points { arity, eval } => {
                let points = self.resolve_point_list(list, status)?;
                if points.len() != arity {
                    status.report(Diagnostic::IncorrectArgumentCount {
                        name: builtin.name.to_string(),
                        expected: arity,
                        actual: points.len(),
                    });
                    return None;
                }
                Some(Exp::Points {
                    name: builtin.name,
                    eval,
                    points,
                })
            }
            BuiltinKind::PointArray { min_arity, eval } => {
                let points = self.resolve_point_list(list, status)?;
                if points.len() < min_arity {
                    status.report(Diagnostic::IncorrectArgumentCount {
                        name: builtin.name.to_string(),
                        expected: min_arity,
                        actual: points.len(),
                    });
                    return None;
                }
                Some(Exp::Points {
                    name: builtin.name,
                    eval,
                    points,
                })
            }
        }
    }

    /// Resolves each argument name to a point, in order, stopping at the
    /// first failure.
    fn resolve_point_list(
        &self,
        list: &SyntaxNode,
        status: &mut CompileStatus,
    ) -> Option<Vec<FigureRef>> {
        let mut points = Vec::with_capacity(list.children().len());
        for argument in list.children() {
            points.push(self.resolve_point(argument.token(), status)?);
        }
        Some(points)
    }

    /// Resolves one point name and records it as a dependency.
    fn resolve_point(&self, name: &str, status: &mut CompileStatus) -> Option<FigureRef> {
        let Some(figure) = self.binder.resolve_figure(name) else {
            status.report(Diagnostic::UnknownIdentifier(name.to_string()));
            return None;
        };
        if figure.coordinates().is_none() {
            status.report(Diagnostic::FigureIsNotAPoint(name.to_string()));
            return None;
        }
        if !self.binder.figure_allowed(&figure) {
            status.report(Diagnostic::DependencyCycle(name.to_string()));
            return None;
        }
        status.add_dependency(&figure);
        Some(figure)
    }
}
