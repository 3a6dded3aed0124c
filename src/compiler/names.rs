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

//! Identifier, property-access, and two-point-shorthand resolution.

use super::*;

/// Outcome of the two-point shorthand attempt.
///
/// Three outcomes are needed: a match, a diagnosed failure that must not fall
/// through to plain identifier binding, and "no partition exists" which must.
pub(super) enum TwoPointResolution {
    /// The identifier split into two known points.
    Resolved(Exp),
    /// The split matched but resolution failed; a diagnostic was recorded.
    Failed,
    /// No exact two-name partition exists; try ordinary binding.
    NotApplicable,
}

impl ExpressionCompiler {
    /// Resolves an identifier node.
    ///
    /// The two-point shorthand has precedence over plain identifier binding;
    /// only a `NotApplicable` outcome falls through to the bound parameter.
    pub(super) fn compile_identifier(
        &self,
        node: &SyntaxNode,
        status: &mut CompileStatus,
    ) -> Option<Exp> {
        let text = node.token();
        match self.try_two_points(text, status) {
            TwoPointResolution::Resolved(exp) => Some(exp),
            TwoPointResolution::Failed => None,
            TwoPointResolution::NotApplicable => match self.binder.resolve_parameter(text) {
                Some(exp) => Some(exp),
                None => {
                    status.report(Diagnostic::UnknownIdentifier(text.to_string()));
                    None
                }
            },
        }
    }

    /// Resolves `figure.property` into a late-bound property read.
    pub(super) fn compile_property_access(
        &self,
        node: &SyntaxNode,
        status: &mut CompileStatus,
    ) -> Option<Exp> {
        let figure_name = node.child(0).token();
        let property = node.child(1).token();

        let Some(figure) = self.binder.resolve_figure(figure_name) else {
            status.report(Diagnostic::UnknownIdentifier(figure_name.to_string()));
            return None;
        };
        if !self.binder.figure_allowed(&figure) {
            status.report(Diagnostic::DependencyCycle(figure_name.to_string()));
            return None;
        }
        // Existence is verified now; the value itself is read at evaluation time.
        if figure.property(property).is_none() {
            status.report(Diagnostic::PropertyNotFound {
                figure: figure_name.to_string(),
                property: property.to_string(),
            });
            return None;
        }

        status.add_dependency(&figure);
        Some(Exp::Property {
            figure,
            property: property.to_string(),
        })
    }

    /// Attempts to split a compound identifier into two known point names.
    ///
    /// The longest point name matching as a prefix and the longest matching
    /// as a suffix are found independently (case-insensitively); the
    /// shorthand fires only when the two partition the whole identifier with
    /// no gap or overlap. Equal-length candidates tie-break to the first
    /// figure in registry order.
    pub(super) fn try_two_points(
        &self,
        text: &str,
        status: &mut CompileStatus,
    ) -> TwoPointResolution {
        let Some(drawing) = self.binder.drawing() else {
            return TwoPointResolution::NotApplicable;
        };

        let point_names: Vec<String> = drawing
            .figures()
            .iter()
            .filter(|figure| figure.coordinates().is_some())
            .map(|figure| figure.name().to_string())
            .collect();

        let mut longest_prefix = "";
        let mut longest_suffix = "";
        for name in &point_names {
            if starts_with_ignore_case(text, name) && char_len(name) > char_len(longest_prefix) {
                longest_prefix = name;
            }
            if ends_with_ignore_case(text, name) && char_len(name) > char_len(longest_suffix) {
                longest_suffix = name;
            }
        }

        if char_len(longest_prefix) + char_len(longest_suffix) != char_len(text) {
            return TwoPointResolution::NotApplicable;
        }

        // The registry may hold a non-point figure under the matched name;
        // the lookup result, not the candidate list, decides.
        let first = self
            .binder
            .resolve_figure(longest_prefix)
            .expect("registry is read-only during a compile");
        let second = self
            .binder
            .resolve_figure(longest_suffix)
            .expect("registry is read-only during a compile");

        if first.coordinates().is_none() {
            status.report(Diagnostic::FigureIsNotAPoint(longest_prefix.to_string()));
            return TwoPointResolution::Failed;
        }
        if second.coordinates().is_none() {
            status.report(Diagnostic::FigureIsNotAPoint(longest_suffix.to_string()));
            return TwoPointResolution::Failed;
        }
        if !self.binder.figure_allowed(&first) {
            status.report(Diagnostic::DependencyCycle(longest_prefix.to_string()));
            return TwoPointResolution::Failed;
        }
        if !self.binder.figure_allowed(&second) {
            status.report(Diagnostic::DependencyCycle(longest_suffix.to_string()));
            return TwoPointResolution::Failed;
        }

        status.add_dependency(&first);
        status.add_dependency(&second);
        TwoPointResolution::Resolved(Exp::Distance(first, second))
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut chars = text.chars();
    prefix.chars().all(|expected| {
        chars
            .next()
            .is_some_and(|actual| chars_eq_ignore_case(actual, expected))
    })
}

fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    let mut chars = text.chars().rev();
    suffix.chars().rev().all(|expected| {
        chars
            .next()
            .is_some_and(|actual| chars_eq_ignore_case(actual, expected))
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
