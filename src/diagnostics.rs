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

//! Per-compile diagnostics and dependency accumulation.
//!
//! [`CompileStatus`] is a pure accumulator with no resolution logic. Every
//! failing resolution path appends exactly one [`Diagnostic`] before
//! returning `None`, so a `None` result always means "already explained" and
//! propagates upward without re-diagnosis.

use crate::model::{FigureRef, same_figure};
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// One structured compile error.
///
/// All variants are recoverable user errors; none aborts the host process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// An identifier neither split into two point names nor matched a bound symbol.
    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),
    /// A name resolved to a figure that is not a point where a point was required.
    #[error("Figure '{0}' is not a point")]
    FigureIsNotAPoint(String),
    /// A figure has no real-valued property with the requested name.
    #[error("Figure '{figure}' has no property '{property}'")]
    PropertyNotFound {
        /// Figure name as written in the source.
        figure: String,
        /// Requested property name.
        property: String,
    },
    /// A call named no known builtin function.
    #[error("Unknown function '{0}'")]
    MethodNotFound(String),
    /// A builtin call received the wrong number of point arguments.
    #[error("Function '{name}' expects {expected} arguments, found {actual}")]
    IncorrectArgumentCount {
        /// Builtin name.
        name: String,
        /// Declared parameter count (or minimum for variadic builtins).
        expected: usize,
        /// Provided argument count.
        actual: usize,
    },
    /// Reading the figure's current value is disallowed by the compile policy,
    /// typically because it would close a dependency cycle.
    #[error("Using figure '{0}' would create a dependency cycle")]
    DependencyCycle(String),
}

/// Accumulated diagnostics and dependency set for one compilation.
///
/// Created fresh per compile and returned to the caller; the compiler never
/// retains it. The diagnostics list is append-only and never cleared
/// mid-compile, so everything recorded before an abort is preserved.
#[derive(Default)]
pub struct CompileStatus {
    diagnostics: Vec<Diagnostic>,
    dependencies: Vec<FigureRef>,
}

impl fmt::Debug for CompileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Figure handles render by name; the trait carries no Debug bound.
        let dependencies: Vec<&str> = self
            .dependencies
            .iter()
            .map(|figure| figure.name())
            .collect();
        f.debug_struct("CompileStatus")
            .field("diagnostics", &self.diagnostics)
            .field("dependencies", &dependencies)
            .finish()
    }
}

impl CompileStatus {
    /// Creates an empty status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all diagnostics in recording order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns whether any diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Returns the figures the compiled expression reads, deduplicated by
    /// figure identity, in first-resolution order.
    ///
    /// The list is superset-accurate even when compilation aborts:
    /// dependencies resolved before the failure stay recorded.
    pub fn dependencies(&self) -> &[FigureRef] {
        &self.dependencies
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        trace!("diagnostic: {diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn add_dependency(&mut self, figure: &FigureRef) {
        // Keyed by handle identity; same-named distinct figures stay distinct.
        if !self.dependencies.iter().any(|seen| same_figure(seen, figure)) {
            self.dependencies.push(figure.clone());
        }
    }
}
