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

//! Symbol binding state for one compilation.

use super::*;

/// Per-compile binding context.
///
/// Holds the optional bound parameter, the injected figure registry, and the
/// caller-supplied figure-use policy. Reconfigured explicitly before each
/// compilation; never shared between threads.
#[derive(Default)]
pub(super) struct Binder {
    parameter: Option<String>,
    drawing: Option<Rc<dyn Drawing>>,
    policy: Option<Box<dyn Fn(&FigureRef) -> bool>>,
}

impl Binder {
    pub(super) fn set_context(
        &mut self,
        drawing: Rc<dyn Drawing>,
        policy: Box<dyn Fn(&FigureRef) -> bool>,
    ) {
        self.drawing = Some(drawing);
        self.policy = Some(policy);
    }

    pub(super) fn clear_context(&mut self) {
        self.drawing = None;
        self.policy = None;
    }

    pub(super) fn register_parameter(&mut self, name: &str) {
        self.parameter = Some(name.to_string());
    }

    pub(super) fn clear_parameter(&mut self) {
        self.parameter = None;
    }

    /// Resolves an identifier against the bound parameter.
    pub(super) fn resolve_parameter(&self, text: &str) -> Option<Exp> {
        match &self.parameter {
            Some(parameter) if parameter == text => Some(Exp::Param),
            _ => None,
        }
    }

    pub(super) fn drawing(&self) -> Option<&Rc<dyn Drawing>> {
        self.drawing.as_ref()
    }

    /// Resolves a name to a figure through the registry, case-insensitively.
    pub(super) fn resolve_figure(&self, name: &str) -> Option<FigureRef> {
        self.drawing.as_ref()?.lookup(name)
    }

    /// Applies the caller-supplied figure-use policy.
    ///
    /// Without a policy every figure is allowed; the dependency-graph owner
    /// supplies one whenever cycles are possible.
    pub(super) fn figure_allowed(&self, figure: &FigureRef) -> bool {
        match &self.policy {
            Some(policy) => policy(figure),
            None => true,
        }
    }
}
