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

//! Geometric figure model consumed by the compiler.
//!
//! The compiler never owns the geometry: figures live in an embedding
//! application and are handed in as a read-only [`Drawing`] registry per
//! compilation. Compiled expressions keep [`FigureRef`] handles and read
//! current values at evaluation time, so moving a point between evaluations
//! is reflected without recompiling.
//!
//! [`FreePoint`] and [`BasicDrawing`] are minimal concrete implementations
//! for embedders and tests that do not bring their own model.

use rs_math3d::Vec2d;
use std::cell::Cell;
use std::rc::Rc;

/// A named entity in the geometry model (a point or a derived shape).
///
/// A figure is a *point* exactly when [`Figure::coordinates`] returns `Some`.
pub trait Figure {
    /// Returns the figure's name as registered in the drawing.
    fn name(&self) -> &str;

    /// Looks up a named real-valued property, case-insensitively.
    ///
    /// Returns the property's *current* value; callers re-read it on every
    /// evaluation.
    fn property(&self, name: &str) -> Option<f64>;

    /// Returns the current 2D coordinates when this figure is a point.
    fn coordinates(&self) -> Option<Vec2d>;
}

/// Shared handle to a live figure.
///
/// Figure identity is handle identity (see [`same_figure`]); two distinct
/// figures may share a name, but never a handle.
pub type FigureRef = Rc<dyn Figure>;

/// Returns whether two handles refer to the same figure instance.
pub fn same_figure(a: &FigureRef, b: &FigureRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// Registry of all current figures, queryable by name.
///
/// Injected into the compiler per compilation; the compiler only reads it.
pub trait Drawing {
    /// Looks up a figure by name, case-insensitively.
    fn lookup(&self, name: &str) -> Option<FigureRef>;

    /// Returns all current figures in registry order.
    ///
    /// Enumeration order is observable: equal-length point names in the
    /// two-point shorthand are tie-broken by first match in this order.
    fn figures(&self) -> Vec<FigureRef>;
}

/// A movable point with interior-mutable coordinates.
#[derive(Debug)]
pub struct FreePoint {
    name: String,
    position: Cell<Vec2d>,
}

impl FreePoint {
    /// Creates a point handle at the given coordinates.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            position: Cell::new(Vec2d::new(x, y)),
        })
    }

    /// Moves the point; compiled expressions observe the new position.
    pub fn move_to(&self, x: f64, y: f64) {
        self.position.set(Vec2d::new(x, y));
    }
}

impl Figure for FreePoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn property(&self, name: &str) -> Option<f64> {
        let position = self.position.get();
        if name.eq_ignore_ascii_case("x") {
            Some(position.x)
        } else if name.eq_ignore_ascii_case("y") {
            Some(position.y)
        } else {
            None
        }
    }

    fn coordinates(&self) -> Option<Vec2d> {
        Some(self.position.get())
    }
}

/// Insertion-ordered figure registry backed by a `Vec`.
#[derive(Default)]
pub struct BasicDrawing {
    figures: Vec<FigureRef>,
}

impl BasicDrawing {
    /// Creates an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a figure; later same-named figures shadow in enumeration
    /// order but [`Drawing::lookup`] returns the first match.
    pub fn add(&mut self, figure: FigureRef) {
        self.figures.push(figure);
    }
}

impl Drawing for BasicDrawing {
    fn lookup(&self, name: &str) -> Option<FigureRef> {
        self.figures
            .iter()
            .find(|figure| figure.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    fn figures(&self) -> Vec<FigureRef> {
        self.figures.clone()
    }
}
