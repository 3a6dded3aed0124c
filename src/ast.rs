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

//! Parsed syntax tree consumed by the expression compiler.
//!
//! The tree is produced by an upstream grammar and is read-only input here.
//! Each node carries a discriminant, ordered child nodes, and an optional
//! literal token (numbers, identifiers, operator symbols, callee names).
//!
//! # Grammar contract
//!
//! Well-formed trees satisfy the child-arity and token rules documented on
//! each [`SyntaxKind`] variant. The compiler treats violations as upstream
//! programming errors and panics; they are never reported as user
//! diagnostics.

/// Node discriminants produced by the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    /// Numeric literal; token text holds the digits, no children.
    Number,
    /// Identifier reference; token text holds the name, no children.
    Identifier,
    /// Unary operation; token text holds the operator symbol, one operand child.
    UnaryOp,
    /// Binary operation; token text holds the operator symbol, two operand children.
    BinaryOp,
    /// Function call; token text holds the callee name, one argument child
    /// (either an [`SyntaxKind::ArgumentList`] or a nested expression).
    Call,
    /// Property access; two identifier children (figure name, property name).
    PropertyAccess,
    /// Bracketed list of figure-name identifiers inside a call.
    ArgumentList,
}

/// Immutable syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    text: Option<String>,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Returns the node discriminant.
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// Returns the literal token text, when the node carries one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the ordered child nodes.
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Returns the token text required by this node kind.
    ///
    /// # Panics
    ///
    /// Panics when the token is absent, which violates the grammar contract.
    pub(crate) fn token(&self) -> &str {
        self.text
            .as_deref()
            .unwrap_or_else(|| panic!("malformed syntax tree: {:?} node without token", self.kind))
    }

    /// Returns the child at `index` required by this node kind.
    ///
    /// # Panics
    ///
    /// Panics when the child is absent, which violates the grammar contract.
    pub(crate) fn child(&self, index: usize) -> &SyntaxNode {
        self.children.get(index).unwrap_or_else(|| {
            panic!(
                "malformed syntax tree: {:?} node missing child {index}",
                self.kind
            )
        })
    }

    /// Creates a numeric literal node from its token text.
    pub fn number(text: impl Into<String>) -> Self {
        Self {
            kind: SyntaxKind::Number,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Creates an identifier node.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self {
            kind: SyntaxKind::Identifier,
            text: Some(name.into()),
            children: Vec::new(),
        }
    }

    /// Creates a unary operation node (`op` is the operator symbol, e.g. `-`).
    pub fn unary(op: impl Into<String>, operand: SyntaxNode) -> Self {
        Self {
            kind: SyntaxKind::UnaryOp,
            text: Some(op.into()),
            children: vec![operand],
        }
    }

    /// Creates a binary operation node (`op` is the operator symbol).
    pub fn binary(left: SyntaxNode, op: impl Into<String>, right: SyntaxNode) -> Self {
        Self {
            kind: SyntaxKind::BinaryOp,
            text: Some(op.into()),
            children: vec![left, right],
        }
    }

    /// Creates a function call node with a single argument node.
    ///
    /// The argument is a [`SyntaxNode::argument_list`] for point-name lists,
    /// or any expression node for a scalar argument.
    pub fn call(name: impl Into<String>, argument: SyntaxNode) -> Self {
        Self {
            kind: SyntaxKind::Call,
            text: Some(name.into()),
            children: vec![argument],
        }
    }

    /// Creates a bracketed argument list of figure-name identifiers.
    pub fn argument_list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: SyntaxKind::ArgumentList,
            text: None,
            children: names.into_iter().map(SyntaxNode::identifier).collect(),
        }
    }

    /// Creates a property access node (`figure.property`).
    pub fn property_access(figure: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            kind: SyntaxKind::PropertyAccess,
            text: None,
            children: vec![
                SyntaxNode::identifier(figure),
                SyntaxNode::identifier(property),
            ],
        }
    }
}
