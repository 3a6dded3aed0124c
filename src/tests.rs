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

//! Crate unit tests.

use super::*;
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

/// Non-point figure exposing one named measurement.
struct MeasuredShape {
    name: String,
    length: f64,
}

impl MeasuredShape {
    fn new(name: impl Into<String>, length: f64) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            length,
        })
    }
}

impl Figure for MeasuredShape {
    fn name(&self) -> &str {
        &self.name
    }

    fn property(&self, name: &str) -> Option<f64> {
        name.eq_ignore_ascii_case("length").then_some(self.length)
    }

    fn coordinates(&self) -> Option<rs_math3d::Vec2d> {
        None
    }
}

fn assert_close(actual: f64, expected: f64, case_name: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{case_name}: expected {expected}, got {actual}"
    );
}

/// Drawing with points A=(0,0), B=(3,4), C=(0,3).
fn triangle_drawing() -> (BasicDrawing, Rc<FreePoint>, Rc<FreePoint>, Rc<FreePoint>) {
    let a = FreePoint::new("A", 0.0, 0.0);
    let b = FreePoint::new("B", 3.0, 4.0);
    let c = FreePoint::new("C", 0.0, 3.0);
    let mut drawing = BasicDrawing::new();
    drawing.add(a.clone());
    drawing.add(b.clone());
    drawing.add(c.clone());
    (drawing, a, b, c)
}

fn compile_with(
    drawing: BasicDrawing,
    root: &SyntaxNode,
) -> (Option<CompiledConstant>, CompileStatus) {
    let mut compiler = ExpressionCompiler::new();
    compiler.set_context(Rc::new(drawing), |_| true);
    let mut status = CompileStatus::new();
    let compiled = compiler.compile_constant(root, &mut status);
    (compiled, status)
}

fn dependency_names(status: &CompileStatus) -> Vec<String> {
    status
        .dependencies()
        .iter()
        .map(|figure| figure.name().to_string())
        .collect()
}

#[test]
fn literal_compiles_to_parsed_value() {
    let cases = vec![("2.5", 2.5), ("0", 0.0), ("0.125", 0.125), ("1e3", 1000.0)];
    for (token, expected) in cases {
        let mut compiler = ExpressionCompiler::new();
        let mut status = CompileStatus::new();
        let compiled = compiler
            .compile_constant(&SyntaxNode::number(token), &mut status)
            .expect("literal should compile");
        assert_close(compiled.evaluate(), expected, token);
        assert!(!status.has_errors());
    }
}

#[test]
fn binary_operators_apply_to_operands() {
    let cases = vec![
        ("+", 5.0),
        ("-", -1.0),
        ("*", 6.0),
        ("/", 2.0 / 3.0),
        ("^", 8.0),
    ];
    for (operator, expected) in cases {
        let root = SyntaxNode::binary(SyntaxNode::number("2"), operator, SyntaxNode::number("3"));
        let mut compiler = ExpressionCompiler::new();
        let mut status = CompileStatus::new();
        let compiled = compiler
            .compile_constant(&root, &mut status)
            .expect("binary expression should compile");
        assert_close(compiled.evaluate(), expected, operator);
    }
}

#[test]
fn unary_negation_compiles() {
    let root = SyntaxNode::unary("-", SyntaxNode::number("4"));
    let mut compiler = ExpressionCompiler::new();
    let mut status = CompileStatus::new();
    let compiled = compiler
        .compile_constant(&root, &mut status)
        .expect("negation should compile");
    assert_close(compiled.evaluate(), -4.0, "negation");
}

#[test]
fn function_compile_binds_parameter_x() {
    // x * x + 1
    let root = SyntaxNode::binary(
        SyntaxNode::binary(
            SyntaxNode::identifier("x"),
            "*",
            SyntaxNode::identifier("x"),
        ),
        "+",
        SyntaxNode::number("1"),
    );
    let mut compiler = ExpressionCompiler::new();
    let mut status = CompileStatus::new();
    let compiled = compiler
        .compile_function(&root, &mut status)
        .expect("function body should compile");
    assert_close(compiled.evaluate(3.0), 10.0, "x*x+1 at 3");
    assert_close(compiled.evaluate(0.0), 1.0, "x*x+1 at 0");
}

#[test]
fn constant_compile_does_not_bind_parameter() {
    let mut compiler = ExpressionCompiler::new();
    let mut status = CompileStatus::new();
    let compiled = compiler.compile_constant(&SyntaxNode::identifier("x"), &mut status);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::UnknownIdentifier("x".to_string())]
    );
}

#[test]
fn unknown_identifier_reports_exact_text() {
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &SyntaxNode::identifier("nonsense"));
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::UnknownIdentifier("nonsense".to_string())]
    );
    assert!(status.dependencies().is_empty());
}

#[test]
fn two_point_identifier_compiles_to_distance() {
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &SyntaxNode::identifier("AB"));
    let compiled = compiled.expect("AB should split into A and B");
    assert_close(compiled.evaluate(), 5.0, "distance A-B");
    assert_eq!(dependency_names(&status), vec!["A", "B"]);
}

#[test]
fn two_point_matching_is_case_insensitive() {
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, _) = compile_with(drawing, &SyntaxNode::identifier("ab"));
    assert_close(
        compiled.expect("lower-case names should match").evaluate(),
        5.0,
        "distance a-b",
    );
}

#[test]
fn two_point_longest_match_wins() {
    let mut drawing = BasicDrawing::new();
    drawing.add(FreePoint::new("A", 0.0, 0.0));
    drawing.add(FreePoint::new("AB", 6.0, 0.0));
    drawing.add(FreePoint::new("B", 6.0, 8.0));
    // Prefix "AB" beats "A"; the remainder "B" is the suffix.
    let (compiled, status) = compile_with(drawing, &SyntaxNode::identifier("ABB"));
    assert_close(
        compiled.expect("ABB should split into AB and B").evaluate(),
        8.0,
        "distance AB-B",
    );
    assert_eq!(dependency_names(&status), vec!["AB", "B"]);
}

#[test]
fn two_point_requires_exact_partition() {
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &SyntaxNode::identifier("AXB"));
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::UnknownIdentifier("AXB".to_string())]
    );
}

#[test]
fn bare_point_name_is_not_a_distance() {
    // A single point name matches as both prefix and suffix, which overlaps
    // rather than partitions; it must fall through to ordinary binding.
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &SyntaxNode::identifier("A"));
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::UnknownIdentifier("A".to_string())]
    );
}

#[test]
fn repeated_point_name_measures_zero() {
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, _) = compile_with(drawing, &SyntaxNode::identifier("AA"));
    assert_close(
        compiled.expect("AA should split into A and A").evaluate(),
        0.0,
        "distance A-A",
    );
}

#[test]
fn two_point_non_point_aborts_without_fallthrough() {
    // A shape registered under "A" shadows the point in name lookup; the
    // shorthand must diagnose rather than retry plain identifier binding.
    let mut drawing = BasicDrawing::new();
    drawing.add(MeasuredShape::new("A", 1.0));
    drawing.add(FreePoint::new("A", 0.0, 0.0));
    drawing.add(FreePoint::new("B", 3.0, 4.0));
    let (compiled, status) = compile_with(drawing, &SyntaxNode::identifier("AB"));
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::FigureIsNotAPoint("A".to_string())]
    );
}

#[test]
fn policy_rejection_reports_dependency_cycle() {
    let (drawing, _, _, _) = triangle_drawing();
    let mut compiler = ExpressionCompiler::new();
    compiler.set_context(Rc::new(drawing), |figure| figure.name() != "B");
    let mut status = CompileStatus::new();
    let compiled = compiler.compile_constant(&SyntaxNode::identifier("AB"), &mut status);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::DependencyCycle("B".to_string())]
    );
    // The rejected figure never becomes a dependency.
    assert!(status.dependencies().is_empty());
}

#[test]
fn policy_rejection_keeps_sibling_dependencies() {
    // A.x resolved before the rejected B.y stays in the dependency set.
    let root = SyntaxNode::binary(
        SyntaxNode::property_access("A", "x"),
        "+",
        SyntaxNode::property_access("B", "y"),
    );
    let (drawing, _, _, _) = triangle_drawing();
    let mut compiler = ExpressionCompiler::new();
    compiler.set_context(Rc::new(drawing), |figure| figure.name() != "B");
    let mut status = CompileStatus::new();
    let compiled = compiler.compile_constant(&root, &mut status);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::DependencyCycle("B".to_string())]
    );
    assert_eq!(dependency_names(&status), vec!["A"]);
}

#[test]
fn call_argument_policy_rejection_reports_dependency_cycle() {
    let (drawing, _, _, _) = triangle_drawing();
    let mut compiler = ExpressionCompiler::new();
    compiler.set_context(Rc::new(drawing), |figure| figure.name() != "B");
    let mut status = CompileStatus::new();
    let root = SyntaxNode::call("Distance", SyntaxNode::argument_list(["A", "B"]));
    let compiled = compiler.compile_constant(&root, &mut status);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::DependencyCycle("B".to_string())]
    );
    // A resolved before the rejection and stays; B is never recorded.
    assert_eq!(dependency_names(&status), vec!["A"]);
}

#[test]
fn equal_length_names_tie_break_to_first_in_registry() {
    // Two distinct points share the name "A"; the first registered one wins.
    let near = FreePoint::new("A", 0.0, 0.0);
    let far = FreePoint::new("A", 10.0, 0.0);
    let mut drawing = BasicDrawing::new();
    drawing.add(near.clone());
    drawing.add(far);
    drawing.add(FreePoint::new("B", 3.0, 4.0));
    let (compiled, status) = compile_with(drawing, &SyntaxNode::identifier("AB"));
    assert_close(
        compiled.expect("AB should compile").evaluate(),
        5.0,
        "distance from the first A",
    );
    let near: FigureRef = near;
    assert!(same_figure(&near, &status.dependencies()[0]));
}

#[test]
fn property_access_reads_current_value() {
    let (drawing, a, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &SyntaxNode::property_access("A", "x"));
    let compiled = compiled.expect("A.x should compile");
    assert_close(compiled.evaluate(), 0.0, "A.x before move");
    a.move_to(7.5, 1.0);
    assert_close(compiled.evaluate(), 7.5, "A.x after move");
    assert_eq!(dependency_names(&status), vec!["A"]);
}

#[test]
fn property_lookup_is_case_insensitive() {
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, _) = compile_with(drawing, &SyntaxNode::property_access("b", "Y"));
    assert_close(
        compiled.expect("b.Y should compile").evaluate(),
        4.0,
        "b.Y",
    );
}

#[test]
fn missing_property_is_diagnosed() {
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &SyntaxNode::property_access("A", "radius"));
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::PropertyNotFound {
            figure: "A".to_string(),
            property: "radius".to_string(),
        }]
    );
}

#[test]
fn property_on_unknown_figure_is_diagnosed() {
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &SyntaxNode::property_access("Q", "x"));
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::UnknownIdentifier("Q".to_string())]
    );
}

#[test]
fn shape_measurements_are_readable_properties() {
    let mut drawing = BasicDrawing::new();
    drawing.add(MeasuredShape::new("s1", 7.0));
    let (compiled, status) = compile_with(drawing, &SyntaxNode::property_access("s1", "Length"));
    assert_close(
        compiled.expect("s1.Length should compile").evaluate(),
        7.0,
        "s1.Length",
    );
    assert_eq!(dependency_names(&status), vec!["s1"]);
}

#[test]
fn scalar_call_compiles_nested_expression() {
    let root = SyntaxNode::call("sqrt", SyntaxNode::number("16"));
    let mut compiler = ExpressionCompiler::new();
    let mut status = CompileStatus::new();
    let compiled = compiler
        .compile_constant(&root, &mut status)
        .expect("sqrt(16) should compile");
    assert_close(compiled.evaluate(), 4.0, "sqrt(16)");
}

#[test]
fn scalar_call_accepts_one_element_list() {
    // The grammar's list production also carries `sqrt(AB)`.
    let (drawing, _, _, _) = triangle_drawing();
    let root = SyntaxNode::call("sqrt", SyntaxNode::argument_list(["AB"]));
    let (compiled, status) = compile_with(drawing, &root);
    assert_close(
        compiled.expect("sqrt(AB) should compile").evaluate(),
        5.0_f64.sqrt(),
        "sqrt(AB)",
    );
    assert_eq!(dependency_names(&status), vec!["A", "B"]);
}

#[test]
fn scalar_call_rejects_longer_list() {
    let (drawing, _, _, _) = triangle_drawing();
    let root = SyntaxNode::call("sqrt", SyntaxNode::argument_list(["A", "B"]));
    let (compiled, status) = compile_with(drawing, &root);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::IncorrectArgumentCount {
            name: "sqrt".to_string(),
            expected: 1,
            actual: 2,
        }]
    );
}

#[test]
fn unknown_function_is_diagnosed() {
    let root = SyntaxNode::call("frobnicate", SyntaxNode::number("1"));
    let mut compiler = ExpressionCompiler::new();
    let mut status = CompileStatus::new();
    assert!(compiler.compile_constant(&root, &mut status).is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::MethodNotFound("frobnicate".to_string())]
    );
}

#[test]
fn distance_call_over_point_list() {
    let (drawing, _, _, _) = triangle_drawing();
    let root = SyntaxNode::call("Distance", SyntaxNode::argument_list(["A", "B"]));
    let (compiled, status) = compile_with(drawing, &root);
    assert_close(
        compiled.expect("Distance(A, B) should compile").evaluate(),
        5.0,
        "Distance(A, B)",
    );
    assert_eq!(dependency_names(&status), vec!["A", "B"]);
}

#[test]
fn fixed_arity_mismatch_reports_both_counts() {
    let (drawing, _, _, _) = triangle_drawing();
    let root = SyntaxNode::call("Distance", SyntaxNode::argument_list(["A", "B", "C"]));
    let (compiled, status) = compile_with(drawing, &root);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::IncorrectArgumentCount {
            name: "Distance".to_string(),
            expected: 2,
            actual: 3,
        }]
    );
}

#[test]
fn point_builtin_rejects_single_nested_expression() {
    let (drawing, _, _, _) = triangle_drawing();
    let root = SyntaxNode::call("Distance", SyntaxNode::number("2"));
    let (compiled, status) = compile_with(drawing, &root);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::IncorrectArgumentCount {
            name: "Distance".to_string(),
            expected: 2,
            actual: 1,
        }]
    );
}

#[test]
fn area_is_variadic_over_points() {
    let mut drawing = BasicDrawing::new();
    drawing.add(FreePoint::new("A", 0.0, 0.0));
    drawing.add(FreePoint::new("B", 4.0, 0.0));
    drawing.add(FreePoint::new("C", 4.0, 3.0));
    drawing.add(FreePoint::new("D", 0.0, 3.0));

    let triangle = SyntaxNode::call("Area", SyntaxNode::argument_list(["A", "B", "C"]));
    let (compiled, status) = compile_with(drawing, &triangle);
    assert_close(
        compiled.expect("Area over 3 points should compile").evaluate(),
        6.0,
        "triangle area",
    );
    assert_eq!(dependency_names(&status), vec!["A", "B", "C"]);

    let mut drawing = BasicDrawing::new();
    drawing.add(FreePoint::new("A", 0.0, 0.0));
    drawing.add(FreePoint::new("B", 4.0, 0.0));
    drawing.add(FreePoint::new("C", 4.0, 3.0));
    drawing.add(FreePoint::new("D", 0.0, 3.0));
    let rectangle = SyntaxNode::call("Area", SyntaxNode::argument_list(["A", "B", "C", "D"]));
    let (compiled, _) = compile_with(drawing, &rectangle);
    assert_close(
        compiled.expect("Area over 4 points should compile").evaluate(),
        12.0,
        "rectangle area",
    );
}

#[test]
fn area_requires_at_least_three_points() {
    let (drawing, _, _, _) = triangle_drawing();
    let root = SyntaxNode::call("Area", SyntaxNode::argument_list(["A", "B"]));
    let (compiled, status) = compile_with(drawing, &root);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::IncorrectArgumentCount {
            name: "Area".to_string(),
            expected: 3,
            actual: 2,
        }]
    );
}

#[test]
fn angle_of_right_corner() {
    let mut drawing = BasicDrawing::new();
    drawing.add(FreePoint::new("A", 1.0, 0.0));
    drawing.add(FreePoint::new("B", 0.0, 0.0));
    drawing.add(FreePoint::new("C", 0.0, 1.0));
    let root = SyntaxNode::call("Angle", SyntaxNode::argument_list(["A", "B", "C"]));
    let (compiled, _) = compile_with(drawing, &root);
    assert_close(
        compiled.expect("Angle(A, B, C) should compile").evaluate(),
        FRAC_PI_2,
        "right angle at B",
    );
}

#[test]
fn point_list_resolution_stops_at_first_failure() {
    let (drawing, _, _, _) = triangle_drawing();
    let root = SyntaxNode::call("Distance", SyntaxNode::argument_list(["Q", "R"]));
    let (compiled, status) = compile_with(drawing, &root);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::UnknownIdentifier("Q".to_string())]
    );
}

#[test]
fn point_list_rejects_non_point_figures() {
    let mut drawing = BasicDrawing::new();
    drawing.add(MeasuredShape::new("s1", 7.0));
    drawing.add(FreePoint::new("B", 3.0, 4.0));
    let root = SyntaxNode::call("Distance", SyntaxNode::argument_list(["s1", "B"]));
    let (compiled, status) = compile_with(drawing, &root);
    assert!(compiled.is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::FigureIsNotAPoint("s1".to_string())]
    );
}

#[test]
fn dependencies_are_deduplicated_in_resolution_order() {
    // A.x + Distance(A, B): A appears twice but is recorded once.
    let root = SyntaxNode::binary(
        SyntaxNode::property_access("A", "x"),
        "+",
        SyntaxNode::call("Distance", SyntaxNode::argument_list(["A", "B"])),
    );
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &root);
    assert!(compiled.is_some());
    assert_eq!(dependency_names(&status), vec!["A", "B"]);
}

#[test]
fn function_compile_mixes_parameter_and_geometry() {
    // x + AB
    let root = SyntaxNode::binary(
        SyntaxNode::identifier("x"),
        "+",
        SyntaxNode::identifier("AB"),
    );
    let (drawing, _, _, _) = triangle_drawing();
    let mut compiler = ExpressionCompiler::new();
    compiler.set_context(Rc::new(drawing), |_| true);
    let mut status = CompileStatus::new();
    let compiled = compiler
        .compile_function(&root, &mut status)
        .expect("x + AB should compile");
    assert_close(compiled.evaluate(1.0), 6.0, "x + AB at 1");
    assert_eq!(dependency_names(&status), vec!["A", "B"]);
}

#[test]
fn two_point_shorthand_has_precedence_over_parameter() {
    let mut drawing = BasicDrawing::new();
    drawing.add(FreePoint::new("x", 0.0, 0.0));
    drawing.add(FreePoint::new("q", 0.0, 2.0));
    let mut compiler = ExpressionCompiler::new();
    compiler.set_context(Rc::new(drawing), |_| true);
    let mut status = CompileStatus::new();
    let compiled = compiler
        .compile_function(&SyntaxNode::identifier("xq"), &mut status)
        .expect("xq should split into x and q");
    // Distance, not any arithmetic over the parameter.
    assert_close(compiled.evaluate(100.0), 2.0, "xq ignores parameter value");
}

#[test]
fn cleared_context_does_not_leak_into_next_compile() {
    let (drawing, _, _, _) = triangle_drawing();
    let mut compiler = ExpressionCompiler::new();
    compiler.set_context(Rc::new(drawing), |_| true);
    let mut status = CompileStatus::new();
    assert!(compiler
        .compile_constant(&SyntaxNode::identifier("AB"), &mut status)
        .is_some());

    compiler.clear_context();
    let mut status = CompileStatus::new();
    assert!(compiler
        .compile_constant(&SyntaxNode::identifier("AB"), &mut status)
        .is_none());
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::UnknownIdentifier("AB".to_string())]
    );
}

#[test]
fn failed_compile_preserves_recorded_dependencies() {
    // A.x resolves and is recorded before the unknown identifier aborts.
    let root = SyntaxNode::binary(
        SyntaxNode::property_access("A", "x"),
        "+",
        SyntaxNode::identifier("Q"),
    );
    let (drawing, _, _, _) = triangle_drawing();
    let (compiled, status) = compile_with(drawing, &root);
    assert!(compiled.is_none());
    assert_eq!(dependency_names(&status), vec!["A"]);
    assert_eq!(
        status.diagnostics(),
        &[Diagnostic::UnknownIdentifier("Q".to_string())]
    );
}

#[test]
fn compiled_distance_follows_moving_points() {
    let (drawing, a, _, _) = triangle_drawing();
    let (compiled, _) = compile_with(drawing, &SyntaxNode::identifier("AB"));
    let compiled = compiled.expect("AB should compile");
    assert_close(compiled.evaluate(), 5.0, "before move");
    a.move_to(3.0, 0.0);
    assert_close(compiled.evaluate(), 4.0, "after move");
}

#[test]
fn status_debug_rendering_names_dependencies() {
    let (drawing, _, _, _) = triangle_drawing();
    let (_, status) = compile_with(drawing, &SyntaxNode::identifier("AB"));
    let rendered = format!("{status:?}");
    assert!(rendered.contains("\"A\""), "{rendered}");
    assert!(rendered.contains("\"B\""), "{rendered}");
}

#[test]
fn diagnostic_messages_render_for_display() {
    let cases = vec![
        (
            Diagnostic::UnknownIdentifier("foo".to_string()),
            "Unknown identifier 'foo'",
        ),
        (
            Diagnostic::IncorrectArgumentCount {
                name: "Distance".to_string(),
                expected: 2,
                actual: 3,
            },
            "Function 'Distance' expects 2 arguments, found 3",
        ),
        (
            Diagnostic::DependencyCycle("B".to_string()),
            "Using figure 'B' would create a dependency cycle",
        ),
    ];
    for (diagnostic, expected) in cases {
        assert_eq!(diagnostic.to_string(), expected);
    }
}
