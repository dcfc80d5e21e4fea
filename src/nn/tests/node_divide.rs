/*
 * @Author       : 老董
 * @Description  : Divide 节点单元测试
 *
 * 除法的导数是两侧导数直接相除，不是商的求导法则
 */

use crate::assert_err;
use crate::nn::{Graph, GraphError};
use approx::assert_abs_diff_eq;

#[test]
fn test_divide_forward() {
    let graph = Graph::new();
    let a = graph.constant(32.0, None).unwrap();
    let b = graph.constant(10.0, None).unwrap();
    let divide = graph.divide(&a, &b, None).unwrap();
    assert_eq!(divide.name(), "Divide_0");
    assert_abs_diff_eq!(divide.forward().unwrap(), 3.2);
}

#[test]
fn test_divide_by_zero() {
    let graph = Graph::new();
    let a = graph.constant(32.0, None).unwrap();
    let zero = graph.constant(0.0, Some("zero")).unwrap();
    let divide = graph.divide(&a, &zero, None).unwrap();
    assert_err!(
        divide.forward(),
        GraphError::DivByZero("Divide_0的除数zero_0的值为0")
    );
}

#[test]
fn test_divide_grad() {
    let graph = Graph::new();
    let x = graph.variable(4.0, true, Some("x")).unwrap();
    let numerator = graph.multiply(&x, 6.0, None).unwrap();
    let denominator = graph.multiply(&x, 2.0, None).unwrap();
    let divide = graph.divide(&numerator, &denominator, None).unwrap();

    assert_abs_diff_eq!(divide.forward().unwrap(), 3.0);
    // (6) / (2)
    assert_abs_diff_eq!(divide.grad(Some("x_0")).unwrap(), 3.0);
}

/// 除数导数为0时无法求导
#[test]
fn test_divide_grad_zero_divisor_grad() {
    let graph = Graph::new();
    let x = graph.variable(4.0, true, Some("x")).unwrap();
    let divide = graph.divide(&x, 2.0, None).unwrap();
    assert_abs_diff_eq!(divide.forward().unwrap(), 2.0);
    assert_err!(
        divide.grad(Some("x_0")),
        GraphError::UnsupportedExpressionShape(msg) if msg.contains("Constant_0")
    );
}
