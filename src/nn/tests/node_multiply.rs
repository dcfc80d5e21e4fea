/*
 * @Author       : 老董
 * @Description  : Multiply / MultiplyN 节点单元测试
 *
 * 乘法的导数只支持“系数 * 表达式”形式，两侧都含变量时报错
 */

use crate::assert_err;
use crate::nn::{Graph, GraphError, Operand};
use approx::assert_abs_diff_eq;

#[test]
fn test_multiply_forward() {
    let graph = Graph::new();
    let a = graph.constant(32.0, None).unwrap();
    let b = graph.constant(10.0, None).unwrap();
    let multiply = graph.multiply(&a, &b, None).unwrap();
    assert_eq!(multiply.name(), "Multiply_0");
    assert_abs_diff_eq!(multiply.forward().unwrap(), 320.0);
}

#[test]
fn test_multiply_grad_with_coefficient() {
    let graph = Graph::new();
    let w = graph.variable(10.0, true, Some("w")).unwrap();
    let x = graph.placeholder_with_value(2.0, Some("x")).unwrap();

    // 系数在右
    let wx = graph.multiply(&w, &x, None).unwrap();
    assert_abs_diff_eq!(wx.forward().unwrap(), 20.0);
    assert_abs_diff_eq!(wx.grad(Some("w_0")).unwrap(), 2.0);
    assert_abs_diff_eq!(wx.grad(Some("b_0")).unwrap(), 0.0);

    // 系数在左
    let xw = graph.multiply(3.0, &w, None).unwrap();
    assert_abs_diff_eq!(xw.grad(Some("w_0")).unwrap(), 3.0);

    // 两侧都是系数
    let both = graph.multiply(&x, 4.0, None).unwrap();
    assert_abs_diff_eq!(both.forward().unwrap(), 8.0);
    assert_abs_diff_eq!(both.grad(None).unwrap(), 0.0);
}

#[test]
fn test_multiply_grad_of_composite() {
    let graph = Graph::new();
    let w = graph.variable(10.0, true, Some("w")).unwrap();
    let b = graph.variable(20.0, true, Some("b")).unwrap();
    let sum = graph.add(&w, &b, None).unwrap();
    let scaled = graph.multiply(5.0, &sum, None).unwrap();
    assert_abs_diff_eq!(scaled.forward().unwrap(), 150.0);
    assert_abs_diff_eq!(scaled.grad(Some("w_0")).unwrap(), 5.0);
    assert_abs_diff_eq!(scaled.grad(Some("b_0")).unwrap(), 5.0);
}

/// 两个变量相乘不受支持
#[test]
fn test_multiply_two_variables_unsupported() {
    let graph = Graph::new();
    let a = graph.variable(2.0, true, Some("a")).unwrap();
    let b = graph.variable(3.0, true, Some("b")).unwrap();
    let product = graph.multiply(&a, &b, None).unwrap();

    // 前向传播不受影响
    assert_abs_diff_eq!(product.forward().unwrap(), 6.0);
    assert_err!(
        product.grad(Some("a_0")),
        GraphError::UnsupportedExpressionShape(msg) if msg.contains("a_0") && msg.contains("b_0")
    );
    assert_err!(
        product.grad(None),
        GraphError::UnsupportedExpressionShape(_)
    );

    // x * x 同样不支持
    let squared = graph.multiply(&a, &a, None).unwrap();
    assert_err!(
        squared.grad(Some("a_0")),
        GraphError::UnsupportedExpressionShape(_)
    );
}

#[test]
fn test_multiply_n() {
    let graph = Graph::new();
    let x = graph.variable(3.0, true, Some("x")).unwrap();
    let c = graph.placeholder_with_value(2.0, Some("c")).unwrap();
    let operands: Vec<Operand> = vec![Operand::from(&c), Operand::from(&x), Operand::from(5.0)];
    let product = graph.multiply_n(operands, None).unwrap();
    assert_eq!(product.name(), "MultiplyN_0");
    assert_abs_diff_eq!(product.forward().unwrap(), 30.0);
    // 系数之积 * x 的导数
    assert_abs_diff_eq!(product.grad(Some("x_0")).unwrap(), 10.0);

    // 全是系数
    let constants = graph.multiply_n([2.0, 3.0, 4.0], None).unwrap();
    assert_abs_diff_eq!(constants.forward().unwrap(), 24.0);
    assert_abs_diff_eq!(constants.grad(None).unwrap(), 0.0);
}

#[test]
fn test_multiply_n_two_variables_unsupported() {
    let graph = Graph::new();
    let x = graph.variable(3.0, true, Some("x")).unwrap();
    let y = graph.variable(4.0, true, Some("y")).unwrap();
    let product = graph.multiply_n([&x, &y], None).unwrap();
    assert_abs_diff_eq!(product.forward().unwrap(), 12.0);
    assert_err!(
        product.grad(Some("x_0")),
        GraphError::UnsupportedExpressionShape(_)
    );
}
