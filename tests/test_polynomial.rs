/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : 多项式求值与求导的集成测试
 */

use approx::assert_abs_diff_eq;
use mini_flow::nn::{Graph, GraphError};
use mini_flow::tf;

/// y = 3x³ + 2x² + x + 10，x = 1 时 y = 16，dy/dx = 14
#[test]
fn test_polynomial_with_tf() {
    tf::reset_default_graph();
    let x = tf::variable(1.0, true, Some("x")).unwrap();
    let cubic_term = tf::multiply(3.0, tf::cubic(&x, None).unwrap(), None).unwrap();
    let square_term = tf::multiply(2.0, tf::square(&x, None).unwrap(), None).unwrap();
    let y = tf::add(
        tf::add(tf::add(&cubic_term, &square_term, None).unwrap(), &x, None).unwrap(),
        10.0,
        None,
    )
    .unwrap();

    let sess = tf::Session::new();
    let feed = tf::FeedDict::new();
    assert_abs_diff_eq!(sess.run(&y, &feed).unwrap(), 16.0);
    assert_abs_diff_eq!(sess.run_grad(&y, &feed, None).unwrap(), 14.0);
    assert_abs_diff_eq!(sess.run_grad(&y, &feed, Some("x_0")).unwrap(), 14.0);
}

/// 同样的多项式，用算子重载在独立的图上构建
#[test]
fn test_polynomial_with_operators() {
    let graph = Graph::with_name("polynomial");
    let x = graph.variable(2.0, true, Some("x")).unwrap();
    let y = &(&(&(&x.cubic().unwrap() * 3.0) + &(&x.square().unwrap() * 2.0)) + &x) + 10.0;

    // 3*8 + 2*4 + 2 + 10
    assert_abs_diff_eq!(y.forward().unwrap(), 44.0);
    // 9x² + 4x + 1
    assert_abs_diff_eq!(y.grad(Some("x_0")).unwrap(), 45.0);

    // 前向传播可重复
    assert_abs_diff_eq!(y.forward().unwrap(), 44.0);
}

#[test]
fn test_product_of_variables_unsupported() {
    let graph = Graph::new();
    let a = graph.variable(2.0, true, Some("a")).unwrap();
    let b = graph.variable(3.0, true, Some("b")).unwrap();
    let product = &a * &b;
    assert!(matches!(
        product.grad(Some("a_0")),
        Err(GraphError::UnsupportedExpressionShape(_))
    ));
}
