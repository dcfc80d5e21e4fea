/*
 * @Author       : 老董
 * @Description  : 算术提供者测试
 */

use crate::nn::arithmetic::{arithmetic_by_name, arithmetic_from_var, raise};
use crate::nn::{ArithmeticProvider, Graph, StdArithmetic, UnrolledArithmetic};
use approx::assert_abs_diff_eq;
use std::env::VarError;
use std::ffi::OsString;
use std::rc::Rc;

#[test]
fn test_providers_agree() {
    let providers: [&dyn ArithmeticProvider; 2] = [&StdArithmetic, &UnrolledArithmetic];
    for provider in providers {
        assert_abs_diff_eq!(provider.square(3.0), 9.0);
        assert_abs_diff_eq!(provider.cubic(-2.0), -8.0);
        assert_abs_diff_eq!(provider.multiply(2.5, 4.0), 10.0);
    }
    assert_eq!(StdArithmetic.name(), "std");
    assert_eq!(UnrolledArithmetic.name(), "unrolled");
}

#[test]
fn test_arithmetic_by_name() {
    assert_eq!(arithmetic_by_name("").name(), "std");
    assert_eq!(arithmetic_by_name("std").name(), "std");
    assert_eq!(arithmetic_by_name(" Unrolled ").name(), "unrolled");
    // 未知值回退到 std
    assert_eq!(arithmetic_by_name("gpu").name(), "std");
}

/// 环境变量未设置、取值合法、取值非UTF-8三种情况
#[test]
fn test_arithmetic_from_var() {
    assert_eq!(arithmetic_from_var(Err(VarError::NotPresent)).name(), "std");
    assert_eq!(arithmetic_from_var(Ok("unrolled".to_string())).name(), "unrolled");
    // 非UTF-8的值告警后回退到 std
    let not_unicode = VarError::NotUnicode(OsString::from("unrolled"));
    assert_eq!(arithmetic_from_var(Err(not_unicode)).name(), "std");
}

#[test]
fn test_raise() {
    let arithmetic = StdArithmetic;
    assert_abs_diff_eq!(raise(&arithmetic, 2.0, 1.0), 2.0);
    assert_abs_diff_eq!(raise(&arithmetic, 2.0, 2.0), 4.0);
    assert_abs_diff_eq!(raise(&arithmetic, 2.0, 3.0), 8.0);
    assert_abs_diff_eq!(raise(&arithmetic, 2.0, 0.0), 1.0);
    assert_abs_diff_eq!(raise(&arithmetic, 4.0, -1.0), 0.25);
}

/// 不同的算术提供者给出相同的前向和导数
#[test]
fn test_graph_with_unrolled_arithmetic() {
    let build = |graph: &Graph| {
        let x = graph.variable(1.5, true, Some("x")).unwrap();
        let y = &(&(&x.cubic().unwrap() * 3.0) + &(&x.square().unwrap() * 2.0)) + &x;
        (y.forward().unwrap(), y.grad(Some("x_0")).unwrap())
    };
    let std_result = build(&Graph::with_arithmetic("std", Rc::new(StdArithmetic)));
    let unrolled_result = build(&Graph::with_arithmetic("unrolled", Rc::new(UnrolledArithmetic)));
    assert_abs_diff_eq!(std_result.0, unrolled_result.0, epsilon = 1e-12);
    assert_abs_diff_eq!(std_result.1, unrolled_result.1, epsilon = 1e-12);
}
