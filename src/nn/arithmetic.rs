/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : 可插拔的算术提供者：Power/Multiply 节点的平方、立方、乘法原语
 *
 * 默认走 rust 原生的 `powi`/`*`；也可替换为其他实现（如外部加速库），
 * 但数值结果须与默认实现逐位一致。
 */

use std::env::VarError;
use std::rc::Rc;

/// 选择算术提供者的环境变量名
pub const ARITHMETIC_ENV_KEY: &str = "MINI_FLOW_ARITHMETIC";

/// 算术提供者
pub trait ArithmeticProvider {
    fn name(&self) -> &str;
    fn square(&self, x: f64) -> f64;
    fn cubic(&self, x: f64) -> f64;
    fn multiply(&self, x: f64, y: f64) -> f64;
}

/// 默认实现
#[derive(Debug, Clone, Copy, Default)]
pub struct StdArithmetic;

impl ArithmeticProvider for StdArithmetic {
    fn name(&self) -> &str {
        "std"
    }

    fn square(&self, x: f64) -> f64 {
        x.powi(2)
    }

    fn cubic(&self, x: f64) -> f64 {
        x.powi(3)
    }

    fn multiply(&self, x: f64, y: f64) -> f64 {
        x * y
    }
}

/// 平方、立方都展开为连乘的实现
#[derive(Debug, Clone, Copy, Default)]
pub struct UnrolledArithmetic;

impl ArithmeticProvider for UnrolledArithmetic {
    fn name(&self) -> &str {
        "unrolled"
    }

    fn square(&self, x: f64) -> f64 {
        x * x
    }

    fn cubic(&self, x: f64) -> f64 {
        x * x * x
    }

    fn multiply(&self, x: f64, y: f64) -> f64 {
        x * y
    }
}

/// 根据环境变量`MINI_FLOW_ARITHMETIC`选择算术提供者
///
/// - 未设置或`std`：[`StdArithmetic`]
/// - `unrolled`：[`UnrolledArithmetic`]
/// - 其他值（包括非UTF-8的值）：告警后回退到[`StdArithmetic`]
pub fn arithmetic_from_env() -> Rc<dyn ArithmeticProvider> {
    arithmetic_from_var(std::env::var(ARITHMETIC_ENV_KEY))
}

pub(in crate::nn) fn arithmetic_from_var(
    var: Result<String, VarError>,
) -> Rc<dyn ArithmeticProvider> {
    match var {
        Ok(value) => arithmetic_by_name(&value),
        Err(VarError::NotPresent) => Rc::new(StdArithmetic),
        Err(VarError::NotUnicode(value)) => {
            log::warn!("{ARITHMETIC_ENV_KEY}的值{value:?}不是合法的UTF-8，改用std");
            Rc::new(StdArithmetic)
        }
    }
}

pub(in crate::nn) fn arithmetic_by_name(name: &str) -> Rc<dyn ArithmeticProvider> {
    match name.trim().to_lowercase().as_str() {
        "" | "std" => Rc::new(StdArithmetic),
        "unrolled" => Rc::new(UnrolledArithmetic),
        other => {
            log::warn!("未知的算术提供者`{other}`（{ARITHMETIC_ENV_KEY}），改用std");
            Rc::new(StdArithmetic)
        }
    }
}

/// 求`x`的`exponent`次幂：2、3次幂交给提供者，其余走`powf`
pub(in crate::nn) fn raise(arithmetic: &dyn ArithmeticProvider, x: f64, exponent: f64) -> f64 {
    if exponent == 2.0 {
        arithmetic.square(x)
    } else if exponent == 3.0 {
        arithmetic.cubic(x)
    } else if exponent == 1.0 {
        x
    } else {
        x.powf(exponent)
    }
}
