//! # 仿tensorflow命名的接口
//!
//! 本模块的函数都作用于当前线程的默认图（见[`get_default_graph`]），
//! 用法与tensorflow 1.x的同名接口相近：
//!
//! ```ignore
//! use mini_flow::tf;
//!
//! let x = tf::placeholder(tf::FLOAT32, None)?;
//! let w = tf::variable(10.0, true, Some("w"))?;
//! let y = tf::add(tf::multiply(&w, &x, None)?, 1.0, None)?;
//! let sess = tf::Session::new();
//! let value = sess.run(&y, &tf::FeedDict::new().with(&x, 2.0))?;
//! ```

use crate::nn::{DType, GraphError, Node, Operand};

pub use crate::nn::{FeedDict, Graph, Session, get_default_graph, reset_default_graph};

pub const INT32: DType = DType::Int32;
pub const FLOAT32: DType = DType::Float32;
pub const FLOAT64: DType = DType::Float64;

/// 优化器
pub mod train {
    pub use crate::nn::{GradientDescentOptimizer, Optimizer};
}

pub fn constant(value: f64, name: Option<&str>) -> Result<Node, GraphError> {
    get_default_graph().constant(value, name)
}

pub fn placeholder(dtype: DType, name: Option<&str>) -> Result<Node, GraphError> {
    get_default_graph().placeholder(Some(dtype), name)
}

pub fn variable(value: f64, trainable: bool, name: Option<&str>) -> Result<Node, GraphError> {
    get_default_graph().variable(value, trainable, name)
}

pub fn get_variable(name: &str, value: f64, trainable: bool) -> Result<Node, GraphError> {
    get_default_graph().get_variable(name, value, trainable)
}

pub fn add(
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
    name: Option<&str>,
) -> Result<Node, GraphError> {
    get_default_graph().add(lhs, rhs, name)
}

pub fn add_n<T: Into<Operand>>(
    operands: impl IntoIterator<Item = T>,
    name: Option<&str>,
) -> Result<Node, GraphError> {
    get_default_graph().add_n(operands, name)
}

pub fn minus(
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
    name: Option<&str>,
) -> Result<Node, GraphError> {
    get_default_graph().minus(lhs, rhs, name)
}

pub fn multiply(
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
    name: Option<&str>,
) -> Result<Node, GraphError> {
    get_default_graph().multiply(lhs, rhs, name)
}

pub fn multiply_n<T: Into<Operand>>(
    operands: impl IntoIterator<Item = T>,
    name: Option<&str>,
) -> Result<Node, GraphError> {
    get_default_graph().multiply_n(operands, name)
}

pub fn divide(
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
    name: Option<&str>,
) -> Result<Node, GraphError> {
    get_default_graph().divide(lhs, rhs, name)
}

pub fn power(operand: impl Into<Operand>, exponent: f64, name: Option<&str>) -> Result<Node, GraphError> {
    get_default_graph().power(operand, exponent, name)
}

pub fn square(operand: impl Into<Operand>, name: Option<&str>) -> Result<Node, GraphError> {
    get_default_graph().square(operand, name)
}

pub fn cubic(operand: impl Into<Operand>, name: Option<&str>) -> Result<Node, GraphError> {
    get_default_graph().cubic(operand, name)
}

pub fn global_variables_initializer() -> Result<Node, GraphError> {
    get_default_graph().global_variables_initializer()
}

pub fn local_variables_initializer() -> Result<Node, GraphError> {
    get_default_graph().local_variables_initializer()
}
