/*
 * @Author       : 老董
 * @Date         : 2024-01-31 20:23:53
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 负责标量计算图（graph）的构建、求值与求导
 */

mod arithmetic;
mod graph;
mod node;
mod node_ops;
mod nodes;
pub mod optimizer;
mod session;

pub use arithmetic::{
    ARITHMETIC_ENV_KEY, ArithmeticProvider, StdArithmetic, UnrolledArithmetic,
    arithmetic_from_env,
};
pub use graph::{Graph, GraphError, GraphInner, get_default_graph, reset_default_graph};
pub use node::{Node, Operand};
pub use nodes::NodeId;
pub use nodes::raw_node::{DType, InitializerScope, OperandShape};
pub use optimizer::{GradientDescentOptimizer, GradientMap, Optimizer};
pub use session::{FeedDict, FeedKey, Session};

#[cfg(test)]
mod tests;
