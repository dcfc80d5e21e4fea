//! # Mini Flow
//!
//! `mini_flow`项目用纯rust实现一个极简的标量符号计算引擎：
//! 用常量、占位符、可训练变量及复合算子节点拼出表达式，
//! 对其前向求值（forward），并按变量名求偏导（grad）。
//! 每种节点手写自己的求导规则，而非通用的自动微分。
//!
//! 在此之上提供了会话（`Session`）、梯度下降优化器，
//! 以及一层仿照tensorflow命名的接口（见[`tf`]）。
//!

pub mod nn;
pub mod tf;
pub mod utils;
