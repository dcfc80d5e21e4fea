/*
 * @Author       : 老董
 * @Date         : 2024-01-31 21:19:34
 * @Description  : 各算子节点。求导规则都是手写的，且刻意限制在“单系数线性/幂”表达式内：
 *                 加减按线性分配，乘法要求一侧是系数，除法直接相除两侧导数
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 */

mod add;
mod add_n;
mod divide;
mod minus;
mod multiply;
mod multiply_n;
mod optimizer_apply;
mod power;

pub(in crate::nn) use add::Add;
pub(in crate::nn) use add_n::AddN;
pub(in crate::nn) use divide::Divide;
pub(in crate::nn) use minus::Minus;
pub(in crate::nn) use multiply::Multiply;
pub(in crate::nn) use multiply_n::MultiplyN;
pub(in crate::nn) use optimizer_apply::OptimizerApply;
pub(in crate::nn) use power::Power;

use crate::nn::{GraphError, NodeId};

/// 校验二元算子的父节点数量
fn check_binary_parents(op: &str, parents: &[NodeId]) -> Result<[NodeId; 2], GraphError> {
    match parents {
        &[lhs, rhs] => Ok([lhs, rhs]),
        _ => Err(GraphError::InvalidOperation(format!(
            "{op}节点需要正好2个父节点，实际为{}个",
            parents.len()
        ))),
    }
}

/// 校验n元算子的父节点数量
fn check_n_ary_parents(op: &str, parents: &[NodeId]) -> Result<Vec<NodeId>, GraphError> {
    if parents.is_empty() {
        return Err(GraphError::InvalidOperation(format!(
            "{op}节点至少需要1个父节点"
        )));
    }
    Ok(parents.to_vec())
}
