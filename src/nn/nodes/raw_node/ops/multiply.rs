/*
 * @Author       : 老董
 * @Date         : 2025-12-21
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 乘法节点
 *                 求导不是通用的乘积法则：要求至少一侧是系数（常量或占位符），
 *                 形如`x * x`的表达式不受支持
 */

use crate::nn::nodes::raw_node::{OperandShape, TraitNode};
use crate::nn::{GraphError, GraphInner, NodeId};

use super::check_binary_parents;

/// Multiply节点：lhs * rhs
pub(in crate::nn) struct Multiply {
    name: String,
    parents_ids: [NodeId; 2],
}

impl Multiply {
    pub(in crate::nn) fn new(parents: &[NodeId]) -> Result<Self, GraphError> {
        let parents_ids = check_binary_parents("Multiply", parents)?;
        Ok(Self {
            name: String::new(),
            parents_ids,
        })
    }
}

impl TraitNode for Multiply {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn parents(&self) -> &[NodeId] {
        &self.parents_ids
    }

    fn forward(&self, graph: &GraphInner) -> Result<f64, GraphError> {
        let [lhs, rhs] = self.parents_ids;
        let (lhs_value, rhs_value) = (graph.forward_node(lhs)?, graph.forward_node(rhs)?);
        Ok(graph.arithmetic().multiply(lhs_value, rhs_value))
    }

    fn grad(&self, graph: &GraphInner, target: Option<&str>) -> Result<f64, GraphError> {
        let [lhs, rhs] = self.parents_ids;
        let lhs_shape = graph.operand_shape(lhs)?;
        let rhs_shape = graph.operand_shape(rhs)?;

        let (lhs_grad, rhs_grad) = if lhs_shape == OperandShape::Coefficient {
            // lhs是系数
            let coefficient = graph.forward_node(lhs)?;
            let rhs_grad = if rhs_shape == OperandShape::Coefficient {
                0.0
            } else {
                graph.grad_node(rhs, target)?
            };
            (coefficient, rhs_grad)
        } else if rhs_shape == OperandShape::Coefficient {
            // rhs是系数
            (graph.grad_node(lhs, target)?, graph.forward_node(rhs)?)
        } else {
            return Err(GraphError::UnsupportedExpressionShape(format!(
                "{}的两个操作数{}和{}都不是系数（常量或占位符）",
                self.name,
                graph.get_node_name(lhs)?,
                graph.get_node_name(rhs)?
            )));
        };

        Ok(lhs_grad * rhs_grad)
    }
}
