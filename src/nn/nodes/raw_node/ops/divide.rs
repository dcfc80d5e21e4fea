/*
 * @Author       : 老董
 * @Date         : 2026-01-09
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 除法节点
 *                 求导时直接以被除数的导数除以除数的导数，并非商的求导法则
 */

use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{GraphError, GraphInner, NodeId};

use super::check_binary_parents;

/// Divide节点：lhs / rhs
pub(in crate::nn) struct Divide {
    name: String,
    parents_ids: [NodeId; 2], // [被除数, 除数]
}

impl Divide {
    pub(in crate::nn) fn new(parents: &[NodeId]) -> Result<Self, GraphError> {
        let parents_ids = check_binary_parents("Divide", parents)?;
        Ok(Self {
            name: String::new(),
            parents_ids,
        })
    }
}

impl TraitNode for Divide {
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
        let divisor = graph.forward_node(rhs)?;
        if divisor == 0.0 {
            return Err(GraphError::DivByZero(format!(
                "{}的除数{}的值为0",
                self.name,
                graph.get_node_name(rhs)?
            )));
        }
        Ok(graph.forward_node(lhs)? / divisor)
    }

    fn grad(&self, graph: &GraphInner, target: Option<&str>) -> Result<f64, GraphError> {
        let [lhs, rhs] = self.parents_ids;
        let divisor_grad = graph.grad_node(rhs, target)?;
        if divisor_grad == 0.0 {
            return Err(GraphError::UnsupportedExpressionShape(format!(
                "{}的除数{}的导数为0，无法相除",
                self.name,
                graph.get_node_name(rhs)?
            )));
        }
        Ok(graph.grad_node(lhs, target)? / divisor_grad)
    }
}
