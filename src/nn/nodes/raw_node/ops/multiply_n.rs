use crate::nn::nodes::raw_node::{OperandShape, TraitNode};
use crate::nn::{GraphError, GraphInner, NodeId};

use super::check_n_ary_parents;

/// MultiplyN节点：任意多个操作数连乘
///
/// 求导沿用二元乘法的系数规则：除至多一个操作数外其余都须是系数，
/// 导数为所有系数之积乘以那个非系数操作数的导数；全是系数时导数为0。
pub(in crate::nn) struct MultiplyN {
    name: String,
    parents_ids: Vec<NodeId>,
}

impl MultiplyN {
    pub(in crate::nn) fn new(parents: &[NodeId]) -> Result<Self, GraphError> {
        let parents_ids = check_n_ary_parents("MultiplyN", parents)?;
        Ok(Self {
            name: String::new(),
            parents_ids,
        })
    }
}

impl TraitNode for MultiplyN {
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
        let arithmetic = graph.arithmetic();
        self.parents_ids
            .iter()
            .try_fold(1.0, |product, &id| -> Result<f64, GraphError> {
                Ok(arithmetic.multiply(product, graph.forward_node(id)?))
            })
    }

    fn grad(&self, graph: &GraphInner, target: Option<&str>) -> Result<f64, GraphError> {
        let mut coefficient = 1.0;
        let mut non_coefficient = None;
        for &id in &self.parents_ids {
            if graph.operand_shape(id)? == OperandShape::Coefficient {
                coefficient *= graph.forward_node(id)?;
                continue;
            }
            if let Some(first) = non_coefficient {
                return Err(GraphError::UnsupportedExpressionShape(format!(
                    "{}中的操作数{}和{}都不是系数（常量或占位符）",
                    self.name,
                    graph.get_node_name(first)?,
                    graph.get_node_name(id)?
                )));
            }
            non_coefficient = Some(id);
        }

        match non_coefficient {
            Some(id) => Ok(coefficient * graph.grad_node(id, target)?),
            None => Ok(0.0),
        }
    }
}
