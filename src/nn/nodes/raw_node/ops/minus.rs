use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{GraphError, GraphInner, NodeId};

use super::check_binary_parents;

/// Minus节点：lhs - rhs
pub(in crate::nn) struct Minus {
    name: String,
    parents_ids: [NodeId; 2], // [被减数, 减数]
}

impl Minus {
    pub(in crate::nn) fn new(parents: &[NodeId]) -> Result<Self, GraphError> {
        let parents_ids = check_binary_parents("Minus", parents)?;
        Ok(Self {
            name: String::new(),
            parents_ids,
        })
    }
}

impl TraitNode for Minus {
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
        Ok(graph.forward_node(lhs)? - graph.forward_node(rhs)?)
    }

    fn grad(&self, graph: &GraphInner, target: Option<&str>) -> Result<f64, GraphError> {
        let [lhs, rhs] = self.parents_ids;
        Ok(graph.grad_node(lhs, target)? - graph.grad_node(rhs, target)?)
    }
}
