use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{GraphError, GraphInner, NodeId};

use super::check_n_ary_parents;

/// AddN节点：任意多个操作数求和
pub(in crate::nn) struct AddN {
    name: String,
    parents_ids: Vec<NodeId>,
}

impl AddN {
    pub(in crate::nn) fn new(parents: &[NodeId]) -> Result<Self, GraphError> {
        let parents_ids = check_n_ary_parents("AddN", parents)?;
        Ok(Self {
            name: String::new(),
            parents_ids,
        })
    }
}

impl TraitNode for AddN {
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
        self.parents_ids
            .iter()
            .try_fold(0.0, |sum, &id| -> Result<f64, GraphError> {
                Ok(sum + graph.forward_node(id)?)
            })
    }

    fn grad(&self, graph: &GraphInner, target: Option<&str>) -> Result<f64, GraphError> {
        self.parents_ids
            .iter()
            .try_fold(0.0, |sum, &id| -> Result<f64, GraphError> {
                Ok(sum + graph.grad_node(id, target)?)
            })
    }
}
