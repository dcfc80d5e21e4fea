use crate::nn::nodes::raw_node::TraitNode;
use crate::nn::{GraphError, GraphInner, NodeId, Optimizer};
use std::rc::Rc;

/// OptimizerApply节点：前向传播即执行一步优化
///
/// 由`Optimizer::minimize`创建，返回值为本次更新前的损失值。
pub(in crate::nn) struct OptimizerApply {
    name: String,
    optimizer: Rc<dyn Optimizer>,
    parents_ids: [NodeId; 1],
}

impl OptimizerApply {
    pub(in crate::nn) fn new(optimizer: Rc<dyn Optimizer>, loss: NodeId) -> Self {
        Self {
            name: String::new(),
            optimizer,
            parents_ids: [loss],
        }
    }
}

impl TraitNode for OptimizerApply {
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
        let loss = self.parents_ids[0];
        let loss_value = graph.forward_node(loss)?;
        self.optimizer.step_in(graph, loss)?;
        Ok(loss_value)
    }

    fn grad(&self, _graph: &GraphInner, _target: Option<&str>) -> Result<f64, GraphError> {
        Err(GraphError::NonDifferentiable(format!(
            "{}是优化器{}的更新操作",
            self.name,
            self.optimizer.name()
        )))
    }
}
