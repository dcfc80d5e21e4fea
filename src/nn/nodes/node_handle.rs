use super::raw_node::{NodeType, OperandShape, TraitNode};
use crate::nn::{GraphError, GraphInner};
use std::fmt;

/// 节点在所属图的节点竞技场中的稳定下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// 图内部持有的节点：id + 具体的节点变体
pub(in crate::nn) struct NodeHandle {
    id: NodeId,
    raw_node: NodeType,
}

impl NodeHandle {
    pub(in crate::nn) fn new<T: Into<NodeType>>(id: NodeId, raw_node: T) -> Self {
        Self {
            id,
            raw_node: raw_node.into(),
        }
    }

    pub(in crate::nn) fn bind_name(&mut self, name: &str) {
        self.raw_node.set_name(name);
    }

    pub(in crate::nn) const fn id(&self) -> NodeId {
        self.id
    }

    pub(in crate::nn) fn name(&self) -> &str {
        self.raw_node.name()
    }

    pub(in crate::nn) const fn node_type(&self) -> &NodeType {
        &self.raw_node
    }

    pub(in crate::nn) const fn operand_shape(&self) -> OperandShape {
        self.raw_node.operand_shape()
    }

    pub(in crate::nn) fn parents(&self) -> &[NodeId] {
        self.raw_node.parents()
    }

    pub(in crate::nn) fn forward(&self, graph: &GraphInner) -> Result<f64, GraphError> {
        self.raw_node.forward(graph)
    }

    pub(in crate::nn) fn grad(
        &self,
        graph: &GraphInner,
        target: Option<&str>,
    ) -> Result<f64, GraphError> {
        self.raw_node.grad(graph, target)
    }

    pub(in crate::nn) fn value(&self) -> Option<f64> {
        self.raw_node.value()
    }

    pub(in crate::nn) fn set_value(&self, value: f64) -> Result<(), GraphError> {
        self.raw_node.set_value(value)
    }

    pub(in crate::nn) fn is_trainable(&self) -> bool {
        self.raw_node.is_trainable()
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]节点{}", self.raw_node.type_name(), self.name())
    }
}
