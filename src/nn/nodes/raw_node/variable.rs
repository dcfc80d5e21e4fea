use crate::nn::{GraphError, GraphInner};
use std::cell::Cell;

use super::TraitNode;

/// 变量节点：可变的标量状态，可训练时会被加入图的可训练变量集合
pub(in crate::nn) struct Variable {
    name: String,
    value: Cell<f64>,
    trainable: bool,
}

impl Variable {
    pub(in crate::nn) fn new(value: f64, trainable: bool) -> Self {
        Self {
            name: String::new(),
            value: Cell::new(value),
            trainable,
        }
    }
}

impl TraitNode for Variable {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn forward(&self, _graph: &GraphInner) -> Result<f64, GraphError> {
        Ok(self.value.get())
    }

    /// 按名字匹配而非沿图做链式法则：未指定目标时视为对自身求导
    fn grad(&self, _graph: &GraphInner, target: Option<&str>) -> Result<f64, GraphError> {
        let grad = match target {
            None => 1.0,
            Some(target) if target == self.name => 1.0,
            Some(_) => 0.0,
        };
        Ok(grad)
    }

    fn value(&self) -> Option<f64> {
        Some(self.value.get())
    }

    fn set_value(&self, value: f64) -> Result<(), GraphError> {
        self.value.set(value);
        Ok(())
    }

    fn is_trainable(&self) -> bool {
        self.trainable
    }
}
