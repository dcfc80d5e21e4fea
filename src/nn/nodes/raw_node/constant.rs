use crate::nn::{GraphError, GraphInner};

use super::TraitNode;

/// 常量节点：值在构造时确定，之后不可修改
pub(in crate::nn) struct Constant {
    name: String,
    value: f64,
}

impl Constant {
    pub(in crate::nn) fn new(value: f64) -> Self {
        Self {
            name: String::new(),
            value,
        }
    }
}

impl TraitNode for Constant {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn forward(&self, _graph: &GraphInner) -> Result<f64, GraphError> {
        Ok(self.value)
    }

    fn grad(&self, _graph: &GraphInner, _target: Option<&str>) -> Result<f64, GraphError> {
        Ok(0.0)
    }

    fn value(&self) -> Option<f64> {
        Some(self.value)
    }
}
