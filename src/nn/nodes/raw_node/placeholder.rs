use crate::nn::{GraphError, GraphInner};
use std::cell::Cell;

use super::TraitNode;

/// 占位符声明的数据类型（仅作标注，节点值一律按`f64`存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    Int32,
    Float32,
    Float64,
}

/// 占位符节点：值在每次`Session::run`时通过feed绑定
pub(in crate::nn) struct Placeholder {
    name: String,
    dtype: Option<DType>,
    value: Cell<Option<f64>>,
}

impl Placeholder {
    pub(in crate::nn) fn new(dtype: Option<DType>, value: Option<f64>) -> Self {
        Self {
            name: String::new(),
            dtype,
            value: Cell::new(value),
        }
    }

    pub(in crate::nn) const fn dtype(&self) -> Option<DType> {
        self.dtype
    }
}

impl TraitNode for Placeholder {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn forward(&self, _graph: &GraphInner) -> Result<f64, GraphError> {
        self.value
            .get()
            .ok_or_else(|| GraphError::UnboundPlaceholder(self.name.clone()))
    }

    fn grad(&self, _graph: &GraphInner, _target: Option<&str>) -> Result<f64, GraphError> {
        Ok(0.0)
    }

    fn value(&self) -> Option<f64> {
        self.value.get()
    }

    fn set_value(&self, value: f64) -> Result<(), GraphError> {
        self.value.set(Some(value));
        Ok(())
    }
}
