use crate::nn::{GraphError, GraphInner};

use super::TraitNode;

/// 初始化器的作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitializerScope {
    Global,
    Local,
}

impl InitializerScope {
    pub(in crate::nn) const fn base_name(self) -> &'static str {
        match self {
            Self::Global => "GlobalVariablesInitializer",
            Self::Local => "LocalVariablesInitializer",
        }
    }
}

/// 初始化器节点：变量在构造时就已有值，所以前向传播什么也不做
pub(in crate::nn) struct Initializer {
    name: String,
    scope: InitializerScope,
}

impl Initializer {
    pub(in crate::nn) fn new(scope: InitializerScope) -> Self {
        Self {
            name: String::new(),
            scope,
        }
    }
}

impl TraitNode for Initializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn forward(&self, _graph: &GraphInner) -> Result<f64, GraphError> {
        log::trace!("{:?}初始化器{}：变量已在构造时赋值，无需操作", self.scope, self.name);
        Ok(0.0)
    }

    fn grad(&self, _graph: &GraphInner, _target: Option<&str>) -> Result<f64, GraphError> {
        Err(GraphError::NonDifferentiable(format!(
            "初始化器{}没有导数",
            self.name
        )))
    }
}
