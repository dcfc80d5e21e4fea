/*
 * @Author       : 老董
 * @Date         : 2024-01-31 21:19:34
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 节点的封闭变体集合，及每种节点都需实现的 forward/grad 接口
 */

mod constant;
mod initializer;
mod ops;
mod placeholder;
mod variable;

pub(in crate::nn) use constant::Constant;
pub use initializer::InitializerScope;
pub(in crate::nn) use initializer::Initializer;
pub(in crate::nn) use ops::*;
pub use placeholder::DType;
pub(in crate::nn) use placeholder::Placeholder;
pub(in crate::nn) use variable::Variable;

use super::NodeId;
use crate::nn::{GraphError, GraphInner};
use enum_dispatch::enum_dispatch;

#[enum_dispatch]
pub(in crate::nn) enum NodeType {
    Placeholder(Placeholder),
    Constant(Constant),
    Variable(Variable),
    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓算子↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
    Power(Power),
    Add(Add),
    AddN(AddN),
    Minus(Minus),
    Multiply(Multiply),
    MultiplyN(MultiplyN),
    Divide(Divide),
    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑算子↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
    OptimizerApply(OptimizerApply),
    Initializer(Initializer),
}

/// 作为算子操作数时，节点在求导规则里的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandShape {
    /// 常量或占位符：对任何变量的导数都是0，乘法里可作系数
    Coefficient,
    /// 裸变量
    Variable,
    /// 其他复合节点
    Composite,
}

impl NodeType {
    pub(in crate::nn) const fn operand_shape(&self) -> OperandShape {
        match self {
            Self::Constant(_) | Self::Placeholder(_) => OperandShape::Coefficient,
            Self::Variable(_) => OperandShape::Variable,
            Self::Power(_)
            | Self::Add(_)
            | Self::AddN(_)
            | Self::Minus(_)
            | Self::Multiply(_)
            | Self::MultiplyN(_)
            | Self::Divide(_)
            | Self::OptimizerApply(_)
            | Self::Initializer(_) => OperandShape::Composite,
        }
    }

    /// 节点类型名，同时也是自动命名时的默认前缀
    pub(in crate::nn) const fn type_name(&self) -> &'static str {
        match self {
            Self::Placeholder(_) => "Placeholder",
            Self::Constant(_) => "Constant",
            Self::Variable(_) => "Variable",
            Self::Power(_) => "Power",
            Self::Add(_) => "Add",
            Self::AddN(_) => "AddN",
            Self::Minus(_) => "Minus",
            Self::Multiply(_) => "Multiply",
            Self::MultiplyN(_) => "MultiplyN",
            Self::Divide(_) => "Divide",
            Self::OptimizerApply(_) => "OptimizerApply",
            Self::Initializer(_) => "Initializer",
        }
    }
}

#[enum_dispatch(NodeType)]
pub(in crate::nn) trait TraitNode {
    fn name(&self) -> &str;

    /// 注册进图时由图分配最终名称
    fn set_name(&mut self, name: &str);

    /// 本节点引用的操作数（叶子节点没有）
    fn parents(&self) -> &[NodeId] {
        &[]
    }

    /// 根据操作数当前的状态计算本节点的值；无外部修改时多次调用结果相同
    fn forward(&self, graph: &GraphInner) -> Result<f64, GraphError>;

    /// 本节点对名为`target`的变量的偏导；`None`表示对“那个”变量求导
    fn grad(&self, graph: &GraphInner, target: Option<&str>) -> Result<f64, GraphError>;

    /// 节点持有的值（只有常量、变量、占位符才有）
    fn value(&self) -> Option<f64> {
        None
    }

    fn set_value(&self, _value: f64) -> Result<(), GraphError> {
        Err(GraphError::InvalidOperation(format!(
            "节点{}的值不应该被手动设置",
            self.name()
        )))
    }

    fn is_trainable(&self) -> bool {
        false
    }
}
