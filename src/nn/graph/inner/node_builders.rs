/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : GraphInner 节点构建方法（new_*_node）
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::nodes::NodeHandle;
use crate::nn::nodes::raw_node::{
    Add, AddN, Constant, DType, Divide, Initializer, InitializerScope, Minus, Multiply, MultiplyN,
    NodeType, OperandShape, OptimizerApply, Placeholder, Power, TraitNode, Variable,
};
use crate::nn::{NodeId, Optimizer};
use std::rc::Rc;

impl GraphInner {
    /// 注册节点：分配唯一名称并放入节点竞技场
    ///
    /// `name`为用户指定的名称前缀，未指定时用`default_base`；无论哪种都会追加下标。
    pub(in crate::nn::graph) fn add_node_to_list(
        &mut self,
        raw_node: impl Into<NodeType>,
        name: Option<&str>,
        default_base: &str,
    ) -> Result<NodeId, GraphError> {
        let raw_node = raw_node.into();
        // 操作数必须是本图中已注册的节点
        for &parent_id in raw_node.parents() {
            self.get_node(parent_id)?;
        }

        let node_id = NodeId(self.nodes.len());
        let node_name = self.get_unique_name(name.unwrap_or(default_base));

        let mut node_handle = NodeHandle::new(node_id, raw_node);
        node_handle.bind_name(&node_name);
        log::trace!("图{}注册{}（{:?}）", self.name, node_handle, node_handle.id());

        self.nodes.push(node_handle);
        self.name_to_node.insert(node_name, node_id);
        Ok(node_id)
    }

    // ========== 叶子节点 ==========

    /// 创建占位符节点（值可在之后通过 feed 或 set_node_value 绑定）
    pub fn new_placeholder_node(
        &mut self,
        dtype: Option<DType>,
        value: Option<f64>,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Placeholder::new(dtype, value), name, "Placeholder")
    }

    pub fn new_constant_node(&mut self, value: f64, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Constant::new(value), name, "Constant")
    }

    /// 创建变量节点；可训练的变量会以其最终名称加入可训练变量集合
    pub fn new_variable_node(
        &mut self,
        value: f64,
        trainable: bool,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        let node_id = self.add_node_to_list(Variable::new(value, trainable), name, "Variable")?;
        if trainable {
            let node_name = self.get_node_name(node_id)?.to_string();
            self.register_trainable(&node_name, node_id)?;
        }
        Ok(node_id)
    }

    /// 按名字取出已有变量，不存在时新建
    ///
    /// 先按`name`精确查找，再查找`{name}_0`（即此前以`name`为前缀新建的变量）。
    pub fn get_variable(
        &mut self,
        name: &str,
        value: f64,
        trainable: bool,
    ) -> Result<NodeId, GraphError> {
        let existing = self
            .get_node_by_name(name)
            .or_else(|| self.get_node_by_name(&format!("{name}_0")));
        match existing {
            Some(node_id) => match self.operand_shape(node_id)? {
                OperandShape::Variable => Ok(node_id),
                OperandShape::Coefficient | OperandShape::Composite => {
                    Err(GraphError::InvalidOperation(format!(
                        "{}不是变量节点",
                        self.get_node(node_id)?
                    )))
                }
            },
            None => self.new_variable_node(value, trainable, Some(name)),
        }
    }

    // ========== 算子节点 ==========

    pub fn new_power_node(
        &mut self,
        operand: NodeId,
        exponent: f64,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Power::new(operand, exponent), name, "Power")
    }

    pub fn new_square_node(&mut self, operand: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Power::new(operand, 2.0), name, "Square")
    }

    pub fn new_cubic_node(&mut self, operand: NodeId, name: Option<&str>) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Power::new(operand, 3.0), name, "Cubic")
    }

    pub fn new_add_node(&mut self, parents: &[NodeId], name: Option<&str>) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Add::new(parents)?, name, "Add")
    }

    pub fn new_add_n_node(&mut self, parents: &[NodeId], name: Option<&str>) -> Result<NodeId, GraphError> {
        self.add_node_to_list(AddN::new(parents)?, name, "AddN")
    }

    pub fn new_minus_node(&mut self, parents: &[NodeId], name: Option<&str>) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Minus::new(parents)?, name, "Minus")
    }

    pub fn new_multiply_node(
        &mut self,
        parents: &[NodeId],
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Multiply::new(parents)?, name, "Multiply")
    }

    pub fn new_multiply_n_node(
        &mut self,
        parents: &[NodeId],
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.add_node_to_list(MultiplyN::new(parents)?, name, "MultiplyN")
    }

    pub fn new_divide_node(&mut self, parents: &[NodeId], name: Option<&str>) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Divide::new(parents)?, name, "Divide")
    }

    // ========== 其他节点 ==========

    pub fn new_optimizer_apply_node(
        &mut self,
        optimizer: Rc<dyn Optimizer>,
        loss: NodeId,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.add_node_to_list(OptimizerApply::new(optimizer, loss), name, "OptimizerApply")
    }

    pub fn new_initializer_node(
        &mut self,
        scope: InitializerScope,
        name: Option<&str>,
    ) -> Result<NodeId, GraphError> {
        self.add_node_to_list(Initializer::new(scope), name, scope.base_name())
    }
}
