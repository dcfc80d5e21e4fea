/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : GraphInner 核心操作：访问器、命名、可训练变量集合、前向/求导
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::arithmetic::{ArithmeticProvider, StdArithmetic};
use crate::nn::nodes::NodeHandle;
use crate::nn::nodes::raw_node::OperandShape;
use crate::nn::NodeId;
use std::collections::HashMap;
use std::rc::Rc;

impl GraphInner {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self::with_name("default_graph")
    }

    pub fn with_name(name: &str) -> Self {
        Self::with_arithmetic(name, Rc::new(StdArithmetic))
    }

    /// 创建一个使用指定算术提供者的计算图
    pub fn with_arithmetic(name: &str, arithmetic: Rc<dyn ArithmeticProvider>) -> Self {
        Self {
            name: name.to_string(),
            nodes: Vec::new(),
            name_to_node: HashMap::new(),
            trainable_variables: HashMap::new(),
            arithmetic,
        }
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arithmetic(&self) -> &dyn ArithmeticProvider {
        self.arithmetic.as_ref()
    }

    pub(in crate::nn) fn get_node(&self, id: NodeId) -> Result<&NodeHandle, GraphError> {
        self.nodes.get(id.0).ok_or_else(|| {
            GraphError::NodeNotFound(format!("{:?}（图{}中没有该节点）", id, self.name))
        })
    }

    pub fn get_node_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_to_node.get(name).copied()
    }

    pub fn get_node_name(&self, id: NodeId) -> Result<&str, GraphError> {
        Ok(self.get_node(id)?.name())
    }

    pub fn get_node_parents(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        Ok(self.get_node(id)?.parents().to_vec())
    }

    pub fn get_node_value(&self, id: NodeId) -> Result<Option<f64>, GraphError> {
        Ok(self.get_node(id)?.value())
    }

    /// 设置节点的值（仅变量和占位符允许）
    pub fn set_node_value(&self, id: NodeId, value: f64) -> Result<(), GraphError> {
        self.get_node(id)?.set_value(value)
    }

    pub fn operand_shape(&self, id: NodeId) -> Result<OperandShape, GraphError> {
        Ok(self.get_node(id)?.operand_shape())
    }

    // ========== 命名 ==========

    /// 从下标0开始依次尝试`{base}_{index}`，返回第一个未被占用的名字
    ///
    /// 即使是某前缀的第一个节点也会带下标，如第一个常量节点名为`Constant_0`。
    pub fn get_unique_name(&self, base_name: &str) -> String {
        let mut index = 0;
        loop {
            let name = format!("{base_name}_{index}");
            if !self.name_to_node.contains_key(&name) {
                return name;
            }
            index += 1;
        }
    }

    // ========== 可训练变量集合 ==========

    /// 把变量加入可训练变量集合
    ///
    /// 只接受变量节点，其他节点返回`InvalidOperation`。
    /// 若名字已存在，则记录一条告警并保留先注册的变量，返回`false`。
    pub fn register_trainable(&mut self, name: &str, id: NodeId) -> Result<bool, GraphError> {
        if self.operand_shape(id)? != OperandShape::Variable {
            return Err(GraphError::InvalidOperation(format!(
                "{}不是变量节点，不能加入可训练变量集合",
                self.get_node(id)?
            )));
        }
        if self.trainable_variables.contains_key(name) {
            log::warn!(
                "{}",
                GraphError::DuplicateTrainableName(format!("{name}（图{}）", self.name))
            );
            return Ok(false);
        }
        self.trainable_variables.insert(name.to_string(), id);
        Ok(true)
    }

    pub fn trainable_variables(&self) -> &HashMap<String, NodeId> {
        &self.trainable_variables
    }

    // ========== 前向传播/求导 ==========

    pub fn forward_node(&self, id: NodeId) -> Result<f64, GraphError> {
        self.get_node(id)?.forward(self)
    }

    pub fn grad_node(&self, id: NodeId, target: Option<&str>) -> Result<f64, GraphError> {
        self.get_node(id)?.grad(self, target)
    }
}
