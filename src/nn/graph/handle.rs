/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : Graph 句柄（用户级 API）
 */

use super::error::GraphError;
use super::inner::GraphInner;
use crate::nn::nodes::raw_node::{DType, InitializerScope};
use crate::nn::{ArithmeticProvider, Node, NodeId, Operand};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Graph - 计算图句柄
///
/// # 设计原则
/// - 是 `Rc<RefCell<GraphInner>>` 的薄封装
/// - Clone 语义：多个 Graph 引用同一个 GraphInner
/// - 创建的 Node 自动持有图引用
/// - 所有构建方法都接受可选的名称前缀，最终名称一律带下标（如`w_0`）
#[derive(Clone)]
pub struct Graph {
    inner: Rc<RefCell<GraphInner>>,
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Graph")
            .field("name", &inner.name())
            .field("nodes_count", &inner.nodes_count())
            .finish()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    // ==================== 创建 ====================

    /// 创建新图
    pub fn new() -> Self {
        Self::from_inner(GraphInner::new())
    }

    /// 创建带名称的图
    pub fn with_name(name: &str) -> Self {
        Self::from_inner(GraphInner::with_name(name))
    }

    /// 创建使用指定算术提供者的图
    pub fn with_arithmetic(name: &str, arithmetic: Rc<dyn ArithmeticProvider>) -> Self {
        Self::from_inner(GraphInner::with_arithmetic(name, arithmetic))
    }

    /// 从现有 GraphInner 创建句柄
    pub fn from_inner(inner: GraphInner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// 从现有 Rc 创建句柄
    pub(crate) const fn from_rc(inner: Rc<RefCell<GraphInner>>) -> Self {
        Self { inner }
    }

    /// 获取内部 GraphInner 的不可变引用
    pub fn inner(&self) -> std::cell::Ref<'_, GraphInner> {
        self.inner.borrow()
    }

    /// 获取内部 GraphInner 的可变引用
    pub fn inner_mut(&self) -> std::cell::RefMut<'_, GraphInner> {
        self.inner.borrow_mut()
    }

    /// 获取内部图的弱引用（供优化器使用，避免 图->节点->优化器->图 的引用环）
    pub(crate) fn downgrade(&self) -> Weak<RefCell<GraphInner>> {
        Rc::downgrade(&self.inner)
    }

    /// 检查两个句柄是否指向同一个图
    pub fn same_graph(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// 将 NodeId 包装成 Node
    pub fn wrap_node_id(&self, node_id: NodeId) -> Result<Node, GraphError> {
        Node::new(node_id, Rc::clone(&self.inner))
    }

    // ==================== 查询 ====================

    pub fn name(&self) -> String {
        self.inner.borrow().name().to_string()
    }

    pub fn nodes_count(&self) -> usize {
        self.inner.borrow().nodes_count()
    }

    /// 见[`GraphInner::get_unique_name`]
    pub fn get_unique_name(&self, base_name: &str) -> String {
        self.inner.borrow().get_unique_name(base_name)
    }

    /// 按最终名称查找节点
    pub fn get_node_by_name(&self, name: &str) -> Result<Option<Node>, GraphError> {
        let node_id = self.inner.borrow().get_node_by_name(name);
        node_id.map(|id| self.wrap_node_id(id)).transpose()
    }

    /// 可训练变量集合（按名称排序）
    pub fn trainable_variables(&self) -> Result<Vec<Node>, GraphError> {
        let mut entries: Vec<(String, NodeId)> = self
            .inner
            .borrow()
            .trainable_variables()
            .iter()
            .map(|(name, &id)| (name.clone(), id))
            .collect();
        entries.sort();
        entries
            .into_iter()
            .map(|(_, id)| self.wrap_node_id(id))
            .collect()
    }

    /// 以`name`为键把变量加入可训练变量集合，名字已存在时保留先注册者并返回`false`
    ///
    /// 非变量节点返回`InvalidOperation`。
    pub fn register_trainable(&self, name: &str, variable: &Node) -> Result<bool, GraphError> {
        let variable_id = self.lift(variable)?;
        self.inner.borrow_mut().register_trainable(name, variable_id)
    }

    /// 把操作数转成本图中的节点：数值提升为匿名常量节点，节点须属于本图
    pub fn lift(&self, operand: impl Into<Operand>) -> Result<NodeId, GraphError> {
        match operand.into() {
            Operand::Node(node) => {
                if !Rc::ptr_eq(node.graph(), &self.inner) {
                    return Err(GraphError::InvalidOperation(format!(
                        "节点{}不属于图{}，不能跨图组合",
                        node.name(),
                        self.name()
                    )));
                }
                Ok(node.node_id())
            }
            Operand::Scalar(value) => self.inner.borrow_mut().new_constant_node(value, None),
        }
    }

    // ==================== 叶子节点 ====================

    /// 创建未绑定值的占位符
    pub fn placeholder(&self, dtype: Option<DType>, name: Option<&str>) -> Result<Node, GraphError> {
        let node_id = self.inner.borrow_mut().new_placeholder_node(dtype, None, name)?;
        self.wrap_node_id(node_id)
    }

    /// 创建已绑定初值的占位符
    pub fn placeholder_with_value(&self, value: f64, name: Option<&str>) -> Result<Node, GraphError> {
        let node_id = self
            .inner
            .borrow_mut()
            .new_placeholder_node(None, Some(value), name)?;
        self.wrap_node_id(node_id)
    }

    pub fn constant(&self, value: f64, name: Option<&str>) -> Result<Node, GraphError> {
        let node_id = self.inner.borrow_mut().new_constant_node(value, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn variable(&self, value: f64, trainable: bool, name: Option<&str>) -> Result<Node, GraphError> {
        let node_id = self
            .inner
            .borrow_mut()
            .new_variable_node(value, trainable, name)?;
        self.wrap_node_id(node_id)
    }

    /// 见[`GraphInner::get_variable`]
    pub fn get_variable(&self, name: &str, value: f64, trainable: bool) -> Result<Node, GraphError> {
        let node_id = self.inner.borrow_mut().get_variable(name, value, trainable)?;
        self.wrap_node_id(node_id)
    }

    // ==================== 算子节点 ====================

    pub fn power(
        &self,
        operand: impl Into<Operand>,
        exponent: f64,
        name: Option<&str>,
    ) -> Result<Node, GraphError> {
        let operand = self.lift(operand)?;
        let node_id = self.inner.borrow_mut().new_power_node(operand, exponent, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn square(&self, operand: impl Into<Operand>, name: Option<&str>) -> Result<Node, GraphError> {
        let operand = self.lift(operand)?;
        let node_id = self.inner.borrow_mut().new_square_node(operand, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn cubic(&self, operand: impl Into<Operand>, name: Option<&str>) -> Result<Node, GraphError> {
        let operand = self.lift(operand)?;
        let node_id = self.inner.borrow_mut().new_cubic_node(operand, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn add(
        &self,
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
        name: Option<&str>,
    ) -> Result<Node, GraphError> {
        let parents = [self.lift(lhs)?, self.lift(rhs)?];
        let node_id = self.inner.borrow_mut().new_add_node(&parents, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn add_n<T: Into<Operand>>(
        &self,
        operands: impl IntoIterator<Item = T>,
        name: Option<&str>,
    ) -> Result<Node, GraphError> {
        let parents = self.lift_all(operands)?;
        let node_id = self.inner.borrow_mut().new_add_n_node(&parents, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn minus(
        &self,
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
        name: Option<&str>,
    ) -> Result<Node, GraphError> {
        let parents = [self.lift(lhs)?, self.lift(rhs)?];
        let node_id = self.inner.borrow_mut().new_minus_node(&parents, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn multiply(
        &self,
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
        name: Option<&str>,
    ) -> Result<Node, GraphError> {
        let parents = [self.lift(lhs)?, self.lift(rhs)?];
        let node_id = self.inner.borrow_mut().new_multiply_node(&parents, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn multiply_n<T: Into<Operand>>(
        &self,
        operands: impl IntoIterator<Item = T>,
        name: Option<&str>,
    ) -> Result<Node, GraphError> {
        let parents = self.lift_all(operands)?;
        let node_id = self.inner.borrow_mut().new_multiply_n_node(&parents, name)?;
        self.wrap_node_id(node_id)
    }

    pub fn divide(
        &self,
        lhs: impl Into<Operand>,
        rhs: impl Into<Operand>,
        name: Option<&str>,
    ) -> Result<Node, GraphError> {
        let parents = [self.lift(lhs)?, self.lift(rhs)?];
        let node_id = self.inner.borrow_mut().new_divide_node(&parents, name)?;
        self.wrap_node_id(node_id)
    }

    fn lift_all<T: Into<Operand>>(
        &self,
        operands: impl IntoIterator<Item = T>,
    ) -> Result<Vec<NodeId>, GraphError> {
        operands.into_iter().map(|operand| self.lift(operand)).collect()
    }

    // ==================== 初始化器 ====================

    pub fn global_variables_initializer(&self) -> Result<Node, GraphError> {
        let node_id = self
            .inner
            .borrow_mut()
            .new_initializer_node(InitializerScope::Global, None)?;
        self.wrap_node_id(node_id)
    }

    pub fn local_variables_initializer(&self) -> Result<Node, GraphError> {
        let node_id = self
            .inner
            .borrow_mut()
            .new_initializer_node(InitializerScope::Local, None)?;
        self.wrap_node_id(node_id)
    }
}
