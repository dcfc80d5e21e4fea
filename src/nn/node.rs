/*
 * @Author       : 老董
 * @Date         : 2026-01-08
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : Node - 节点句柄，持有所属图的引用，支持算子重载和链式调用
 */

use super::graph::{Graph, GraphInner};
use super::nodes::raw_node::{DType, NodeType, OperandShape};
use super::{GraphError, NodeId};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// ==================== Operand ====================

/// 算子的操作数：已有节点，或待提升为常量节点的裸数值
///
/// 裸数值会在组合时由[`Graph::lift`]显式注册为匿名`Constant`节点。
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Node),
    Scalar(f64),
}

impl From<Node> for Operand {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&Node> for Operand {
    fn from(node: &Node) -> Self {
        Self::Node(node.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

// ==================== Node 结构 ====================

/// 节点句柄 - 携带图引用，支持算子重载和链式调用
///
/// # 设计原则
/// - 持有 `Rc<RefCell<GraphInner>>` 引用，节点本身由图独占
/// - 名称在注册后不再变化，所以句柄里缓存了一份
/// - Clone 语义（非 Copy），开销极低（Rc clone）
///
/// # 使用示例
/// ```ignore
/// let graph = Graph::new();
/// let x = graph.variable(1.0, true, Some("x"))?;
/// let y = &(&x.cubic()? * 3.0) + 10.0;
/// assert_eq!(y.forward()?, 13.0);
/// assert_eq!(y.grad(None)?, 9.0);
/// ```
#[derive(Clone)]
pub struct Node {
    /// 节点 ID
    id: NodeId,
    /// 节点名（注册时由图分配）
    name: Rc<str>,
    /// 图引用（用户不可见）
    graph: Rc<RefCell<GraphInner>>,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Node {
    /// 创建新的 Node（内部使用）
    pub(crate) fn new(id: NodeId, graph: Rc<RefCell<GraphInner>>) -> Result<Self, GraphError> {
        let name: Rc<str> = Rc::from(graph.borrow().get_node_name(id)?);
        Ok(Self { id, name, graph })
    }

    /// 获取节点 ID
    pub const fn node_id(&self) -> NodeId {
        self.id
    }

    /// 获取节点名，如`Variable_0`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取内部图引用（供内部模块使用）
    pub(crate) const fn graph(&self) -> &Rc<RefCell<GraphInner>> {
        &self.graph
    }

    /// 获取节点所属的 Graph 句柄
    pub fn get_graph(&self) -> Graph {
        Graph::from_rc(Rc::clone(&self.graph))
    }

    /// 检查两个节点是否来自同一个 Graph
    pub fn same_graph(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.graph, &other.graph)
    }

    // ==================== 执行 ====================

    /// 前向传播，返回本节点的值
    pub fn forward(&self) -> Result<f64, GraphError> {
        self.graph.borrow().forward_node(self.id)
    }

    /// 本节点对名为`target`的变量的偏导
    ///
    /// 表达式中可达的变量不止一个时，必须显式给出`target`，
    /// 否则每个变量都会按“对自身求导”计为1，结果没有意义。
    pub fn grad(&self, target: Option<&str>) -> Result<f64, GraphError> {
        self.graph.borrow().grad_node(self.id, target)
    }

    // ==================== 值访问和设置 ====================

    /// 节点持有的值：常量、变量、已绑定的占位符返回`Some`，其余返回`None`
    pub fn value(&self) -> Result<Option<f64>, GraphError> {
        self.graph.borrow().get_node_value(self.id)
    }

    /// 设置节点的值（仅变量和占位符允许）
    pub fn set_value(&self, value: f64) -> Result<(), GraphError> {
        self.graph.borrow().set_node_value(self.id, value)
    }

    pub fn operand_shape(&self) -> Result<OperandShape, GraphError> {
        self.graph.borrow().operand_shape(self.id)
    }

    pub fn is_trainable(&self) -> Result<bool, GraphError> {
        Ok(self.graph.borrow().get_node(self.id)?.is_trainable())
    }

    /// 占位符声明的数据类型，其他节点返回`None`
    pub fn dtype(&self) -> Result<Option<DType>, GraphError> {
        let graph = self.graph.borrow();
        Ok(match graph.get_node(self.id)?.node_type() {
            NodeType::Placeholder(placeholder) => placeholder.dtype(),
            _ => None,
        })
    }

    /// 本节点的操作数
    pub fn parents(&self) -> Result<Vec<Self>, GraphError> {
        let parents_ids = self.graph.borrow().get_node_parents(self.id)?;
        parents_ids
            .into_iter()
            .map(|id| Self::new(id, Rc::clone(&self.graph)))
            .collect()
    }

    // ==================== 链式构建（返回 Result）====================

    pub fn pow(&self, exponent: f64) -> Result<Self, GraphError> {
        self.get_graph().power(self, exponent, None)
    }

    pub fn square(&self) -> Result<Self, GraphError> {
        self.get_graph().square(self, None)
    }

    pub fn cubic(&self) -> Result<Self, GraphError> {
        self.get_graph().cubic(self, None)
    }

    pub fn try_add(&self, other: impl Into<Operand>) -> Result<Self, GraphError> {
        self.get_graph().add(self, other, None)
    }

    pub fn try_sub(&self, other: impl Into<Operand>) -> Result<Self, GraphError> {
        self.get_graph().minus(self, other, None)
    }

    pub fn try_mul(&self, other: impl Into<Operand>) -> Result<Self, GraphError> {
        self.get_graph().multiply(self, other, None)
    }

    pub fn try_div(&self, other: impl Into<Operand>) -> Result<Self, GraphError> {
        self.get_graph().divide(self, other, None)
    }
}
