/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : Session：先把 feed 的值绑定到占位符，再对目标节点前向传播或求导
 */

use super::nodes::raw_node::NodeType;
use super::{GraphError, GraphInner, Node, NodeId};

/// feed 的键：节点句柄或节点的最终名称（如`x_0`）
#[derive(Debug, Clone)]
pub enum FeedKey {
    Node(Node),
    Name(String),
}

impl From<Node> for FeedKey {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&Node> for FeedKey {
    fn from(node: &Node) -> Self {
        Self::Node(node.clone())
    }
}

impl From<&str> for FeedKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for FeedKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// 有序的 feed 表，按插入顺序依次绑定
///
/// ```ignore
/// let feed = FeedDict::new().with(&x, 2.0).with("y_0", 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeedDict {
    entries: Vec<(FeedKey, f64)>,
}

impl FeedDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<FeedKey>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<FeedKey>, value: f64) {
        self.entries.push((key.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 会话：无状态，只负责 feed 协议
///
/// 绑定的值会留在占位符上，直到下一次被 feed 覆盖。
/// 绑定按顺序逐条进行，中途出错时已绑定的值不会回滚。
#[derive(Debug, Default)]
pub struct Session;

impl Session {
    pub const fn new() -> Self {
        Self
    }

    /// 在闭包内使用会话，闭包返回后会话即结束
    pub fn scoped<R>(f: impl FnOnce(&Self) -> R) -> R {
        let session = Self::new();
        f(&session)
    }

    /// 绑定 feed 后对`node`前向传播
    pub fn run(&self, node: &Node, feed: &FeedDict) -> Result<f64, GraphError> {
        self.apply_feed(node, feed)?;
        node.forward()
    }

    /// 绑定 feed 后求`node`对名为`target`的变量的偏导
    pub fn run_grad(
        &self,
        node: &Node,
        feed: &FeedDict,
        target: Option<&str>,
    ) -> Result<f64, GraphError> {
        self.apply_feed(node, feed)?;
        node.grad(target)
    }

    /// 名称类的键在`node`所属的图中查找
    fn apply_feed(&self, node: &Node, feed: &FeedDict) -> Result<(), GraphError> {
        for (key, value) in &feed.entries {
            match key {
                FeedKey::Node(key_node) => {
                    let graph = key_node.graph().borrow();
                    feed_placeholder(&graph, key_node.node_id(), *value)?;
                }
                FeedKey::Name(name) => {
                    let graph = node.graph().borrow();
                    let node_id = graph.get_node_by_name(name).ok_or_else(|| {
                        GraphError::NodeNotFound(format!("{name}（图{}中没有该节点）", graph.name()))
                    })?;
                    feed_placeholder(&graph, node_id, *value)?;
                }
            }
        }
        Ok(())
    }
}

/// 只有占位符接受 feed，其他节点被忽略
fn feed_placeholder(graph: &GraphInner, node_id: NodeId, value: f64) -> Result<(), GraphError> {
    let node = graph.get_node(node_id)?;
    match node.node_type() {
        NodeType::Placeholder(_) => node.set_value(value),
        _ => {
            log::debug!("{}不是占位符，忽略对它的feed", node);
            Ok(())
        }
    }
}
