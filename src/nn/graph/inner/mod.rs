/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : GraphInner 计算图的底层实现
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 访问器、命名、可训练变量集合、forward/grad 分发
 * - node_builders.rs: new_*_node
 */

mod core;
mod node_builders;

use crate::nn::ArithmeticProvider;
use crate::nn::NodeId;
use crate::nn::nodes::NodeHandle;
use std::collections::HashMap;
use std::rc::Rc;

/// 图的完整定义（核心实现）
///
/// 图独占其注册的所有节点（节点存放在`nodes`竞技场中，`NodeId`即下标），
/// 节点之间只通过`NodeId`互相引用，不会跨图引用。
/// 用户通常通过 `Graph` 句柄使用此结构。
pub struct GraphInner {
    pub(in crate::nn::graph) name: String,
    pub(in crate::nn::graph) nodes: Vec<NodeHandle>,
    /// 节点名 -> 节点
    pub(in crate::nn::graph) name_to_node: HashMap<String, NodeId>,
    /// 可训练变量名 -> 变量节点（先注册者优先）
    pub(in crate::nn::graph) trainable_variables: HashMap<String, NodeId>,
    pub(in crate::nn::graph) arithmetic: Rc<dyn ArithmeticProvider>,
}

impl Default for GraphInner {
    fn default() -> Self {
        Self::new()
    }
}
