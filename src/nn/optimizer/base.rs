/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 优化器基础 trait
 */

use crate::nn::{Graph, GraphError, GraphInner, Node, NodeId};
use std::collections::HashMap;
use std::rc::Rc;

/// 可训练变量名 -> 损失对该变量的偏导
pub type GradientMap = HashMap<String, f64>;

/// 优化器 trait
///
/// 优化器绑定一个计算图，只更新该图的可训练变量集合中的变量。
pub trait Optimizer {
    /// 优化器名称（用于日志和错误信息）
    fn name(&self) -> &str;

    /// 获取学习率
    fn learning_rate(&self) -> f64;

    /// 设置学习率
    fn set_learning_rate(&self, learning_rate: f64);

    /// 获取所绑定的计算图，图已被释放时返回`GraphNotFound`
    fn graph(&self) -> Result<Graph, GraphError>;

    /// 用给定的梯度更新`graph`中的可训练变量
    ///
    /// 实现须先校验每个可训练变量都有梯度（否则返回`MissingGradient`），再修改任何值。
    fn apply_gradients_in(
        &self,
        graph: &GraphInner,
        gradients: &GradientMap,
    ) -> Result<(), GraphError>;

    /// 对`graph`的每个可训练变量，求`loss`关于它的偏导
    fn compute_gradients_in(
        &self,
        graph: &GraphInner,
        loss: NodeId,
    ) -> Result<GradientMap, GraphError> {
        graph
            .trainable_variables()
            .keys()
            .map(|name| -> Result<(String, f64), GraphError> {
                Ok((name.clone(), graph.grad_node(loss, Some(name))?))
            })
            .collect()
    }

    /// 见[`Optimizer::compute_gradients_in`]，`loss`须属于优化器所绑定的图
    fn compute_gradients(&self, loss: &Node) -> Result<GradientMap, GraphError> {
        let graph = self.bound_graph_of(loss)?;
        let inner = graph.inner();
        self.compute_gradients_in(&inner, loss.node_id())
    }

    /// 见[`Optimizer::apply_gradients_in`]，作用于优化器所绑定的图
    fn apply_gradients(&self, gradients: &GradientMap) -> Result<(), GraphError> {
        let graph = self.graph()?;
        let inner = graph.inner();
        self.apply_gradients_in(&inner, gradients)
    }

    /// 执行一步优化：求梯度 + 更新
    fn step_in(&self, graph: &GraphInner, loss: NodeId) -> Result<(), GraphError> {
        let gradients = self.compute_gradients_in(graph, loss)?;
        self.apply_gradients_in(graph, &gradients)
    }

    /// 执行一步优化，`loss`须属于优化器所绑定的图
    fn step(&self, loss: &Node) -> Result<(), GraphError> {
        let graph = self.bound_graph_of(loss)?;
        let inner = graph.inner();
        self.step_in(&inner, loss.node_id())
    }

    /// 创建一个`OptimizerApply`节点，每次对它前向传播都执行一步优化
    fn minimize(&self, loss: &Node) -> Result<Node, GraphError>
    where
        Self: Clone + Sized + 'static,
    {
        let graph = self.bound_graph_of(loss)?;
        let optimizer: Rc<dyn Optimizer> = Rc::new(self.clone());
        let node_id = graph
            .inner_mut()
            .new_optimizer_apply_node(optimizer, loss.node_id(), None)?;
        graph.wrap_node_id(node_id)
    }

    /// 取出所绑定的图，并检查`node`属于该图
    #[doc(hidden)]
    fn bound_graph_of(&self, node: &Node) -> Result<Graph, GraphError> {
        let graph = self.graph()?;
        if !graph.same_graph(&node.get_graph()) {
            return Err(GraphError::InvalidOperation(format!(
                "节点{}不属于优化器{}所绑定的图{}",
                node.name(),
                self.name(),
                graph.name()
            )));
        }
        Ok(graph)
    }
}
