/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 梯度下降优化器实现
 */

use super::base::{GradientMap, Optimizer};
use crate::nn::{Graph, GraphError, GraphInner, OperandShape, get_default_graph};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct GradientDescentState {
    name: String,
    learning_rate: Cell<f64>,
    /// 弱引用：图 -> OptimizerApply节点 -> 优化器 -> 图 不能成环
    graph: Weak<RefCell<GraphInner>>,
}

/// 梯度下降优化器：θ = θ - α * ∂loss/∂θ
///
/// Clone 出的副本（包括`minimize`创建的节点内持有的那份）共享同一学习率。
#[derive(Clone)]
pub struct GradientDescentOptimizer {
    state: Rc<GradientDescentState>,
}

impl GradientDescentOptimizer {
    /// 创建绑定到当前线程默认图的优化器
    pub fn new(learning_rate: f64) -> Self {
        Self::with_graph(&get_default_graph(), learning_rate)
    }

    /// 创建绑定到指定图的优化器
    pub fn with_graph(graph: &Graph, learning_rate: f64) -> Self {
        Self {
            state: Rc::new(GradientDescentState {
                name: "GradientDescent".to_string(),
                learning_rate: Cell::new(learning_rate),
                graph: graph.downgrade(),
            }),
        }
    }
}

impl Optimizer for GradientDescentOptimizer {
    fn name(&self) -> &str {
        &self.state.name
    }

    fn learning_rate(&self) -> f64 {
        self.state.learning_rate.get()
    }

    fn set_learning_rate(&self, learning_rate: f64) {
        self.state.learning_rate.set(learning_rate);
    }

    fn graph(&self) -> Result<Graph, GraphError> {
        self.state.graph.upgrade().map(Graph::from_rc).ok_or_else(|| {
            GraphError::GraphNotFound(format!("优化器{}所绑定的图已被释放", self.state.name))
        })
    }

    fn apply_gradients_in(
        &self,
        graph: &GraphInner,
        gradients: &GradientMap,
    ) -> Result<(), GraphError> {
        let trainable_variables = graph.trainable_variables();

        // 先校验，再更新
        let mut updates = Vec::with_capacity(trainable_variables.len());
        for (name, &node_id) in trainable_variables {
            let gradient = *gradients
                .get(name)
                .ok_or_else(|| GraphError::MissingGradient(name.clone()))?;
            if graph.operand_shape(node_id)? != OperandShape::Variable {
                return Err(GraphError::InvalidOperation(format!(
                    "可训练变量{name}对应的节点不是变量"
                )));
            }
            let current_value = graph.get_node_value(node_id)?.ok_or_else(|| {
                GraphError::InvalidOperation(format!("可训练变量{name}没有值"))
            })?;
            updates.push((name, node_id, current_value, gradient));
        }

        let learning_rate = self.learning_rate();
        for (name, node_id, current_value, gradient) in updates {
            let new_value = current_value - learning_rate * gradient;
            log::debug!(
                "{}：{} = {} - {} * {} = {}",
                self.state.name,
                name,
                current_value,
                learning_rate,
                gradient,
                new_value
            );
            graph.set_node_value(node_id, new_value)?;
        }
        Ok(())
    }
}
