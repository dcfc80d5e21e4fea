/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : 幂节点，Square/Cubic 即指数为2/3的 Power
 */

use crate::nn::arithmetic::raise;
use crate::nn::nodes::raw_node::{OperandShape, TraitNode};
use crate::nn::{GraphError, GraphInner, NodeId};

/// Power节点：operand^exponent
pub(in crate::nn) struct Power {
    name: String,
    parents_ids: [NodeId; 1],
    exponent: f64,
}

impl Power {
    pub(in crate::nn) const fn new(operand: NodeId, exponent: f64) -> Self {
        Self {
            name: String::new(),
            parents_ids: [operand],
            exponent,
        }
    }

    const fn operand(&self) -> NodeId {
        self.parents_ids[0]
    }

    /// base^exponent，结果不是有限实数时报错而非返回`inf`/`NaN`
    fn checked_raise(
        &self,
        graph: &GraphInner,
        base: f64,
        exponent: f64,
    ) -> Result<f64, GraphError> {
        if base == 0.0 && exponent < 0.0 {
            return Err(GraphError::DivByZero(format!(
                "{}中0的{}次幂",
                self.name, exponent
            )));
        }
        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(GraphError::InvalidOperation(format!(
                "{}中负数{}的非整数次幂{}",
                self.name, base, exponent
            )));
        }
        Ok(raise(graph.arithmetic(), base, exponent))
    }

    /// exponent * operand^(exponent-1)
    fn local_grad(&self, graph: &GraphInner) -> Result<f64, GraphError> {
        let base = graph.forward_node(self.operand())?;
        let raised = self.checked_raise(graph, base, self.exponent - 1.0)?;
        Ok(graph.arithmetic().multiply(self.exponent, raised))
    }
}

impl TraitNode for Power {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn parents(&self) -> &[NodeId] {
        &self.parents_ids
    }

    fn forward(&self, graph: &GraphInner) -> Result<f64, GraphError> {
        let base = graph.forward_node(self.operand())?;
        self.checked_raise(graph, base, self.exponent)
    }

    fn grad(&self, graph: &GraphInner, target: Option<&str>) -> Result<f64, GraphError> {
        match graph.operand_shape(self.operand())? {
            OperandShape::Coefficient => Ok(0.0),
            // 裸变量不看目标名，直接给出幂函数的导数
            OperandShape::Variable => self.local_grad(graph),
            // 复合操作数：只做一层链式法则
            OperandShape::Composite => {
                let local_grad = self.local_grad(graph)?;
                let operand_grad = graph.grad_node(self.operand(), target)?;
                Ok(local_grad * operand_grad)
            }
        }
    }
}
