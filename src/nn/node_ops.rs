/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : Node 的算子重载（+ - * /）
 *
 * 与数值组合时（如`&x + 3.0`），数值会被提升为同图中的匿名常量节点。
 * 来自不同图的节点相互运算会 panic；需要错误返回时请用`try_*`系列方法。
 */

use super::node::Node;
use std::ops::{Add, Div, Mul, Sub};

macro_rules! impl_node_binary_op {
    ($op_trait:ident, $op_method:ident, $try_method:ident, $graph_method:ident, $op_name:literal) => {
        impl $op_trait<&Node> for &Node {
            type Output = Node;

            fn $op_method(self, other: &Node) -> Node {
                self.$try_method(other).expect(concat!("Node ", $op_name, "失败"))
            }
        }

        impl $op_trait<Node> for Node {
            type Output = Node;

            fn $op_method(self, other: Node) -> Node {
                <&Node as $op_trait<&Node>>::$op_method(&self, &other)
            }
        }

        impl $op_trait<&Node> for Node {
            type Output = Node;

            fn $op_method(self, other: &Node) -> Node {
                <&Node as $op_trait<&Node>>::$op_method(&self, other)
            }
        }

        impl $op_trait<Node> for &Node {
            type Output = Node;

            fn $op_method(self, other: Node) -> Node {
                <&Node as $op_trait<&Node>>::$op_method(self, &other)
            }
        }

        impl $op_trait<f64> for &Node {
            type Output = Node;

            fn $op_method(self, other: f64) -> Node {
                self.$try_method(other).expect(concat!("Node ", $op_name, "失败"))
            }
        }

        impl $op_trait<f64> for Node {
            type Output = Node;

            fn $op_method(self, other: f64) -> Node {
                <&Node as $op_trait<f64>>::$op_method(&self, other)
            }
        }

        impl $op_trait<&Node> for f64 {
            type Output = Node;

            fn $op_method(self, other: &Node) -> Node {
                other
                    .get_graph()
                    .$graph_method(self, other, None)
                    .expect(concat!("Node ", $op_name, "失败"))
            }
        }

        impl $op_trait<Node> for f64 {
            type Output = Node;

            fn $op_method(self, other: Node) -> Node {
                <f64 as $op_trait<&Node>>::$op_method(self, &other)
            }
        }
    };
}

impl_node_binary_op!(Add, add, try_add, add, "加法");
impl_node_binary_op!(Sub, sub, try_sub, minus, "减法");
impl_node_binary_op!(Mul, mul, try_mul, multiply, "乘法");
impl_node_binary_op!(Div, div, try_div, divide, "除法");
