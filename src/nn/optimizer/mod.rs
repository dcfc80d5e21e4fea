/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 优化器模块：按变量名求偏导，再对可训练变量做梯度下降
 */

mod base;
mod gradient_descent;

pub use base::{GradientMap, Optimizer};
pub use gradient_descent::GradientDescentOptimizer;
