/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : Graph 模块的错误类型
 */

use thiserror::Error;

/// Graph 操作错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// 前向/求导触及了本次运行未绑定值的占位符
    #[error("占位符{0}尚未绑定值")]
    UnboundPlaceholder(String),
    /// 表达式形状超出了手写求导规则的支持范围（如变量乘变量）
    #[error("不支持的表达式形状：{0}")]
    UnsupportedExpressionShape(String),
    #[error("节点不可求导：{0}")]
    NonDifferentiable(String),
    /// 优化器更新时找不到某个可训练变量的梯度
    #[error("可训练变量{0}缺少梯度")]
    MissingGradient(String),
    /// 只用于日志：重复注册时保留先注册的变量
    #[error("可训练变量{0}已存在，保留先注册的变量")]
    DuplicateTrainableName(String),
    #[error("节点{0}不存在")]
    NodeNotFound(String),
    #[error("图不存在：{0}")]
    GraphNotFound(String),
    #[error("非法操作：{0}")]
    InvalidOperation(String),
    #[error("除数为零：{0}")]
    DivByZero(String),
}
