/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : Graph 模块：计算图的核心实现
 *
 * 公开 API：
 * - `Graph`: 用户级句柄
 * - `GraphInner`: 底层实现（节点竞技场、命名、可训练变量集合）
 * - `GraphError`: 错误类型
 * - `get_default_graph`/`reset_default_graph`: 线程内的默认图
 */

mod default;
mod error;
mod handle;
mod inner;

pub use default::{get_default_graph, reset_default_graph};
pub use error::GraphError;
pub use handle::Graph;
pub use inner::GraphInner;
