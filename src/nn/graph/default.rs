/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @Description  : 默认图
 *
 * 默认图按线程隔离：首次访问时惰性创建，之后在本线程内一直存活。
 * `Graph` 基于 `Rc`，本身就不能跨线程，所以每个线程各有一张默认图。
 */

use super::handle::Graph;
use crate::nn::arithmetic::arithmetic_from_env;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_GRAPH: RefCell<Option<Graph>> = const { RefCell::new(None) };
}

/// 获取（必要时创建）本线程的默认图
pub fn get_default_graph() -> Graph {
    DEFAULT_GRAPH.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| Graph::with_arithmetic("default_graph", arithmetic_from_env()))
            .clone()
    })
}

/// 丢弃本线程的默认图，下次访问时重新创建
///
/// 已经拿到手的旧图句柄仍然有效，只是不再是默认图。
pub fn reset_default_graph() {
    DEFAULT_GRAPH.with(|cell| {
        cell.borrow_mut().take();
    });
}
