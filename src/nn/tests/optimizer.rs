/*
 * @Author       : 老董
 * @Description  : 优化器测试
 */

use crate::assert_err;
use crate::nn::{
    FeedDict, GradientDescentOptimizer, GradientMap, Graph, GraphError, Node, Optimizer, Session,
};
use approx::assert_abs_diff_eq;

/// 构造 loss = (y - (w * x + b))²，并绑定 x = 2, y = 3
fn square_loss(graph: &Graph) -> (Node, Node, Node) {
    let w = graph.variable(10.0, true, Some("w")).unwrap();
    let b = graph.variable(20.0, true, Some("b")).unwrap();
    let x = graph.placeholder_with_value(2.0, Some("x")).unwrap();
    let y = graph.placeholder_with_value(3.0, Some("y")).unwrap();
    let loss = (&y - &(&(&w * &x) + &b)).square().unwrap();
    (w, b, loss)
}

#[test]
fn test_optimizer_basic() {
    let graph = Graph::new();
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.01);
    assert_eq!(optimizer.name(), "GradientDescent");
    assert_abs_diff_eq!(optimizer.learning_rate(), 0.01);
    assert!(optimizer.graph().unwrap().same_graph(&graph));

    // Clone 出的副本共享学习率
    let cloned = optimizer.clone();
    cloned.set_learning_rate(0.1);
    assert_abs_diff_eq!(optimizer.learning_rate(), 0.1);
}

#[test]
fn test_compute_gradients() {
    let graph = Graph::new();
    let (_, _, loss) = square_loss(&graph);
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.01);

    let gradients = optimizer.compute_gradients(&loss).unwrap();
    assert_eq!(gradients.len(), 2);
    assert_abs_diff_eq!(gradients["w_0"], 148.0);
    assert_abs_diff_eq!(gradients["b_0"], 74.0);
}

#[test]
fn test_apply_gradients() {
    let graph = Graph::new();
    let (w, b, _) = square_loss(&graph);
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.5);

    let gradients = GradientMap::from([("w_0".to_string(), 2.0), ("b_0".to_string(), -4.0)]);
    optimizer.apply_gradients(&gradients).unwrap();
    assert_abs_diff_eq!(w.value().unwrap().unwrap(), 9.0);
    assert_abs_diff_eq!(b.value().unwrap().unwrap(), 22.0);
}

/// 缺少任一梯度时不做任何更新
#[test]
fn test_apply_gradients_missing_gradient() {
    let graph = Graph::new();
    let (w, b, _) = square_loss(&graph);
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.5);

    let gradients = GradientMap::from([("w_0".to_string(), 2.0)]);
    assert_err!(
        optimizer.apply_gradients(&gradients),
        GraphError::MissingGradient("b_0")
    );
    assert_eq!(w.value().unwrap(), Some(10.0));
    assert_eq!(b.value().unwrap(), Some(20.0));
}

/// 可训练变量集合只含变量，更新要么全部发生，要么一个都不发生
#[test]
fn test_apply_gradients_all_or_nothing() {
    let graph = Graph::new();
    let variables: Vec<Node> = (0..8)
        .map(|i| graph.variable(f64::from(i), true, Some("v")).unwrap())
        .collect();
    let constant = graph.constant(1.0, Some("c")).unwrap();
    assert_err!(
        graph.register_trainable("c_0", &constant),
        GraphError::InvalidOperation(_)
    );
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 1.0);

    // 缺少最后一个变量的梯度：任何变量都不应被修改
    let mut gradients: GradientMap = (0..7).map(|i| (format!("v_{i}"), 1.0)).collect();
    for _ in 0..3 {
        assert_err!(
            optimizer.apply_gradients(&gradients),
            GraphError::MissingGradient("v_7")
        );
        for (i, variable) in variables.iter().enumerate() {
            assert_eq!(variable.value().unwrap(), Some(i as f64));
        }
    }

    gradients.insert("v_7".to_string(), 1.0);
    optimizer.apply_gradients(&gradients).unwrap();
    for (i, variable) in variables.iter().enumerate() {
        assert_abs_diff_eq!(variable.value().unwrap().unwrap(), i as f64 - 1.0);
    }
    assert_eq!(constant.value().unwrap(), Some(1.0));
}

/// 一步梯度下降：每个变量恰好移动 -lr * grad
#[test]
fn test_minimize_one_step() {
    let graph = Graph::new();
    let (w, b, loss) = square_loss(&graph);
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.01);

    let train = optimizer.minimize(&loss).unwrap();
    assert_eq!(train.name(), "OptimizerApply_0");
    assert_eq!(train.parents().unwrap()[0].node_id(), loss.node_id());

    // 返回更新前的损失
    assert_abs_diff_eq!(train.forward().unwrap(), 1369.0);
    assert_abs_diff_eq!(w.value().unwrap().unwrap(), 10.0 - 0.01 * 148.0, epsilon = 1e-12);
    assert_abs_diff_eq!(b.value().unwrap().unwrap(), 20.0 - 0.01 * 74.0, epsilon = 1e-12);
}

#[test]
fn test_step() {
    let graph = Graph::new();
    let (w, b, loss) = square_loss(&graph);
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.01);
    optimizer.step(&loss).unwrap();
    assert_abs_diff_eq!(w.value().unwrap().unwrap(), 8.52, epsilon = 1e-12);
    assert_abs_diff_eq!(b.value().unwrap().unwrap(), 19.26, epsilon = 1e-12);
}

/// 冻结的变量不参与更新
#[test]
fn test_frozen_variable_not_updated() {
    let graph = Graph::new();
    let w = graph.variable(1.0, true, Some("w")).unwrap();
    let frozen = graph.variable(5.0, false, Some("frozen")).unwrap();
    let loss = &(&w * 3.0) + &frozen;
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.1);

    optimizer.step(&loss).unwrap();
    assert_abs_diff_eq!(w.value().unwrap().unwrap(), 0.7, epsilon = 1e-12);
    assert_eq!(frozen.value().unwrap(), Some(5.0));
}

/// 训练节点持有的优化器与原优化器共享学习率
#[test]
fn test_minimize_shares_learning_rate() {
    let graph = Graph::new();
    let w = graph.variable(1.0, true, Some("w")).unwrap();
    let loss = &w * 2.0;
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.1);
    let train = optimizer.minimize(&loss).unwrap();

    optimizer.set_learning_rate(0.5);
    train.forward().unwrap();
    assert_abs_diff_eq!(w.value().unwrap().unwrap(), 0.0);
}

/// 多步训练使线性回归收敛
#[test]
fn test_training_converges() {
    let graph = Graph::new();
    let w = graph.variable(0.0, true, Some("w")).unwrap();
    let b = graph.variable(0.0, true, Some("b")).unwrap();
    let x = graph.placeholder(None, Some("x")).unwrap();
    let y = graph.placeholder(None, Some("y")).unwrap();
    let loss = (&y - &(&(&w * &x) + &b)).square().unwrap();
    let train = GradientDescentOptimizer::with_graph(&graph, 0.05)
        .minimize(&loss)
        .unwrap();
    let sess = Session::new();

    // y = 2x + 1
    let samples = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
    for _ in 0..500 {
        for &(x_value, y_value) in &samples {
            let feed = FeedDict::new().with(&x, x_value).with(&y, y_value);
            sess.run(&train, &feed).unwrap();
        }
    }
    assert_abs_diff_eq!(w.value().unwrap().unwrap(), 2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(b.value().unwrap().unwrap(), 1.0, epsilon = 1e-3);
}

#[test]
fn test_optimizer_apply_not_differentiable() {
    let graph = Graph::new();
    let (_, _, loss) = square_loss(&graph);
    let train = GradientDescentOptimizer::with_graph(&graph, 0.01)
        .minimize(&loss)
        .unwrap();
    assert_err!(
        train.grad(None),
        GraphError::NonDifferentiable(msg) if msg.contains("GradientDescent")
    );
}

#[test]
fn test_loss_from_other_graph() {
    let graph = Graph::new();
    let other = Graph::new();
    let (_, _, loss) = square_loss(&other);
    let optimizer = GradientDescentOptimizer::with_graph(&graph, 0.01);

    assert_err!(optimizer.minimize(&loss), GraphError::InvalidOperation(_));
    assert_err!(optimizer.compute_gradients(&loss), GraphError::InvalidOperation(_));
}

#[test]
fn test_graph_dropped() {
    let optimizer = {
        let graph = Graph::new();
        GradientDescentOptimizer::with_graph(&graph, 0.01)
    };
    assert_err!(optimizer.graph(), GraphError::GraphNotFound(_));
    assert_err!(
        optimizer.apply_gradients(&GradientMap::new()),
        GraphError::GraphNotFound(_)
    );
}
