mod arithmetic;
mod node_divide;
mod node_multiply;
mod optimizer;
