use flow_networks::maximum_flow::{MaxFlowSolver, Strategy};

fn main() {
    env_logger::init();

    let num_nodes = 12;
    let source = num_nodes - 2;
    let sink = num_nodes - 1;

    let mut solver = MaxFlowSolver::<i64>::new(num_nodes, source, sink, Strategy::Dinic);

    // edges from the source
    solver.add_edge(source, 0, 10).unwrap();
    solver.add_edge(source, 1, 5).unwrap();
    solver.add_edge(source, 2, 10).unwrap();

    // middle edges
    solver.add_edge(0, 3, 10).unwrap();
    solver.add_edge(1, 2, 10).unwrap();
    solver.add_edge(2, 5, 15).unwrap();
    solver.add_edge(3, 1, 2).unwrap();
    solver.add_edge(3, 6, 15).unwrap();
    solver.add_edge(4, 1, 15).unwrap();
    solver.add_edge(4, 3, 3).unwrap();
    solver.add_edge(5, 4, 4).unwrap();
    solver.add_edge(5, 8, 10).unwrap();
    solver.add_edge(6, 7, 10).unwrap();
    solver.add_edge(7, 4, 10).unwrap();
    solver.add_edge(7, 5, 7).unwrap();

    // edges to the sink
    solver.add_edge(6, sink, 15).unwrap();
    solver.add_edge(8, sink, 10).unwrap();

    // 23
    println!("maximum flow: {}", solver.max_flow());

    for edge in solver.edges().iter().filter(|e| !e.is_residual()) {
        println!("{} -> {} | flow = {} / capacity = {}", edge.from, edge.to, edge.flow, edge.capacity);
    }
}
