pub mod cluster_controls;
pub mod force_graph;
pub mod graph_visualization;
pub mod pie_chart;
