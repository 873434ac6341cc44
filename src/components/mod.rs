pub mod graph_network;
