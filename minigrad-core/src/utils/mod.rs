pub mod testing;

#[cfg(test)]
pub(crate) mod mock_graph;
