/// Random graphs
pub mod random;
