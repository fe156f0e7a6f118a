pub mod implementations;
pub mod optimization;
pub mod q_table;
pub mod traits;
