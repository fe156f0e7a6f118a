pub mod failure;
pub mod lead_time;
pub mod stock;
