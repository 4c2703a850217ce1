pub mod animate;
pub mod check_config;
pub mod estimate;
pub mod price_table;
