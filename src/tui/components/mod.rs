pub mod filter_bar;
pub mod header;
pub mod help;
pub mod logs;
pub mod results_table;
pub mod stats;
