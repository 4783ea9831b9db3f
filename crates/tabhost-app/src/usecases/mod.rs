pub mod open_tab;
