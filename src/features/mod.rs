pub mod provinces;
