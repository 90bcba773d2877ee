pub mod categories;
pub mod check;
pub mod input;
pub mod options;
pub mod tree;
