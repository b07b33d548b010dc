pub mod cd;
pub mod du;
pub mod tree;
