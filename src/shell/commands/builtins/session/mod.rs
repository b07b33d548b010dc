pub mod calc;
pub mod clear;
pub mod help;
pub mod lang;
pub mod theme;
