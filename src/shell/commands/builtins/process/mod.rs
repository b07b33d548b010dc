pub mod info;
pub mod kill;
pub mod list;
pub mod run;
