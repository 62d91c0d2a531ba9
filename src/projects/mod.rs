//! The two end-of-course projects: the calculator and the to-do list.

pub mod calculator;
pub mod todo;

pub use calculator::{Calculation, Calculator, History, Operation};
pub use todo::{Priority, Task, TaskList, TaskStats, TodoStore};
