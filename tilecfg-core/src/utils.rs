pub mod child_process;
