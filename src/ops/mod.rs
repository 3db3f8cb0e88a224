pub mod notice;
pub mod todo_list;
