//! UI Components
//!
//! Leptos components for the roster page.

mod delete_confirm_button;
mod group_select;
mod notice_bar;
mod roster_table;
mod student_modal;
mod toolbar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use group_select::{DraftGroupSelect, GroupFilterSelect};
pub use notice_bar::NoticeBar;
pub use roster_table::RosterTable;
pub use student_modal::StudentModal;
pub use toolbar::Toolbar;
