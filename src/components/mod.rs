//! Reusable view components.

pub mod charts;
pub mod goal_card;
pub mod goal_form;
pub mod layout;
pub mod modal;
pub mod pagination;
pub mod route_guard;
pub mod summary_cards;
pub mod tabs;
pub mod tag_form;
pub mod toast;
pub mod transaction_form;
pub mod transaction_table;
