pub mod dialogs;
pub mod project_details;
pub mod project_list;
pub mod theme;
pub mod toolbar;
