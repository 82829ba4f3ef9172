pub mod trash_view;
