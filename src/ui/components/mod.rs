pub mod chat_area;
pub mod community;
pub mod conversation_list;
pub mod home;
pub mod input_bar;
pub mod nav_bar;
pub mod notifications;
pub mod toasts;
