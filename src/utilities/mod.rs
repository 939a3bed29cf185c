pub mod data_loader;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod lifecycle;
pub mod mono_deque;
