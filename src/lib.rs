pub mod content;
pub mod net;
pub mod page;
pub mod theme;
