pub mod draft;
pub mod outline;
