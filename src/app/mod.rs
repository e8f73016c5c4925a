// module declaration
pub mod core;
pub mod form;
pub mod mint;
pub mod network;

// export App and related types
pub use core::App;
pub use core::{FocusField, MessageType, MintForm, MintStatus};
