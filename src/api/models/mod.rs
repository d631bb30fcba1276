// Models module - contains Draft, Resource, Idea, ChatSession and enums

pub mod chat;
pub mod draft;
pub mod enums;
pub mod idea;
pub mod resource;

pub use chat::{ChatMessage, ChatSession};
pub use draft::Draft;
pub use enums::{MessageType, ResourceType};
pub use idea::Idea;
pub use resource::Resource;
