pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod rule;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use rule::Rule;
