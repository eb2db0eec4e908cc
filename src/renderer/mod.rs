pub mod components;
pub mod output;
pub mod renderer;
pub mod renders;
pub mod traits;
pub mod tree;

pub use components::*;
pub use output::*;
pub use renderer::*;
pub use traits::*;
pub use tree::*;
