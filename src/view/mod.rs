pub mod placeholder;
pub mod registry;
pub mod renderer;

pub use placeholder::PlaceholderView;
pub use registry::ViewRegistry;
pub use renderer::ViewRenderer;
