mod dark;
mod light;

pub use dark::dark;
pub use light::light;
