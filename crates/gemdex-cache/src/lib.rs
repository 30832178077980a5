mod resolver;
mod settings;
mod writer;

pub use resolver::{CacheResolver, ResolvedDependency, ResolvedVersion};
pub use settings::ResolveSettings;
pub use writer::CacheWriter;
