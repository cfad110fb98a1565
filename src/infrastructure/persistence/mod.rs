mod in_memory;
mod seed;

pub use in_memory::InMemoryCourseLibrary;
pub use seed::seed_demo_data;
