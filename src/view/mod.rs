pub mod builder;

pub use builder::build_view;
