pub mod studio;

pub use studio::StudioPage;
