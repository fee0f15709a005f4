pub mod books;
pub mod version;
