//! Data models for Book Lists

pub mod book;
pub mod book_list;
pub mod book_list_item;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use book_list::{BookList, CreateBookList, UpdateBookList};
pub use book_list_item::{AddBookToList, BookListItem};
