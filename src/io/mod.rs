pub mod contact_io;
pub mod translations_io;
