mod bytes;
mod header;


pub use bytes::hex_byte_literals;
pub use header::{render_header, write_header};
