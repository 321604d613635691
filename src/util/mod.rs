// Utilities used by the command line front end

pub mod block_io;

pub use block_io::{format_blocks, parse_blocks, read_blocks, read_message, write_blocks, BlockFormat};
