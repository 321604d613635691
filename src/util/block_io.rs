// Block listing I/O
// Renders encrypted block sequences as text and reads them back

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use num_bigint::BigUint;

use crate::error::{Result, RsaError};

/// How each block is written on its line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockFormat {
    #[default]
    Decimal,
    Hex,
}

/// Render one block
pub fn format_block(block: &BigUint, format: BlockFormat) -> String {
    match format {
        BlockFormat::Decimal => block.to_string(),
        BlockFormat::Hex => hex::encode(block.to_bytes_be()),
    }
}

/// One block per line, in sequence order
pub fn format_blocks(blocks: &[BigUint], format: BlockFormat) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&format_block(block, format));
        out.push('\n');
    }
    out
}

/// Parse a listing produced by [`format_blocks`]; blank lines are skipped.
pub fn parse_blocks(text: &str, format: BlockFormat) -> Result<Vec<BigUint>> {
    let mut blocks = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let block = match format {
            BlockFormat::Decimal => line.parse::<BigUint>().map_err(|e| RsaError::InvalidBlockText {
                line: idx + 1,
                reason: e.to_string(),
            })?,
            BlockFormat::Hex => {
                let bytes = hex::decode(line).map_err(|e| RsaError::InvalidBlockText {
                    line: idx + 1,
                    reason: e.to_string(),
                })?;
                BigUint::from_bytes_be(&bytes)
            }
        };
        blocks.push(block);
    }
    Ok(blocks)
}

/// Read a message file as text
pub fn read_message(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut data = String::new();
    file.read_to_string(&mut data)?;
    Ok(data)
}

/// Write a block listing to file
pub fn write_blocks(path: &Path, blocks: &[BigUint], format: BlockFormat) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(format_blocks(blocks, format).as_bytes())?;
    Ok(())
}

/// Read a block listing from file
pub fn read_blocks(path: &Path, format: BlockFormat) -> Result<Vec<BigUint>> {
    let mut file = File::open(path)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    parse_blocks(&text, format)
}
