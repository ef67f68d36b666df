/// Block splitting and codeword interleaving
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::version_spec;
use crate::models::Version;

/// Split data codewords into the version's blocks, in block order
pub fn split_blocks(data: &[u8], version: Version) -> Vec<&[u8]> {
    let spec = version_spec(version);
    debug_assert_eq!(data.len(), spec.total_data_codewords());
    let mut blocks = Vec::with_capacity(spec.block_count());
    let mut rest = data;
    for len in spec.block_lengths() {
        let (block, tail) = rest.split_at(len);
        blocks.push(block);
        rest = tail;
    }
    blocks
}

/// Interleave data and EC codewords into the final message.
///
/// Data codeword `i` of every block (skipping exhausted short blocks), then EC
/// codeword `i` of every block.
pub fn interleave(data: &[u8], version: Version) -> Vec<u8> {
    let spec = version_spec(version);
    let encoder = ReedSolomonEncoder::new(spec.ec_per_block);
    let blocks = split_blocks(data, version);
    let ecc: Vec<Vec<u8>> = blocks.iter().map(|block| encoder.encode(block)).collect();

    tracing::trace!(
        version = version.number(),
        blocks = blocks.len(),
        ec_per_block = spec.ec_per_block,
        "interleaving codeword blocks"
    );

    let mut message = Vec::with_capacity(spec.total_codewords());
    let longest = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    for i in 0..longest {
        message.extend(blocks.iter().filter_map(|block| block.get(i)));
    }
    for i in 0..spec.ec_per_block {
        message.extend(ecc.iter().map(|block| block[i]));
    }
    message
}
