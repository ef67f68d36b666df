use crate::decoder::DecodeError;
use crate::decoder::reed_solomon::ReedSolomonDecoder;
use crate::encoder::tables::version_spec;
use crate::models::Version;

const BYTE_MODE: u32 = 0b0100;

/// Undo block interleaving, correct each block and concatenate the data parts.
/// Returns the data codewords and the number of corrected codewords.
pub fn deinterleave_and_correct(
    codewords: &[u8],
    version: Version,
) -> Result<(Vec<u8>, usize), DecodeError> {
    let spec = version_spec(version);
    if codewords.len() != spec.total_codewords() {
        return Err(DecodeError::Truncated);
    }

    let lengths: Vec<usize> = spec.block_lengths().collect();
    let longest = lengths.iter().copied().max().unwrap_or(0);
    let mut blocks: Vec<Vec<u8>> = lengths
        .iter()
        .map(|&len| Vec::with_capacity(len + spec.ec_per_block))
        .collect();

    let mut stream = codewords.iter().copied();
    for i in 0..longest {
        for (block, &len) in blocks.iter_mut().zip(&lengths) {
            if i < len {
                block.extend(stream.next());
            }
        }
    }
    for _ in 0..spec.ec_per_block {
        for block in blocks.iter_mut() {
            block.extend(stream.next());
        }
    }

    let rs = ReedSolomonDecoder::new(spec.ec_per_block);
    let mut data = Vec::with_capacity(spec.total_data_codewords());
    let mut corrected = 0;
    for (index, (block, &len)) in blocks.iter_mut().zip(&lengths).enumerate() {
        corrected += rs.decode(block).map_err(|reason| {
            tracing::debug!(block = index, reason, "block failed error correction");
            DecodeError::Uncorrectable { block: index }
        })?;
        data.extend_from_slice(&block[..len]);
    }
    Ok((data, corrected))
}

/// Parse the single byte-mode segment
pub fn decode_payload(data: &[u8], version: Version) -> Result<Vec<u8>, DecodeError> {
    let mut reader = BitReader::new(data);
    let mode = reader.read_bits(4).ok_or(DecodeError::Truncated)?;
    if mode != BYTE_MODE {
        return Err(DecodeError::UnsupportedMode(mode as u8));
    }
    let count = reader
        .read_bits(version.char_count_bits())
        .ok_or(DecodeError::Truncated)? as usize;
    (0..count)
        .map(|_| reader.read_bits(8).map(|b| b as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or(DecodeError::Truncated)
}

struct BitReader<'a> {
    data: &'a [u8],
    index: usize,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, index: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() * 8 - self.index
    }

    fn read_bits(&mut self, count: usize) -> Option<u32> {
        if count > self.remaining() {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..count {
            let bit = (self.data[self.index / 8] >> (7 - self.index % 8)) & 1;
            value = (value << 1) | bit as u32;
            self.index += 1;
        }
        Some(value)
    }
}
