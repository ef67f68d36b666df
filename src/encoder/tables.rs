use crate::models::Version;

/// A run of identically-sized blocks within a version's block structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGroup {
    /// Number of blocks in this group
    pub blocks: usize,
    /// Data codewords per block
    pub data_codewords: usize,
}

/// Per-version layout at error correction level L
#[derive(Debug)]
pub struct VersionSpec {
    /// EC codewords per block, shared by all groups
    pub ec_per_block: usize,
    /// One or two groups, in block order
    pub groups: &'static [BlockGroup],
    /// Alignment pattern centre coordinates (rows and columns alike)
    pub alignment: &'static [usize],
}

const fn group(blocks: usize, data_codewords: usize) -> BlockGroup {
    BlockGroup {
        blocks,
        data_codewords,
    }
}

// ISO/IEC 18004 Table 9 (level L) and Annex E, versions 1-10.
static VERSION_SPECS: [VersionSpec; 10] = [
    VersionSpec {
        ec_per_block: 7,
        groups: &[group(1, 19)],
        alignment: &[],
    },
    VersionSpec {
        ec_per_block: 10,
        groups: &[group(1, 34)],
        alignment: &[6, 18],
    },
    VersionSpec {
        ec_per_block: 15,
        groups: &[group(1, 55)],
        alignment: &[6, 22],
    },
    VersionSpec {
        ec_per_block: 20,
        groups: &[group(1, 80)],
        alignment: &[6, 26],
    },
    VersionSpec {
        ec_per_block: 26,
        groups: &[group(1, 108)],
        alignment: &[6, 30],
    },
    VersionSpec {
        ec_per_block: 18,
        groups: &[group(2, 68)],
        alignment: &[6, 34],
    },
    VersionSpec {
        ec_per_block: 20,
        groups: &[group(2, 78)],
        alignment: &[6, 22, 38],
    },
    VersionSpec {
        ec_per_block: 24,
        groups: &[group(2, 97)],
        alignment: &[6, 24, 42],
    },
    VersionSpec {
        ec_per_block: 30,
        groups: &[group(2, 116)],
        alignment: &[6, 26, 46],
    },
    VersionSpec {
        ec_per_block: 18,
        groups: &[group(2, 68), group(2, 69)],
        alignment: &[6, 28, 50],
    },
];

/// Layout of `version` at level L
pub fn version_spec(version: Version) -> &'static VersionSpec {
    &VERSION_SPECS[version.number() as usize - 1]
}

impl VersionSpec {
    /// Blocks across all groups
    pub fn block_count(&self) -> usize {
        self.groups.iter().map(|g| g.blocks).sum()
    }

    /// Data codewords across all blocks
    pub fn total_data_codewords(&self) -> usize {
        self.groups.iter().map(|g| g.blocks * g.data_codewords).sum()
    }

    /// Data plus EC codewords across all blocks
    pub fn total_codewords(&self) -> usize {
        self.total_data_codewords() + self.block_count() * self.ec_per_block
    }

    /// Data codeword length of each block, in block order
    pub fn block_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups
            .iter()
            .flat_map(|g| std::iter::repeat_n(g.data_codewords, g.blocks))
    }
}

/// Number of data codewords at level L
pub fn total_data_codewords(version: Version) -> usize {
    version_spec(version).total_data_codewords()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Raw data modules per version (symbol area minus function patterns)
    fn raw_data_modules(version: u8) -> usize {
        let v = version as usize;
        let mut result = (16 * v + 128) * v + 64;
        if v >= 2 {
            let num_align = v / 7 + 2;
            result -= (25 * num_align - 10) * num_align - 55;
            if v >= 7 {
                result -= 36;
            }
        }
        result
    }

    #[test]
    fn test_total_codewords_fill_symbol() {
        for version in Version::all() {
            let spec = version_spec(version);
            assert_eq!(
                spec.total_codewords(),
                raw_data_modules(version.number()) / 8,
                "version {}",
                version.number()
            );
        }
    }

    #[test]
    fn test_known_capacities() {
        let expected = [19, 34, 55, 80, 108, 136, 156, 194, 232, 274];
        for (version, want) in Version::all().zip(expected) {
            assert_eq!(total_data_codewords(version), want);
        }
    }

    #[test]
    fn test_version_ten_has_two_groups() {
        let spec = version_spec(Version::MAX);
        assert_eq!(spec.block_count(), 4);
        let lengths: Vec<usize> = spec.block_lengths().collect();
        assert_eq!(lengths, vec![68, 68, 69, 69]);
    }

    #[test]
    fn test_alignment_lists_end_at_size_minus_seven() {
        for version in Version::all().skip(1) {
            let spec = version_spec(version);
            assert_eq!(spec.alignment.first(), Some(&6));
            assert_eq!(spec.alignment.last(), Some(&(version.size() - 7)));
        }
    }
}
