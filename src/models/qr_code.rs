use super::BitMatrix;

/// QR code symbol version (1-10 are supported by the encoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(10);

    /// Create a version, rejecting numbers outside 1-10
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Version(number))
    }

    /// Infer the version from a symbol side length
    pub fn from_size(size: usize) -> Option<Self> {
        if size < 21 || (size - 17) % 4 != 0 {
            return None;
        }
        u8::try_from((size - 17) / 4).ok().and_then(Self::new)
    }

    /// All supported versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Width of the byte-mode character count indicator
    pub fn char_count_bits(&self) -> usize {
        if self.0 <= 9 { 8 } else { 16 }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Every mask pattern, in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Mask id as written into the format information
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (i, j) = (row, col) should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Encoded QR code symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QRCode {
    version: Version,
    mask_pattern: MaskPattern,
    modules: BitMatrix,
}

impl QRCode {
    /// Wrap a finished module matrix
    pub fn new(version: Version, mask_pattern: MaskPattern, modules: BitMatrix) -> Self {
        debug_assert_eq!(version.size(), modules.size());
        Self {
            version,
            mask_pattern,
            modules,
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// Whether the module at (row, col) is dark; out-of-range is light
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.modules.get(row, col)
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Mask pattern chosen by the mask search
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Module matrix (true = dark, false = light)
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }
}
