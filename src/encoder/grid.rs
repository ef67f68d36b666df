use crate::models::BitMatrix;

/// What a module is used for; fixed once the module is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Finder, separator, alignment, timing, dark module, version info
    Function,
    /// Reserved for the 15-bit format information
    Format,
    /// Message bits, subject to masking
    Data,
}

/// One placed module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    /// Fixed at placement
    pub role: Role,
    /// Current color; data and format cells change per mask trial
    pub dark: bool,
}

/// Symbol grid under construction, tracking each module's role
#[derive(Debug, Clone)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Option<Module>>,
}

impl ModuleGrid {
    /// Empty `size x size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// `None` while the cell is still free
    pub fn get(&self, row: usize, col: usize) -> Option<Module> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Whether the cell already holds a module
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Place a module if the cell is still free; set cells are never overwritten
    pub fn place(&mut self, row: usize, col: usize, role: Role, dark: bool) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let cell = &mut self.cells[row * self.size + col];
        if cell.is_some() {
            return false;
        }
        *cell = Some(Module { role, dark });
        true
    }

    /// Recolor a format module (function and data modules are left alone)
    pub fn set_format(&mut self, row: usize, col: usize, dark: bool) {
        if let Some(Some(module)) = self.cells.get_mut(row * self.size + col) {
            if module.role == Role::Format {
                module.dark = dark;
            }
        }
    }

    /// Flip a data module; other roles are left alone
    pub fn flip_data(&mut self, row: usize, col: usize) {
        if let Some(Some(module)) = self.cells.get_mut(row * self.size + col) {
            if module.role == Role::Data {
                module.dark = !module.dark;
            }
        }
    }

    /// Cells still free for message bits
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Collapse to a dark/light matrix; unset cells read as light
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut matrix = BitMatrix::new(self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col).is_some_and(|m| m.dark) {
                    matrix.set(row, col, true);
                }
            }
        }
        matrix
    }
}
