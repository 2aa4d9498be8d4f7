/// Fixed-size rectangular board, stored row-major. Bounds never change after
/// construction; out-of-range access is a caller bug caught by debug asserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        debug_assert!(self.in_bounds(x, y));
        self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(self.in_bounds(x, y));
        self.cells[y * self.width + x] = value;
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

#[cfg(test)]
impl<T: Copy> Grid<T> {
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }
}
