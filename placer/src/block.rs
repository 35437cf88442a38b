/// Axis-aligned box inside the container: `start[i]..start[i] + size[i]` on every axis.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    start: Vec<usize>,
    size: Vec<usize>,
}

impl Block {
    pub fn new(start: Vec<usize>, size: Vec<usize>) -> Self {
        debug_assert_eq!(start.len(), size.len());
        Self { start, size }
    }

    #[inline]
    pub fn start(&self) -> &[usize] {
        &self.start
    }

    #[inline]
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.start.len()
    }

    pub fn volume(&self) -> usize {
        self.size.iter().product()
    }

    /// Two blocks overlap iff their intervals intersect on every axis.
    pub fn overlaps(&self, other: &Block) -> bool {
        debug_assert_eq!(self.rank(), other.rank());
        (0..self.rank()).all(|i| {
            self.start[i] < other.start[i] + other.size[i]
                && other.start[i] < self.start[i] + self.size[i]
        })
    }

    pub fn fits_within(&self, dimension: &[usize]) -> bool {
        self.rank() == dimension.len()
            && self
                .start
                .iter()
                .zip(&self.size)
                .zip(dimension)
                .all(|((s, n), d)| s + n <= *d)
    }
}
