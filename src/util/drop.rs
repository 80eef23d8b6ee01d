use std::cell::Cell;
use std::rc::Rc;

/// A value which counts how many of its clones have been dropped, for checking that collections
/// neither leak nor double drop their elements.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops counted so far, resetting the count to 0.
    pub fn take(&self) -> usize {
        self.0.take()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
