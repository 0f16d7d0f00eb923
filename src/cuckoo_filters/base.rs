pub trait Filter {
    /// n -- number of elements to insert
    fn new(n: u32) -> Self;
    /// returns false when the value was not stored
    fn insert(&mut self, value: &[u8]) -> bool;
    fn lookup(&self, value: &[u8]) -> bool;
    fn get_size(&self) -> usize;
}
