/// Hands out write positions. Every operation of a batch receives exactly one,
/// in the order operations are written, starting at zero.
#[derive(Debug, Default)]
pub struct OrderCounter {
    next: usize,
}

impl OrderCounter {
    pub fn new() -> OrderCounter {
        OrderCounter::default()
    }

    pub fn next_order(&mut self) -> usize {
        let ret = self.next;
        self.next += 1;
        ret
    }

    /// Number of positions handed out.
    pub fn count(&self) -> usize {
        self.next
    }
}
