/// Fixed sequence served by the `r` command, in order
pub const RANDOM_TABLE: [i32; 22] = [
    1804289383, 846930886, 1681692777, 1714636915, 1957747793, 424238335,
    719885386, 1649760492, 596516649, 1189641421, 1025202362, 1350490027,
    783368690, 1102520059, 2044897763, 1967513926, 1365180540, 1540383426,
    304089172, 1303455736, 35005211, 521595368,
];

/// Cyclic position in [`RANDOM_TABLE`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomCursor {
    index: usize,
}

impl RandomCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the value the next `r` will produce
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return the current value and move on, wrapping at the end of the table
    pub fn next_value(&mut self) -> i32 {
        let value = RANDOM_TABLE[self.index];
        self.index = (self.index + 1) % RANDOM_TABLE.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_walks_table_and_wraps() {
        let mut cursor = RandomCursor::new();
        let first: Vec<i32> = (0..RANDOM_TABLE.len()).map(|_| cursor.next_value()).collect();
        assert_eq!(first, RANDOM_TABLE.to_vec());
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.next_value(), RANDOM_TABLE[0]);
        assert_eq!(cursor.index(), 1);
    }
}
