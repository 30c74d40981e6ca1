#![forbid(unsafe_code)]

////////////////////////////////////////////////////////////////////////////////

pub fn chars_of(text: &str) -> Vec<char> {
    text.chars().collect()
}

pub fn string_of(chars: &[char]) -> String {
    chars.iter().collect()
}

////////////////////////////////////////////////////////////////////////////////

pub trait SliceUtils<T> {
    /// The slice shifted left by `k` positions, wrapping around.
    fn rotated_left(&self, k: usize) -> Vec<T>;

    /// The slice with runs of equal adjacent elements collapsed to one.
    fn dedup_adjacent(&self) -> Vec<T>;

    /// Elements of both slices taken alternately, starting from `self`; the
    /// longer tail is appended as is.
    fn interleave(&self, other: &Self) -> Vec<T>;
}

impl<T: Clone + PartialEq> SliceUtils<T> for [T] {
    fn rotated_left(&self, k: usize) -> Vec<T> {
        if self.is_empty() {
            return Vec::new();
        }
        let split = k % self.len();
        let mut result = Vec::with_capacity(self.len());
        result.extend_from_slice(&self[split..]);
        result.extend_from_slice(&self[..split]);
        result
    }

    fn dedup_adjacent(&self) -> Vec<T> {
        let mut result: Vec<T> = Vec::new();
        for item in self {
            if result.last() != Some(item) {
                result.push(item.clone());
            }
        }
        result
    }

    fn interleave(&self, other: &Self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len() + other.len());
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => break,
                (first, second) => {
                    if let Some(item) = first {
                        result.push(item.clone());
                    }
                    if let Some(item) = second {
                        result.push(item.clone());
                    }
                }
            }
        }
        result
    }
}

////////////////////////////////////////////////////////////////////////////////
