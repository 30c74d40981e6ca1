#![forbid(unsafe_code)]

pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn ref_value(&self) -> &T {
        &self.value
    }

    pub fn left_node(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right_node(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn left_slot(&mut self) -> &mut Option<Box<Node<T>>> {
        &mut self.left
    }

    pub fn right_slot(&mut self) -> &mut Option<Box<Node<T>>> {
        &mut self.right
    }
}
