/// A value that holds an ordered group of members, possibly none.
pub trait ValueGroup {
    type Item;

    fn members(&self) -> &[Self::Item];
}

impl<T> ValueGroup for Vec<T> {
    type Item = T;

    fn members(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> ValueGroup for Box<[T]> {
    type Item = T;

    fn members(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> ValueGroup for [T; N] {
    type Item = T;

    fn members(&self) -> &[T] {
        self.as_slice()
    }
}

// An absent group has no members.
impl<G: ValueGroup> ValueGroup for Option<G> {
    type Item = G::Item;

    fn members(&self) -> &[G::Item] {
        match self {
            Some(group) => group.members(),
            None => &[],
        }
    }
}
