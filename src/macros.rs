//! Utility macros

/// Create a [Stack][crate::pure::Stack] containing the arguments. The only
/// required element is the focus, it is not possible to create an empty stack.
/// ```
/// # use trellis::stack;
/// let s = stack!([1, 2], 3, [4, 5]);
/// let s = stack!([1, 2], 3);
/// let s = stack!(1, [2, 3]);
/// let s = stack!(1, 2, 3);
/// let s = stack!(1);
/// ```
#[macro_export]
macro_rules! stack {
    ([$($up:expr),*], $focus:expr, [$($down:expr),*]) => { $crate::Stack::new([$($up),*], $focus, [$($down),*]) };
    ([$($up:expr),*], $focus:expr) => { $crate::Stack::new([$($up),*], $focus, []) };
    ($focus:expr, [$($down:expr),*]) => { $crate::Stack::new([], $focus, [$($down),*]) };
    ($focus:expr, $($down:expr),+) => { $crate::Stack::new([], $focus, [$($down),*]) };
    ($focus:expr) => { $crate::Stack::new([], $focus, []) };
}

/// Remove and return the first element of a sequence field matching a
/// predicate, retaining the order of the remaining elements.
#[macro_export]
macro_rules! pop_where {
    ($self:ident, $field:ident, $pred:expr) => {{
        let mut popped = None;
        let pred = $pred;

        let remaining = std::mem::take(&mut $self.$field)
            .into_iter()
            .filter_map(|elem| {
                if popped.is_none() && (pred)(&elem) {
                    popped = Some(elem);
                    None
                } else {
                    Some(elem)
                }
            })
            .collect();
        $self.$field = remaining;

        popped
    }};
}
