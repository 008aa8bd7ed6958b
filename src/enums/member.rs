use crate::primitives::FixedInt;
use crate::width::Width;

/// One entry of an enum's member table: a name and its underlying value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Member<W: Width> {
    name: &'static str,
    value: FixedInt<W>,
}

impl<W: Width> Member<W> {
    pub const fn new(name: &'static str, value: FixedInt<W>) -> Self {
        Self { name, value }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn value(&self) -> FixedInt<W> {
        self.value
    }
}
