use core::{fmt, marker::PhantomData};

/// A value of type `T` that is nominally distinct from every other
/// `StrongTypedef` with a different `Tag`.
///
/// The tag is an empty marker type. It is never constructed and exists only so
/// that `StrongTypedef<UserIdTag, u32>` and `StrongTypedef<ProductIdTag, u32>`
/// are different types, even though both hold a `u32`.
///
/// Every operation is gated on what `T` itself supports: equality when
/// `T: PartialEq`, ordering when `T: PartialOrd`, `+` and `-` when `T` can be
/// added or subtracted to produce another `T`. Nothing else is provided.
///
/// Construction is always explicit through [`StrongTypedef::new`]; there is no
/// `From<T>` and no `Default`.
#[repr(transparent)]
pub struct StrongTypedef<Tag, T> {
    value: T,
    // `fn() -> Tag` keeps the auto traits of the wrapper equal to those of `T`.
    tag: PhantomData<fn() -> Tag>,
}

impl<Tag, T> StrongTypedef<Tag, T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    /// Returns a copy of the payload.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Unwraps the payload, consuming the wrapper.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<Tag, T> Clone for StrongTypedef<Tag, T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<Tag, T> Copy for StrongTypedef<Tag, T> where T: Copy {}

impl<Tag, T> fmt::Debug for StrongTypedef<Tag, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
