//! Capability-gated operators.
//!
//! Each impl is bounded only on the matching trait of the payload, so the
//! three axes (equality, ordering, arithmetic) are independent of each other.
//! Operands on both sides are always the same `StrongTypedef<Tag, T>`.

use core::{
    cmp::Ordering,
    ops::{Add, Sub},
};

use crate::StrongTypedef;

impl<Tag, T> PartialEq for StrongTypedef<Tag, T>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<Tag, T> Eq for StrongTypedef<Tag, T> where T: Eq {}

impl<Tag, T> PartialOrd for StrongTypedef<Tag, T>
where
    T: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }

    // relational operators forward to the payload's own, not to `partial_cmp`
    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.get() < other.get()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.get() <= other.get()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.get() > other.get()
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.get() >= other.get()
    }
}

impl<Tag, T> Ord for StrongTypedef<Tag, T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<Tag, T> Add for StrongTypedef<Tag, T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.into_inner() + rhs.into_inner())
    }
}

impl<Tag, T> Sub for StrongTypedef<Tag, T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.into_inner() - rhs.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::StrongTypedef;
    use core::{cmp::Ordering, num::Wrapping};

    enum ATag {}

    type AType = StrongTypedef<ATag, f64>;

    #[test]
    fn equality() {
        let x = AType::new(1.0);
        let xx = AType::new(2.0);

        assert_eq!(x, x);
        assert_ne!(x, xx);
    }

    #[test]
    fn three_way_comparison() {
        let x = AType::new(1.0);
        let xx = AType::new(2.0);

        assert!(x < xx);
        assert!(xx > x);
        assert!(x != xx);
        assert!(x <= xx);
        assert!(xx >= x);
        assert_eq!(x.partial_cmp(&xx), Some(Ordering::Less));
    }

    #[test]
    fn nan_stays_unordered() {
        let nan = AType::new(f64::NAN);
        let one = AType::new(1.0);

        assert_eq!(nan.partial_cmp(&one), None);
        assert!(!(nan < one));
        assert!(!(nan <= one));
        assert!(!(nan > one));
        assert!(!(nan >= one));
        assert_ne!(nan, nan);
    }

    #[test]
    fn total_order_follows_payload() {
        enum IdTag {}
        type Id = StrongTypedef<IdTag, u32>;

        assert_eq!(Id::new(3).cmp(&Id::new(7)), Ordering::Less);
        assert_eq!(Id::new(3).max(Id::new(7)), Id::new(7));
        assert_eq!(Id::new(9).clamp(Id::new(0), Id::new(5)), Id::new(5));
    }

    #[test]
    fn arithmetic_operations() {
        let x = AType::new(1.0);
        let y = AType::new(2.0);

        let sum = x + y;
        let diff = x - y;

        assert_eq!(sum.value(), 3.0);
        assert_eq!(diff.value(), -1.0);
    }

    #[test]
    fn arithmetic_keeps_payload_overflow_semantics() {
        enum ByteTag {}
        type Byte = StrongTypedef<ByteTag, Wrapping<u8>>;

        let sum = Byte::new(Wrapping(250)) + Byte::new(Wrapping(10));
        let diff = Byte::new(Wrapping(3)) - Byte::new(Wrapping(5));

        assert_eq!(sum.into_inner(), Wrapping(4));
        assert_eq!(diff.into_inner(), Wrapping(254));
    }

    #[test]
    fn arithmetic_keeps_payload_rounding() {
        let sum = AType::new(0.1) + AType::new(0.2);
        assert_eq!(sum.value(), 0.1 + 0.2);
    }
}
