//! Strong typedefs: nominally distinct wrappers over a shared representation.
//!
//! [`StrongTypedef<Tag, T>`] holds one `T`. Two wrappers with different tags are
//! different types, so a `UserId` can never be passed where a `ProductId` is
//! expected even though both hold a `u32`. Operators are available only when
//! the payload supports them:
//!
//! | payload bound             | wrapper gains                      |
//! |---------------------------|------------------------------------|
//! | `PartialEq` / `Eq`        | `==`, `!=`                         |
//! | `PartialOrd` / `Ord`      | `<`, `<=`, `>`, `>=`, `cmp`        |
//! | `Add<Output = T>`         | `+`                                |
//! | `Sub<Output = T>`         | `-`                                |
//!
//! The [`strong_typedef!`] macro mints a tag and an alias in one step:
//!
//! ```
//! use strong_typedef::strong_typedef;
//!
//! strong_typedef! {
//!     pub UserId: u32;
//!     pub Meters: f64;
//! }
//!
//! assert_eq!(UserId::new(123), UserId::new(123));
//! assert_eq!((Meters::new(10.0) + Meters::new(5.0)).value(), 15.0);
//! assert_eq!((Meters::new(10.0) - Meters::new(5.0)).value(), 5.0);
//! ```
//!
//! Everything below is rejected by the compiler.
//!
//! Mixing tags:
//!
//! ```compile_fail
//! use strong_typedef::strong_typedef;
//!
//! strong_typedef! {
//!     UserId: u32;
//!     ProductId: u32;
//! }
//!
//! let _ = UserId::new(123) == ProductId::new(123);
//! ```
//!
//! ```compile_fail
//! use strong_typedef::strong_typedef;
//!
//! strong_typedef! {
//!     UserId: u32;
//!     ProductId: u32;
//! }
//!
//! let _ = UserId::new(1) < ProductId::new(2);
//! ```
//!
//! ```compile_fail
//! use strong_typedef::strong_typedef;
//!
//! strong_typedef! {
//!     Meters: f64;
//!     Seconds: f64;
//! }
//!
//! let _ = Meters::new(1.0) + Seconds::new(2.0);
//! ```
//!
//! Implicit construction from the payload:
//!
//! ```compile_fail
//! use strong_typedef::strong_typedef;
//!
//! strong_typedef!(UserId, u32);
//!
//! fn lookup(_id: UserId) {}
//! lookup(123);
//! ```
//!
//! ```compile_fail
//! use strong_typedef::strong_typedef;
//!
//! strong_typedef!(UserId, u32);
//!
//! let _: UserId = 123u32.into();
//! ```
//!
//! Default construction:
//!
//! ```compile_fail
//! use strong_typedef::strong_typedef;
//!
//! strong_typedef!(UserId, u32);
//!
//! let _ = UserId::default();
//! ```
//!
//! Operators the payload does not support. A pair with equality only:
//!
//! ```
//! use strong_typedef::strong_typedef;
//!
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! struct Pair(u8, u8);
//!
//! strong_typedef!(Coord, Pair);
//!
//! assert_eq!(Coord::new(Pair(1, 2)), Coord::new(Pair(1, 2)));
//! assert_ne!(Coord::new(Pair(1, 2)), Coord::new(Pair(2, 1)));
//! ```
//!
//! ```compile_fail
//! # use strong_typedef::strong_typedef;
//! # #[derive(Clone, Copy, PartialEq, Debug)]
//! # struct Pair(u8, u8);
//! # strong_typedef!(Coord, Pair);
//! let _ = Coord::new(Pair(1, 2)) < Coord::new(Pair(2, 1));
//! ```
//!
//! ```compile_fail
//! # use strong_typedef::strong_typedef;
//! # #[derive(Clone, Copy, PartialEq, Debug)]
//! # struct Pair(u8, u8);
//! # strong_typedef!(Coord, Pair);
//! let _ = Coord::new(Pair(1, 2)) + Coord::new(Pair(2, 1));
//! ```
//!
//! A payload with no capabilities at all:
//!
//! ```compile_fail
//! # use strong_typedef::strong_typedef;
//! struct Opaque;
//!
//! strong_typedef!(Handle, Opaque);
//!
//! let _ = Handle::new(Opaque) == Handle::new(Opaque);
//! ```
//!
//! `String` is ordered but has no `Add<String>`:
//!
//! ```compile_fail
//! # use strong_typedef::strong_typedef;
//! strong_typedef!(Name, String);
//!
//! let _ = Name::new("a".to_owned()) + Name::new("b".to_owned());
//! ```
//!
//! Only equality, ordering, `+` and `-` are forwarded:
//!
//! ```compile_fail
//! # use strong_typedef::strong_typedef;
//! strong_typedef!(Meters, f64);
//!
//! let _ = Meters::new(2.0) * Meters::new(3.0);
//! ```
//!
//! Declaring the same name twice:
//!
//! ```compile_fail
//! use strong_typedef::strong_typedef;
//!
//! strong_typedef! {
//!     Meters: f64;
//!     Meters: f32;
//! }
//! ```

#![no_std]

// lets `strong_typedef!` expansions resolve inside this crate's own tests
extern crate self as strong_typedef;

mod ops;
mod typedef;

pub use crate::typedef::StrongTypedef;

#[cfg(feature = "macros")]
pub use strong_typedef_macros::strong_typedef;
