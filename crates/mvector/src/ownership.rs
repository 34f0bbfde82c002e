//! Passing vectors around: values, shared borrows and mutable borrows.
//!
//! A `Vector<T>` has exactly one owner. Functions choose how they receive it.
//!
//! # By value
//!
//! The function takes ownership. The caller either gives the vector up or
//! hands over an explicit copy with `clone`.
//!
//! ```
//! use mvector::Point;
//!
//! fn consume(v: Point) -> f64 {
//!     v.length()
//! }
//!
//! let p = Point::from([3.0, 4.0]);
//! assert_eq!(consume(p.clone()), 5.0);
//! assert_eq!(consume(p), 5.0);
//! // `p` has been moved and can no longer be used here.
//! ```
//!
//! # Shared borrow
//!
//! `&Vector<T>` gives read-only access without copying. Any number of shared
//! borrows may exist at once, and none of them can change the vector.
//!
//! ```
//! use mvector::{dot, Point};
//!
//! fn inspect(v: &Point) -> f64 {
//!     v.length_sq()
//! }
//!
//! let p = Point::from([1.0, 2.0, 2.0]);
//! let (a, b) = (&p, &p);
//! assert_eq!(inspect(a), dot(a, b).unwrap());
//! ```
//!
//! ```compile_fail
//! use mvector::Point;
//!
//! fn tamper(v: &Point) {
//!     v[0] = 1.0;
//! }
//! ```
//!
//! # Mutable borrow
//!
//! `&mut Vector<T>` gives exclusive read/write access for the duration of
//! the borrow. The in-place operations (`try_add_assign`, `scale_assign`,
//! `random`, ...) take the receiver this way and hand it back so calls chain.
//!
//! ```
//! use mvector::Point;
//!
//! fn halve(v: &mut Point) {
//!     v.scale_assign(0.5);
//! }
//!
//! let mut p = Point::from([2.0, 4.0]);
//! halve(&mut p);
//! p.try_add_assign(&Point::from([1.0, 1.0]))
//!     .unwrap()
//!     .scale_assign(2.0);
//! assert_eq!(p.to_vec(), vec![4.0, 6.0]);
//! ```
//!
//! # Binding versus referent
//!
//! Whether a binding can be reassigned (`let mut r`) is separate from
//! whether the data behind it can be changed (`&T` vs `&mut T`):
//!
//! * `let r: &Point` neither rebinds nor writes.
//! * `let mut r: &Point` may point at another vector, still read-only.
//! * `let r: &mut Point` writes through a fixed borrow.
//! * `let mut r: &mut Point` may do both.
//!
//! ```
//! use mvector::Point;
//!
//! let a = Point::from([1.0]);
//! let b = Point::from([2.0]);
//! let mut r: &Point = &a;
//! assert_eq!(r[0], 1.0);
//! r = &b;
//! assert_eq!(r[0], 2.0);
//! ```
//!
//! There is no untyped pointer in safe Rust. Code that needs to handle
//! several element types is written generically over [`Scalar`](crate::Scalar)
//! instead of casting through an erased address.
