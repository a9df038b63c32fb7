//! # enum_enhancer
//!
//! Companion types for C-like enums. For a marked enum `Quarter` a unit
//! struct `Quarter_` is generated next to it with:
//!
//! - one `&str` constant per variant (`Quarter_::Q3 == "Q3"`);
//! - a `from<Param>` lookup per constructor parameter, returning the first
//!   variant whose `get<Param>()` accessor equals the argument, or
//!   [`NoConstantFound`];
//! - `associate(transform)`, a map from every variant to a computed value;
//! - `enumList()`, every variant in declaration order.
//!
//! A constructor is an inherent associated function of the enum, without a
//! receiver, returning `Self` or the enum's name. `associate` needs the enum
//! to derive `Hash` and `Eq`.
//!
//! ## Inline modules
//!
//! ```
//! use enum_enhancer::{NoConstantFound, enum_enhancer};
//!
//! #[enum_enhancer]
//! mod calendar {
//!     #[enum_enhancer]
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//!     pub enum Quarter {
//!         Q1,
//!         Q2,
//!         Q3,
//!         Q4,
//!     }
//!
//!     impl Quarter {
//!         pub const fn new(quarter: i32) -> Self {
//!             match quarter {
//!                 1 => Quarter::Q1,
//!                 2 => Quarter::Q2,
//!                 3 => Quarter::Q3,
//!                 _ => Quarter::Q4,
//!             }
//!         }
//!
//!         #[allow(non_snake_case)]
//!         pub fn getQuarter(&self) -> i32 {
//!             *self as i32 + 1
//!         }
//!     }
//! }
//!
//! use calendar::{Quarter, Quarter_};
//!
//! assert_eq!(Quarter_::Q2, "Q2");
//! assert_eq!(Quarter_::fromQuarter(3), Ok(Quarter::Q3));
//! assert_eq!(Quarter_::fromQuarter(7), Err(NoConstantFound));
//! assert_eq!(Quarter_::enumList()[0], Quarter::Q1);
//! ```
//!
//! ## Build scripts
//!
//! Out-of-line modules are invisible to an attribute macro. Mark their
//! enums with [`companion`] and generate the companions from `build.rs`
//! with `enum_enhancer_codegen::Builder`, then `include!` each generated
//! file next to its enum.

pub use enum_enhancer_macros::{companion, enum_enhancer};

mod error;

pub use error::NoConstantFound;
