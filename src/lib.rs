//! # sovran-any
//!
//! A type-erased container for a single value of any clonable type.
//!
//! `sovran-any` provides [`AnyValue`], a slot that holds at most one value whose
//! concrete type is chosen when the value is stored and hidden afterwards. The
//! value can only be read back by naming exactly the same type again; any other
//! request fails with [`AnyError::BadCast`].
//!
//! ## Key Features
//!
//! - **Exact type matching**: Values are recovered by `TypeId`, never by conversion
//! - **Deep copies**: Cloning a container clones the held value, without the caller naming its type
//! - **Checked access**: Reading from an empty container is an error, not a crash
//! - **Strong replacement**: A new value is fully built before the old one is dropped
//! - **No macros**: Plain trait objects under the hood
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_any::{AnyValue, AnyError};
//!
//! fn main() -> Result<(), AnyError> {
//!     let mut value = AnyValue::new(42i32);
//!
//!     // Retrieve by exact type
//!     println!("Number: {}", value.downcast_ref::<i32>()?);
//!
//!     // Replace with a value of another type
//!     value.set(String::from("Hello, world!"));
//!     println!("Text: {}", value.downcast_ref::<String>()?);
//!
//!     // Handle errors properly
//!     match value.downcast_ref::<i32>() {
//!         Ok(n) => println!("Still a number: {}", n),
//!         Err(AnyError::BadCast { expected, found }) => {
//!             println!("Wanted {}, but the container holds {}", expected, found)
//!         }
//!         Err(e) => println!("Other error: {}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Building Values In Place
//!
//! ```rust
//! use sovran_any::{make_any, AnyValue, AnyError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Endpoint {
//!     port: u16,
//!     host: String,
//! }
//!
//! impl From<(u16, &str)> for Endpoint {
//!     fn from((port, host): (u16, &str)) -> Self {
//!         Endpoint { port, host: host.to_string() }
//!     }
//! }
//!
//! fn main() -> Result<(), AnyError> {
//!     let mut value = make_any::<Endpoint, _>((8080, "localhost"));
//!     assert_eq!(value.downcast_ref::<Endpoint>()?.port, 8080);
//!
//!     // Modify in place
//!     value.downcast_mut::<Endpoint>()?.port = 9090;
//!
//!     // Rebuild from new arguments, dropping the old value
//!     value.emplace::<Endpoint, _>((443, "example.com"));
//!     assert_eq!(value.downcast_ref::<Endpoint>()?.host, "example.com");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Copying, Moving and Swapping
//!
//! ```rust
//! use sovran_any::{AnyValue, AnyError};
//!
//! let original = AnyValue::new(vec![1, 2, 3]);
//!
//! // A clone is independent of the original
//! let mut copy = original.clone();
//! copy.downcast_mut::<Vec<i32>>()?.push(4);
//! assert_eq!(original.downcast_ref::<Vec<i32>>()?.len(), 3);
//!
//! // Taking leaves the source empty
//! let mut taken = copy.take();
//! assert!(!copy.has_value());
//!
//! // Swapping exchanges contents without cloning
//! taken.swap(&mut copy);
//! assert!(!taken.has_value());
//! assert_eq!(copy.downcast_ref::<Vec<i32>>()?.len(), 4);
//! # Ok::<(), AnyError>(())
//! ```

mod cast;
mod error;
mod holder;
mod value;

pub use cast::{any_cast, any_cast_mut, make_any};
pub use error::{AnyError, Result};
pub use value::AnyValue;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
