//! Typed extraction of several values at once

use std::any::{Any, type_name};
use std::sync::Arc;

use assembly_domain::{Error, Result, Value};

/// Downcast a released value, naming the entry on failure
pub fn downcast<T: Any + Send + Sync>(name: &str, value: &Value) -> Result<Arc<T>> {
    value.downcast::<T>().ok_or_else(|| Error::TypeMismatch {
        name: name.to_string(),
        expected: type_name::<T>(),
        found: value.type_name(),
    })
}

/// A tuple of types that released values can be converted into
///
/// Implemented for tuples of one to eight `Send + Sync + 'static` types;
/// each position comes back as an `Arc` of that type.
pub trait Extract {
    /// The tuple of shared handles handed back to the caller
    type Output;

    /// Number of names the tuple expects
    const LEN: usize;

    /// Convert values released for `names` into the output tuple
    fn extract(names: &[&str], values: &[Value]) -> Result<Self::Output>;
}

macro_rules! impl_extract {
    ($len:expr; $($ty:ident => $index:tt),+) => {
        impl<$($ty: Any + Send + Sync),+> Extract for ($($ty,)+) {
            type Output = ($(Arc<$ty>,)+);
            const LEN: usize = $len;

            fn extract(names: &[&str], values: &[Value]) -> Result<Self::Output> {
                if names.len() != Self::LEN || values.len() != Self::LEN {
                    return Err(Error::invalid_argument(format!(
                        "expected {} names, got {}",
                        Self::LEN,
                        names.len()
                    )));
                }
                Ok(($(downcast::<$ty>(names[$index], &values[$index])?,)+))
            }
        }
    };
}

impl_extract!(1; A => 0);
impl_extract!(2; A => 0, B => 1);
impl_extract!(3; A => 0, B => 1, C => 2);
impl_extract!(4; A => 0, B => 1, C => 2, D => 3);
impl_extract!(5; A => 0, B => 1, C => 2, D => 3, E => 4);
impl_extract!(6; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_extract!(7; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_extract!(8; A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
