/// Duplicate an [item](https://doc.rust-lang.org/nightly/reference/items.html) `$imp` for each type
/// `$Real`, making it available within `$imp` under the alias `$RealAlias`.
///
/// Please use traits instead of this, where reasonable.
#[macro_export]
macro_rules! item_with {
    {$RealAlias:ident: $($Real:ty),+ => $imp:item} => {
        $(
            const _: () = { // anonymous module
                type $RealAlias = $Real;
                $imp
            };
        )+
    };
}

/// Implement `From<Vec<$T>>` for an enum whose variants each wrap a `Vec` of one component type.
///
/// ```ignore
/// impl_from_vec!(AttributeData: u8 => U8, f32 => F32);
/// ```
#[macro_export]
macro_rules! impl_from_vec {
    ($Target:ident: $($T:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<Vec<$T>> for $Target {
                #[inline]
                fn from(value: Vec<$T>) -> Self {
                    Self::$variant(value)
                }
            }
            impl From<&[$T]> for $Target {
                #[inline]
                fn from(value: &[$T]) -> Self {
                    Self::$variant(value.to_vec())
                }
            }
            impl<const N: usize> From<[$T; N]> for $Target {
                #[inline]
                fn from(value: [$T; N]) -> Self {
                    Self::$variant(value.to_vec())
                }
            }
        )+
    };
}
