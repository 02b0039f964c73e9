//! Helper macros for export generation.
//!
//! `abi_fn!` turns an ordinary function item into a
//! `#[unsafe(no_mangle)] pub unsafe extern "C" fn` so every exported symbol
//! has the same shape and its body runs inside one `unsafe` block.

/// Generate an unmangled `extern "C"` export.
///
/// # Usage
///
/// ```ignore
/// abi_fn! {
///     /// Doc comment for the symbol.
///     #[allow(non_snake_case)]
///     fn getThing(out: *mut c_int) -> c_int {
///         // body
///     }
/// }
/// ```
///
/// Attributes, doc comments included, are forwarded to the generated item.
/// Pointer checks belong in the body; nothing is validated implicitly.
macro_rules! abi_fn {
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? ) -> $ret:ty
        $body:block
    ) => {
        $(#[$meta])*
        #[allow(unused_unsafe)]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) -> $ret {
            unsafe { $body }
        }
    };

    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? )
        $body:block
    ) => {
        $(#[$meta])*
        #[allow(unused_unsafe)]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) {
            unsafe { $body }
        }
    };
}
