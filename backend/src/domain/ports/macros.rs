//! Macro for declaring repository error enums with snake_case constructors.
//!
//! ```ignore
//! define_port_error! {
//!     pub enum StoreError {
//!         Connection { message: String } => "store unavailable: {message}",
//!         Locked => "store is locked",
//!     }
//! }
//!
//! let error = StoreError::connection("lock poisoned");
//! ```
//!
//! Constructor arguments take `impl Into<T>` so string fields accept `&str`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@constructor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };

    (@constructor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@constructor $variant:ident { $($field:ident : $ty:ty),* }) => {
        ::paste::paste! {
            #[doc = "Build the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation for the port error macro.

    use rstest::rstest;

    define_port_error! {
        pub enum SampleStoreError {
            Connection { message: String } => "store unavailable: {message}",
            Capacity { limit: u32 } => "store holds at most {limit} sessions",
            Conflict { session: String, attempts: u32 } =>
                "session {session} conflicted after {attempts} attempts",
            Locked => "store is locked",
        }
    }

    #[rstest]
    #[case(SampleStoreError::connection("lock poisoned"), "store unavailable: lock poisoned")]
    #[case(SampleStoreError::capacity(3_u32), "store holds at most 3 sessions")]
    #[case(
        SampleStoreError::conflict("scales", 2_u32),
        "session scales conflicted after 2 attempts"
    )]
    #[case(SampleStoreError::locked(), "store is locked")]
    fn constructors_render_messages(#[case] error: SampleStoreError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn string_fields_accept_owned_and_borrowed_values() {
        assert_eq!(
            SampleStoreError::connection(String::from("down")),
            SampleStoreError::connection("down")
        );
    }
}
