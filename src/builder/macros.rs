//! Macros for declaring state identities.

/// Declare a fieldless enum of state identities and implement
/// [`State`](crate::core::State) and `Display` for it.
///
/// The enum also gets an `ALL` constant listing every variant in
/// declaration order.
///
/// # Example
///
/// ```
/// use gumball::state_enum;
/// use gumball::core::State;
///
/// state_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///         Welded,
///     }
/// }
///
/// assert_eq!(Door::ALL.len(), 3);
/// assert_eq!(Door::Closed.to_string(), "Closed");
/// assert_eq!(Door::Welded.name(), "Welded");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
