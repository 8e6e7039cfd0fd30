use core::fmt;

macro_rules! declare {
    ($ty_vis:vis struct $ty:ident {
        $(
            #[name = $name:literal]
            $vis:vis const $ident:ident = $value:expr;
        )*
    }) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        $ty_vis struct $ty(u32);

        impl $ty {
            $(
                #[doc = concat!(" The `", $name, "` type.")]
                $vis const $ident: Self = Self($value);
            )*

            /// Get the name of the type.
            #[inline]
            pub const fn name(&self) -> &'static str {
                match *self {
                    $(Self::$ident => $name,)*
                    _ => "Unknown",
                }
            }
        }

        impl fmt::Display for $ty {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl fmt::Debug for $ty {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    };
}

declare! {
    pub struct Type {
        #[name = "Int"]
        pub const INT = 1;
        #[name = "Float"]
        pub const FLOAT = 2;
        #[name = "Bool"]
        pub const BOOL = 3;
        #[name = "String"]
        pub const STRING = 4;
    }
}
