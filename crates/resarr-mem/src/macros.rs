#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

#[macro_export]
macro_rules! size_of {
    ($t:ty) => {
        size_of::<$t>()
    };
}

/// Implements several traits for one generic type in a single block.
///
/// Generic parameters take an optional bound and an optional qualifier in
/// brackets, e.g. `N: usize [const]` for const generics.
#[macro_export]
macro_rules! impl_traits {
    (
        for $type:ident $(<$($gen:tt $(: $bounds:tt)? $([$gen_q:ident])?),*>)?
        $trait_this:ident $(<$($trg_this:ty),+>)?
                $(where $($trbl_this:ty: $trbr_this:tt),+)? =>
            $(type $stype_this:ident = $sty_this:ty;)*
            $(
                $(#[$macro_this:ident $(($macro_spec_this:ident))?])*
                fn $met_this:ident($($arg_this:tt)*) $(-> $ret_this:ty)? $body_this:block
            )*
        ,
        $($trait:ident $(<$($trg:ty),+>)?
                $(where $($trbl:ty: $trbr:tt),+)? =>
            $(type $stype:ident = $sty:ty;)*
            $(
                $(#[$macro:ident $(($macro_spec:ident))?])*
                fn $met:ident($($arg:tt)*) $(-> $ret:ty)? $body:block
            )*
        ),*
        $(,)?
    ) =>
    {
        impl<$($($($gen_q)? $gen $(: $bounds)?),*)?> $trait_this $(<$($trg_this),+>)?
                for $type<$($($gen),*)?>
            $(
                where
                    $($trbl_this: $trbr_this),+
            )?
        {

            $(
                type $stype_this = $sty_this;
            )*

            $(
                $(#[$macro_this $(($macro_spec_this))?])*
                fn $met_this($($arg_this)*) $(-> $ret_this)? $body_this
            )*
        }
        impl_traits! {
            for $type $(<$($gen $(: $bounds)? $([$gen_q])?),*>)?
            $($trait $(<$($trg),+>)? $(where $($trbl: $trbr),+)? =>
                $(type $stype = $sty;)*
                $(
                    $(#[$macro $(($macro_spec))?])*
                    fn $met($($arg)*) $(-> $ret)? $body
                )*
            ),*
            ,
        }
    };
    (
        for $type:ident $(<$($gen:tt $(: $bounds:tt)? $([$gen_q:ident])?),*>)?
        ,
    ) =>
    {
    };
}
