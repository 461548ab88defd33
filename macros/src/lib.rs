extern crate proc_macro;

mod declare;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use crate::declare::Declarations;

/// Declares one or more strong typedefs.
///
/// Each declaration mints a marker tag named `<Name>Tag` and a type alias
/// `<Name>` for `::strong_typedef::StrongTypedef<<Name>Tag, T>`. Both get the
/// declaration's visibility; outer attributes such as doc comments land on the
/// alias.
///
/// ```ignore
/// strong_typedef! {
///     /// Primary key of a user row.
///     pub UserId: u32;
///     pub(crate) ProductId: u32;
/// }
///
/// // The two-argument form is also accepted.
/// strong_typedef!(Meters, f64);
/// ```
///
/// Declaring the same name twice in one scope is an ordinary redefinition
/// error.
#[proc_macro]
pub fn strong_typedef(input: TokenStream) -> TokenStream {
    let declarations = parse_macro_input!(input as Declarations);

    match declarations.validate() {
        Ok(()) => declarations.expand().into(),
        Err(e) => e.to_compile_error().into(),
    }
}
