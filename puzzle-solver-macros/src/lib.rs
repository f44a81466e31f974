//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro that assembles the `Solver` trait impl from `PartSolver<N>` impls
///
/// Generates `const PARTS` and a `solve_part` that dispatches part `n` to
/// `<Self as PartSolver<n>>::solve`. Every part in `1..=max_parts` must have
/// a `PartSolver<N>` impl or the generated code fails to compile.
///
/// # Attributes
///
/// - `max_parts`: Required. The number of parts the solver supports.
///
/// # Example
///
/// ```ignore
/// use puzzle_solver::{PuzzleParser, PartSolver, PuzzleSolver};
///
/// #[derive(PuzzleSolver)]
/// #[puzzle_solver(max_parts = 2)]
/// struct Day4Solver;
///
/// impl PuzzleParser for Day4Solver { /* ... */ }
/// impl PartSolver<1> for Day4Solver { /* ... */ }
/// impl PartSolver<2> for Day4Solver { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle_solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle_solver"))
        .expect("PuzzleSolver derive macro requires #[puzzle_solver(...)] attribute");

    let mut max_parts: Option<u8> = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                max_parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle_solver(...)] attribute");

    let max_parts = max_parts.expect("Missing required 'max_parts' attribute");
    assert!(max_parts >= 1, "'max_parts' must be at least 1");

    let arms = (1..=max_parts).map(|n| {
        let lit = Literal::u8_unsuffixed(n);
        quote! {
            #lit => <#name as ::puzzle_solver::PartSolver<#lit>>::solve(shared),
        }
    });
    let parts_lit = Literal::u8_unsuffixed(max_parts);

    let expanded = quote! {
        impl ::puzzle_solver::Solver for #name {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> Result<String, ::puzzle_solver::SolveError> {
                match part {
                    #(#arms)*
                    other => Err(::puzzle_solver::SolveError::PartNotImplemented(other)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates the code to register a solver with the inventory system,
/// allowing it to be discovered and registered automatically.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2025)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "wip"])
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not
/// implemented, you will get a clear compile-time error.
///
/// # Example
///
/// ```ignore
/// use puzzle_solver::{PuzzleSolver, AutoRegister};
///
/// #[derive(PuzzleSolver, AutoRegister)]
/// #[puzzle_solver(max_parts = 2)]
/// #[puzzle(year = 2025, day = 4, tags = ["grid"])]
/// struct Day4Solver;
/// ```
#[proc_macro_derive(AutoRegister, attributes(puzzle))]
pub fn derive_auto_register(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("AutoRegister derive macro requires #[puzzle(...)] attribute");

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle(...)] attribute");

    let year = year.expect("Missing required 'year' attribute");
    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements Solver, for a clearer
        // error message than the one from the plugin registration below
        const _: () = {
            trait MustImplementSolver: ::puzzle_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
