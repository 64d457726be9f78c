//! Derive macros for task list actions
//!
//! Reducer actions mix commands (requests coming from the user interface) and
//! events (facts the reducer recorded). This crate derives the helpers the
//! reducers and the store use to tell them apart and to name them in logs.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Generates helpers for action enums (commands/events)
//!
//! # Example
//!
//! ```ignore
//! use tasklist_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TaskAction {
//!     #[command]
//!     AddTask { title: String },
//!
//!     #[event]
//!     TaskAdded { title: String },
//! }
//!
//! assert!(TaskAction::AddTask { title: "test".into() }.is_command());
//! assert!(TaskAction::TaskAdded { title: "test".into() }.is_event());
//! assert_eq!(TaskAction::TaskAdded { title: "test".into() }.event_type(), "TaskAdded");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_command()` - Returns true if this variant is a command
/// - `is_event()` - Returns true if this variant is an event
/// - `event_type()` - Returns the variant name for events, `"unknown"` otherwise
/// - `action_name()` - Returns the variant name for any variant
///
/// # Attributes
///
/// - `#[command]` - Mark a variant as a command
/// - `#[event]` - Mark a variant as an event
///
/// Variants carrying neither attribute (for example wrappers around a child
/// reducer's actions) are neither commands nor events.
///
/// # Errors
///
/// Produces a compile error if:
/// - Applied to a non-enum type
/// - A variant has both `#[command]` and `#[event]` attributes
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut is_command_arms = Vec::new();
    let mut is_event_arms = Vec::new();
    let mut event_type_arms = Vec::new();
    let mut action_name_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        if is_command && is_event {
            return syn::Error::new_spanned(variant, "Variant cannot be both #[command] and #[event]")
                .to_compile_error()
                .into();
        }

        let pattern = variant_pattern(&variant.ident, &variant.fields);
        let variant_name = variant.ident.to_string();

        if is_command {
            is_command_arms.push(quote! { #pattern => true, });
        }

        if is_event {
            is_event_arms.push(quote! { #pattern => true, });
            event_type_arms.push(quote! { #pattern => #variant_name, });
        }

        action_name_arms.push(quote! { #pattern => #variant_name, });
    }

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is a command
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#is_command_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is an event
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_event(&self) -> bool {
                match self {
                    #(#is_event_arms)*
                    _ => false,
                }
            }

            /// Returns the event type name
            ///
            /// Only events have type names. Other variants return "unknown".
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn event_type(&self) -> &'static str {
                match self {
                    #(#event_type_arms)*
                    _ => "unknown",
                }
            }

            /// Returns the variant name, for logging
            #[must_use]
            pub const fn action_name(&self) -> &'static str {
                match self {
                    #(#action_name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Builds a wildcard match pattern for a variant regardless of its shape
fn variant_pattern(variant: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(_) => quote! { Self::#variant { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant(..) },
        Fields::Unit => quote! { Self::#variant },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
