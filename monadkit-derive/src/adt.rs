//! Implementation of the `#[derive(Adt)]` macro.
//!
//! For every variant of the annotated enum this generates a snake_case
//! constructor, a field on the `<Enum>Cases` handler struct, and an arm of
//! the generated `match_with`. It also implements `monadkit::adt::Adt`,
//! which exposes the discriminant names.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Adt derive macro.
pub fn derive_adt_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_adt(&input, data_enum),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Adt can only be derived for enums: a sum type needs at least one tagged variant.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Adt cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Everything the generator needs to know about one variant.
struct VariantShape<'a> {
    variant: &'a Variant,
    /// snake_case name shared by the constructor and the `Cases` field.
    method_name: Ident,
    /// Type parameter standing for this variant's handler.
    handler_type: Ident,
    /// Constructor parameter names: the field names of a struct-like
    /// variant, `field{index}` otherwise.
    parameters: Vec<Ident>,
    /// Pattern bindings used by `match_with`. Always generated, so a field
    /// name can never shadow the `adt_cases` argument.
    bindings: Vec<Ident>,
    /// Payload types, in declaration order.
    types: Vec<&'a Type>,
}

impl<'a> VariantShape<'a> {
    fn new(variant: &'a Variant) -> Self {
        let variant_name = variant.ident.to_string();
        let method_name = snake_case_ident(&variant_name);
        let handler_type = format_ident!("__Handle{}", variant.ident);

        let (parameters, types): (Vec<Ident>, Vec<&Type>) = match &variant.fields {
            Fields::Unit => (Vec::new(), Vec::new()),
            Fields::Unnamed(fields) => fields
                .unnamed
                .iter()
                .enumerate()
                .map(|(index, field)| (format_ident!("field{}", index), &field.ty))
                .unzip(),
            Fields::Named(fields) => fields
                .named
                .iter()
                .filter_map(|field| field.ident.clone().map(|ident| (ident, &field.ty)))
                .unzip(),
        };
        let bindings = (0..types.len())
            .map(|index| format_ident!("__field{}", index))
            .collect();

        Self {
            variant,
            method_name,
            handler_type,
            parameters,
            bindings,
            types,
        }
    }

    /// Pattern (or construction expression) for this variant, naming the
    /// payload with `names`.
    fn pattern(&self, names: &[Ident]) -> TokenStream2 {
        let variant_name = &self.variant.ident;
        match &self.variant.fields {
            Fields::Unit => quote! { Self::#variant_name },
            Fields::Unnamed(_) => quote! { Self::#variant_name(#(#names),*) },
            Fields::Named(_) => {
                let fields = &self.parameters;
                quote! { Self::#variant_name { #(#fields: #names),* } }
            }
        }
    }

    fn constructor(&self) -> TokenStream2 {
        let method_name = &self.method_name;
        let parameters = &self.parameters;
        let types = &self.types;
        let construction = self.pattern(parameters);
        let doc = format!(
            "Constructs the `{}` variant from its payload fields.",
            self.variant.ident
        );

        quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            #[allow(clippy::too_many_arguments, clippy::redundant_field_names)]
            pub fn #method_name(#(#parameters: #types),*) -> Self {
                #construction
            }
        }
    }

    fn cases_field(&self) -> TokenStream2 {
        let method_name = &self.method_name;
        let handler_type = &self.handler_type;
        let doc = format!("Handler invoked for the `{}` variant.", self.variant.ident);

        quote! {
            #[doc = #doc]
            pub #method_name: #handler_type
        }
    }

    fn handler_bound(&self, output: &Ident) -> TokenStream2 {
        let handler_type = &self.handler_type;
        let types = &self.types;
        quote! { #handler_type: ::core::ops::FnOnce(#(#types),*) -> #output }
    }

    fn match_arm(&self) -> TokenStream2 {
        let method_name = &self.method_name;
        let bindings = &self.bindings;
        let pattern = self.pattern(bindings);
        quote! { #pattern => (adt_cases.#method_name)(#(#bindings),*) }
    }

    fn tag_arm(&self) -> TokenStream2 {
        let variant_name = &self.variant.ident;
        let tag = variant_name.to_string();
        let pattern = match &self.variant.fields {
            Fields::Unit => quote! { Self::#variant_name },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
        };
        quote! { #pattern => #tag }
    }
}

/// Generates constructors, the `Cases` struct, `match_with` and the `Adt` impl.
fn generate_adt(input: &DeriveInput, data_enum: &DataEnum) -> TokenStream2 {
    let name = &input.ident;
    let visibility = &input.vis;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let shapes: Vec<VariantShape<'_>> = data_enum.variants.iter().map(VariantShape::new).collect();

    if let Some(reserved) = shapes
        .iter()
        .find(|shape| RESERVED_METHODS.iter().any(|name| shape.method_name == *name))
    {
        return syn::Error::new_spanned(
            &reserved.variant.ident,
            format!(
                "variant `{}` maps to the constructor `{}` which is reserved by the Adt derive",
                reserved.variant.ident, reserved.method_name
            ),
        )
        .to_compile_error();
    }

    if let Some(duplicate) = find_duplicate_method(&shapes) {
        return syn::Error::new_spanned(
            &duplicate.variant.ident,
            format!(
                "variant `{}` maps to the constructor `{}` which is already used by another variant",
                duplicate.variant.ident, duplicate.method_name
            ),
        )
        .to_compile_error();
    }

    let cases_name = format_ident!("{}Cases", name);
    let output = Ident::new("__Output", Span::call_site());

    let constructors = shapes.iter().map(VariantShape::constructor);
    let handler_types: Vec<&Ident> = shapes.iter().map(|shape| &shape.handler_type).collect();
    let cases_fields = shapes.iter().map(VariantShape::cases_field);
    let handler_bounds = shapes.iter().map(|shape| shape.handler_bound(&output));
    let match_arms = shapes.iter().map(VariantShape::match_arm);
    let tag_arms = shapes.iter().map(VariantShape::tag_arm);
    let tags = shapes.iter().map(|shape| shape.variant.ident.to_string());

    let cases_doc = format!(
        "One handler per variant of [`{name}`], consumed by `{name}::match_with`.\n\n\
         Every field must be supplied, so a missing handler is a compile error."
    );
    let match_doc = format!(
        "Dispatches on the variant of this `{name}` and calls the matching handler from [`{cases_name}`]."
    );

    quote! {
        #[doc = #cases_doc]
        #[allow(non_camel_case_types, clippy::struct_field_names)]
        #visibility struct #cases_name<#(#handler_types),*> {
            #(#cases_fields,)*
        }

        impl #impl_generics #name #type_generics #where_clause {
            #(#constructors)*

            #[doc = #match_doc]
            #[inline]
            #[allow(non_camel_case_types)]
            pub fn match_with<#output, #(#handler_types),*>(
                self,
                adt_cases: #cases_name<#(#handler_types),*>,
            ) -> #output
            where
                #(#handler_bounds,)*
            {
                match self {
                    #(#match_arms,)*
                }
            }
        }

        impl #impl_generics ::monadkit::adt::Adt for #name #type_generics #where_clause {
            const TAGS: &'static [&'static str] = &[#(#tags),*];

            #[inline]
            fn tag(&self) -> &'static str {
                match self {
                    #(#tag_arms,)*
                }
            }
        }
    }
}

/// Method names the derive generates on the enum itself.
const RESERVED_METHODS: &[&str] = &["match_with"];

fn find_duplicate_method<'a, 'b>(shapes: &'b [VariantShape<'a>]) -> Option<&'b VariantShape<'a>> {
    shapes.iter().enumerate().find_map(|(index, shape)| {
        shapes[..index]
            .iter()
            .any(|earlier| earlier.method_name == shape.method_name)
            .then_some(shape)
    })
}

/// Builds the snake_case identifier for a variant, falling back to a raw
/// identifier when the name is a keyword (`Match` -> `r#match`).
fn snake_case_ident(variant_name: &str) -> Ident {
    let snake = to_snake_case(variant_name);
    if syn::parse_str::<Ident>(&snake).is_ok() {
        Ident::new(&snake, Span::call_site())
    } else {
        Ident::new_raw(&snake, Span::call_site())
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous_char = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous_char.is_lowercase()
                    || previous_char.is_ascii_digit()
                    || (previous_char.is_uppercase() && next_is_lowercase)
                {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
