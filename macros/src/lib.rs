use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Returns true if the type is spelled as a bare `Component`.
fn is_component(ty: &syn::Type) -> bool {
    matches!(ty, syn::Type::Path(p) if p.qself.is_none() && p.path.is_ident("Component"))
}

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Model fields must be named.")
        }
        .into();
    }

    let (field_names, field_types): (Vec<_>, Vec<_>) = input
        .fields
        .iter()
        .map(|f| (f.ident.clone(), f.ty.clone()))
        .unzip();
    debug_assert!(field_names.len() == 3);

    let [field1, field2, field3] = [&field_names[0], &field_names[1], &field_names[2]];
    let [ty1, ty2, ty3] = [&field_types[0], &field_types[1], &field_types[2]];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its three components.
            pub fn new(#field1: #ty1, #field2: #ty2, #field3: #ty3) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components as a tuple.
            pub fn to_tuple(&self) -> (#ty1, #ty2, #ty3) {
                (self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<(#ty1, #ty2, #ty3)> for #struct_name {
            fn from(value: (#ty1, #ty2, #ty3)) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for (#ty1, #ty2, #ty3) {
            fn from(value: #struct_name) -> Self {
                value.to_tuple()
            }
        }
    };

    // Models with float components also interoperate with `Components`.
    let components_impl: proc_macro2::TokenStream = if field_types.iter().all(is_component) {
        quote! {
            impl #struct_name {
                /// Convert this model into generic components.
                pub fn to_components(&self) -> crate::color::Components {
                    crate::color::Components(self.#field1, self.#field2, self.#field3)
                }
            }

            impl From<crate::color::Components> for #struct_name {
                fn from(value: crate::color::Components) -> Self {
                    Self::new(value.0, value.1, value.2)
                }
            }
        }
    } else {
        quote! {}
    };

    quote! {
        #input
        #new_impl
        #components_impl
    }
    .into()
}
