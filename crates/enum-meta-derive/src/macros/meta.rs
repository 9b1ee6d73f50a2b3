use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Ident, Lit, LitStr, Meta, Path, PathSegment, Token,
    Type, TypePath, Variant, parse_quote,
};

struct AttributeValue {
    kind: Type,
    value: Expr,
}

struct VariantMeta<'a> {
    ident: &'a Ident,
    description: Option<LitStr>,
    attributes: Vec<AttributeValue>,
}

struct ContainerArgs {
    krate: Path,
    kinds: Vec<Type>,
}

/// Expands `#[derive(EnumMeta)]`.
pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "EnumMeta can only be derived for enums"));
    };

    let args = parse_container_args(&input.attrs)?;
    let variants = data.variants.iter().map(parse_variant).collect::<syn::Result<Vec<_>>>()?;

    let krate = &args.krate;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let idents: Vec<&Ident> = variants.iter().map(|v| v.ident).collect();
    let names: Vec<LitStr> =
        idents.iter().map(|ident| LitStr::new(&ident.unraw().to_string(), ident.span())).collect();

    let description_arms = variants.iter().map(|v| {
        let ident = v.ident;
        v.description.as_ref().map_or_else(
            || quote! { Self::#ident => ::std::vec::Vec::new(), },
            |text| quote! { Self::#ident => ::std::vec![#krate::Description::new(#text)], },
        )
    });

    let kind_impls = collect_kinds(&variants, &args.kinds).into_iter().map(|kind| {
        let arms = variants.iter().map(|v| {
            let ident = v.ident;
            let key = kind_key(&kind);
            let values = v.attributes.iter().filter(|a| kind_key(&a.kind) == key).map(|a| &a.value);
            quote! { Self::#ident => ::std::vec![#(#values),*], }
        });

        quote! {
            #[automatically_derived]
            impl #impl_generics #krate::HasAttribute<#kind> for #name #ty_generics #where_clause {
                fn attributes(&self) -> ::std::vec::Vec<#kind> {
                    match *self {
                        #(#arms)*
                    }
                }
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #krate::EnumMeta for #name #ty_generics #where_clause {
            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];
            const NAMES: &'static [&'static str] = &[#(#names),*];

            fn name(&self) -> &'static str {
                match *self {
                    #(Self::#idents => #names,)*
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics #krate::HasAttribute<#krate::Description> for #name #ty_generics #where_clause {
            fn attributes(&self) -> ::std::vec::Vec<#krate::Description> {
                match *self {
                    #(#description_arms)*
                }
            }
        }

        #(#kind_impls)*
    })
}

fn parse_container_args(attrs: &[Attribute]) -> syn::Result<ContainerArgs> {
    let mut krate: Option<Path> = None;
    let mut kinds: Option<Vec<Type>> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("meta")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                if krate.is_some() {
                    return Err(meta.error("Duplicate argument `crate`"));
                }
                krate = Some(lit.parse()?);
                return Ok(());
            }
            if meta.path.is_ident("kinds") {
                let content;
                syn::parenthesized!(content in meta.input);
                let list = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                if kinds.is_some() {
                    return Err(meta.error("Duplicate argument `kinds`"));
                }
                kinds = Some(list.into_iter().collect());
                return Ok(());
            }
            Err(meta.error("Unsupported argument; expected `crate = \"...\"` or `kinds(...)`"))
        })?;
    }

    Ok(ContainerArgs {
        krate: krate.unwrap_or_else(|| parse_quote!(::enum_meta)),
        kinds: kinds.unwrap_or_default(),
    })
}

fn parse_variant(v: &Variant) -> syn::Result<VariantMeta<'_>> {
    if !matches!(v.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &v.ident,
            "EnumMeta supports unit variants only; remove the fields",
        ));
    }

    let mut description = None;
    let mut attributes = Vec::new();

    for attr in &v.attrs {
        if attr.path().is_ident("description") {
            if description.is_some() {
                return Err(syn::Error::new_spanned(attr, "Duplicate #[description] on variant"));
            }
            description = Some(parse_description(attr)?);
        } else if attr.path().is_ident("attribute") {
            let exprs = attr.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)?;
            for expr in exprs {
                attributes.push(parse_attribute_value(expr)?);
            }
        }
    }

    Ok(VariantMeta { ident: &v.ident, description, attributes })
}

fn parse_description(attr: &Attribute) -> syn::Result<LitStr> {
    match &attr.meta {
        Meta::List(list) => list.parse_args::<LitStr>(),
        Meta::NameValue(name_value) => match &name_value.value {
            Expr::Lit(expr_lit) => match &expr_lit.lit {
                Lit::Str(lit) => Ok(lit.clone()),
                other => Err(syn::Error::new_spanned(other, "description must be a string literal")),
            },
            other => Err(syn::Error::new_spanned(other, "description must be a string literal")),
        },
        Meta::Path(path) => Err(syn::Error::new_spanned(
            path,
            "Expected `#[description(\"...\")]` or `#[description = \"...\"]`",
        )),
    }
}

fn parse_attribute_value(expr: Expr) -> syn::Result<AttributeValue> {
    if let Expr::Assign(assign) = &expr
        && let Expr::Path(kind) = &*assign.left
    {
        let kind = Type::Path(TypePath { qself: None, path: kind.path.clone() });
        return Ok(AttributeValue { kind, value: (*assign.right).clone() });
    }

    let Some(path) = infer_kind(&expr) else {
        return Err(syn::Error::new_spanned(
            expr,
            "Cannot infer the attribute kind; write `Kind = <expr>`",
        ));
    };
    Ok(AttributeValue { kind: Type::Path(TypePath { qself: None, path }), value: expr })
}

/// Reads the attribute kind off the expression that constructs it.
fn infer_kind(expr: &Expr) -> Option<Path> {
    match expr {
        Expr::Struct(lit) => Some(lit.path.clone()),
        Expr::Path(unit) if unit.qself.is_none() => Some(unit.path.clone()),
        Expr::Call(call) => {
            let Expr::Path(func) = &*call.func else {
                return None;
            };
            if func.qself.is_some() {
                return None;
            }
            let last = func.path.segments.last()?;
            // `Kind(..)` is a tuple struct, `Kind::new(..)` an associated constructor.
            if starts_uppercase(&last.ident) {
                return Some(func.path.clone());
            }
            if func.path.segments.len() < 2 {
                return None;
            }
            let len = func.path.segments.len();
            let segments: Punctuated<PathSegment, Token![::]> =
                func.path.segments.iter().take(len - 1).cloned().collect();
            Some(Path { leading_colon: func.path.leading_colon, segments })
        },
        Expr::Paren(inner) => infer_kind(&inner.expr),
        _ => None,
    }
}

fn starts_uppercase(ident: &Ident) -> bool {
    ident.to_string().chars().next().is_some_and(char::is_uppercase)
}

fn collect_kinds(variants: &[VariantMeta<'_>], declared: &[Type]) -> Vec<Type> {
    let mut seen = FxHashSet::default();
    let mut kinds = Vec::new();

    let used = variants.iter().flat_map(|v| v.attributes.iter().map(|a| &a.kind));
    for kind in used.chain(declared) {
        if seen.insert(kind_key(kind)) {
            kinds.push(kind.clone());
        }
    }

    kinds
}

fn kind_key(kind: &Type) -> String {
    kind.to_token_stream().to_string()
}
