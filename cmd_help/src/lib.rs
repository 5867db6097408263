use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Lit, Meta, parse_macro_input};

/// 拼接变体上全部`///`注释行，保留每行的原始缩进。
fn doc_of(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 为枚举生成`all_help()`：按声明顺序返回`(变体名, 帮助信息)`。
#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    let entries = variants.iter().map(|v| {
        let name = v.ident.to_string();
        let doc = doc_of(&v.attrs);
        quote! { (#name, #doc) }
    });

    let expanded = quote! {
        impl #enum_name {
            /// 获取全部帮助信息：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[#(#entries),*]
            }
        }
    };

    TokenStream::from(expanded)
}
