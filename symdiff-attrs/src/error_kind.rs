use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// A single `tag = expr` pair inside the `error` attribute.
struct Tag {
    name: Ident,
    value: Expr,
}

impl Parse for Tag {
    fn parse(input: ParseStream) -> Result<Self> {
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        Ok(Tag { name, value: input.parse()? })
    }
}

/// The tags given to the `error` attribute.
#[derive(Default)]
struct ErrorArgs {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        for Tag { name, value } in Punctuated::<Tag, Token![,]>::parse_terminated(input)? {
            let slot = match name.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                other => return Err(syn::Error::new_spanned(&name, format!("unknown tag `{}`", other))),
            };

            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(&name, format!("duplicate tag `{}`", name)));
            }
        }

        Ok(args)
    }
}

/// A struct deriving `ErrorKind`, along with its parsed `error` attribute.
pub struct ErrorKindTarget {
    name: Ident,
    fields: Fields,
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item: DeriveInput = input.parse()?;
        let Data::Struct(data) = item.data else {
            return Err(syn::Error::new_spanned(item.ident, "`ErrorKind` can only be derived for structs"));
        };

        let args = match item.attrs.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ErrorArgs>()?,
            None => ErrorArgs::default(),
        };

        let Some(message) = args.message else {
            return Err(syn::Error::new_spanned(item.ident, "the `error` attribute needs a `message` tag"));
        };

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: data.fields,
            message,
            labels: args.labels,
            help: args.help,
        })
    }
}

impl ErrorKindTarget {
    /// Binds each named field of `self` to a local reference, so the tag expressions can use
    /// them by name.
    fn bind_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let idents = fields.named.iter().filter_map(|field| field.ident.as_ref());
                quote! {
                    #[allow(unused_variables)]
                    let #name { #(#idents),* } = self;
                }
            },
            Fields::Unnamed(_) => quote_spanned! { name.span() =>
                compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => TokenStream2::new(),
        }
    }

    fn message_fn(&self, bindings: &TokenStream2) -> TokenStream2 {
        let message = &self.message;
        quote! {
            fn message(&self) -> String {
                #bindings
                (#message).to_string()
            }
        }
    }

    fn build_report_fn(&self, bindings: &TokenStream2) -> TokenStream2 {
        let labels = match &self.labels {
            Some(labels) => quote! { #labels },
            None => quote! { Vec::<String>::new() },
        };
        let help = self.help.as_ref().map(|help| quote! { report.set_help(#help); });

        quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bindings

                // labels pair up with spans in order; extras on either side are dropped
                let labels = (#labels)
                    .into_iter()
                    .zip(spans)
                    .map(|(text, span)| {
                        let text = text.to_string();
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(symdiff_error::EXPR);
                        if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        }
                    })
                    .collect::<Vec<_>>();

                let start = spans.first().map_or(0, |span| span.start);

                #[allow(unused_mut)]
                let mut report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, start)
                    .with_message(<Self as symdiff_error::ErrorKind>::message(self))
                    .with_labels(labels);

                #help
                report.finish()
            }
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let bindings = self.bind_fields();
        let message_fn = self.message_fn(&bindings);
        let build_report_fn = self.build_report_fn(&bindings);

        tokens.extend(quote! {
            impl symdiff_error::ErrorKind for #name {
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                #message_fn

                #build_report_fn
            }
        });
    }
}
