/// Implements [common::Spanned] for types with a `span` field.
macro_rules! span_field {
    ($($t:ty),* $(,)?) => {
        $(
            impl common::Spanned for $t {
                #[inline]
                fn span(&self) -> common::Span {
                    self.span
                }
            }
        )*
    };
}

pub(crate) use span_field;
