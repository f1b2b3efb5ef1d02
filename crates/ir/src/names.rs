//! Bound-name extraction from binding patterns and parameter lists.

use ast::{Ident, ObjectPatProp, Param, Pat};

/// Calls `emit` once per identifier bound by `pat`, in declaration order.
/// Duplicates are not suppressed; well-formed input will not produce any.
///
/// Computed keys contribute nothing (only the bound value does), and
/// default-value expressions never contribute names.
pub fn for_each_bound_name<'a>(pat: &'a Pat, emit: &mut dyn FnMut(&'a Ident)) {
    match pat {
        Pat::Ident(binding) => emit(&binding.id),
        Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                for_each_bound_name(elem, emit);
            }
        }
        Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    ObjectPatProp::KeyValue(kv) => for_each_bound_name(&kv.value, emit),
                    ObjectPatProp::Assign(a) => emit(&a.key),
                    ObjectPatProp::Rest(rest) => for_each_bound_name(&rest.arg, emit),
                }
            }
        }
        Pat::Assign(assign) => for_each_bound_name(&assign.left, emit),
        Pat::Rest(rest) => for_each_bound_name(&rest.arg, emit),
        Pat::Invalid(_) => {}
    }
}

/// [for_each_bound_name] over every parameter of a list, left to right.
pub fn for_each_param_name<'a>(params: &'a [Param], emit: &mut dyn FnMut(&'a Ident)) {
    for param in params {
        for_each_bound_name(&param.pat, emit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::{
        ArrayPat, AssignPat, AssignPatProp, BindingIdent, ComputedPropName, Expr, KeyValuePatProp,
        Lit, Number, ObjectPat, PropName, RestPat,
    };
    use common::DUMMY_SP;
    use pretty_assertions::assert_eq;

    fn ident(sym: &str) -> Ident {
        Ident::new(sym.into(), DUMMY_SP)
    }

    fn binding(sym: &str) -> Pat {
        Pat::Ident(BindingIdent::from(ident(sym)))
    }

    fn number(value: f64) -> Expr {
        Expr::Lit(Lit::Num(Number {
            span: DUMMY_SP,
            value,
        }))
    }

    fn collect(params: &[Param]) -> Vec<String> {
        let mut names = Vec::new();
        for_each_param_name(params, &mut |id| names.push(id.sym.to_string()));
        names
    }

    fn param(pat: Pat) -> Param {
        Param {
            span: DUMMY_SP,
            pat,
        }
    }

    #[test]
    fn params_in_declaration_order() {
        // ([x1, x2], {y1, y2}, z = 0)
        let array = Pat::Array(ArrayPat {
            span: DUMMY_SP,
            elems: vec![Some(binding("x1")), Some(binding("x2"))],
            type_ann: None,
        });
        let object = Pat::Object(ObjectPat {
            span: DUMMY_SP,
            props: vec![
                ObjectPatProp::Assign(AssignPatProp {
                    span: DUMMY_SP,
                    key: ident("y1"),
                    value: None,
                }),
                ObjectPatProp::Assign(AssignPatProp {
                    span: DUMMY_SP,
                    key: ident("y2"),
                    value: None,
                }),
            ],
            type_ann: None,
        });
        let defaulted = Pat::Assign(AssignPat {
            span: DUMMY_SP,
            left: Box::new(binding("z")),
            right: Box::new(number(0.0)),
        });

        assert_eq!(
            collect(&[param(array), param(object), param(defaulted)]),
            vec!["x1", "x2", "y1", "y2", "z"]
        );
    }

    #[test]
    fn holes_contribute_nothing() {
        let array = Pat::Array(ArrayPat {
            span: DUMMY_SP,
            elems: vec![None, Some(binding("a")), None],
            type_ann: None,
        });
        assert_eq!(collect(&[param(array)]), vec!["a"]);
    }

    #[test]
    fn computed_keys_contribute_only_their_targets() {
        // { [k]: v, ...rest }
        let object = Pat::Object(ObjectPat {
            span: DUMMY_SP,
            props: vec![
                ObjectPatProp::KeyValue(KeyValuePatProp {
                    key: PropName::Computed(ComputedPropName {
                        span: DUMMY_SP,
                        expr: Box::new(Expr::Ident(ident("k"))),
                    }),
                    value: Box::new(binding("v")),
                }),
                ObjectPatProp::Rest(RestPat {
                    span: DUMMY_SP,
                    dot3_token: DUMMY_SP,
                    arg: Box::new(binding("rest")),
                }),
            ],
            type_ann: None,
        });
        assert_eq!(collect(&[param(object)]), vec!["v", "rest"]);
    }

    #[test]
    fn default_expressions_contribute_nothing() {
        // [a = b] binds only `a`.
        let array = Pat::Array(ArrayPat {
            span: DUMMY_SP,
            elems: vec![Some(Pat::Assign(AssignPat {
                span: DUMMY_SP,
                left: Box::new(binding("a")),
                right: Box::new(Expr::Ident(ident("b"))),
            }))],
            type_ann: None,
        });
        assert_eq!(collect(&[param(array)]), vec!["a"]);
    }
}
