//! RPC argument schema model and help-text rendering.
//!
//! A command declares its parameters once, at registration time, as an
//! ordered list of [`ArgSpec`] nodes; [`render_signature`] walks that list
//! to produce the one-line call signature shown in help output. The
//! rendered text is a compatibility contract: optional arguments are
//! grouped with literal `"( "` / `" )"` markers, arrays render as
//! `[child,...]`, objects as `{"field":form,...}`, and the line always ends
//! with a single line break.

use crate::error::{Result, RpcError};
use serde::{Deserialize, Serialize};

/// Type of one RPC parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgType {
    /// Plain string
    Str,
    /// Hex-encoded string
    StrHex,
    /// Number
    Num,
    /// Monetary amount
    Amount,
    /// Boolean
    Bool,
    /// Array; `inner` holds the single element template
    Arr,
    /// Object with a fixed set of named fields in `inner`
    Obj,
    /// Object that also accepts keys beyond those listed in `inner`
    ObjUserKeys,
}

/// Schema node describing one RPC parameter.
///
/// Immutable once declared. Non-composite types carry no children; an
/// array carries one element template and an object one child per named
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSpec {
    pub name: String,
    pub arg_type: ArgType,
    pub optional: bool,
    pub inner: Vec<ArgSpec>,
}

impl ArgSpec {
    /// A required argument with no children
    pub fn required(name: &str, arg_type: ArgType) -> Self {
        Self {
            name: name.to_string(),
            arg_type,
            optional: false,
            inner: Vec::new(),
        }
    }

    /// An optional argument with no children
    pub fn optional(name: &str, arg_type: ArgType) -> Self {
        Self {
            name: name.to_string(),
            arg_type,
            optional: true,
            inner: Vec::new(),
        }
    }

    /// Attach child specs to a composite argument
    pub fn with_inner(mut self, inner: Vec<ArgSpec>) -> Self {
        self.inner = inner;
        self
    }
}

/// Render a command's one-line call signature.
///
/// Emits the command name followed by each argument's token. Once the
/// first optional argument opens the `"( "` group, every later argument
/// must also be optional: positional semantics forbid a required argument
/// after an optional one, and declaring one is a defect in the command's
/// schema, reported as [`RpcError::SchemaInvariantViolation`] with no
/// partial text produced. The result always ends with one line break.
pub fn render_signature(name: &str, args: &[ArgSpec]) -> Result<String> {
    let mut out = String::from(name);
    let mut is_optional = false;
    for arg in args {
        out.push(' ');
        if arg.optional {
            if !is_optional {
                out.push_str("( ");
                is_optional = true;
            }
        } else if is_optional {
            return Err(RpcError::SchemaInvariantViolation {
                command: name.to_string(),
                arg: arg.name.clone(),
            });
        }
        out.push_str(&render_token(arg)?);
    }
    if is_optional {
        out.push_str(" )");
    }
    out.push('\n');
    Ok(out)
}

/// Render one argument's signature token.
pub fn render_token(arg: &ArgSpec) -> Result<String> {
    Ok(match arg.arg_type {
        ArgType::Str | ArgType::StrHex => format!("\"{}\"", arg.name),
        ArgType::Num | ArgType::Amount | ArgType::Bool => arg.name.clone(),
        ArgType::Arr => {
            let mut res = String::from("[");
            for inner in &arg.inner {
                res.push_str(&render_token(inner)?);
                res.push(',');
            }
            res.push_str("...]");
            res
        }
        ArgType::Obj | ArgType::ObjUserKeys => {
            let fields = arg
                .inner
                .iter()
                .map(render_structure)
                .collect::<Result<Vec<String>>>()?
                .join(",");
            if arg.arg_type == ArgType::ObjUserKeys {
                format!("{{{},...}}", fields)
            } else {
                format!("{{{}}}", fields)
            }
        }
    })
}

/// Render one argument's structural form, as used inside an object token.
///
/// An object nested inside another object has no defined rendering in the
/// current format; that shape is reported as
/// [`RpcError::UnsupportedSchemaShape`] rather than guessed at.
pub fn render_structure(arg: &ArgSpec) -> Result<String> {
    let mut res = format!("\"{}\":", arg.name);
    match arg.arg_type {
        ArgType::Str => res.push_str("\"str\""),
        ArgType::StrHex => res.push_str("\"hex\""),
        ArgType::Num => res.push('n'),
        ArgType::Amount => res.push_str("amount"),
        ArgType::Bool => res.push_str("bool"),
        ArgType::Arr => {
            res.push('[');
            for inner in &arg.inner {
                res.push_str(&render_token(inner)?);
                res.push(',');
            }
            res.push_str("...]");
        }
        ArgType::Obj | ArgType::ObjUserKeys => {
            return Err(RpcError::UnsupportedSchemaShape(arg.name.clone()));
        }
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_no_args() {
        assert_eq!(render_signature("getinfo", &[]).unwrap(), "getinfo\n");
    }

    #[test]
    fn test_signature_required_then_optionals() {
        let args = vec![
            ArgSpec::required("required_a", ArgType::Num),
            ArgSpec::optional("optional_b", ArgType::Num),
            ArgSpec::optional("optional_c", ArgType::Num),
        ];
        assert_eq!(
            render_signature("foo", &args).unwrap(),
            "foo required_a ( optional_b optional_c )\n"
        );
    }

    #[test]
    fn test_signature_all_required() {
        let args = vec![
            ArgSpec::required("nrequired", ArgType::Num),
            ArgSpec::required("keys", ArgType::Arr)
                .with_inner(vec![ArgSpec::required("key", ArgType::Str)]),
        ];
        assert_eq!(
            render_signature("createmultisig", &args).unwrap(),
            "createmultisig nrequired [\"key\",...]\n"
        );
    }

    #[test]
    fn test_signature_required_after_optional_is_a_defect() {
        let args = vec![
            ArgSpec::optional("optional_a", ArgType::Num),
            ArgSpec::required("required_b", ArgType::Num),
        ];
        let err = render_signature("foo", &args).unwrap_err();
        assert_eq!(
            err,
            RpcError::SchemaInvariantViolation {
                command: "foo".to_string(),
                arg: "required_b".to_string(),
            }
        );
    }

    #[test]
    fn test_token_string_types_quote_the_name() {
        assert_eq!(
            render_token(&ArgSpec::required("address", ArgType::Str)).unwrap(),
            "\"address\""
        );
        assert_eq!(
            render_token(&ArgSpec::required("txid", ArgType::StrHex)).unwrap(),
            "\"txid\""
        );
    }

    #[test]
    fn test_token_bare_types() {
        assert_eq!(
            render_token(&ArgSpec::required("minconf", ArgType::Num)).unwrap(),
            "minconf"
        );
        assert_eq!(
            render_token(&ArgSpec::required("fee", ArgType::Amount)).unwrap(),
            "fee"
        );
        assert_eq!(
            render_token(&ArgSpec::required("verbose", ArgType::Bool)).unwrap(),
            "verbose"
        );
    }

    #[test]
    fn test_token_array_of_strings() {
        let arg = ArgSpec::required("keys", ArgType::Arr)
            .with_inner(vec![ArgSpec::required("x", ArgType::Str)]);
        assert_eq!(render_token(&arg).unwrap(), "[\"x\",...]");
    }

    #[test]
    fn test_token_object() {
        let arg = ArgSpec::required("options", ArgType::Obj).with_inner(vec![
            ArgSpec::required("feerate", ArgType::Amount),
            ArgSpec::required("replaceable", ArgType::Bool),
        ]);
        assert_eq!(
            render_token(&arg).unwrap(),
            "{\"feerate\":amount,\"replaceable\":bool}"
        );
    }

    #[test]
    fn test_token_object_user_keys_appends_ellipsis() {
        let arg = ArgSpec::required("outputs", ArgType::ObjUserKeys)
            .with_inner(vec![ArgSpec::required("data", ArgType::StrHex)]);
        assert_eq!(render_token(&arg).unwrap(), "{\"data\":\"hex\",...}");
    }

    #[test]
    fn test_structure_scalar_forms() {
        assert_eq!(
            render_structure(&ArgSpec::required("label", ArgType::Str)).unwrap(),
            "\"label\":\"str\""
        );
        assert_eq!(
            render_structure(&ArgSpec::required("data", ArgType::StrHex)).unwrap(),
            "\"data\":\"hex\""
        );
        assert_eq!(
            render_structure(&ArgSpec::required("count", ArgType::Num)).unwrap(),
            "\"count\":n"
        );
        assert_eq!(
            render_structure(&ArgSpec::required("fee", ArgType::Amount)).unwrap(),
            "\"fee\":amount"
        );
        assert_eq!(
            render_structure(&ArgSpec::required("watchonly", ArgType::Bool)).unwrap(),
            "\"watchonly\":bool"
        );
    }

    #[test]
    fn test_structure_array() {
        let arg = ArgSpec::required("txids", ArgType::Arr)
            .with_inner(vec![ArgSpec::required("txid", ArgType::StrHex)]);
        assert_eq!(render_structure(&arg).unwrap(), "\"txids\":[\"txid\",...]");
    }

    #[test]
    fn test_structure_rejects_nested_object() {
        let arg = ArgSpec::required("opts", ArgType::Obj)
            .with_inner(vec![ArgSpec::required("inner", ArgType::Bool)]);
        let err = render_structure(&arg).unwrap_err();
        assert_eq!(err, RpcError::UnsupportedSchemaShape("opts".to_string()));
    }

    #[test]
    fn test_nested_object_error_propagates_through_signature() {
        // An object argument whose field is itself an object cannot render
        let bad = ArgSpec::required("outer", ArgType::Obj)
            .with_inner(vec![ArgSpec::required("inner", ArgType::Obj)]);
        let err = render_signature("foo", &[bad]).unwrap_err();
        assert_eq!(err, RpcError::UnsupportedSchemaShape("inner".to_string()));
    }

    #[test]
    fn test_signature_single_optional() {
        let args = vec![ArgSpec::optional("verbose", ArgType::Bool)];
        assert_eq!(
            render_signature("getblockcount", &args).unwrap(),
            "getblockcount ( verbose )\n"
        );
    }

    #[test]
    fn test_empty_object_token() {
        let arg = ArgSpec::required("options", ArgType::Obj);
        assert_eq!(render_token(&arg).unwrap(), "{}");
    }

    #[test]
    fn test_empty_array_token() {
        let arg = ArgSpec::required("items", ArgType::Arr);
        assert_eq!(render_token(&arg).unwrap(), "[...]");
    }
}
