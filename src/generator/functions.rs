use ahash::AHashMap;

use crate::{
    error::CallError,
    grammar::{definitions, Composer, FieldType, Flavor},
};

/// A composition function as it is callable from a template.
pub(crate) type Function = Box<dyn Fn(&Composer, &[String]) -> Result<String, CallError> + Send + Sync>;

fn no_args(args: &[String]) -> Result<(), CallError> {
    match args {
        [] => Ok(()),
        _ => Err(CallError::Arity {
            expected: "0",
            found: args.len(),
        }),
    }
}

fn one_arg(args: &[String]) -> Result<&str, CallError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(CallError::Arity {
            expected: "1",
            found: args.len(),
        }),
    }
}

fn optional_arg(args: &[String]) -> Result<Option<&str>, CallError> {
    match args {
        [] => Ok(None),
        [arg] => Ok(Some(arg)),
        _ => Err(CallError::Arity {
            expected: "0 or 1",
            found: args.len(),
        }),
    }
}

fn function<F>(f: F) -> Function
where
    F: Fn(&Composer, &[String]) -> Result<String, CallError> + Send + Sync + 'static,
{
    Box::new(f)
}

fn constant<F>(value: F) -> Function
where
    F: Fn(&Composer) -> &str + Send + Sync + 'static,
{
    function(move |composer, args| {
        no_args(args)?;
        Ok(value(composer).to_string())
    })
}

fn named_field(composer: &Composer, args: &[String]) -> Result<String, CallError> {
    let (name, types) = match args {
        [name, types @ ..] => (name, types),
        [] => {
            return Err(CallError::Arity {
                expected: "at least 1",
                found: 0,
            });
        },
    };

    let types = types
        .iter()
        .map(|t| t.parse::<FieldType>().map_err(CallError::UnknownFieldType))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(composer.named_field(name, &types)?)
}

/// Build the dispatch table of `flavor`.
pub(crate) fn functions(flavor: Flavor) -> AHashMap<String, Function> {
    let mut map: AHashMap<String, Function> = AHashMap::new();

    map.insert("definitions".to_string(), constant(|composer| definitions(composer.flavor())));
    map.insert("end_document".to_string(), constant(|composer| composer.end_document()));
    map.insert("length".to_string(), constant(|composer| composer.length()));
    map.insert(
        "named_field_any".to_string(),
        function(|composer, args| Ok(composer.named_field_any(one_arg(args)?)?)),
    );

    match flavor {
        Flavor::Document => {
            map.insert("field".to_string(), constant(|composer| composer.field()));
            map.insert("named_field".to_string(), function(named_field));
            map.insert(
                "start_document".to_string(),
                function(|composer, args| Ok(composer.start_document(optional_arg(args)?)?)),
            );
            map.insert("start_document_no_type".to_string(), constant(|composer| composer.start_document_no_type()));
        },
        Flavor::Legacy => {
            map.insert("any_field_any".to_string(), constant(|composer| composer.any_field_any()));
            map.insert(
                "any_start_document".to_string(),
                function(|composer, args| {
                    no_args(args)?;
                    Ok(composer.start_document(None)?)
                }),
            );
            map.insert(
                "named_field_document".to_string(),
                function(|composer, args| Ok(composer.named_field_document(one_arg(args)?)?)),
            );
            map.insert(
                "named_start_document".to_string(),
                function(|composer, args| Ok(composer.start_document(Some(one_arg(args)?))?)),
            );
        },
    }

    for scalar in flavor.catalog() {
        let field_type = FieldType::from(*scalar);
        map.insert(
            format!("named_field_{}", field_type.name()),
            function(move |composer, args| Ok(composer.named_field(one_arg(args)?, &[field_type])?)),
        );
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_document_functions() {
        let map = functions(Flavor::Document);
        let names = map.keys().map(String::as_str).sorted().collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "definitions",
                "end_document",
                "field",
                "length",
                "named_field",
                "named_field_any",
                "named_field_decimal128",
                "named_field_double",
                "named_field_int32",
                "named_field_int64",
                "named_field_string",
                "start_document",
                "start_document_no_type",
            ]
        );
    }

    #[test]
    fn test_legacy_functions() {
        let map = functions(Flavor::Legacy);
        let names = map.keys().map(String::as_str).sorted().collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "any_field_any",
                "any_start_document",
                "definitions",
                "end_document",
                "length",
                "named_field_any",
                "named_field_decimal128",
                "named_field_document",
                "named_field_double",
                "named_field_int32",
                "named_field_int64",
                "named_start_document",
            ]
        );
    }

    #[test]
    fn test_arity() {
        assert_eq!(no_args(&["x".to_string()]), Err(CallError::Arity { expected: "0", found: 1 }));
        assert_eq!(one_arg(&[]), Err(CallError::Arity { expected: "1", found: 0 }));
        assert_eq!(optional_arg(&["a".to_string()]), Ok(Some("a")));
        assert!(optional_arg(&["a".to_string(), "b".to_string()]).is_err());
    }
}
