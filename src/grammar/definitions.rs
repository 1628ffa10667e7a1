//! The fixed part of every generated grammar: rules for unnamed fields, the
//! encodings of all scalar values and the lexer tokens for every byte value.

use crate::grammar::catalog::Flavor;

macro_rules! values {
    () => {
        r#"
// values
cstring: 
	non_null_byte* NUL_BYTE
;
decimal128: 
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) 
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE)
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE)
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE)
;
double: 
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) 
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE)
;
int32: 
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE)
;
int64: 
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) 
    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE)
;
"#
    };
}

macro_rules! lexer {
    () => {
        r#"
// general
non_null_byte: 
    TYPE_DOUBLE | TYPE_STRING | TYPE_DOCUMENT | TYPE_ARRAY | TYPE_BINARY | TYPE_UNDEFINED | TYPE_FALSE | TYPE_TRUE
|   TYPE_UTCDATETIME | TYPE_NULL | TYPE_REGEX | TYPE_DBPOINTER | TYPE_CODE | TYPE_SYMBOL | TYPE_CODE_WITH_SCOPE
|   TYPE_INT32 | TYPE_TIMESTAMP | TYPE_INT64 | TYPE_DECIMAL128
|   DOLLAR 
|   A | B | C | D | E | F | G | H | I | J | K | L | M | N | O | P | Q | R | S | T | U | V | W | X | Y | Z
|   UNSPECIFIED_NON_NUL_BYTE;

// LEXER
NUL_BYTE: '\u0000';
TYPE_DOUBLE: '\u0001';
TYPE_STRING: '\u0002';
TYPE_DOCUMENT: '\u0003';
TYPE_ARRAY: '\u0004';
TYPE_BINARY: '\u0005';
TYPE_UNDEFINED: '\u0006';
TYPE_FALSE: '\u0007';
TYPE_TRUE: '\u0008';
TYPE_UTCDATETIME: '\u0009';
TYPE_NULL: '\u000A';
TYPE_REGEX: '\u000B';
TYPE_DBPOINTER: '\u000C';
TYPE_CODE: '\u000D';
TYPE_SYMBOL: '\u000E';
TYPE_CODE_WITH_SCOPE: '\u000F';
TYPE_INT32: '\u0010';
TYPE_TIMESTAMP: '\u0011';
TYPE_INT64: '\u0012';
TYPE_DECIMAL128: '\u0013';
fragment NON_NUL_RANGE1: '\u0014'..'\u0023';
DOLLAR: '$'; // \u0024
fragment NON_NUL_RANGE2: '\u0025'..'\u0060';
A: 'a';
B: 'b';
C: 'c';
D: 'd';
E: 'e';
F: 'f';
G: 'g';
H: 'h';
I: 'i';
J: 'j';
K: 'k';
L: 'l';
M: 'm';
N: 'n';
O: 'o';
P: 'p';
Q: 'q';
R: 'r';
S: 's';
T: 't';
U: 'u';
V: 'v';
W: 'w';
X: 'x';
Y: 'y';
Z: 'z';
fragment NON_NUL_RANGE3: '\u007B'..'\u007E';
TYPE_MAXKEY: '\u007F';
TYPE_MINKEY: '\u00FF';

UNSPECIFIED_NON_NUL_BYTE: NON_NUL_RANGE1 | NON_NUL_RANGE2 | NON_NUL_RANGE3;"#
    };
}

const DOCUMENT_DEFINITIONS: &str = concat!(
    r#"
// fields
field:
	field_decimal128
|   field_double
|   field_int32
|   field_int64
|	field_string
;

field_decimal128: TYPE_DECIMAL128 name=cstring value=decimal128;
field_double: TYPE_DOUBLE name=cstring value=double;
field_int32: TYPE_INT32 name=cstring value=int32;
field_int64: TYPE_INT64 name=cstring value=int64;
field_string: TYPE_STRING name=cstring value=string;
"#,
    values!(),
    r#"string:
	int32 cstring
;
"#,
    lexer!(),
);

const LEGACY_DEFINITIONS: &str = concat!(
    r#"
// fields
any_field_any:
	any_field_decimal128
|   any_field_double
|   any_field_int32
|   any_field_int64
;

any_field_decimal128: TYPE_DECIMAL128 name=cstring value=decimal128;
any_field_double: TYPE_DOUBLE name=cstring value=double;
any_field_int32: TYPE_INT32 name=cstring value=int32;
any_field_int64: TYPE_INT64 name=cstring value=int64;
"#,
    values!(),
    lexer!(),
);

/// The constant grammar text of `flavor`.
pub fn definitions(flavor: Flavor) -> &'static str {
    match flavor {
        Flavor::Document => DOCUMENT_DEFINITIONS,
        Flavor::Legacy => LEGACY_DEFINITIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_definitions() {
        let text = definitions(Flavor::Document);
        assert!(text.starts_with("\n// fields\nfield:\n\tfield_decimal128\n"));
        assert!(text.contains("field_string: TYPE_STRING name=cstring value=string;\n"));
        assert!(text.contains(";\nstring:\n\tint32 cstring\n;\n\n// general\n"));
        assert!(text.ends_with("UNSPECIFIED_NON_NUL_BYTE: NON_NUL_RANGE1 | NON_NUL_RANGE2 | NON_NUL_RANGE3;"));
    }

    #[test]
    fn test_legacy_definitions() {
        let text = definitions(Flavor::Legacy);
        assert!(text.starts_with("\n// fields\nany_field_any:\n"));
        assert!(!text.contains("field_string"));
        assert!(!text.contains("\nstring:"));
        assert!(text.contains("    (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE) (non_null_byte | NUL_BYTE)\n;\n\n// general\n"));
    }

    #[test]
    fn test_lexer_tokens() {
        for flavor in [Flavor::Document, Flavor::Legacy] {
            let text = definitions(flavor);
            assert!(text.contains("\nNUL_BYTE: '\\u0000';\n"));
            assert!(text.contains("\nTYPE_DOUBLE: '\\u0001';\n"));
            assert!(text.contains("\nTYPE_DECIMAL128: '\\u0013';\n"));
            assert!(text.contains("\nTYPE_MAXKEY: '\\u007F';\n"));
            assert!(text.contains("\nTYPE_MINKEY: '\\u00FF';\n"));

            for c in 'a'..='z' {
                assert!(text.contains(&format!("\n{}: '{}';\n", c.to_ascii_uppercase(), c)));
            }

            assert_eq!(text.matches("\nfragment NON_NUL_RANGE").count(), 3);
        }
    }
}
