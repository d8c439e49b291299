pub const EMPTY_OBJ1_INPUT: &str = "{}";
pub const EMPTY_OBJ_TOKENS: &str = r"
{
}";
pub const EMPTY_OBJ2_INPUT: &str = "{ }";
pub const EMPTY_OBJ2_TOKENS: &str = r"
{
=WS \s
}";
pub const EMPTY_OBJ3_INPUT: &str = "{\n}";
pub const EMPTY_OBJ3_TOKENS: &str = r"
{
=WS \n
}";
pub const EMPTY_OBJ4_INPUT: &str = "{     }";
pub const EMPTY_OBJ4_TOKENS: &str = r"
{
=WS \s\s\s\s\s
}";
pub const EMPTY_SEQ_INPUT: &str = "[]";
pub const EMPTY_SEQ_TOKENS: &str = r"
[
]";

pub const KEY_VALUE1_INPUT: &str = r#"{"key": "value"}"#;
pub const KEY_VALUE1_TOKENS: &str = r"
{
=STR key
:
=WS \s
=STR value
}";
pub const KEY_VALUE2_INPUT: &str = "{\n\"key\": \"value\"\n}";
pub const KEY_VALUE2_TOKENS: &str = r"
{
=WS \n
=STR key
:
=WS \s
=STR value
=WS \n
}";

pub const SEVERAL_VALUES_INPUT: &str = r#"{
  "key1": true,
  "key2": false,
  "key3": null,
  "key4": "value",
  "key5": 101
}"#;
pub const SEVERAL_VALUES_TOKENS: &str = r"
{
=WS \n\s\s
=STR key1
:
=WS \s
=BOOL true
,
=WS \n\s\s
=STR key2
:
=WS \s
=BOOL false
,
=WS \n\s\s
=STR key3
:
=WS \s
=NULL
,
=WS \n\s\s
=STR key4
:
=WS \s
=STR value
,
=WS \n\s\s
=STR key5
:
=WS \s
=NUM 101
=WS \n
}";

pub const TRUE1_INPUT: &str = "true";
pub const TRUE2_INPUT: &str = "True";
pub const TRUE3_INPUT: &str = "TRUE";
pub const TRUE_TOKENS: &str = r"
=BOOL true";
pub const FALSE1_INPUT: &str = "false";
pub const FALSE2_INPUT: &str = "FaLsE";
pub const FALSE_TOKENS: &str = r"
=BOOL false";
pub const NULL1_INPUT: &str = "null";
pub const NULL2_INPUT: &str = "NULL";
pub const NULL3_INPUT: &str = "Null";
pub const NULL_TOKENS: &str = r"
=NULL";

pub const NEAR_LITERAL_INPUT: &str = "[nul, truee, nullx]";
pub const NEAR_LITERAL_TOKENS: &str = r"
[
=NUM nul
,
=WS \s
=NUM truee
,
=WS \s
=NUM nullx
]";

pub const NUMBERS_INPUT: &str = "[1, -2, 3.5, 6e10]";
pub const NUMBERS_TOKENS: &str = r"
[
=NUM 1
,
=WS \s
=NUM -2
,
=WS \s
=NUM 3
=NUM .5
,
=WS \s
=NUM 6e10
]";
pub const LOOSE_NUMERIC_INPUT: &str = "abc123 @";
pub const LOOSE_NUMERIC_TOKENS: &str = r"
=NUM abc123
=WS \s
=NUM @";

pub const WS_RUN_INPUT: &str = "   ";
pub const WS_RUN_TOKENS: &str = r"
=WS \s\s\s";
pub const WS_MIXED_INPUT: &str = " \t\n \n\t";
pub const WS_MIXED_TOKENS: &str = r"
=WS \s\t\n\s\n\t";
pub const WS_CRLF_INPUT: &str = "{\r\n}";
pub const WS_CRLF_TOKENS: &str = r"
{
=NUM \r
=WS \n
}";
pub const WS_UNICODE_INPUT: &str = "[\u{a0}1]";
pub const WS_UNICODE_TOKENS: &str = "
[
=NUM \u{a0}1
]";

pub const STR_BACKSLASH_INPUT: &str = r#""a\b""#;
pub const STR_BACKSLASH_TOKENS: &str = r"
=STR a\\b";
pub const STR_ESCAPED_QUOTE_INPUT: &str = r#""a\"b""#;
pub const STR_ESCAPED_QUOTE_TOKENS: &str = r"
=STR a\\
=NUM b
=STR ";
pub const STR_UNTERMINATED_INPUT: &str = r#""abc"#;
pub const STR_UNTERMINATED_TOKENS: &str = r"
=STR abc";
pub const STR_STRUCTURAL_INPUT: &str = r#"["{a: [1, 2]}"]"#;
pub const STR_STRUCTURAL_TOKENS: &str = r"
[
=STR {a: [1, 2]}
]";
pub const STR_MULTILINE_INPUT: &str = "\"line\nnext\tcol\"";
pub const STR_MULTILINE_TOKENS: &str = r"
=STR line\nnext\tcol";
pub const STR_UNICODE_INPUT: &str = r#"{"ключ":"värde"}"#;
pub const STR_UNICODE_TOKENS: &str = r"
{
=STR ключ
:
=STR värde
}";

pub const NESTED_INPUT: &str = r#"[{"a":[null,{}]},[]]"#;
pub const NESTED_TOKENS: &str = r"
[
{
=STR a
:
[
=NULL
,
{
}
]
}
,
[
]
]";
pub const UNMATCHED_INPUT: &str = "}}]:,{";
pub const UNMATCHED_TOKENS: &str = r"
}
}
]
:
,
{";
