use super::*;

#[test]
fn can_skip_blank_lines() {
    let mut reader = BufReader::new("\n  \nDIMENSION : 3\n".as_bytes());
    let mut buffer = String::new();

    read_non_empty_line(&mut reader, &mut buffer).unwrap();

    assert_eq!(buffer.trim(), "DIMENSION : 3");
    assert_eq!(read_non_empty_line(&mut reader, &mut buffer), Err("unexpected end of input".into()));
}

parameterized_test! {can_parse_int, (data, expected), {
    can_parse_int_impl(data, expected);
}}

can_parse_int! {
    case01_integer: ("28", Ok(28)),
    case02_float: ("28.00000", Ok(28)),
    case03_rounded: (" 2.6 ", Ok(3)),
    case04_invalid: ("asd", Err("cannot parse: 'invalid float literal'".into())),
}

fn can_parse_int_impl(data: &str, expected: Result<i64, GenericError>) {
    assert_eq!(parse_int(data, "cannot parse"), expected);
}

#[test]
fn can_parse_float() {
    assert_eq!(parse_float("1.5", "cannot parse"), Ok(1.5));
    assert!(parse_float("", "cannot parse").is_err());
}
