//! `strlen` / `strcpy` on cell strings.

use minic_runtime::{strcpy, strlen, Cell, Trap, NUL};
use minic_tests::{cells, text};

#[test]
fn test_strcpy_preserves_length() {
    for source in ["", "a", "hello, minic", "  -42", "tab\there"] {
        let src = cells(source);
        let mut dst = vec![NUL; src.len()];
        let end = strcpy(&mut dst, &src).unwrap();
        assert_eq!(end, strlen(&src), "{source:?}");
        assert_eq!(strlen(&dst), strlen(&src), "{source:?}");
        assert_eq!(text(&dst), source);
    }
}

#[test]
fn test_strcpy_stops_at_first_terminator() {
    let mut src = cells("abc");
    src.extend(cells("def"));
    let mut dst = vec![-1 as Cell; 8];
    assert_eq!(strcpy(&mut dst, &src), Ok(3));
    assert_eq!(text(&dst), "abc");
    assert_eq!(&dst[4..], &[-1, -1, -1, -1]);
}

#[test]
fn test_strcpy_returns_append_position() {
    let mut line = vec![NUL; 16];
    let mut end = 0;
    for word in ["one", "+", "two"] {
        end += strcpy(&mut line[end..], &cells(word)).unwrap();
    }
    assert_eq!(end, 7);
    assert_eq!(text(&line), "one+two");
}

#[test]
fn test_strcpy_capacity_checked() {
    let src = cells("four");
    let mut dst = vec![NUL; 4];
    assert_eq!(strcpy(&mut dst, &src), Err(Trap::OutOfBounds));
    assert_eq!(dst, [NUL; 4]);
}
